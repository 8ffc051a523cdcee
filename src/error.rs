//! Error handling for the sorting engine and the demo driver

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Memory allocation failed ({bytes} bytes requested)")]
    OutOfMemory { bytes: usize },

    #[error("Radix key {key} is outside the key domain [0, {num_keys})")]
    KeyOutOfRange { key: usize, num_keys: usize },

    #[error("Unknown sort method: {name}")]
    UnknownMethod { name: String },

    #[error("No sort methods selected")]
    NoMethodSelected,

    #[error("At least 2 items are required for sort (got {count})")]
    TooFewItems { count: usize },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::UnknownMethod { .. }
            | SortError::NoMethodSelected
            | SortError::TooFewItems { .. } => crate::USAGE_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create an out of memory error for a buffer of `len` records of `T`
    pub fn out_of_memory<T>(len: usize) -> Self {
        SortError::OutOfMemory {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        }
    }

    /// Create a key out of range error
    pub fn key_out_of_range(key: usize, num_keys: usize) -> Self {
        SortError::KeyOutOfRange { key, num_keys }
    }

    /// Create an unknown method error
    pub fn unknown_method(name: &str) -> Self {
        SortError::UnknownMethod {
            name: name.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for adding context to errors
pub trait SortContext<T> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> SortContext<T> for SortResult<T> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| match err {
            SortError::Io(io_err) => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", f(), io_err),
            )),
            other => other,
        })
    }
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|io_err| {
            SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", f(), io_err),
            ))
        })
    }
}
