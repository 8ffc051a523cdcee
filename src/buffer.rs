//! Scratch buffers owned by a single sort call
//!
//! Every temporary allocation in the engine goes through here so that an
//! allocation failure becomes a [`SortError::OutOfMemory`] instead of an abort.

use crate::error::{SortError, SortResult};

/// Allocate an empty `Vec` able to hold `len` records without reallocating.
pub fn try_with_capacity<T>(len: usize) -> SortResult<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| {
        log::debug!(
            "scratch allocation of {} records ({} bytes each) failed",
            len,
            std::mem::size_of::<T>()
        );
        SortError::out_of_memory::<T>(len)
    })?;
    Ok(buffer)
}

/// Allocate a table of `len` zeroed counters.
pub fn try_zeroed(len: usize) -> SortResult<Vec<usize>> {
    let mut table = try_with_capacity(len)?;
    table.resize(len, 0);
    Ok(table)
}
