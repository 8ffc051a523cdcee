//! Classic sorting algorithms over generic records
//!
//! This crate provides a collection of textbook sorting algorithms operating on
//! any mutable slice, ordered by a caller-supplied comparator
//! (`FnMut(&T, &T) -> Ordering`) or, for radix sort, a bounded key function
//! (`FnMut(&T) -> usize`):
//!
//! | algorithm | stable | extra memory |
//! |---|---|---|
//! | [`insertion_sort`] | yes | none |
//! | [`bubble_sort`] | yes | none |
//! | [`shell_sort`] | no | none |
//! | [`quick_sort`] | no | recursion only |
//! | [`merge_sort`] | yes | one buffer of `n` records |
//! | [`heap_sort`] | no | none |
//! | [`radix_sort`] | yes | one buffer of `n` records plus key tables |
//!
//! [`radix_sort`] performs a single counting pass; sort multi-byte keys by
//! calling it once per byte, least significant first:
//!
//! ```
//! use sortkit::{radix_sort, verify_sort, keys};
//!
//! let mut data: Vec<i64> = vec![40, -7, 1_000_000, 0, -300];
//! for byte in 0..8 {
//!     radix_sort(&mut data, keys::RADIX_BYTE_KEYS, |&v| {
//!         keys::byte_key(keys::order_preserving_u64(v), byte)
//!     })
//!     .unwrap();
//! }
//! assert!(verify_sort(&data, i64::cmp));
//! ```
//!
//! Algorithms that allocate return [`SortResult`] and leave the input untouched
//! when an allocation fails.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Sorting engine
pub mod buffer;
pub mod verify;
pub mod simple_sort;
pub mod quick_sort;
pub mod merge_sort;
pub mod heap_sort;
pub mod radix_sort;
pub mod keys;
pub mod instrument;

// Demo support
pub mod mwc;
pub mod method;
pub mod args;
pub mod runner;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{DemoConfig, DemoConfigBuilder};
pub use heap_sort::heap_sort;
pub use instrument::ComparisonCounter;
pub use merge_sort::merge_sort;
pub use method::SortMethod;
pub use quick_sort::quick_sort;
pub use radix_sort::radix_sort;
pub use simple_sort::{bubble_sort, insertion_sort, shell_sort};
pub use verify::verify_sort;

pub mod prelude {
    pub use crate::error::{SortError, SortResult};
    pub use crate::heap_sort::heap_sort;
    pub use crate::instrument::ComparisonCounter;
    pub use crate::merge_sort::merge_sort;
    pub use crate::method::SortMethod;
    pub use crate::quick_sort::quick_sort;
    pub use crate::radix_sort::radix_sort;
    pub use crate::simple_sort::{bubble_sort, insertion_sort, shell_sort};
    pub use crate::verify::verify_sort;
}

/// Exit codes of the demo program
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const USAGE_FAILURE: i32 = 2;

/// Run the demo described by `config`, writing the report to `out`.
///
/// Returns [`EXIT_FAILURE`] when any method produced an unsorted result.
pub fn run_demo<W: std::io::Write>(config: &DemoConfig, out: &mut W) -> SortResult<i32> {
    let summary = runner::SortRunner::new(config.clone()).run(out)?;
    if summary.all_verified() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILURE)
    }
}
