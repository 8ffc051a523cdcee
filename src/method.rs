//! Sort method selection and dispatch

use crate::error::{SortError, SortResult};
use crate::heap_sort::heap_sort;
use crate::instrument::ComparisonCounter;
use crate::keys::sort_i64_by_bytes_with;
use crate::merge_sort::merge_sort;
use crate::quick_sort::quick_sort;
use crate::simple_sort::{bubble_sort, insertion_sort, shell_sort};
use std::fmt;
use std::str::FromStr;

/// One of the algorithms provided by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMethod {
    Insertion,
    Bubble,
    Shell,
    Quick,
    Merge,
    Heap,
    Radix,
}

impl SortMethod {
    /// Every method, in the order the demo runs them
    pub const ALL: [SortMethod; 7] = [
        SortMethod::Insertion,
        SortMethod::Bubble,
        SortMethod::Shell,
        SortMethod::Quick,
        SortMethod::Merge,
        SortMethod::Heap,
        SortMethod::Radix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortMethod::Insertion => "insertion",
            SortMethod::Bubble => "bubble",
            SortMethod::Shell => "shell",
            SortMethod::Quick => "quick",
            SortMethod::Merge => "merge",
            SortMethod::Heap => "heap",
            SortMethod::Radix => "radix",
        }
    }

    /// Single-letter command line flag selecting this method
    pub fn flag(&self) -> char {
        match self {
            SortMethod::Insertion => 'i',
            SortMethod::Bubble => 'b',
            SortMethod::Shell => 's',
            SortMethod::Quick => 'q',
            SortMethod::Merge => 'm',
            SortMethod::Heap => 'h',
            SortMethod::Radix => 'r',
        }
    }

    /// Whether records with equal keys keep their relative order
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortMethod::Insertion | SortMethod::Bubble | SortMethod::Merge | SortMethod::Radix
        )
    }

    /// Sort 64-bit integers ascending, counting every comparison.
    ///
    /// For [`SortMethod::Radix`] the counter records key evaluations instead:
    /// one per record for each of the eight byte passes.
    pub fn sort_i64(&self, v: &mut [i64], counter: &mut ComparisonCounter) -> SortResult<()> {
        let ascending = |a: &i64, b: &i64| a.cmp(b);

        match self {
            SortMethod::Insertion => insertion_sort(v, counter.counting(ascending)),
            SortMethod::Bubble => bubble_sort(v, counter.counting(ascending)),
            SortMethod::Shell => shell_sort(v, counter.counting(ascending)),
            SortMethod::Quick => quick_sort(v, counter.counting(ascending)),
            SortMethod::Merge => merge_sort(v, counter.counting(ascending))?,
            SortMethod::Heap => heap_sort(v, counter.counting(ascending)),
            SortMethod::Radix => sort_i64_by_bytes_with(v, |value| {
                counter.record();
                value
            })?,
        }

        Ok(())
    }
}

impl FromStr for SortMethod {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        let name = lowered.strip_suffix("sort").unwrap_or(&lowered);
        let name = name.trim_end_matches(&['-', '_', ' '][..]);

        SortMethod::ALL
            .iter()
            .copied()
            .find(|method| {
                method.name() == name || (name.len() == 1 && name.starts_with(method.flag()))
            })
            .ok_or_else(|| SortError::unknown_method(s))
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
