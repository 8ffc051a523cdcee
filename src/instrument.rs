//! Comparison counting
//!
//! Wraps a comparator or key function so each call bumps a counter owned by
//! the caller. Nothing here is global: every run gets its own counter.

use std::cmp::Ordering;

/// Counts comparator (or key function) invocations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCounter {
    count: u64,
}

impl ComparisonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls recorded so far
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Record one call by hand.
    #[inline]
    pub fn record(&mut self) {
        self.count += 1;
    }

    /// Wrap `compare` so every call is counted.
    ///
    /// The returned closure borrows the counter; read [`count`](Self::count)
    /// once it has been dropped.
    pub fn counting<'a, T, F>(&'a mut self, mut compare: F) -> impl FnMut(&T, &T) -> Ordering + 'a
    where
        T: 'a,
        F: FnMut(&T, &T) -> Ordering + 'a,
    {
        move |a: &T, b: &T| {
            self.record();
            compare(a, b)
        }
    }

    /// Wrap a radix key function so every evaluation is counted.
    pub fn counting_key<'a, T, K>(&'a mut self, mut key: K) -> impl FnMut(&T) -> usize + 'a
    where
        T: 'a,
        K: FnMut(&T) -> usize + 'a,
    {
        move |record: &T| {
            self.record();
            key(record)
        }
    }
}
