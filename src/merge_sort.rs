use crate::buffer;
use crate::error::SortResult;
use std::cmp::Ordering;

/// Stable top-down merge sort.
///
/// A range of `n` records is split after index `(n - 1) / 2`, both halves are
/// sorted recursively and then merged, taking from the low half whenever the
/// two heads compare equal. One scratch buffer sized to the whole input is
/// allocated up front and reused by every merge step.
///
/// Returns [`SortError::OutOfMemory`](crate::SortError::OutOfMemory) without
/// touching `v` if the scratch buffer cannot be allocated.
pub fn merge_sort<T, F>(v: &mut [T], mut compare: F) -> SortResult<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return Ok(());
    }

    let mut merged = buffer::try_with_capacity(v.len())?;
    merge_sort_range(v, &mut merged, &mut compare);
    Ok(())
}

fn merge_sort_range<T, F>(v: &mut [T], merged: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = (len - 1) / 2 + 1;
    let (low, high) = v.split_at_mut(mid);
    merge_sort_range(low, merged, compare);
    merge_sort_range(high, merged, compare);

    merge(v, mid, merged, compare);
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]` through `merged`.
fn merge<T, F>(v: &mut [T], mid: usize, merged: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merged.clear();

    let (low, high) = v.split_at(mid);
    let mut i = 0;
    let mut j = 0;

    while i < low.len() && j < high.len() {
        if compare(&high[j], &low[i]) == Ordering::Less {
            merged.push(high[j].clone());
            j += 1;
        } else {
            merged.push(low[i].clone());
            i += 1;
        }
    }

    // one side is exhausted, the other is already in order
    merged.extend_from_slice(&low[i..]);
    merged.extend_from_slice(&high[j..]);

    v.clone_from_slice(&merged[..]);
}
