use std::cmp::Ordering;

/// In-place heap sort.
///
/// Builds a max-heap bottom-up (children of `k` live at `2k + 1` and `2k + 2`),
/// then repeatedly swaps the root behind the shrinking heap. Not stable;
/// O(n log n) in every case.
pub fn heap_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    for root in (0..=len / 2).rev() {
        sift_down(v, root, len, &mut compare);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, &mut compare);
    }
}

/// Restore the max-heap property of `v[..end]` along the path below `root`.
fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }

        // the right child only wins when strictly larger
        if child + 1 < end && compare(&v[child], &v[child + 1]) == Ordering::Less {
            child += 1;
        }

        if compare(&v[child], &v[root]) != Ordering::Greater {
            break;
        }

        v.swap(root, child);
        root = child;
    }
}
