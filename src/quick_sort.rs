use std::cmp::Ordering;

/// Recursive quick sort using the first record of each range as pivot.
///
/// Not stable. The pivot choice is deliberately naive: on already sorted or
/// reverse sorted input every partition is maximally unbalanced, so the
/// recursion depth grows linearly with `v.len()`. Callers sorting large
/// adversarial inputs on small stacks should pick another method.
pub fn quick_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(v, &mut compare);
}

fn quick_sort_range<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }

    let boundary = partition(v, compare);
    let (low, high) = v.split_at_mut(boundary);
    quick_sort_range(low, compare);
    quick_sort_range(&mut high[1..], compare);
}

/// Partition around `v[0]` and return the pivot's final index.
///
/// Afterwards `v[..boundary]` holds records not greater than the pivot and
/// `v[boundary + 1..]` records strictly greater.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = 0;
    let mut right = v.len();

    loop {
        // first record strictly greater than the pivot
        left += 1;
        while left < right && compare(&v[left], &v[0]) != Ordering::Greater {
            left += 1;
        }

        // first record from the right that is not greater; stops at the pivot
        right -= 1;
        while right > 0 && compare(&v[right], &v[0]) == Ordering::Greater {
            right -= 1;
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
    }

    v.swap(0, right);
    right
}
