//! Quadratic and sub-quadratic in-place sorts
//!
//! None of these allocate: records are moved with `swap` and `rotate_right`,
//! so they work for any `T` and cannot fail.

use std::cmp::Ordering;

/// Stable insertion sort.
///
/// Each record is held while its predecessors that compare greater are shifted
/// right by one, then it is dropped into the gap. O(n²) worst case, O(n) on
/// already sorted input.
pub fn insertion_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[i], &v[j - 1]) == Ordering::Less {
            j -= 1;
        }

        // v[j..i] moves one slot right, v[i] lands at j
        if j < i {
            v[j..=i].rotate_right(1);
        }
    }
}

/// Stable bubble sort.
///
/// Every pass pushes the largest remaining record to the end of the live
/// prefix. Stops after the first pass that makes no swap.
pub fn bubble_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut live = v.len();
    let mut done = false;

    while !done && live > 1 {
        done = true;
        live -= 1;

        for i in 0..live {
            if compare(&v[i + 1], &v[i]) == Ordering::Less {
                v.swap(i, i + 1);
                done = false;
            }
        }
    }
}

/// Largest gap of the `g = 3g + 1` series used for a sequence of `len` records.
fn initial_gap(len: usize) -> usize {
    let mut gap = 1;
    while gap <= len {
        gap = gap * 3 + 1;
    }
    gap / 3
}

/// Shell sort over the `1, 4, 13, 40, ...` gap sequence.
///
/// Not stable. The last pass uses gap 1 and is a plain insertion sort.
pub fn shell_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut gap = initial_gap(len);

    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&v[j], &v[j - gap]) == Ordering::Less {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_key(a: &(u8, char), b: &(u8, char)) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn test_insertion_sort_basic() {
        let mut data = vec![5, 3, 3, 1];
        insertion_sort(&mut data, i32::cmp);
        assert_eq!(data, vec![1, 3, 3, 5]);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut data = vec![(2, 'a'), (1, 'x'), (2, 'b'), (1, 'y'), (0, 'z')];
        insertion_sort(&mut data, by_key);
        assert_eq!(data, vec![(0, 'z'), (1, 'x'), (1, 'y'), (2, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_insertion_sort_sorted_input_is_linear() {
        let mut data: Vec<u32> = (0..100).collect();
        let mut comparisons = 0;
        insertion_sort(&mut data, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 99);
    }

    #[test]
    fn test_bubble_sort_basic() {
        let mut data = vec![9, -2, 4, 4, 0, 7];
        bubble_sort(&mut data, i32::cmp);
        assert_eq!(data, vec![-2, 0, 4, 4, 7, 9]);
    }

    #[test]
    fn test_bubble_sort_is_stable() {
        let mut data = vec![(3, 'a'), (1, 'b'), (3, 'c'), (1, 'd')];
        bubble_sort(&mut data, by_key);
        assert_eq!(data, vec![(1, 'b'), (1, 'd'), (3, 'a'), (3, 'c')]);
    }

    #[test]
    fn test_bubble_sort_single_confirming_pass() {
        let mut data: Vec<u32> = (0..50).collect();
        let mut comparisons = 0;
        bubble_sort(&mut data, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 49);
    }

    #[test]
    fn test_initial_gap() {
        assert_eq!(initial_gap(0), 0);
        assert_eq!(initial_gap(1), 1);
        assert_eq!(initial_gap(3), 1);
        assert_eq!(initial_gap(4), 4);
        assert_eq!(initial_gap(12), 4);
        assert_eq!(initial_gap(13), 13);
        assert_eq!(initial_gap(1000), 364);
    }

    #[test]
    fn test_shell_sort_reverse() {
        let mut data: Vec<i64> = (0..500).rev().collect();
        shell_sort(&mut data, i64::cmp);
        assert_eq!(data, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut empty: Vec<i32> = Vec::new();
        insertion_sort(&mut empty, i32::cmp);
        bubble_sort(&mut empty, i32::cmp);
        shell_sort(&mut empty, i32::cmp);
        assert!(empty.is_empty());

        let mut one = vec![7];
        insertion_sort(&mut one, i32::cmp);
        bubble_sort(&mut one, i32::cmp);
        shell_sort(&mut one, i32::cmp);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_non_clone_records() {
        struct Opaque(u32);

        let mut data = vec![Opaque(3), Opaque(1), Opaque(2)];
        shell_sort(&mut data, |a, b| a.0.cmp(&b.0));
        let values: Vec<u32> = data.iter().map(|o| o.0).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
