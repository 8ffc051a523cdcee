use std::cmp::Ordering;

/// Check that `v` is in ascending order under `compare`.
///
/// Returns `false` at the first adjacent pair where the left record compares
/// `Greater` than the right one. Empty and single-record sequences are sorted.
pub fn verify_sort<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sequences() {
        let empty: [i32; 0] = [];
        assert!(verify_sort(&empty, i32::cmp));
        assert!(verify_sort(&[7], i32::cmp));
    }

    #[test]
    fn test_ascending_with_duplicates() {
        assert!(verify_sort(&[1, 3, 3, 5], i32::cmp));
        assert!(!verify_sort(&[1, 3, 2, 5], i32::cmp));
    }

    #[test]
    fn test_descending_comparator() {
        assert!(verify_sort(&[9, 4, 4, 0], |a: &i32, b: &i32| b.cmp(a)));
        assert!(!verify_sort(&[0, 4], |a: &i32, b: &i32| b.cmp(a)));
    }

    #[test]
    fn test_stops_at_first_violation() {
        let mut calls = 0;
        let sorted = verify_sort(&[2, 1, 0, -1], |a: &i32, b: &i32| {
            calls += 1;
            a.cmp(b)
        });
        assert!(!sorted);
        assert_eq!(calls, 1);
    }
}
