//! Single pass of a stable LSD radix sort (counting sort by one key)
//!
//! The caller drives multi-digit sorts by invoking [`radix_sort`] once per
//! digit, least significant digit first; see [`crate::keys`] for byte keys.

use crate::buffer;
use crate::error::{SortError, SortResult};

/// Reorder `v` stably by `key`, whose values must lie in `[0, num_keys)`.
///
/// 1. Every record's key is computed once and counted.
/// 2. A prefix sum turns the counts into the first output slot of each key.
/// 3. Records are copied, in their original order, to the next slot of their
///    key, which keeps equal keys in their original relative order.
/// 4. The reordered buffer is copied back over `v`.
///
/// `v` is left untouched when a key is out of range
/// ([`SortError::KeyOutOfRange`]) or a table cannot be allocated
/// ([`SortError::OutOfMemory`]).
pub fn radix_sort<T, K>(v: &mut [T], num_keys: usize, mut key: K) -> SortResult<()>
where
    T: Clone,
    K: FnMut(&T) -> usize,
{
    if v.is_empty() {
        return Ok(());
    }

    let mut counts = buffer::try_zeroed(num_keys)?;
    let mut keys = buffer::try_with_capacity(v.len())?;

    for record in v.iter() {
        let k = key(record);
        if k >= num_keys {
            log::debug!("radix key {} rejected, domain is [0, {})", k, num_keys);
            return Err(SortError::key_out_of_range(k, num_keys));
        }
        counts[k] += 1;
        keys.push(k);
    }

    // counts[k] becomes the offset of the first record with key k
    let mut offset = 0;
    for count in counts.iter_mut() {
        let next = offset + *count;
        *count = offset;
        offset = next;
    }
    let offsets = counts;

    let sorted = distribute(v, &keys, offsets)?;
    v.clone_from_slice(&sorted);

    log::trace!(
        "radix pass over {} records with {} keys complete",
        v.len(),
        num_keys
    );
    Ok(())
}

/// Build the reordered copy of `v` given each record's key and the per-key
/// starting offsets.
fn distribute<T: Clone>(v: &[T], keys: &[usize], mut offsets: Vec<usize>) -> SortResult<Vec<T>> {
    // order[slot] = index of the record that lands in slot
    let mut order = buffer::try_zeroed(v.len())?;
    for (index, &k) in keys.iter().enumerate() {
        order[offsets[k]] = index;
        offsets[k] += 1;
    }

    let mut sorted = buffer::try_with_capacity(v.len())?;
    sorted.extend(order.iter().map(|&index| v[index].clone()));
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_by_digit() {
        let mut data = vec![31u32, 12, 43, 21, 2, 13];
        radix_sort(&mut data, 10, |&x| (x % 10) as usize).expect("radix pass");
        assert_eq!(data, vec![31, 21, 12, 2, 43, 13]);
    }

    #[test]
    fn test_two_passes_compose() {
        let mut data = vec![31u32, 12, 43, 21, 2, 13];
        radix_sort(&mut data, 10, |&x| (x % 10) as usize).expect("ones");
        radix_sort(&mut data, 10, |&x| (x / 10 % 10) as usize).expect("tens");
        assert_eq!(data, vec![2, 12, 13, 21, 31, 43]);
    }

    #[test]
    fn test_equal_keys_keep_order() {
        let mut data = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        radix_sort(&mut data, 2, |r| r.0).expect("radix pass");
        assert_eq!(data, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn test_key_out_of_range_leaves_input_untouched() {
        let mut data = vec![3usize, 1, 7, 2];
        let err = radix_sort(&mut data, 4, |&x| x).unwrap_err();
        assert!(matches!(
            err,
            SortError::KeyOutOfRange {
                key: 7,
                num_keys: 4
            }
        ));
        assert_eq!(data, vec![3, 1, 7, 2]);
    }

    #[test]
    fn test_key_evaluated_once_per_record() {
        let mut data: Vec<u8> = (0..=255).rev().collect();
        let mut calls = 0;
        radix_sort(&mut data, 256, |&b| {
            calls += 1;
            b as usize
        })
        .expect("radix pass");
        assert_eq!(calls, 256);
        assert_eq!(data, (0..=255).collect::<Vec<u8>>());
    }

    #[test]
    fn test_empty_input_with_empty_domain() {
        let mut data: Vec<u32> = Vec::new();
        radix_sort(&mut data, 0, |_| 0).expect("no-op");
        assert!(data.is_empty());
    }

    #[test]
    fn test_empty_domain_rejects_records() {
        let mut data = vec![1u32];
        assert!(radix_sort(&mut data, 0, |_| 0).is_err());
    }

    #[test]
    fn test_single_key_domain() {
        let mut data = vec!['z', 'a', 'm'];
        radix_sort(&mut data, 1, |_| 0).expect("radix pass");
        assert_eq!(data, vec!['z', 'a', 'm']);
    }
}
