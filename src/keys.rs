//! Key functions for driving [`radix_sort`] over integers byte by byte

use crate::error::SortResult;
use crate::radix_sort::radix_sort;

/// Number of distinct keys produced by [`byte_key`].
pub const RADIX_BYTE_KEYS: usize = 256;

/// Map a signed value to an unsigned one with the same ordering.
///
/// Flipping the sign bit moves negative values below non-negative ones.
#[inline]
pub fn order_preserving_u64(value: i64) -> u64 {
    (value as u64) ^ (1 << 63)
}

/// 32-bit variant of [`order_preserving_u64`].
#[inline]
pub fn order_preserving_u32(value: i32) -> u32 {
    (value as u32) ^ (1 << 31)
}

/// 16-bit variant of [`order_preserving_u64`].
#[inline]
pub fn order_preserving_u16(value: i16) -> u16 {
    (value as u16) ^ (1 << 15)
}

/// Byte `byte` of `value`, counting from the least significant byte.
#[inline]
pub fn byte_key(value: u64, byte: usize) -> usize {
    ((value >> (byte * 8)) & 0xFF) as usize
}

/// Sort signed 64-bit integers ascending with eight radix passes,
/// least significant byte first.
pub fn sort_i64_by_bytes(v: &mut [i64]) -> SortResult<()> {
    sort_i64_by_bytes_with(v, |value| value)
}

/// Like [`sort_i64_by_bytes`], but every key evaluation goes through `observe`
/// first (used to count evaluations).
pub fn sort_i64_by_bytes_with<O>(v: &mut [i64], mut observe: O) -> SortResult<()>
where
    O: FnMut(i64) -> i64,
{
    for byte in 0..std::mem::size_of::<i64>() {
        radix_sort(v, RADIX_BYTE_KEYS, |&value| {
            byte_key(order_preserving_u64(observe(value)), byte)
        })?;
    }
    Ok(())
}
