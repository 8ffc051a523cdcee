//! Marsaglia multiply-with-carry generator
//!
//! A tiny, fast generator that is plenty for producing data to sort. It plugs
//! into `rand` through [`RngCore`] and [`SeedableRng`], so the usual
//! `seed_from_u64` / `gen` helpers work on it. Not suitable for anything that
//! needs statistical quality or unpredictability.

use rand::{Error, RngCore, SeedableRng};

/// Replacement for a zero `z` half, which would otherwise stay zero forever
const DEFAULT_Z: u32 = 362_436_069;
/// Replacement for a zero `w` half
const DEFAULT_W: u32 = 521_288_629;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mwc {
    z: u32,
    w: u32,
}

impl Mwc {
    pub fn new(z: u32, w: u32) -> Self {
        Self {
            z: if z == 0 { DEFAULT_Z } else { z },
            w: if w == 0 { DEFAULT_W } else { w },
        }
    }

    /// Next value as a signed 64-bit integer (high word drawn first)
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

impl Default for Mwc {
    fn default() -> Self {
        Self::new(DEFAULT_Z, DEFAULT_W)
    }
}

impl RngCore for Mwc {
    fn next_u32(&mut self) -> u32 {
        self.z = 36969 * (self.z & 0xFFFF) + (self.z >> 16);
        self.w = 18000 * (self.w & 0xFFFF) + (self.w >> 16);
        (self.z << 16) + (self.w & 0xFFFF)
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mwc {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let [a, b, c, d, e, f, g, h] = seed;
        Self::new(u32::from_le_bytes([a, b, c, d]), u32::from_le_bytes([e, f, g, h]))
    }
}
