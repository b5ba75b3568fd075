//! 32-bit Mersenne Twister.

use rand::{Error, RngCore, SeedableRng};
use rand_core::impls;


const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Default seed of the reference implementation.
pub const MT19937_DEFAULT_SEED: u32 = 5489;

/// MT19937 (Matsumoto & Nishimura, 1998), period 2^19937 - 1.
///
/// Output matches the reference generator for the same 32-bit seed:
///
/// ```rust
/// use quant_pricing::rng::Mt19937;
/// use rand::{RngCore, SeedableRng};
///
/// let mut rng = Mt19937::from_seed(5489u32.to_le_bytes());
/// assert_eq!(rng.next_u32(), 3_499_211_612);
/// ```
#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    /// Generator initialised from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[i] = self.state[(i + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(MT19937_DEFAULT_SEED)
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").field("index", &self.index).finish()
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Folds the 64-bit state into the 32-bit seed the engine accepts.
    fn seed_from_u64(state: u64) -> Self {
        Self::new((state ^ (state >> 32)) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        let mut rng = Mt19937::default();
        assert_eq!(rng.next_u32(), 3_499_211_612);
        for _ in 1..9_999 {
            rng.next_u32();
        }
        // 10000th output required of std::mt19937
        assert_eq!(rng.next_u32(), 4_123_659_995);
    }

    #[test]
    fn test_seed_from_u64_uses_both_halves() {
        let mut a = Mt19937::seed_from_u64(1);
        let mut b = Mt19937::seed_from_u64(1 << 32);
        assert_eq!(a.next_u32(), b.next_u32());

        let mut c = Mt19937::seed_from_u64(2);
        let mut d = Mt19937::seed_from_u64(1);
        assert_ne!(c.next_u32(), d.next_u32());
    }
}
