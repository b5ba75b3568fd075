//! Park-Miller minimal standard linear congruential generator.

use rand::{Error, RngCore, SeedableRng};
use rand_core::impls;


const MULTIPLIER: u64 = 48_271;
const MODULUS: u64 = 2_147_483_647;

/// `x ← 48271·x mod (2^31 - 1)`, as `std::minstd_rand`.
///
/// Raw outputs lie in `[1, 2^31 - 2]`. [`RngCore::next_u32`] combines 31
/// bits of one draw with the top bit of the next so that every output bit
/// is usable by samplers that read the full word.
#[derive(Debug, Clone)]
pub struct MinStdRand {
    state: u64,
}

impl MinStdRand {
    /// Generator seeded with `seed mod (2^31 - 1)`; a zero residue becomes 1.
    pub fn new(seed: u64) -> Self {
        let state = seed % MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Next raw value in `[1, 2^31 - 2]`.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state as u32
    }
}

impl Default for MinStdRand {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for MinStdRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let hi = self.next_raw() - 1;
        let lo = self.next_raw() - 1;
        (hi << 1) | (lo >> 30)
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

impl SeedableRng for MinStdRand {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
