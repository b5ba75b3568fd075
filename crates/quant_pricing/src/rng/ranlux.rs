//! RANLUX generators: subtract-with-carry engines with block discarding.
//!
//! [`Ranlux24`] and [`Ranlux48`] reproduce `std::ranlux24` and
//! `std::ranlux48` (luxury levels 3 and 4).

use rand::{Error, RngCore, SeedableRng};
use rand_core::impls;


/// Seed used when zero is requested.
const DEFAULT_SEED: u32 = 19_780_503;

/// Lagged-Fibonacci subtract-with-carry engine `x_i = x_{i-S} - x_{i-R} - c`
/// on `W`-bit words.
#[derive(Debug, Clone)]
struct SubtractWithCarry<const W: u32, const S: usize, const R: usize> {
    x: [u64; R],
    carry: u64,
    pos: usize,
}

impl<const W: u32, const S: usize, const R: usize> SubtractWithCarry<W, S, R> {
    const MODULUS: u64 = 1 << W;

    /// Seeding via the `40014 mod 2147483563` LCG, as the reference engine.
    fn new(seed: u32) -> Self {
        let mut lcg = match u64::from(if seed == 0 { DEFAULT_SEED } else { seed }) % 2_147_483_563 {
            0 => 1,
            z => z,
        };
        let words_per_value = W.div_ceil(32);

        let mut x = [0u64; R];
        for xi in x.iter_mut() {
            let mut sum: u128 = 0;
            for j in 0..words_per_value {
                lcg = lcg * 40_014 % 2_147_483_563;
                sum += u128::from(lcg) << (32 * j);
            }
            *xi = (sum % u128::from(Self::MODULUS)) as u64;
        }
        let carry = u64::from(x[R - 1] == 0);
        Self { x, carry, pos: 0 }
    }

    #[inline]
    fn next(&mut self) -> u64 {
        let short = if self.pos >= S {
            self.pos - S
        } else {
            self.pos + R - S
        };
        let (a, b) = (self.x[short], self.x[self.pos]);
        let xi = if a >= b + self.carry {
            let v = a - b - self.carry;
            self.carry = 0;
            v
        } else {
            let v = Self::MODULUS - b - self.carry + a;
            self.carry = 1;
            v
        };
        self.x[self.pos] = xi;
        self.pos = if self.pos + 1 >= R { 0 } else { self.pos + 1 };
        xi
    }
}

/// Keep `USED` values out of every block of `BLOCK`.
#[derive(Debug, Clone)]
struct DiscardBlock<const W: u32, const S: usize, const R: usize, const BLOCK: usize, const USED: usize> {
    base: SubtractWithCarry<W, S, R>,
    n: usize,
}

impl<const W: u32, const S: usize, const R: usize, const BLOCK: usize, const USED: usize>
    DiscardBlock<W, S, R, BLOCK, USED>
{
    fn new(seed: u32) -> Self {
        Self {
            base: SubtractWithCarry::new(seed),
            n: 0,
        }
    }

    #[inline]
    fn next(&mut self) -> u64 {
        if self.n >= USED {
            for _ in USED..BLOCK {
                self.base.next();
            }
            self.n = 0;
        }
        self.n += 1;
        self.base.next()
    }
}

/// RANLUX luxury level 3: 24-bit outputs, 23 kept of every 223.
#[derive(Debug, Clone)]
pub struct Ranlux24(DiscardBlock<24, 10, 24, 223, 23>);

/// RANLUX luxury level 4: 48-bit outputs, 11 kept of every 389.
#[derive(Debug, Clone)]
pub struct Ranlux48(DiscardBlock<48, 5, 12, 389, 11>);

impl Ranlux24 {
    /// Generator initialised from a 32-bit seed (0 selects the default).
    pub fn new(seed: u32) -> Self {
        Self(DiscardBlock::new(seed))
    }

    /// Next raw 24-bit value.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.0.next() as u32
    }
}

impl Ranlux48 {
    /// Generator initialised from a 32-bit seed (0 selects the default).
    pub fn new(seed: u32) -> Self {
        Self(DiscardBlock::new(seed))
    }

    /// Next raw 48-bit value.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.0.next()
    }
}

impl Default for Ranlux24 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Default for Ranlux48 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Ranlux24 {
    /// 24 bits of one draw followed by the top 8 bits of the next.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let hi = self.next_raw();
        let lo = self.next_raw();
        (hi << 8) | (lo >> 16)
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

impl RngCore for Ranlux48 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_raw() >> 16) as u32
    }

    /// 48 bits of one draw followed by the top 16 bits of the next.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = self.next_raw();
        let lo = self.next_raw();
        (hi << 16) | (lo >> 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

macro_rules! impl_seedable {
    ($engine:ty) => {
        impl SeedableRng for $engine {
            type Seed = [u8; 4];

            fn from_seed(seed: Self::Seed) -> Self {
                Self::new(u32::from_le_bytes(seed))
            }

            fn seed_from_u64(state: u64) -> Self {
                Self::new((state ^ (state >> 32)) as u32)
            }
        }
    };
}

impl_seedable!(Ranlux24);
impl_seedable!(Ranlux48);
