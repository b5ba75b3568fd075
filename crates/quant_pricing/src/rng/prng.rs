//! Standard normal sampling on top of any uniform engine.

use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::path_seed;

/// Seeded normal generator for Monte Carlo simulation.
///
/// Wraps a uniform engine and draws standard normal variates with the
/// Ziggurat sampler of `rand_distr::StandardNormal`.
///
/// # Examples
///
/// ```rust
/// use quant_pricing::rng::{Mt19937, NormalRng};
///
/// let mut rng = NormalRng::<Mt19937>::for_path(5489, 0);
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// assert!(buffer.iter().all(|z| z.is_finite()));
/// ```
#[derive(Debug, Clone)]
pub struct NormalRng<R> {
    inner: R,
}

impl<R: RngCore + SeedableRng> NormalRng<R> {
    /// Generator for path `path_index` of a simulation seeded with `seed`.
    ///
    /// Streams for distinct paths are seeded independently, so a path's
    /// draws do not depend on which thread simulates it.
    #[inline]
    pub fn for_path(seed: u64, path_index: u64) -> Self {
        Self {
            inner: R::seed_from_u64(path_seed(seed, path_index)),
        }
    }
}

impl<R: RngCore> NormalRng<R> {
    /// Wrap an already seeded engine.
    #[inline]
    pub fn from_engine(inner: R) -> Self {
        Self { inner }
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fill `buffer` with standard normal variates without allocating.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
