//! Sample statistics for Monte Carlo estimates.

/// Running count, sum and sum of squares of samples.
///
/// Accumulators of disjoint sample blocks merge by addition; merging in a
/// fixed block order gives results independent of how blocks were
/// scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulator {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl Accumulator {
    /// Empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample.
    #[inline]
    pub fn add(&mut self, x: f64) {
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Fold another accumulator into this one.
    #[inline]
    pub fn merge(&mut self, other: &Accumulator) {
        self.n += other.n;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> usize {
        self.n
    }

    /// Sample mean (0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.sum / self.n as f64
    }

    /// Unbiased sample variance (0 with fewer than two samples).
    pub fn variance(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let n = self.n as f64;
        ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0)
    }

    /// Standard error of the mean, `sqrt(variance / n)`.
    pub fn std_err(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        (self.variance() / self.n as f64).sqrt()
    }
}

/// Monte Carlo price estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McResult {
    /// Sample mean of the discounted payoff.
    pub mean: f64,
    /// Standard error of the mean.
    pub std_err: f64,
}

impl McResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_err
    }
}

impl From<&Accumulator> for McResult {
    fn from(acc: &Accumulator) -> Self {
        Self {
            mean: acc.mean(),
            std_err: acc.std_err(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_moments() {
        let mut acc = Accumulator::new();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            acc.add(x);
        }
        assert_eq!(acc.count(), 8);
        assert_relative_eq!(acc.mean(), 5.0);
        assert_relative_eq!(acc.variance(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(acc.std_err(), (32.0f64 / 7.0 / 8.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let xs: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin()).collect();
        let mut whole = Accumulator::new();
        xs.iter().for_each(|&x| whole.add(x));

        let mut left = Accumulator::new();
        let mut right = Accumulator::new();
        xs[..40].iter().for_each(|&x| left.add(x));
        xs[40..].iter().for_each(|&x| right.add(x));
        left.merge(&right);

        assert_eq!(left.count(), whole.count());
        assert_relative_eq!(left.mean(), whole.mean(), epsilon = 1e-14);
        assert_relative_eq!(left.variance(), whole.variance(), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_counts() {
        let mut acc = Accumulator::new();
        assert_eq!(McResult::from(&acc), McResult::default());
        acc.add(3.0);
        assert_eq!(acc.variance(), 0.0);
        assert_eq!(McResult::from(&acc).mean, 3.0);
    }
}
