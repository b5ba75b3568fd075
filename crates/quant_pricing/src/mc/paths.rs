//! Path generation for Monte Carlo simulation.
//!
//! Log-Euler stepping of one or more correlated Black-Scholes assets across
//! a product's fixing times. Drift and diffusion over each interval are
//! integrated exactly from the term structures, so the only
//! discretisation is at the fixing dates themselves.
//!
//! # Memory Layout
//!
//! Paths are stored row-major by fixing: `path[k * n_assets + a]` is the
//! price of asset `a` at fixing `k`. Normals use the same layout.

use nalgebra::DMatrix;
use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
use quant_core::math::linalg::correlation_factor;
use quant_core::types::PricingError;

/// Dynamics of one simulated asset.
#[derive(Clone, Copy, Debug)]
pub struct AssetDynamics<'a> {
    /// Initial spot price (S₀ > 0).
    pub spot: f64,
    /// Continuous dividend yield.
    pub div_yield: f64,
    /// Volatility term structure.
    pub vol: &'a VolatilityTermStructure,
    /// Extra drift per unit time (e.g. the quanto adjustment `-ρσ_Sσ_X`).
    pub drift_adjustment: f64,
}

impl<'a> AssetDynamics<'a> {
    /// Asset without a drift adjustment.
    pub fn new(spot: f64, div_yield: f64, vol: &'a VolatilityTermStructure) -> Self {
        Self {
            spot,
            div_yield,
            vol,
            drift_adjustment: 0.0,
        }
    }

    /// Same asset with `drift_adjustment` added to its drift.
    pub fn with_drift_adjustment(mut self, drift_adjustment: f64) -> Self {
        self.drift_adjustment = drift_adjustment;
        self
    }
}

/// Euler path generator in log-price space.
///
/// Over `[t_{k-1}, t_k]` asset `a` moves by
///
/// ```text
/// ln S(t_k) - ln S(t_{k-1}) = ln(P(t_{k-1}) / P(t_k)) - q·Δt + μ_adj·Δt
///                             - ½·∫σ² + sqrt(∫σ²)·(L·Z)_a
/// ```
///
/// where `P` is the growth curve, `∫σ²` the integrated forward variance and
/// `L` the Cholesky factor of the (projected) correlation matrix.
///
/// # Examples
///
/// ```rust
/// use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
/// use quant_pricing::mc::{AssetDynamics, EulerPathGenerator};
///
/// let curve = YieldCurve::flat(0.05).unwrap();
/// let vol = VolatilityTermStructure::constant(0.2).unwrap();
/// let gen = EulerPathGenerator::new(
///     &[0.5, 1.0],
///     &[AssetDynamics::new(100.0, 0.0, &vol)],
///     &curve,
///     None,
/// ).unwrap();
///
/// // With zero normals the log-price follows the drift only.
/// let mut path = [0.0; 2];
/// gen.generate(&[0.0, 0.0], &mut path, &mut [0.0]);
/// let expected = 100.0 * (0.05f64 - 0.02).exp();
/// assert!((path[1] - expected).abs() < 1e-10);
/// ```
#[derive(Clone, Debug)]
pub struct EulerPathGenerator {
    fix_times: Vec<f64>,
    n_assets: usize,
    log_spots: Vec<f64>,
    /// Drift per step and asset, row-major by step.
    drifts: Vec<f64>,
    /// Standard deviation per step and asset, row-major by step.
    stdevs: Vec<f64>,
    /// Lower Cholesky factor; `None` for a single asset.
    factor: Option<DMatrix<f64>>,
}

impl EulerPathGenerator {
    /// Build a generator for the given fixing times and assets.
    ///
    /// # Arguments
    ///
    /// * `fix_times` - Strictly increasing, positive fixing times
    /// * `assets` - One entry per asset
    /// * `growth` - Curve whose forward rates drive the assets
    /// * `correlation` - Asset correlation matrix, required for two or more
    ///   assets; projected to positive definite if needed
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` on empty or malformed times, non-positive spots,
    ///   non-finite yields, or a correlation matrix of the wrong size
    /// - `NumericalFailure` if the projected correlation cannot be factorised
    pub fn new(
        fix_times: &[f64],
        assets: &[AssetDynamics<'_>],
        growth: &YieldCurve,
        correlation: Option<&DMatrix<f64>>,
    ) -> Result<Self, PricingError> {
        if fix_times.is_empty() || !(fix_times[0] > 0.0) {
            return Err(PricingError::InvalidArgument(
                "fixing times must be non-empty and positive".to_string(),
            ));
        }
        if fix_times.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(PricingError::InvalidArgument(
                "fixing times must be strictly increasing".to_string(),
            ));
        }
        if assets.is_empty() {
            return Err(PricingError::InvalidArgument(
                "at least one asset is required".to_string(),
            ));
        }
        for (a, asset) in assets.iter().enumerate() {
            if !(asset.spot > 0.0) || !asset.spot.is_finite() {
                return Err(PricingError::InvalidArgument(format!(
                    "spot of asset {} must be positive, got {}",
                    a, asset.spot
                )));
            }
            if !asset.div_yield.is_finite() || !asset.drift_adjustment.is_finite() {
                return Err(PricingError::InvalidArgument(format!(
                    "dividend yield and drift of asset {} must be finite",
                    a
                )));
            }
        }

        let n_assets = assets.len();
        let factor = match (n_assets, correlation) {
            (1, None) => None,
            (_, Some(corr)) if corr.nrows() == n_assets && corr.ncols() == n_assets => {
                Some(correlation_factor(corr)?)
            }
            (_, Some(corr)) => {
                return Err(PricingError::InvalidArgument(format!(
                    "correlation matrix is {}x{} but there are {} assets",
                    corr.nrows(),
                    corr.ncols(),
                    n_assets
                )))
            }
            (_, None) => {
                return Err(PricingError::InvalidArgument(format!(
                    "a correlation matrix is required for {} assets",
                    n_assets
                )))
            }
        };

        let n_steps = fix_times.len();
        let mut drifts = Vec::with_capacity(n_steps * n_assets);
        let mut stdevs = Vec::with_capacity(n_steps * n_assets);
        let mut t_prev = 0.0;
        for &t in fix_times {
            let dt = t - t_prev;
            let growth_rate = -growth.fwd_discount(t_prev, t)?.ln();
            for asset in assets {
                let variance = asset.vol.variance(t_prev, t)?;
                drifts.push(
                    growth_rate - asset.div_yield * dt + asset.drift_adjustment * dt
                        - 0.5 * variance,
                );
                stdevs.push(variance.sqrt());
            }
            t_prev = t;
        }

        Ok(Self {
            fix_times: fix_times.to_vec(),
            n_assets,
            log_spots: assets.iter().map(|a| a.spot.ln()).collect(),
            drifts,
            stdevs,
            factor,
        })
    }

    /// Fixing times the generator steps across.
    #[inline]
    pub fn fix_times(&self) -> &[f64] {
        &self.fix_times
    }

    /// Number of simulated assets.
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.n_assets
    }

    /// Number of normals consumed per path.
    #[inline]
    pub fn n_normals(&self) -> usize {
        self.fix_times.len() * self.n_assets
    }

    /// Turn independent standard normals into a price path.
    ///
    /// `normals` and `path` hold [`n_normals`](Self::n_normals) entries;
    /// `correlated` is scratch space of [`n_assets`](Self::n_assets).
    pub fn generate(&self, normals: &[f64], path: &mut [f64], correlated: &mut [f64]) {
        let n = self.n_assets;
        for k in 0..self.fix_times.len() {
            let z = &normals[k * n..(k + 1) * n];
            match &self.factor {
                Some(l) => {
                    for (i, c) in correlated.iter_mut().enumerate() {
                        *c = (0..=i).map(|j| l[(i, j)] * z[j]).sum();
                    }
                }
                None => correlated.copy_from_slice(z),
            }
            // Log-prices first; exponentiated once the path is complete.
            for a in 0..n {
                let idx = k * n + a;
                let prev = if k == 0 {
                    self.log_spots[a]
                } else {
                    path[idx - n]
                };
                path[idx] = prev + self.drifts[idx] + self.stdevs[idx] * correlated[a];
            }
        }
        for s in path.iter_mut() {
            *s = s.exp();
        }
    }
}
