//! Log-spot / time discretisation.

use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
use quant_core::types::PricingError;

use super::config::PdeConfig;

/// Minimum distance, in nodes of the unwidened grid, between the initial
/// spot and either boundary.
pub(crate) const SPOT_MARGIN_NODES: f64 = 2.0;

/// Uniform grid in `x = ln S` with two boundary nodes, and a uniform time
/// axis from 0 to expiry.
#[derive(Clone, Debug)]
pub(crate) struct LogSpotGrid {
    x: Vec<f64>,
    spots: Vec<f64>,
    dx: f64,
    times: Vec<f64>,
}

impl LogSpotGrid {
    /// Grid centred on the log-forward to `expiry`, spanning
    /// `±n_std_devs` terminal standard deviations.
    ///
    /// When drift carries the forward far from the spot, the span is
    /// widened so `ln spot` stays at least [`SPOT_MARGIN_NODES`] nodes
    /// inside the boundaries, and the spacing is recomputed.
    pub(crate) fn new(
        config: &PdeConfig,
        spot: f64,
        expiry: f64,
        discount: &YieldCurve,
        div_yield: f64,
        vol: &VolatilityTermStructure,
    ) -> Result<Self, PricingError> {
        let variance = vol.variance(0.0, expiry)?;
        if !(variance > 0.0) {
            return Err(PricingError::InvalidArgument(format!(
                "PDE grid needs positive variance to expiry, got {}",
                variance
            )));
        }
        let ln_spot = spot.ln();
        let centre = ln_spot - discount.discount(expiry)?.ln() - div_yield * expiry;
        let half_width = config.n_std_devs() * variance.sqrt();
        let n_intervals = (config.n_spot_nodes() + 1) as f64;
        let margin = SPOT_MARGIN_NODES * 2.0 * half_width / n_intervals;

        let lo = (centre - half_width).min(ln_spot - margin);
        let hi = (centre + half_width).max(ln_spot + margin);
        let dx = (hi - lo) / n_intervals;

        let n_nodes = config.n_spot_nodes() + 2;
        let x: Vec<f64> = (0..n_nodes).map(|i| lo + i as f64 * dx).collect();
        let spots = x.iter().map(|xi| xi.exp()).collect();

        let n_steps = config.n_time_steps();
        let times = (0..=n_steps).map(|k| expiry * k as f64 / n_steps as f64).collect();

        Ok(Self { x, spots, dx, times })
    }

    /// Log-spot spacing.
    #[inline]
    pub(crate) fn dx(&self) -> f64 {
        self.dx
    }

    /// Spot levels, boundaries included.
    #[inline]
    pub(crate) fn spots(&self) -> &[f64] {
        &self.spots
    }

    /// Time levels `0 = t_0 < ... < t_N = expiry`.
    #[inline]
    pub(crate) fn times(&self) -> &[f64] {
        &self.times
    }

    /// Linear interpolation of node `values` in log-spot at `spot`.
    pub(crate) fn interpolate(&self, values: &[f64], spot: f64) -> f64 {
        let x = spot.ln();
        let last = self.x.len() - 2;
        let i = (((x - self.x[0]) / self.dx).floor().max(0.0) as usize).min(last);
        let w = (x - self.x[i]) / self.dx;
        values[i] * (1.0 - w) + values[i + 1] * w
    }
}
