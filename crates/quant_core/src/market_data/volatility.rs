//! Volatility term structures stored as piecewise-flat forward variance.

use std::fmt;

use crate::math::interpolators::{PiecewisePolynomial, PolyOrder};

use super::term::{check_interval, check_time, interval_averages, left_breakpoints, validate_term_inputs};
use super::MarketDataError;

/// Interpretation of the values passed to [`VolatilityTermStructure::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolValueType {
    /// Spot (implied) volatilities `σ(t)` with total variance `σ(t)²·t`.
    #[default]
    SpotVol,
    /// Forward volatilities, flat between maturities.
    ForwardVol,
}

impl TryFrom<i32> for VolValueType {
    type Error = MarketDataError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::SpotVol),
            1 => Ok(Self::ForwardVol),
            _ => Err(MarketDataError::InvalidValueType {
                kind: "volatility",
                code,
            }),
        }
    }
}

impl fmt::Display for VolValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpotVol => write!(f, "SpotVol"),
            Self::ForwardVol => write!(f, "ForwardVol"),
        }
    }
}

/// Deterministic volatility term structure.
///
/// Stored as a piecewise-flat forward variance `v(t)` with breakpoints
/// starting at 0 and held flat beyond the last maturity:
///
/// - `σ_spot(t)² · t = ∫₀ᵗ v`
/// - `σ_fwd(t1, t2)² · (t2 - t1) = ∫_{t1}^{t2} v`
///
/// # Example
///
/// ```
/// use quant_core::market_data::{VolatilityTermStructure, VolValueType};
///
/// let vol = VolatilityTermStructure::new(&[1.0, 2.0], &[0.2, 0.3], VolValueType::SpotVol).unwrap();
/// assert!((vol.spot_vol(2.0).unwrap() - 0.3).abs() < 1e-15);
///
/// // 0.3²·2 - 0.2²·1 = 0.14 over [1, 2]
/// assert!((vol.fwd_vol(1.0, 2.0).unwrap() - 0.14f64.sqrt()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityTermStructure {
    variances: PiecewisePolynomial,
}

impl VolatilityTermStructure {
    /// Build a term structure from maturities (positive, strictly increasing)
    /// and positive volatilities.
    ///
    /// # Errors
    ///
    /// `MarketDataError` on malformed inputs, non-positive volatilities, or
    /// spot volatilities whose total variance decreases.
    pub fn new(
        maturities: &[f64],
        values: &[f64],
        value_type: VolValueType,
    ) -> Result<Self, MarketDataError> {
        validate_term_inputs(maturities, values)?;
        if let Some(index) = values.iter().position(|&v| v <= 0.0) {
            return Err(MarketDataError::NonPositiveVolatility {
                index,
                vol: values[index],
            });
        }

        let variances = match value_type {
            VolValueType::ForwardVol => values.iter().map(|v| v * v).collect(),
            VolValueType::SpotVol => {
                let totals: Vec<f64> = maturities
                    .iter()
                    .zip(values)
                    .map(|(t, v)| v * v * t)
                    .collect();
                let fwd = interval_averages(maturities, &totals);
                if let Some(i) = fwd.iter().position(|&v| v < 0.0) {
                    return Err(MarketDataError::NegativeForwardVariance {
                        index: i.saturating_sub(1),
                    });
                }
                fwd
            }
        };

        let variances =
            PiecewisePolynomial::new(&left_breakpoints(maturities), &variances, PolyOrder::Flat)?;
        Ok(Self { variances })
    }

    /// Constant volatility at every maturity.
    pub fn constant(vol: f64) -> Result<Self, MarketDataError> {
        Self::new(&[1.0], &[vol], VolValueType::ForwardVol)
    }

    /// The canonical forward-variance curve.
    #[inline]
    pub fn forward_variance_curve(&self) -> &PiecewisePolynomial {
        &self.variances
    }

    /// Integrated variance `∫_{t1}^{t2} v`.
    pub fn variance(&self, t1: f64, t2: f64) -> Result<f64, MarketDataError> {
        check_interval(t1, t2)?;
        Ok(self.variances.integral(t1, t2))
    }

    /// Spot volatility; the instantaneous volatility at `t = 0`.
    pub fn spot_vol(&self, t: f64) -> Result<f64, MarketDataError> {
        check_time(t)?;
        if t == 0.0 {
            return Ok(self.variances.evaluate(0.0, 0).sqrt());
        }
        Ok((self.variances.integral(0.0, t) / t).sqrt())
    }

    /// Forward volatility over `[t1, t2]`.
    ///
    /// Returns the instantaneous volatility at `t1` when `t1 == t2`.
    pub fn fwd_vol(&self, t1: f64, t2: f64) -> Result<f64, MarketDataError> {
        check_interval(t1, t2)?;
        if t1 == t2 {
            return Ok(self.variances.evaluate(t1, 0).sqrt());
        }
        Ok((self.variances.integral(t1, t2) / (t2 - t1)).sqrt())
    }
}
