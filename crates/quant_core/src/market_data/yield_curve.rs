//! Yield curves stored as piecewise-flat instantaneous forward rates.

use std::fmt;

use crate::math::interpolators::{PiecewisePolynomial, PolyOrder};

use super::term::{check_interval, check_time, interval_averages, left_breakpoints, validate_term_inputs};
use super::MarketDataError;

/// Interpretation of the values passed to [`YieldCurve::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YieldValueType {
    /// Continuously compounded spot rates `r(t)` with `P(t) = exp(-r(t)·t)`.
    #[default]
    SpotRate,
    /// Instantaneous forward rates, flat between maturities.
    ForwardRate,
    /// Discount factors `P(t)`.
    DiscountFactor,
}

impl TryFrom<i32> for YieldValueType {
    type Error = MarketDataError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::SpotRate),
            1 => Ok(Self::ForwardRate),
            2 => Ok(Self::DiscountFactor),
            _ => Err(MarketDataError::InvalidValueType { kind: "yield", code }),
        }
    }
}

impl fmt::Display for YieldValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpotRate => write!(f, "SpotRate"),
            Self::ForwardRate => write!(f, "ForwardRate"),
            Self::DiscountFactor => write!(f, "DiscountFactor"),
        }
    }
}

/// Yield curve built from a maturity strip.
///
/// Whatever the input convention, the curve is stored as a piecewise-flat
/// instantaneous forward rate `f(t)` with breakpoints `[0, t1, …, t(n-1)]`,
/// held flat beyond the last maturity. Every query is an exact integral of
/// `f`:
///
/// - `P(t) = exp(-∫₀ᵗ f)`
/// - `r(t) = ∫₀ᵗ f / t`
///
/// The input points are therefore reproduced exactly.
///
/// # Example
///
/// ```
/// use quant_core::market_data::{YieldCurve, YieldValueType};
///
/// let curve = YieldCurve::new(&[1.0, 2.0], &[0.02, 0.03], YieldValueType::SpotRate).unwrap();
///
/// assert!((curve.spot_rate(2.0).unwrap() - 0.03).abs() < 1e-15);
/// assert!((curve.fwd_rate(1.0, 2.0).unwrap() - 0.04).abs() < 1e-15);
/// assert!((curve.discount(2.0).unwrap() - (-0.06f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YieldCurve {
    forwards: PiecewisePolynomial,
}

impl YieldCurve {
    /// Build a curve from maturities (positive, strictly increasing) and values.
    ///
    /// # Errors
    ///
    /// `MarketDataError` on malformed maturities or values, or on a
    /// non-positive discount factor.
    pub fn new(
        maturities: &[f64],
        values: &[f64],
        value_type: YieldValueType,
    ) -> Result<Self, MarketDataError> {
        validate_term_inputs(maturities, values)?;

        let forwards = match value_type {
            YieldValueType::ForwardRate => values.to_vec(),
            YieldValueType::SpotRate => {
                let totals: Vec<f64> = maturities.iter().zip(values).map(|(t, r)| t * r).collect();
                interval_averages(maturities, &totals)
            }
            YieldValueType::DiscountFactor => {
                if let Some(index) = values.iter().position(|&df| df <= 0.0) {
                    return Err(MarketDataError::NonPositiveDiscount {
                        index,
                        df: values[index],
                    });
                }
                let totals: Vec<f64> = values.iter().map(|df| -df.ln()).collect();
                interval_averages(maturities, &totals)
            }
        };

        let forwards =
            PiecewisePolynomial::new(&left_breakpoints(maturities), &forwards, PolyOrder::Flat)?;
        Ok(Self { forwards })
    }

    /// Curve with a single continuously compounded rate at every maturity.
    pub fn flat(rate: f64) -> Result<Self, MarketDataError> {
        Self::new(&[1.0], &[rate], YieldValueType::ForwardRate)
    }

    /// The canonical instantaneous forward-rate curve.
    #[inline]
    pub fn forward_curve(&self) -> &PiecewisePolynomial {
        &self.forwards
    }

    /// Discount factor `P(t)`.
    pub fn discount(&self, t: f64) -> Result<f64, MarketDataError> {
        check_time(t)?;
        Ok((-self.forwards.integral(0.0, t)).exp())
    }

    /// Forward discount factor `P(t2) / P(t1)`.
    pub fn fwd_discount(&self, t1: f64, t2: f64) -> Result<f64, MarketDataError> {
        check_interval(t1, t2)?;
        Ok((-self.forwards.integral(t1, t2)).exp())
    }

    /// Continuously compounded spot rate; the instantaneous rate at `t = 0`.
    pub fn spot_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        check_time(t)?;
        if t == 0.0 {
            return Ok(self.forwards.evaluate(0.0, 0));
        }
        Ok(self.forwards.integral(0.0, t) / t)
    }

    /// Continuously compounded forward rate over `[t1, t2]`.
    ///
    /// Returns the instantaneous forward rate at `t1` when `t1 == t2`.
    pub fn fwd_rate(&self, t1: f64, t2: f64) -> Result<f64, MarketDataError> {
        check_interval(t1, t2)?;
        if t1 == t2 {
            return Ok(self.forwards.evaluate(t1, 0));
        }
        Ok(self.forwards.integral(t1, t2) / (t2 - t1))
    }
}
