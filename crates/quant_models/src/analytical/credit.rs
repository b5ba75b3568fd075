//! Credit default swap legs under a flat spread-implied hazard.

use quant_core::market_data::YieldCurve;

use super::error::{check_time, AnalyticalError};

/// Present values of the two CDS legs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdsLegs {
    /// Protection (default) leg
    pub default_leg: f64,
    /// Premium leg
    pub premium_leg: f64,
}

/// Rounding slack when counting payment periods.
const PERIOD_SLACK: f64 = 1e-9;

/// Guard against division by zero at full recovery.
const RECOVERY_EPSILON: f64 = 1e-12;

/// Present value of the default and premium legs of a CDS.
///
/// Premiums are paid `pay_freq` times a year, backwards from `time_to_mat`
/// (the first period may be a short stub). The survival probability to
/// each payment time `t` is
///
/// ```text
/// Q(t) = max(e^{-s·t} - R, 0) / (1 - R)
/// ```
///
/// and each period contributes `c·Δt·Q(t_i)·P(t_i)` to the premium leg and
/// `(1 - R)·(Q(t_{i-1}) - Q(t_i))·P(t_i)` to the default leg.
///
/// # Errors
///
/// `AnalyticalError` on a non-positive spread, negative CDS rate or
/// maturity, recovery outside `[0, 1]`, zero frequency, or a failed curve
/// query.
pub fn cds_pv(
    curve: &YieldCurve,
    credit_spread: f64,
    cds_rate: f64,
    recovery: f64,
    time_to_mat: f64,
    pay_freq: u32,
) -> Result<CdsLegs, AnalyticalError> {
    if !(credit_spread > 0.0) || !credit_spread.is_finite() {
        return Err(AnalyticalError::InvalidRate {
            name: "credit spread",
            rate: credit_spread,
        });
    }
    if !(cds_rate >= 0.0) || !cds_rate.is_finite() {
        return Err(AnalyticalError::InvalidRate {
            name: "CDS rate",
            rate: cds_rate,
        });
    }
    if !(0.0..=1.0).contains(&recovery) {
        return Err(AnalyticalError::InvalidRecovery { recovery });
    }
    check_time("time to maturity", time_to_mat)?;
    if pay_freq == 0 {
        return Err(AnalyticalError::InvalidFrequency { frequency: pay_freq });
    }

    let period = 1.0 / f64::from(pay_freq);
    let n_pay = (time_to_mat * f64::from(pay_freq) - PERIOD_SLACK).ceil().max(0.0) as usize;

    let survival = |t: f64| {
        ((-credit_spread * t).exp() - recovery).max(0.0) / (1.0 - recovery + RECOVERY_EPSILON)
    };

    let mut legs = CdsLegs::default();
    let mut prev_time = 0.0;
    let mut prev_survival = 1.0;
    for i in 0..n_pay {
        let t = time_to_mat - (n_pay - 1 - i) as f64 * period;
        let q = survival(t);
        let df = curve.discount(t)?;
        legs.premium_leg += cds_rate * (t - prev_time) * q * df;
        legs.default_leg += (1.0 - recovery) * (prev_survival - q) * df;
        prev_time = t;
        prev_survival = q;
    }
    Ok(legs)
}
