//! Conversions between periodically and continuously compounded rates.

use crate::types::PricingError;

fn check_frequency(freq: u32) -> Result<f64, PricingError> {
    if freq == 0 {
        return Err(PricingError::InvalidArgument(
            "compounding frequency must be >= 1".to_string(),
        ));
    }
    Ok(f64::from(freq))
}

/// Convert a rate compounded `freq` times per year to a c.c. rate.
///
/// `r_cc = f·ln(1 + r/f)`
///
/// # Example
///
/// ```
/// use quant_core::math::compounding::{from_cont_cmpd, to_cont_cmpd};
///
/// let cc = to_cont_cmpd(0.10, 1).unwrap();
/// assert!((cc - 1.1f64.ln()).abs() < 1e-15);
/// assert!((from_cont_cmpd(cc, 1).unwrap() - 0.10).abs() < 1e-15);
/// ```
pub fn to_cont_cmpd(rate: f64, freq: u32) -> Result<f64, PricingError> {
    let f = check_frequency(freq)?;
    if rate / f <= -1.0 {
        return Err(PricingError::InvalidArgument(format!(
            "periodic rate {} at frequency {} has no continuous equivalent",
            rate, freq
        )));
    }
    Ok(f * (rate / f).ln_1p())
}

/// Convert a c.c. rate to a rate compounded `freq` times per year.
///
/// `r = f·(exp(r_cc/f) - 1)`
pub fn from_cont_cmpd(rate: f64, freq: u32) -> Result<f64, PricingError> {
    let f = check_frequency(freq)?;
    Ok(f * (rate / f).exp_m1())
}

/// Simply compounded rate over an accrual period of `period` years.
///
/// `(exp(r_cc·τ) - 1) / τ`, i.e. [`from_cont_cmpd`] at frequency `1/τ`
/// without rounding the frequency to an integer.
///
/// # Errors
///
/// `PricingError::InvalidArgument` unless `period` is positive and finite.
pub fn simple_rate(rate: f64, period: f64) -> Result<f64, PricingError> {
    if !(period > 0.0) || !period.is_finite() {
        return Err(PricingError::InvalidArgument(format!(
            "accrual period must be positive, got {}",
            period
        )));
    }
    Ok((rate * period).exp_m1() / period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip_annual() {
        let cc = to_cont_cmpd(0.10, 1).unwrap();
        assert_relative_eq!(cc, 0.095_310_179_804_324_9, epsilon = 1e-15);
        assert_relative_eq!(from_cont_cmpd(cc, 1).unwrap(), 0.10, epsilon = 1e-15);
    }

    #[test]
    fn test_higher_frequency_approaches_continuous() {
        let r = 0.05;
        let cc_monthly = to_cont_cmpd(r, 12).unwrap();
        let cc_daily = to_cont_cmpd(r, 365).unwrap();
        assert!(cc_monthly < r);
        assert!(cc_daily > cc_monthly);
        assert!((cc_daily - r).abs() < 1e-4);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert!(to_cont_cmpd(0.05, 0).is_err());
        assert!(from_cont_cmpd(0.05, 0).is_err());
    }

    #[test]
    fn test_rate_below_minus_one_rejected() {
        assert!(to_cont_cmpd(-1.0, 1).is_err());
    }

    #[test]
    fn test_simple_rate_matches_integer_frequency() {
        assert_relative_eq!(
            simple_rate(0.04, 0.25).unwrap(),
            from_cont_cmpd(0.04, 4).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_simple_rate_long_period() {
        // Two-year accrual: (e^{0.1} - 1) / 2
        assert_relative_eq!(simple_rate(0.05, 2.0).unwrap(), 0.1f64.exp_m1() / 2.0, epsilon = 1e-15);
        assert!(simple_rate(0.05, 0.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_round_trip(rate in -0.5f64..1.0, freq in 1u32..366) {
            let cc = to_cont_cmpd(rate, freq).unwrap();
            let back = from_cont_cmpd(cc, freq).unwrap();
            prop_assert!((back - rate).abs() < 1e-12);
        }
    }
}
