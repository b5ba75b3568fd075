//! Black caplet / floorlet on a simply compounded forward rate.

use quant_core::market_data::YieldCurve;
use quant_core::math::compounding::simple_rate;
use quant_core::types::OptionType;

use super::black_scholes::black_european;
use super::error::{check_time, check_vol, AnalyticalError};

/// Caplet (`Call`) or floorlet (`Put`) price under Black's model.
///
/// The continuously compounded forward over `[t_reset, t_reset + tenor]`
/// is converted to a simple rate over the accrual period; the Black
/// payoff on that rate is paid at `t_reset + tenor` and scaled by `tenor`:
///
/// ```text
/// V = P(0, T₂) · τ · φ·(F·N(φd₁) - K·N(φd₂)),   d₁ = ln(F/K)/(σ√T₁) + σ√T₁/2
/// ```
///
/// # Errors
///
/// `AnalyticalError` on a non-positive strike rate or tenor, a negative
/// reset time or volatility, a non-positive forward rate, or a failed curve
/// query.
///
/// # Examples
/// ```
/// use quant_core::market_data::YieldCurve;
/// use quant_core::types::OptionType;
/// use quant_models::analytical::cap_floorlet;
///
/// let curve = YieldCurve::flat(0.03).unwrap();
/// let cap = cap_floorlet(OptionType::Call, &curve, 0.03, 1.0, 0.25, 0.2).unwrap();
/// let floor = cap_floorlet(OptionType::Put, &curve, 0.03, 1.0, 0.25, 0.2).unwrap();
/// assert!(cap > 0.0 && floor > 0.0);
/// ```
pub fn cap_floorlet(
    option: OptionType,
    curve: &YieldCurve,
    strike_rate: f64,
    time_to_reset: f64,
    tenor: f64,
    fwd_rate_vol: f64,
) -> Result<f64, AnalyticalError> {
    if !(strike_rate > 0.0) || !strike_rate.is_finite() {
        return Err(AnalyticalError::InvalidStrike { strike: strike_rate });
    }
    check_time("time to reset", time_to_reset)?;
    if !(tenor > 0.0) || !tenor.is_finite() {
        return Err(AnalyticalError::InvalidTime {
            name: "tenor",
            time: tenor,
        });
    }
    check_vol(fwd_rate_vol)?;

    let time_to_pay = time_to_reset + tenor;
    let cc_fwd = curve.fwd_rate(time_to_reset, time_to_pay)?;
    let fwd = simple_rate(cc_fwd, tenor).map_err(|_| AnalyticalError::InvalidTime {
        name: "tenor",
        time: tenor,
    })?;
    if !(fwd > 0.0) {
        return Err(AnalyticalError::InvalidRate {
            name: "forward rate",
            rate: fwd,
        });
    }
    let df = curve.discount(time_to_pay)?;

    // Undiscounted Black on the forward: zero rate and zero carry.
    let black = black_european(option, fwd, strike_rate, time_to_reset, 0.0, 0.0, fwd_rate_vol).price;
    Ok(df * black * tenor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quant_core::market_data::YieldValueType;

    fn curve() -> YieldCurve {
        YieldCurve::new(&[0.5, 1.0, 2.0, 5.0], &[0.02, 0.025, 0.03, 0.035], YieldValueType::SpotRate).unwrap()
    }

    #[test]
    fn test_cap_floor_parity() {
        // Caplet - floorlet = τ·P(T₂)·(F - K)
        let c = curve();
        let (k, t1, tau) = (0.03, 1.5, 0.5);
        let cap = cap_floorlet(OptionType::Call, &c, k, t1, tau, 0.25).unwrap();
        let floor = cap_floorlet(OptionType::Put, &c, k, t1, tau, 0.25).unwrap();

        let fwd = (c.fwd_rate(t1, t1 + tau).unwrap() * tau).exp_m1() / tau;
        let expected = tau * c.discount(t1 + tau).unwrap() * (fwd - k);
        assert_relative_eq!(cap - floor, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_vol_is_intrinsic() {
        let c = YieldCurve::flat(0.04).unwrap();
        let cap = cap_floorlet(OptionType::Call, &c, 0.03, 1.0, 0.25, 0.0).unwrap();
        let fwd = (0.04f64 * 0.25).exp_m1() / 0.25;
        assert_relative_eq!(cap, 0.25 * (-0.05f64).exp() * (fwd - 0.03), epsilon = 1e-15);
        assert_eq!(cap_floorlet(OptionType::Put, &c, 0.03, 1.0, 0.25, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_long_tenor_is_supported() {
        let c = YieldCurve::flat(0.04).unwrap();
        assert!(cap_floorlet(OptionType::Call, &c, 0.04, 1.0, 2.0, 0.2).unwrap() > 0.0);
    }

    #[test]
    fn test_invalid_arguments() {
        let c = curve();
        assert!(cap_floorlet(OptionType::Call, &c, 0.0, 1.0, 0.25, 0.2).is_err());
        assert!(cap_floorlet(OptionType::Call, &c, 0.03, -1.0, 0.25, 0.2).is_err());
        assert!(cap_floorlet(OptionType::Call, &c, 0.03, 1.0, 0.0, 0.2).is_err());
        assert!(cap_floorlet(OptionType::Call, &c, 0.03, 1.0, 0.25, -0.2).is_err());

        let negative = YieldCurve::flat(-0.01).unwrap();
        assert!(matches!(
            cap_floorlet(OptionType::Call, &negative, 0.03, 1.0, 0.25, 0.2),
            Err(AnalyticalError::InvalidRate { .. })
        ));
    }
}
