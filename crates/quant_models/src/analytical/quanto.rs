//! Quanto forward and quanto European option.
//!
//! A quanto payoff is paid in a currency other than the asset's own. Under
//! the paying currency's measure the asset drift is shifted by
//! `-ρ·σ_S·σ_X`, where `σ_X` is the FX volatility and `ρ` the asset-FX
//! correlation.

use quant_core::types::OptionType;

use super::black_scholes::{black_european, forward_price};
use super::error::{check_correlation, check_rate, check_spot, check_strike, check_time, check_vol, AnalyticalError};
use super::Greeks;

/// Drift shift `-ρ·σ_S·σ_X` applied to quanto forwards.
#[inline]
pub fn quanto_drift_adjustment(asset_vol: f64, fx_vol: f64, correlation: f64) -> f64 {
    -correlation * asset_vol * fx_vol
}

/// Quanto forward price `S·e^{(r-q)T}·e^{-ρσ_Sσ_X T}`.
///
/// # Examples
/// ```
/// use quant_models::analytical::{forward_price, quanto_forward_price};
///
/// let plain = forward_price(100.0, 1.0, 0.03, 0.0).unwrap();
/// let quanto = quanto_forward_price(100.0, 1.0, 0.03, 0.0, 0.2, 0.1, 0.5).unwrap();
/// assert!((quanto - plain * (-0.01f64).exp()).abs() < 1e-12);
/// ```
pub fn quanto_forward_price(
    spot: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
) -> Result<f64, AnalyticalError> {
    let fwd = forward_price(spot, time_to_exp, rate, div_yield)?;
    check_vol(asset_vol)?;
    check_vol(fx_vol)?;
    check_correlation(correlation)?;
    Ok(fwd * (quanto_drift_adjustment(asset_vol, fx_vol, correlation) * time_to_exp).exp())
}

/// Quanto European option price and Greeks.
///
/// The asset grows at `r_for - q - ρσ_Sσ_X` and the payoff is discounted at
/// `r_dom`. Greeks are taken with respect to the asset spot and volatility
/// with the drift adjustment held fixed.
#[allow(clippy::too_many_arguments)]
pub fn quanto_european_option(
    option: OptionType,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    dom_rate: f64,
    for_rate: f64,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
) -> Result<Greeks, AnalyticalError> {
    check_spot(spot)?;
    check_strike(strike)?;
    check_time("time to expiry", time_to_exp)?;
    check_rate("domestic rate", dom_rate)?;
    check_rate("foreign rate", for_rate)?;
    check_rate("dividend yield", div_yield)?;
    check_vol(asset_vol)?;
    check_vol(fx_vol)?;
    check_correlation(correlation)?;

    let growth = for_rate - div_yield + quanto_drift_adjustment(asset_vol, fx_vol, correlation);
    let carry_yield = dom_rate - growth;
    Ok(black_european(option, spot, strike, time_to_exp, dom_rate, carry_yield, asset_vol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::european_option;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_correlation_is_foreign_growth() {
        // With ρ = 0 and r_for = r_dom the quanto option is a plain option.
        let quanto = quanto_european_option(OptionType::Call, 100.0, 100.0, 1.0, 0.03, 0.03, 0.01, 0.2, 0.15, 0.0)
            .unwrap();
        let plain = european_option(OptionType::Call, 100.0, 100.0, 1.0, 0.03, 0.01, 0.2).unwrap();
        assert_relative_eq!(quanto.price, plain.price, epsilon = 1e-12);
        assert_relative_eq!(quanto.delta, plain.delta, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_correlation_lowers_call() {
        let args = |rho| {
            quanto_european_option(OptionType::Call, 100.0, 100.0, 1.0, 0.03, 0.02, 0.0, 0.25, 0.1, rho)
                .unwrap()
                .price
        };
        assert!(args(0.5) < args(0.0));
        assert!(args(-0.5) > args(0.0));
    }

    #[test]
    fn test_quanto_call_matches_quanto_forward() {
        // A zero-strike limit: deep ITM call ≈ discounted quanto forward minus strike.
        let (s, k, t, rd, rf, q, vs, vx, rho) = (100.0, 1.0, 2.0, 0.04, 0.02, 0.01, 0.2, 0.1, 0.3);
        let g = quanto_european_option(OptionType::Call, s, k, t, rd, rf, q, vs, vx, rho).unwrap();
        let fwd = quanto_forward_price(s, t, rf, q, vs, vx, rho).unwrap();
        assert_relative_eq!(g.price, (-rd * t).exp() * (fwd - k), epsilon = 1e-10);
    }

    #[test]
    fn test_rejects_bad_correlation() {
        assert!(matches!(
            quanto_forward_price(100.0, 1.0, 0.03, 0.0, 0.2, 0.1, 1.5),
            Err(AnalyticalError::InvalidCorrelation { .. })
        ));
        assert!(quanto_european_option(OptionType::Put, 100.0, 100.0, 1.0, 0.03, 0.03, 0.0, 0.2, -0.1, 0.0)
            .is_err());
    }
}
