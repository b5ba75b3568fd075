//! Closed-form Black-Scholes prices.

use quant_core::types::PricingError;
use quant_models::analytical;

use super::option_type;

/// Forward price `S·e^{(r-q)T}`.
pub fn fwd_price(spot: f64, time_to_exp: f64, rate: f64, div_yield: f64) -> Result<f64, PricingError> {
    Ok(analytical::forward_price(spot, time_to_exp, rate, div_yield)?)
}

/// Quanto forward price.
pub fn quanto_fwd_price(
    spot: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
) -> Result<f64, PricingError> {
    Ok(analytical::quanto_forward_price(
        spot,
        time_to_exp,
        rate,
        div_yield,
        asset_vol,
        fx_vol,
        correlation,
    )?)
}

/// European option `[price, delta, gamma, theta, vega]`.
pub fn euro_bs(
    payoff: i32,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<[f64; 5], PricingError> {
    let greeks = analytical::european_option(
        option_type(payoff)?,
        spot,
        strike,
        time_to_exp,
        rate,
        div_yield,
        volatility,
    )?;
    Ok(greeks.to_array())
}

/// Cash-or-nothing digital `[price, delta, gamma, theta, vega]`.
pub fn digi_bs(
    payoff: i32,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<[f64; 5], PricingError> {
    let greeks = analytical::digital_option(
        option_type(payoff)?,
        spot,
        strike,
        time_to_exp,
        rate,
        div_yield,
        volatility,
    )?;
    Ok(greeks.to_array())
}

/// Forward struck at `strike` that knocks out if spot is beyond `ko_level`
/// at `time_to_ko`.
#[allow(clippy::too_many_arguments)]
pub fn ko_fwd(
    payoff: i32,
    spot: f64,
    strike: f64,
    ko_level: f64,
    time_to_exp: f64,
    time_to_ko: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<f64, PricingError> {
    Ok(analytical::knockout_forward(
        option_type(payoff)?,
        spot,
        strike,
        ko_level,
        time_to_exp,
        time_to_ko,
        rate,
        div_yield,
        volatility,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use quant_core::types::ErrorKind;

    #[test]
    fn test_put_call_parity() {
        let call = euro_bs(1, 100.0, 95.0, 0.5, 0.04, 0.01, 0.25).unwrap();
        let put = euro_bs(-1, 100.0, 95.0, 0.5, 0.04, 0.01, 0.25).unwrap();
        let fwd = fwd_price(100.0, 0.5, 0.04, 0.01).unwrap();
        let df = (-0.04f64 * 0.5).exp();
        assert_abs_diff_eq!(call[0] - put[0], df * (fwd - 95.0), epsilon = 1e-10);
        // Same gamma and vega
        assert_abs_diff_eq!(call[2], put[2], epsilon = 1e-12);
        assert_abs_diff_eq!(call[4], put[4], epsilon = 1e-10);
    }

    #[test]
    fn test_digital_pair_pays_discount_factor() {
        let call = digi_bs(1, 100.0, 105.0, 1.0, 0.03, 0.0, 0.2).unwrap();
        let put = digi_bs(-1, 100.0, 105.0, 1.0, 0.03, 0.0, 0.2).unwrap();
        assert_abs_diff_eq!(call[0] + put[0], (-0.03f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(euro_bs(2, 100.0, 100.0, 1.0, 0.0, 0.0, 0.2).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(euro_bs(1, -1.0, 100.0, 1.0, 0.0, 0.0, 0.2).unwrap_err().kind(), ErrorKind::InvalidArgument);
        // Barrier must sit between strike and spot
        assert!(ko_fwd(1, 100.0, 80.0, 110.0, 1.0, 0.5, 0.03, 0.0, 0.2).is_err());
        assert!(ko_fwd(1, 100.0, 80.0, 90.0, 1.0, 0.5, 0.03, 0.0, 0.2).unwrap() > 0.0);
    }

    #[test]
    fn test_quanto_forward_without_correlation() {
        let plain = fwd_price(100.0, 2.0, 0.03, 0.01).unwrap();
        let quanto = quanto_fwd_price(100.0, 2.0, 0.03, 0.01, 0.2, 0.1, 0.0).unwrap();
        assert_abs_diff_eq!(plain, quanto, epsilon = 1e-12);
    }
}
