//! Black-Scholes forward, European and digital option formulas.
//!
//! ## Mathematical Formulas
//!
//! With forward `F = S·e^{(r-q)T}`, `df = e^{-rT}` and payoff sign φ:
//!
//! **European**: V = φ·df·(F·N(φd₁) - K·N(φd₂))
//! **Digital**: V = df·N(φd₂)
//!
//! Where:
//! - d₁ = ln(F/K)/(σ√T) + σ√T/2
//! - d₂ = d₁ - σ√T
//!
//! When `σ√T` vanishes the option is priced on its discounted intrinsic
//! forward value and the volatility-driven Greeks are zero.

use quant_core::math::distributions::{norm_cdf, norm_pdf};
use quant_core::types::OptionType;

use super::error::{check_rate, check_spot, check_strike, check_time, check_vol, AnalyticalError};
use super::Greeks;

/// Below this `σ√T` the variance is treated as zero.
pub(crate) const VARIANCE_EPSILON: f64 = 1e-12;

/// Forward price `S·e^{(r-q)T}`.
///
/// # Errors
///
/// `AnalyticalError` for a negative spot or time, or a non-finite rate.
///
/// # Examples
/// ```
/// use quant_models::analytical::forward_price;
///
/// let fwd = forward_price(100.0, 1.0, 0.05, 0.02).unwrap();
/// assert!((fwd - 100.0 * 0.03f64.exp()).abs() < 1e-12);
/// ```
pub fn forward_price(spot: f64, time_to_exp: f64, rate: f64, div_yield: f64) -> Result<f64, AnalyticalError> {
    if !(spot >= 0.0) || !spot.is_finite() {
        return Err(AnalyticalError::InvalidSpot { spot });
    }
    check_time("time to expiry", time_to_exp)?;
    check_rate("interest rate", rate)?;
    check_rate("dividend yield", div_yield)?;
    Ok(spot * ((rate - div_yield) * time_to_exp).exp())
}

/// European option price and Greeks.
///
/// # Arguments
/// * `option` - Call or put
/// * `spot` - Spot price (must be positive)
/// * `strike` - Strike price (must be positive)
/// * `time_to_exp` - Time to expiry in years (non-negative)
/// * `rate` - Continuously compounded interest rate
/// * `div_yield` - Continuous dividend yield
/// * `volatility` - Black-Scholes volatility (non-negative)
///
/// # Examples
/// ```
/// use quant_models::analytical::european_option;
/// use quant_core::types::OptionType;
///
/// let call = european_option(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// let put = european_option(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
///
/// // Put-call parity: C - P = S - K·e^{-rT}
/// let parity = call.price - put.price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
pub fn european_option(
    option: OptionType,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<Greeks, AnalyticalError> {
    check_inputs(spot, strike, time_to_exp, rate, div_yield, volatility)?;
    Ok(black_european(option, spot, strike, time_to_exp, rate, div_yield, volatility))
}

/// Cash-or-nothing digital option paying 1 at expiry, with Greeks.
///
/// A call pays when `S_T >= K`, a put when `S_T <= K`.
///
/// # Examples
/// ```
/// use quant_models::analytical::digital_option;
/// use quant_core::types::OptionType;
///
/// let call = digital_option(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// let put = digital_option(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
///
/// // A call and a put together pay 1 for sure
/// assert!((call.price + put.price - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
pub fn digital_option(
    option: OptionType,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<Greeks, AnalyticalError> {
    check_inputs(spot, strike, time_to_exp, rate, div_yield, volatility)?;
    Ok(black_digital(option, spot, strike, time_to_exp, rate, div_yield, volatility))
}

fn check_inputs(
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<(), AnalyticalError> {
    check_spot(spot)?;
    check_strike(strike)?;
    check_time("time to expiry", time_to_exp)?;
    check_rate("interest rate", rate)?;
    check_rate("dividend yield", div_yield)?;
    check_vol(volatility)
}

/// Unchecked European formula; `div_yield` may be any effective carry yield.
pub(crate) fn black_european(
    option: OptionType,
    spot: f64,
    strike: f64,
    t: f64,
    rate: f64,
    div_yield: f64,
    vol: f64,
) -> Greeks {
    let phi = option.sign();
    let df = (-rate * t).exp();
    let qf = (-div_yield * t).exp();
    let fwd = spot * ((rate - div_yield) * t).exp();
    let sqrt_t = t.sqrt();
    let sig_t = vol * sqrt_t;

    if sig_t < VARIANCE_EPSILON {
        let itm = if phi * (fwd - strike) > 0.0 { 1.0 } else { 0.0 };
        return Greeks {
            price: df * option.intrinsic(fwd, strike),
            delta: phi * qf * itm,
            gamma: 0.0,
            theta: phi * (div_yield * spot * qf - rate * strike * df) * itm,
            vega: 0.0,
        };
    }

    let d1 = (fwd / strike).ln() / sig_t + 0.5 * sig_t;
    let d2 = d1 - sig_t;
    let nd1 = norm_cdf(phi * d1);
    let nd2 = norm_cdf(phi * d2);
    let npd1 = norm_pdf(d1);

    Greeks {
        price: phi * df * (fwd * nd1 - strike * nd2),
        delta: phi * qf * nd1,
        gamma: qf * npd1 / (spot * sig_t),
        theta: -qf * npd1 * spot * vol / (2.0 * sqrt_t) + phi * div_yield * spot * qf * nd1
            - phi * rate * strike * df * nd2,
        vega: qf * sqrt_t * spot * npd1,
    }
}

/// Unchecked digital formula.
pub(crate) fn black_digital(
    option: OptionType,
    spot: f64,
    strike: f64,
    t: f64,
    rate: f64,
    div_yield: f64,
    vol: f64,
) -> Greeks {
    let phi = option.sign();
    let df = (-rate * t).exp();
    let fwd = spot * ((rate - div_yield) * t).exp();
    let sig_t = vol * t.sqrt();

    if sig_t < VARIANCE_EPSILON {
        let price = df * option.digital(fwd, strike);
        return Greeks {
            price,
            theta: rate * price,
            ..Greeks::default()
        };
    }

    let d2 = (fwd / strike).ln() / sig_t - 0.5 * sig_t;
    let d1 = d2 + sig_t;
    let npd2 = norm_pdf(d2);
    let price = df * norm_cdf(phi * d2);
    let drift = rate - div_yield - 0.5 * vol * vol;

    Greeks {
        price,
        delta: phi * df * npd2 / (spot * sig_t),
        gamma: -phi * df * npd2 * d1 / (spot * spot * sig_t * sig_t),
        theta: rate * price + phi * df * npd2 * ((spot / strike).ln() / t - drift) / (2.0 * sig_t),
        vega: -phi * df * npd2 * d1 / vol,
    }
}
