//! Market store access and curve-based analytics.
//!
//! Curve and volatility names are case-insensitive; creating an object
//! under an existing name replaces it.

use quant_core::market_data::{MarketListing, MarketStore, VolValueType, YieldValueType};
use quant_core::types::PricingError;
use quant_models::analytical::{self, CdsLegs};

use super::option_type;

/// Names of every stored object.
pub fn mkt_list(store: &MarketStore) -> MarketListing {
    store.list()
}

/// Removes every stored object.
pub fn mkt_clear(store: &MarketStore) {
    store.clear();
}

/// Builds a yield curve and stores it under `name`.
///
/// `value_type` is `0` for spot rates, `1` for forward rates and `2` for
/// discount factors. Returns the stored name.
pub fn yc_create(
    store: &MarketStore,
    name: &str,
    maturities: &[f64],
    values: &[f64],
    value_type: i32,
) -> Result<String, PricingError> {
    let value_type = YieldValueType::try_from(value_type)?;
    Ok(store.create_yield_curve(name, maturities, values, value_type)?)
}

/// Discount factor to `t` on the named curve.
pub fn discount(store: &MarketStore, name: &str, t: f64) -> Result<f64, PricingError> {
    Ok(store.yield_curve(name)?.discount(t)?)
}

/// Forward discount factor from `t1` to `t2` on the named curve.
pub fn fwd_discount(store: &MarketStore, name: &str, t1: f64, t2: f64) -> Result<f64, PricingError> {
    Ok(store.yield_curve(name)?.fwd_discount(t1, t2)?)
}

/// Continuously compounded spot rate to `t`.
pub fn spot_rate(store: &MarketStore, name: &str, t: f64) -> Result<f64, PricingError> {
    Ok(store.yield_curve(name)?.spot_rate(t)?)
}

/// Continuously compounded forward rate from `t1` to `t2`.
pub fn fwd_rate(store: &MarketStore, name: &str, t1: f64, t2: f64) -> Result<f64, PricingError> {
    Ok(store.yield_curve(name)?.fwd_rate(t1, t2)?)
}

/// Builds a volatility term structure and stores it under `name`.
///
/// `value_type` is `0` for spot and `1` for forward volatilities.
pub fn vol_create(
    store: &MarketStore,
    name: &str,
    maturities: &[f64],
    values: &[f64],
    value_type: i32,
) -> Result<String, PricingError> {
    let value_type = VolValueType::try_from(value_type)?;
    Ok(store.create_volatility(name, maturities, values, value_type)?)
}

/// Spot volatility to `t`.
pub fn spot_vol(store: &MarketStore, name: &str, t: f64) -> Result<f64, PricingError> {
    Ok(store.volatility(name)?.spot_vol(t)?)
}

/// Forward volatility from `t1` to `t2`.
pub fn fwd_vol(store: &MarketStore, name: &str, t1: f64, t2: f64) -> Result<f64, PricingError> {
    Ok(store.volatility(name)?.fwd_vol(t1, t2)?)
}

/// Black caplet (`payoff = 1`) or floorlet (`payoff = -1`) on the named curve.
#[allow(clippy::too_many_arguments)]
pub fn cap_floorlet_bs(
    store: &MarketStore,
    payoff: i32,
    curve_name: &str,
    strike_rate: f64,
    time_to_reset: f64,
    tenor: f64,
    fwd_rate_vol: f64,
) -> Result<f64, PricingError> {
    let curve = store.yield_curve(curve_name)?;
    Ok(analytical::cap_floorlet(
        option_type(payoff)?,
        &curve,
        strike_rate,
        time_to_reset,
        tenor,
        fwd_rate_vol,
    )?)
}

/// Default and premium legs of a CDS discounted on the named curve.
#[allow(clippy::too_many_arguments)]
pub fn cds_pv(
    store: &MarketStore,
    curve_name: &str,
    credit_spread: f64,
    cds_rate: f64,
    recovery: f64,
    time_to_mat: f64,
    pay_freq: u32,
) -> Result<CdsLegs, PricingError> {
    let curve = store.yield_curve(curve_name)?;
    Ok(analytical::cds_pv(&curve, credit_spread, cds_rate, recovery, time_to_mat, pay_freq)?)
}
