//! Monte Carlo pricers over named discount curves.

use nalgebra::DMatrix;
use quant_core::market_data::{MarketStore, VolatilityTermStructure};
use quant_core::types::PricingError;
use quant_pricing::mc::{self, McResult, MonteCarloConfig};

use super::option_type;

/// European option by Monte Carlo, discounted on `curve_name`.
#[allow(clippy::too_many_arguments)]
pub fn euro_bs_mc(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    curve_name: &str,
    div_yield: f64,
    volatility: f64,
    config: &MonteCarloConfig,
) -> Result<McResult, PricingError> {
    let option = option_type(payoff)?;
    let curve = store.yield_curve(curve_name)?;
    let vol = VolatilityTermStructure::constant(volatility)?;
    mc::price_european(option, strike, time_to_exp, spot, &curve, div_yield, &vol, config)
}

/// Arithmetic Asian option on a basket by Monte Carlo.
///
/// The basket value at each fixing is `Σ quantities[i]·S_i`; the payoff
/// applies to its average over `fix_times`.
#[allow(clippy::too_many_arguments)]
pub fn asian_basket_bs_mc(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    fix_times: &[f64],
    quantities: &[f64],
    spots: &[f64],
    curve_name: &str,
    div_yields: &[f64],
    volatilities: &[f64],
    correlation: &DMatrix<f64>,
    config: &MonteCarloConfig,
) -> Result<McResult, PricingError> {
    let option = option_type(payoff)?;
    let curve = store.yield_curve(curve_name)?;
    let vols = volatilities
        .iter()
        .map(|&v| VolatilityTermStructure::constant(v))
        .collect::<Result<Vec<_>, _>>()?;
    mc::price_asian_basket(
        option,
        strike,
        fix_times,
        quantities,
        spots,
        &curve,
        div_yields,
        &vols,
        correlation,
        config,
    )
}
