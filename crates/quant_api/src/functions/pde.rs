//! Finite-difference pricers.
//!
//! Volatility is a constant or the name of a stored term structure; see
//! [`VolInput`]. With `all_results` the full value grid is returned
//! alongside the price.

use quant_core::market_data::MarketStore;
use quant_core::types::PricingError;
use quant_pricing::pde::{self, PdeConfig, PdeResult};

use super::{option_type, VolInput};

/// European option by PDE.
#[allow(clippy::too_many_arguments)]
pub fn euro_bs_pde(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    curve_name: &str,
    div_yield: f64,
    vol: &VolInput,
    config: &PdeConfig,
    all_results: bool,
) -> Result<PdeResult, PricingError> {
    let option = option_type(payoff)?;
    let curve = store.yield_curve(curve_name)?;
    let vol = vol.resolve(store)?;
    pde::price_european(option, strike, time_to_exp, spot, &curve, div_yield, &vol, config, all_results)
}

/// Cash-or-nothing digital option by PDE.
#[allow(clippy::too_many_arguments)]
pub fn digi_bs_pde(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    curve_name: &str,
    div_yield: f64,
    vol: &VolInput,
    config: &PdeConfig,
    all_results: bool,
) -> Result<PdeResult, PricingError> {
    let option = option_type(payoff)?;
    let curve = store.yield_curve(curve_name)?;
    let vol = vol.resolve(store)?;
    pde::price_digital(option, strike, time_to_exp, spot, &curve, div_yield, &vol, config, all_results)
}

/// American option by PDE, exercise checked at every time step.
#[allow(clippy::too_many_arguments)]
pub fn amer_bs_pde(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    curve_name: &str,
    div_yield: f64,
    vol: &VolInput,
    config: &PdeConfig,
    all_results: bool,
) -> Result<PdeResult, PricingError> {
    let option = option_type(payoff)?;
    let curve = store.yield_curve(curve_name)?;
    let vol = vol.resolve(store)?;
    pde::price_american(option, strike, time_to_exp, spot, &curve, div_yield, &vol, config, all_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use quant_core::market_data::{VolValueType, YieldValueType};
    use quant_core::types::ErrorKind;

    fn setup() -> (MarketStore, PdeConfig) {
        let store = MarketStore::new();
        store
            .create_yield_curve("usd", &[1.0], &[0.05], YieldValueType::ForwardRate)
            .unwrap();
        store
            .create_volatility("flat", &[1.0], &[0.2], VolValueType::ForwardVol)
            .unwrap();
        let config = PdeConfig::builder()
            .n_time_steps(50)
            .n_spot_nodes(100)
            .theta(0.5)
            .build()
            .unwrap();
        (store, config)
    }

    #[test]
    fn test_named_and_constant_vol_agree() {
        let (store, config) = setup();
        let named = euro_bs_pde(&store, -1, 100.0, 1.0, 100.0, "usd", 0.0, &VolInput::from("flat"), &config, false).unwrap();
        let flat = euro_bs_pde(&store, -1, 100.0, 1.0, 100.0, "usd", 0.0, &VolInput::Constant(0.2), &config, false).unwrap();
        assert_abs_diff_eq!(named.price(), flat.price(), epsilon = 1e-12);
        assert!(named.grid().is_none());
    }

    #[test]
    fn test_american_dominates_european() {
        let (store, config) = setup();
        let vol = VolInput::Named("flat".to_string());
        let euro = euro_bs_pde(&store, -1, 110.0, 1.0, 100.0, "usd", 0.0, &vol, &config, false).unwrap();
        let amer = amer_bs_pde(&store, -1, 110.0, 1.0, 100.0, "usd", 0.0, &vol, &config, true).unwrap();
        assert!(amer.price() > euro.price());
        let grid = amer.grid().unwrap();
        assert_eq!(grid.values.len(), 51);
        assert_eq!(grid.spots.len(), 102);
    }

    #[test]
    fn test_digital_between_zero_and_discount() {
        let (store, config) = setup();
        let digi = digi_bs_pde(&store, 1, 100.0, 1.0, 100.0, "usd", 0.0, &VolInput::Constant(0.2), &config, false).unwrap();
        assert!(digi.price() > 0.0 && digi.price() < (-0.05f64).exp());
    }

    #[test]
    fn test_unknown_names() {
        let (store, config) = setup();
        let err = euro_bs_pde(&store, 1, 100.0, 1.0, 100.0, "usd", 0.0, &VolInput::from("vix"), &config, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = amer_bs_pde(&store, 1, 100.0, 1.0, 100.0, "gbp", 0.0, &VolInput::Constant(0.2), &config, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
