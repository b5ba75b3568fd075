//! Quanto European options: an asset in one currency paying its value
//! converted at a fixed rate into another.
//!
//! The asset drift is shifted by `-ρ·σ_S·σ_X`. Analytic pricing takes flat
//! rates; Monte Carlo and PDE take a discount curve for the payment
//! currency and a growth curve for the asset currency.

use quant_core::market_data::MarketStore;
use quant_core::types::PricingError;
use quant_models::analytical;
use quant_pricing::mc::{self, McResult, MonteCarloConfig};
use quant_pricing::pde::{self, PdeConfig, PdeResult};

use super::option_type;

/// Closed-form quanto European price.
#[allow(clippy::too_many_arguments)]
pub fn quanto_euro_bs(
    payoff: i32,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    disc_rate: f64,
    growth_rate: f64,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
) -> Result<f64, PricingError> {
    let greeks = analytical::quanto_european_option(
        option_type(payoff)?,
        spot,
        strike,
        time_to_exp,
        disc_rate,
        growth_rate,
        div_yield,
        asset_vol,
        fx_vol,
        correlation,
    )?;
    Ok(greeks.price)
}

/// Quanto European price by Monte Carlo.
#[allow(clippy::too_many_arguments)]
pub fn quanto_euro_bs_mc(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    disc_curve: &str,
    growth_curve: &str,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
    config: &MonteCarloConfig,
) -> Result<McResult, PricingError> {
    let option = option_type(payoff)?;
    let discount = store.yield_curve(disc_curve)?;
    let growth = store.yield_curve(growth_curve)?;
    mc::price_quanto_european(
        option,
        strike,
        time_to_exp,
        spot,
        &discount,
        &growth,
        div_yield,
        asset_vol,
        fx_vol,
        correlation,
        config,
    )
}

/// Quanto European price by PDE.
#[allow(clippy::too_many_arguments)]
pub fn quanto_euro_bs_pde(
    store: &MarketStore,
    payoff: i32,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    disc_curve: &str,
    growth_curve: &str,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
    config: &PdeConfig,
    all_results: bool,
) -> Result<PdeResult, PricingError> {
    let option = option_type(payoff)?;
    let discount = store.yield_curve(disc_curve)?;
    let growth = store.yield_curve(growth_curve)?;
    pde::price_quanto_european(
        option,
        strike,
        time_to_exp,
        spot,
        &discount,
        &growth,
        div_yield,
        asset_vol,
        fx_vol,
        correlation,
        config,
        all_results,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use quant_core::market_data::YieldValueType;
    use quant_core::types::ErrorKind;

    #[test]
    fn test_zero_correlation_matches_foreign_carry() {
        // Without correlation the quanto is a European growing at r_f - q
        let quanto = quanto_euro_bs(1, 100.0, 100.0, 1.0, 0.05, 0.02, 0.01, 0.2, 0.1, 0.0).unwrap();
        let plain = analytical::european_option(
            quant_core::types::OptionType::Call,
            100.0,
            100.0,
            1.0,
            0.05,
            0.05 - 0.02 + 0.01,
            0.2,
        )
        .unwrap();
        assert_abs_diff_eq!(quanto, plain.price, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_correlation_cheapens_call() {
        let base = quanto_euro_bs(1, 100.0, 100.0, 1.0, 0.05, 0.02, 0.0, 0.2, 0.1, 0.0).unwrap();
        let corr = quanto_euro_bs(1, 100.0, 100.0, 1.0, 0.05, 0.02, 0.0, 0.2, 0.1, 0.5).unwrap();
        assert!(corr < base);
    }

    #[test]
    fn test_curves_resolved_by_name() {
        let store = MarketStore::new();
        store
            .create_yield_curve("usd", &[1.0], &[0.05], YieldValueType::SpotRate)
            .unwrap();
        let config = MonteCarloConfig::builder().n_paths(100).build().unwrap();
        let err = quanto_euro_bs_mc(&store, 1, 100.0, 1.0, 100.0, "usd", "jpy", 0.0, 0.2, 0.1, 0.3, &config)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = quanto_euro_bs_pde(
            &store,
            1,
            100.0,
            1.0,
            100.0,
            "usd",
            "usd",
            0.0,
            0.2,
            0.1,
            1.5,
            &PdeConfig::default(),
            false,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
