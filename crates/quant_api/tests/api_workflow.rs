//! End-to-end workflows through the flat function API.
//!
//! # Test Categories
//!
//! 1. **Market store**: create, query, replace and clear named curves
//! 2. **Pricing**: Monte Carlo and PDE against the analytic functions
//! 3. **Configuration**: parameter maps and settings feeding the engines

use std::collections::HashMap;

use approx::assert_relative_eq;
use nalgebra::DMatrix;
use quant_api::functions::*;
use quant_api::params::{mc_params_from_map, pde_params_from_map};
use quant_api::settings::EngineSettings;
use quant_core::market_data::MarketStore;
use quant_core::types::ErrorKind;

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn store_with_usd() -> MarketStore {
    let store = MarketStore::new();
    yc_create(&store, "USD", &[1.0], &[0.05], 0).unwrap();
    store
}

// ============================================================================
// Market store
// ============================================================================

#[test]
fn test_store_lifecycle() {
    let store = MarketStore::new();
    assert!(mkt_list(&store).is_empty());

    assert_eq!(yc_create(&store, "Usd", &[1.0, 2.0], &[0.99, 0.97], 2).unwrap(), "usd");
    assert_eq!(vol_create(&store, "SPX", &[1.0, 2.0], &[0.2, 0.18], 1).unwrap(), "spx");
    assert_relative_eq!(discount(&store, "USD", 2.0).unwrap(), 0.97, max_relative = 1e-14);
    assert_relative_eq!(fwd_vol(&store, "spx", 1.0, 2.0).unwrap(), 0.18, epsilon = 1e-14);

    // Replacing keeps a single entry under the name
    yc_create(&store, "usd", &[1.0], &[0.02], 1).unwrap();
    let listing = mkt_list(&store);
    assert_eq!(listing.yield_curves, vec!["usd".to_string()]);
    assert_relative_eq!(spot_rate(&store, "usd", 3.0).unwrap(), 0.02, epsilon = 1e-14);

    mkt_clear(&store);
    assert!(mkt_list(&store).is_empty());
    assert_eq!(spot_vol(&store, "spx", 1.0).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_invalid_curve_leaves_store_untouched() {
    let store = store_with_usd();
    let err = yc_create(&store, "usd", &[2.0, 1.0], &[0.01, 0.02], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_relative_eq!(spot_rate(&store, "usd", 1.0).unwrap(), 0.05, epsilon = 1e-14);
}

// ============================================================================
// Pricing
// ============================================================================

#[test]
fn test_mc_european_within_three_std_errors() {
    let store = store_with_usd();
    let config = mc_params_from_map(&map(&[("URNGTYPE", "MT19937"), ("PATHGENTYPE", "EULER")]), 100_000).unwrap();

    let mc = euro_bs_mc(&store, 1, 100.0, 1.0, 100.0, "usd", 0.02, 0.4, &config).unwrap();
    let exact = euro_bs(1, 100.0, 100.0, 1.0, 0.05, 0.02, 0.4).unwrap();

    assert!(
        (mc.mean - exact[0]).abs() < 3.0 * mc.std_err,
        "MC {} +/- {} vs analytic {}",
        mc.mean,
        mc.std_err,
        exact[0]
    );
}

#[test]
fn test_pde_european_and_american() {
    let store = store_with_usd();
    let config = pde_params_from_map(&map(&[
        ("NTIMESTEPS", "200"),
        ("NSPOTNODES", "400"),
        ("NSTDDEVS", "5"),
        ("THETA", "0.5"),
    ]))
    .unwrap();
    let vol = VolInput::Constant(0.3);

    let euro = euro_bs_pde(&store, -1, 100.0, 1.0, 100.0, "usd", 0.0, &vol, &config, false).unwrap();
    let exact = euro_bs(-1, 100.0, 100.0, 1.0, 0.05, 0.0, 0.3).unwrap();
    assert_relative_eq!(euro.price(), exact[0], epsilon = 1e-2);

    let amer = amer_bs_pde(&store, -1, 100.0, 1.0, 100.0, "usd", 0.0, &vol, &config, false).unwrap();
    assert!(amer.price() >= euro.price());
}

#[test]
fn test_quanto_three_ways() {
    let store = MarketStore::new();
    yc_create(&store, "usd", &[1.0], &[0.04], 0).unwrap();
    yc_create(&store, "jpy", &[1.0], &[0.01], 0).unwrap();

    let exact = quanto_euro_bs(1, 100.0, 100.0, 1.0, 0.04, 0.01, 0.0, 0.25, 0.1, -0.3).unwrap();

    let mc_config = mc_params_from_map(
        &map(&[
            ("URNGTYPE", "RANLUX3"),
            ("PATHGENTYPE", "EULER"),
            ("CONTROLVARTYPE", "ANTITHETIC"),
            ("SEED", "123"),
        ]),
        50_000,
    )
    .unwrap();
    let mc = quanto_euro_bs_mc(&store, 1, 100.0, 1.0, 100.0, "usd", "jpy", 0.0, 0.25, 0.1, -0.3, &mc_config)
        .unwrap();
    assert!((mc.mean - exact).abs() < 4.0 * mc.std_err);

    let pde_config = EngineSettings::from_toml_str("[pde]\nn_time_steps = 200\nn_spot_nodes = 400\ntheta = 0.5\n")
        .unwrap()
        .pde_config()
        .unwrap();
    let pde = quanto_euro_bs_pde(
        &store, 1, 100.0, 1.0, 100.0, "usd", "jpy", 0.0, 0.25, 0.1, -0.3, &pde_config, true,
    )
    .unwrap();
    assert_relative_eq!(pde.price(), exact, epsilon = 1e-2);
    assert!(pde.grid().is_some());
}

#[test]
fn test_basket_single_asset_matches_european() {
    let store = store_with_usd();
    let config = EngineSettings::default().mc_config().unwrap();
    let corr = DMatrix::identity(1, 1);

    let basket = asian_basket_bs_mc(
        &store,
        1,
        100.0,
        &[1.0],
        &[1.0],
        &[100.0],
        "usd",
        &[0.0],
        &[0.2],
        &corr,
        &config,
    )
    .unwrap();
    let euro = euro_bs_mc(&store, 1, 100.0, 1.0, 100.0, "usd", 0.0, 0.2, &config).unwrap();
    assert_relative_eq!(basket.mean, euro.mean, max_relative = 1e-12);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_bad_parameter_maps() {
    let err = mc_params_from_map(&map(&[("URNGTYPE", "SOBOL"), ("PATHGENTYPE", "EULER")]), 1000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationError);

    let err = pde_params_from_map(&map(&[("NTIMESTEPS", "10")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationError);

}

#[test]
fn test_path_count_validation() {
    let params = map(&[("URNGTYPE", "MT19937"), ("PATHGENTYPE", "EULER")]);

    let err = mc_params_from_map(&params, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    // Large counts are accepted; only zero is rejected
    let config = mc_params_from_map(&params, 20_000_000).unwrap();
    assert_eq!(config.n_paths(), 20_000_000);
}
