//! Monte Carlo pricing under Black-Scholes dynamics.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig     (engine kinds, path count, seed)
//! ├── EulerPathGenerator   (term-structure driven, correlated assets)
//! ├── PathWorkspace        (per-worker buffers)
//! └── Orchestration
//!     ├── per-sample NormalRng streams
//!     ├── Product::eval_path + discounting
//!     └── ordered block reduction → McResult
//! ```
//!
//! # Examples
//!
//! ```rust
//! use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
//! use quant_core::types::OptionType;
//! use quant_pricing::mc::{price_european, ControlVariate, MonteCarloConfig};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .control_variate(ControlVariate::Antithetic)
//!     .build()
//!     .unwrap();
//!
//! let curve = YieldCurve::flat(0.05).unwrap();
//! let vol = VolatilityTermStructure::constant(0.2).unwrap();
//! let result = price_european(OptionType::Call, 100.0, 1.0, 100.0, &curve, 0.0, &vol, &config)
//!     .unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.mean, result.std_err);
//! ```

pub mod config;
pub mod paths;
pub mod pricer;
pub mod stats;
pub mod workspace;

// Re-exports for convenient access
pub use crate::error::ConfigError;
pub use config::{
    ControlVariate, MonteCarloConfig, MonteCarloConfigBuilder, PathGenKind, UrngKind,
    DEFAULT_SEED,
};
pub use paths::{AssetDynamics, EulerPathGenerator};
pub use pricer::{
    price_asian_basket, price_european, price_quanto_european, MonteCarloPricer, BLOCK_SIZE,
};
pub use stats::{Accumulator, McResult};
pub use workspace::PathWorkspace;
