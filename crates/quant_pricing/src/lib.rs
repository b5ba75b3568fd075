//! # Quant Pricing (L3: Numerical Engines)
//!
//! Monte Carlo and finite-difference engines for the products defined in
//! `quant_models`.
//!
//! ## Modules
//!
//! - [`rng`]: uniform engines (MT19937, MINSTD, RANLUX) and normal sampling
//! - [`mc`]: Euler path generation, antithetic sampling and parallel
//!   aggregation
//! - [`pde`]: theta-scheme solver with early exercise and grid export
//!
//! ## Reproducibility
//!
//! Every Monte Carlo sample draws from its own stream seeded by
//! [`rng::path_seed`], and blocks of samples are reduced in order. The
//! estimate for a given configuration is therefore the same on any number
//! of rayon threads.
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
//! use quant_core::types::OptionType;
//! use quant_pricing::{mc, pde};
//!
//! let curve = YieldCurve::flat(0.03).unwrap();
//! let vol = VolatilityTermStructure::constant(0.2).unwrap();
//!
//! let mc_config = mc::MonteCarloConfig::builder().n_paths(5_000).build().unwrap();
//! let mc_price =
//!     mc::price_european(OptionType::Call, 100.0, 1.0, 100.0, &curve, 0.0, &vol, &mc_config).unwrap();
//!
//! let pde_config = pde::PdeConfig::builder().n_time_steps(50).n_spot_nodes(100).theta(0.5).build().unwrap();
//! let pde_price =
//!     pde::price_european(OptionType::Call, 100.0, 1.0, 100.0, &curve, 0.0, &vol, &pde_config, false).unwrap();
//!
//! assert!((mc_price.mean - pde_price.price()).abs() < 5.0 * mc_price.std_err + 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod mc;
pub mod pde;
pub mod rng;

pub use error::ConfigError;
