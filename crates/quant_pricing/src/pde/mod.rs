//! Finite-difference pricing of single-asset options.
//!
//! The PDE is solved in log-spot on a uniform grid centred on the forward,
//! stepped back from expiry with a theta scheme. American exercise is
//! applied node by node after every step.
//!
//! # Examples
//!
//! ```rust
//! use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
//! use quant_core::types::OptionType;
//! use quant_pricing::pde::{price_american, price_european, PdeConfig};
//!
//! let config = PdeConfig::builder()
//!     .n_time_steps(100)
//!     .n_spot_nodes(200)
//!     .theta(0.5)
//!     .build()
//!     .unwrap();
//! let curve = YieldCurve::flat(0.05).unwrap();
//! let vol = VolatilityTermStructure::constant(0.25).unwrap();
//!
//! let euro = price_european(OptionType::Put, 100.0, 1.0, 100.0, &curve, 0.0, &vol, &config, false)
//!     .unwrap();
//! let amer = price_american(OptionType::Put, 100.0, 1.0, 100.0, &curve, 0.0, &vol, &config, false)
//!     .unwrap();
//! assert!(amer.price() >= euro.price());
//! ```

pub mod config;
mod grid;
pub mod result;
pub mod solver;
mod tridiagonal;

pub use config::{PdeConfig, PdeConfigBuilder};
pub use result::{PdeGrid, PdeResult};
pub use solver::{price_american, price_digital, price_european, price_quanto_european, PdeSolver};
