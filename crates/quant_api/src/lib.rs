//! # Quant API (L4: Flat Function Interface)
//!
//! The call surface host-language bindings forward to. Every function
//! takes plain values, slices and matrices, resolves market names against
//! an explicit [`MarketStore`](quant_core::market_data::MarketStore) and
//! returns `Result<_, PricingError>`.
//!
//! ## Modules
//!
//! - [`functions`]: the priced and utility functions
//! - [`params`]: string-keyed parameter maps resolved into engine configs
//! - [`settings`]: engine defaults from TOML and `QUANT_*` variables
//! - [`telemetry`]: tracing subscriber installation
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_api::functions::{euro_bs, euro_bs_pde, yc_create, VolInput};
//! use quant_api::settings::EngineSettings;
//! use quant_core::market_data::MarketStore;
//!
//! let store = MarketStore::new();
//! yc_create(&store, "usd", &[1.0, 5.0], &[0.03, 0.035], 0).unwrap();
//!
//! let settings = EngineSettings::from_toml_str("[pde]\nn_time_steps = 100\nn_spot_nodes = 200\ntheta = 0.5\n")
//!     .unwrap();
//! let pde = euro_bs_pde(
//!     &store, 1, 100.0, 1.0, 100.0, "usd", 0.0,
//!     &VolInput::Constant(0.2), &settings.pde_config().unwrap(), false,
//! )
//! .unwrap();
//!
//! let analytic = euro_bs(1, 100.0, 100.0, 1.0, 0.03, 0.0, 0.2).unwrap();
//! assert!((pde.price() - analytic[0]).abs() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod functions;
pub mod params;
pub mod settings;
pub mod telemetry;

pub use quant_core::types::PricingError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
