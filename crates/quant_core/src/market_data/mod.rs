//! Market data: yield curves, volatility term structures, and the store
//! that holds them by name.
//!
//! # Components
//!
//! - [`YieldCurve`]: discount factors, spot and forward rates from a
//!   piecewise-flat forward curve
//! - [`VolatilityTermStructure`]: spot and forward volatilities from a
//!   piecewise-flat forward variance
//! - [`MarketStore`]: named, thread-safe container for both
//! - [`MarketDataError`]: construction and lookup errors
//!
//! # Example
//!
//! ```
//! use quant_core::market_data::{MarketStore, VolValueType, YieldValueType};
//!
//! let store = MarketStore::new();
//! store.create_yield_curve("usd", &[1.0, 5.0], &[0.03, 0.04], YieldValueType::SpotRate).unwrap();
//! store.create_volatility("spx", &[1.0, 5.0], &[0.2, 0.22], VolValueType::SpotVol).unwrap();
//!
//! let df = store.yield_curve("usd").unwrap().discount(5.0).unwrap();
//! assert!((df - (-0.2f64).exp()).abs() < 1e-14);
//!
//! let vol = store.volatility("spx").unwrap().spot_vol(1.0).unwrap();
//! assert!((vol - 0.2).abs() < 1e-15);
//! ```

pub mod error;
mod store;
mod term;
mod volatility;
mod yield_curve;

pub use error::MarketDataError;
pub use store::{MarketListing, MarketObject, MarketStore};
pub use volatility::{VolValueType, VolatilityTermStructure};
pub use yield_curve::{YieldCurve, YieldValueType};
