//! Closed-form pricers under Black-Scholes dynamics.
//!
//! This module provides:
//! - [`forward_price`], [`quanto_forward_price`]
//! - [`european_option`], [`digital_option`], [`quanto_european_option`]
//!   returning price and analytic [`Greeks`]
//! - [`knockout_forward`]: forward extinguished at a single knock-out date
//! - [`cap_floorlet`]: Black caplet / floorlet off a [`YieldCurve`](quant_core::market_data::YieldCurve)
//! - [`cds_pv`]: default and premium legs of a credit default swap
//!
//! ## Conventions
//!
//! - Rates and yields are continuously compounded and may be negative
//! - `theta` is `-∂V/∂T` (calendar decay)
//! - Greeks are closed-form partials, never finite differences

mod black_scholes;
mod credit;
pub mod error;
mod greeks;
mod knockout;
mod quanto;
mod rates;

pub use black_scholes::{digital_option, european_option, forward_price};
pub use credit::{cds_pv, CdsLegs};
pub use error::AnalyticalError;
pub use greeks::Greeks;
pub use knockout::knockout_forward;
pub use quanto::{quanto_drift_adjustment, quanto_european_option, quanto_forward_price};
pub use rates::cap_floorlet;
