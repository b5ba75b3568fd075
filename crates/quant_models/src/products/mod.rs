//! Product definitions consumed by the numerical engines.
//!
//! Products describe what is paid and when; they carry no model state.
//!
//! - [`EuropeanCallPut`]: path and grid views
//! - [`DigitalCallPut`]: path and grid views
//! - [`AmericanCallPut`]: grid view only
//! - [`AsianBasket`]: path view only

mod american;
mod asian_basket;
mod digital;
pub mod error;
mod european;
mod traits;

pub use american::AmericanCallPut;
pub use asian_basket::AsianBasket;
pub use digital::DigitalCallPut;
pub use error::ProductError;
pub use european::EuropeanCallPut;
pub use traits::{GridProduct, Instrument, Product};
