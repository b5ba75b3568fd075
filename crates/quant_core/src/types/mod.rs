//! Core types shared by every layer.
//!
//! This module provides:
//! - `error`: Structured error types for pricing, interpolation, and solver operations
//! - `option_type`: The call/put payoff direction
//!
//! # Re-exports
//!
//! - [`PricingError`], [`ErrorKind`], [`InterpolationError`], [`SolverError`] from `error`
//! - [`OptionType`] from `option_type`

pub mod error;
pub mod option_type;

pub use error::{ErrorKind, InterpolationError, PricingError, SolverError};
pub use option_type::OptionType;
