//! # quant_core: Mathematical Foundation for the Black-Scholes Analytics Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! quant_core is the bottom layer of the 4-layer architecture, providing:
//! - Piecewise polynomial curves with exact integrals (`math::interpolators`)
//! - Dense polynomials (`math::polynomial`)
//! - Root bracketing and the secant method (`math::solvers`)
//! - Cholesky, eigendecomposition and spectral truncation (`math::linalg`)
//! - Error function and normal distribution (`math::distributions`)
//! - Rate compounding conversions (`math::compounding`)
//! - Yield curves, volatility term structures and the `MarketStore` (`market_data`)
//! - Error types: `PricingError` and per-domain errors (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other quant_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - nalgebra: Dense matrices and factorisations
//! - statrs: Special functions
//! - thiserror / tracing: Error derivation and structured logging
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use quant_core::market_data::{MarketStore, YieldValueType};
//! use quant_core::math::distributions::norm_cdf;
//! use quant_core::math::interpolators::{PiecewisePolynomial, PolyOrder};
//!
//! // Piecewise linear curve and its integral
//! let curve = PiecewisePolynomial::new(&[0.0, 1.0], &[1.0, 3.0], PolyOrder::Linear).unwrap();
//! assert_eq!(curve.integral(0.0, 1.0), 2.0);
//!
//! // Named yield curve
//! let store = MarketStore::new();
//! store.create_yield_curve("usd", &[1.0], &[0.05], YieldValueType::SpotRate).unwrap();
//! let df = store.yield_curve("usd").unwrap().discount(1.0).unwrap();
//! # assert!((df - (-0.05f64).exp()).abs() < 1e-15);
//!
//! assert_eq!(norm_cdf(0.0), 0.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`, value types and market listings

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
