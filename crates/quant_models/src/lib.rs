//! # Quant Models (L2: Business Logic)
//!
//! Closed-form Black-Scholes analytics and product definitions.
//!
//! This crate provides:
//! - Analytic pricers: forwards, digitals, European options with Greeks,
//!   quanto adjustments, knock-out forwards, caplets and CDS legs
//! - Product definitions (European, digital, American, Asian basket) that the
//!   Monte Carlo and PDE engines in `quant_pricing` evaluate
//!
//! ## Design Principles
//!
//! - **Validated inputs**: every public pricer checks its arguments and
//!   returns a typed error instead of NaN
//! - **Products without models**: cash-flow definitions stay independent of
//!   the dynamics used to price them

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod products;
