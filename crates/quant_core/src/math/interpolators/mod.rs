//! Curve interpolation.
//!
//! This module provides [`PiecewisePolynomial`], the flat/linear curve
//! engine backing every market term structure, and [`PolyOrder`].

mod piecewise;

pub use piecewise::{PiecewisePolynomial, PolyOrder};
