//! Mathematical building blocks.
//!
//! - [`interpolators`]: piecewise flat / linear curves with exact integrals
//! - [`polynomial`]: dense polynomials in ascending-power form
//! - [`solvers`]: root bracketing and the secant method
//! - [`linalg`]: Cholesky, symmetric eigendecomposition, spectral truncation
//! - [`distributions`]: error function and standard normal
//! - [`compounding`]: periodic / continuous rate conversions

pub mod compounding;
pub mod distributions;
pub mod interpolators;
pub mod linalg;
pub mod polynomial;
pub mod solvers;

pub use polynomial::Polynomial;
