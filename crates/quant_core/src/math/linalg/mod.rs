//! Dense linear algebra on `nalgebra::DMatrix<f64>`.
//!
//! - [`outer_product`]: `x·yᵀ`
//! - [`cholesky`]: lower Cholesky factor
//! - [`eigen_sym`]: symmetric eigendecomposition, eigenvalues ascending
//! - [`spectral_truncation`]: nearest positive definite correlation matrix
//! - [`correlation_factor`]: validate, repair and factorise a correlation matrix
//!
//! Malformed input is reported through [`LinalgError`], which converts into
//! [`PricingError`](crate::types::PricingError).

mod cholesky;
mod correlation;
mod eigen;
mod error;
mod products;
mod spectral;

pub use cholesky::cholesky;
pub use correlation::{correlation_factor, validate_correlation};
pub use eigen::{eigen_sym, EigenDecomposition};
pub use error::LinalgError;
pub use products::outer_product;
pub use spectral::{spectral_truncation, DEFAULT_SPECTRAL_TOLERANCE};

use nalgebra::DMatrix;

/// Absolute tolerance for the symmetry check.
const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// Non-empty, square, finite and symmetric.
fn check_symmetric(m: &DMatrix<f64>) -> Result<(), LinalgError> {
    let (rows, cols) = m.shape();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::Empty);
    }
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    for i in 0..rows {
        for j in 0..cols {
            if !m[(i, j)].is_finite() {
                return Err(LinalgError::NonFinite { row: i, col: j });
            }
        }
    }
    for i in 0..rows {
        for j in 0..i {
            if (m[(i, j)] - m[(j, i)]).abs() > SYMMETRY_TOLERANCE {
                return Err(LinalgError::NotSymmetric { row: i, col: j });
            }
        }
    }
    Ok(())
}

/// Symmetric with ones along the diagonal.
fn check_unit_diagonal(m: &DMatrix<f64>) -> Result<(), LinalgError> {
    check_symmetric(m)?;
    for i in 0..m.nrows() {
        if m[(i, i)] != 1.0 {
            return Err(LinalgError::InvalidCorrelation(format!(
                "diagonal entry {} is {}, expected 1",
                i,
                m[(i, i)]
            )));
        }
    }
    Ok(())
}
