//! Spectral truncation of correlation matrices.

use nalgebra::DMatrix;
use tracing::warn;

use super::{check_unit_diagonal, eigen_sym, LinalgError};

/// Eigenvalue floor used when the caller has no preference.
pub const DEFAULT_SPECTRAL_TOLERANCE: f64 = 1e-8;

/// Nearest positive definite correlation matrix by spectral truncation.
///
/// If every eigenvalue of `corr` exceeds `tolerance` the matrix is returned
/// unchanged. Otherwise the matrix is rebuilt as `B·Bᵀ`, where `B` holds the
/// eigenvectors scaled by `sqrt(max(λ, tolerance))` with each row normalised
/// to unit length. The result keeps a unit diagonal and has every eigenvalue
/// strictly positive.
///
/// # Errors
///
/// `LinalgError` if `corr` is not symmetric with a unit diagonal, or if a
/// row of `B` vanishes.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use quant_core::math::linalg::{cholesky, spectral_truncation};
///
/// // Pairwise correlations that no joint distribution can have
/// let c = DMatrix::from_row_slice(3, 3, &[
///     1.0, 0.9, -0.9,
///     0.9, 1.0, 0.9,
///     -0.9, 0.9, 1.0,
/// ]);
/// assert!(cholesky(&c).is_err());
///
/// let fixed = spectral_truncation(&c, 1e-8).unwrap();
/// assert!((fixed[(1, 1)] - 1.0).abs() < 1e-15);
/// assert!(cholesky(&fixed).is_ok());
/// ```
pub fn spectral_truncation(corr: &DMatrix<f64>, tolerance: f64) -> Result<DMatrix<f64>, LinalgError> {
    check_unit_diagonal(corr)?;
    let eig = eigen_sym(corr)?;

    if eig.eigenvalues.iter().all(|&l| l > tolerance) {
        return Ok(corr.clone());
    }

    let n = corr.nrows();
    let floor = tolerance.max(0.0);
    let mut b = eig.eigenvectors;
    for (j, &lambda) in eig.eigenvalues.iter().enumerate() {
        let scale = lambda.max(floor).sqrt();
        b.column_mut(j).scale_mut(scale);
    }

    for i in 0..n {
        let norm = b.row(i).norm();
        if norm == 0.0 {
            return Err(LinalgError::InvalidCorrelation(format!(
                "row {} vanishes after truncation",
                i
            )));
        }
        b.row_mut(i).unscale_mut(norm);
    }

    let mut out = &b * b.transpose();
    for i in 0..n {
        out[(i, i)] = 1.0;
        for j in 0..i {
            let avg = 0.5 * (out[(i, j)] + out[(j, i)]);
            out[(i, j)] = avg;
            out[(j, i)] = avg;
        }
    }

    warn!(
        dim = n,
        min_eigenvalue = eig.eigenvalues[0],
        "correlation matrix not positive definite, applied spectral truncation"
    );
    Ok(out)
}
