//! Correlation matrix validation and factorisation.

use nalgebra::DMatrix;

use super::{cholesky, spectral_truncation, LinalgError, DEFAULT_SPECTRAL_TOLERANCE};

/// Check that `corr` is a correlation matrix.
///
/// Requires a non-empty square symmetric matrix of finite entries with a
/// unit diagonal and off-diagonal entries in `[-1, 1]`. Positive
/// definiteness is not checked here.
pub fn validate_correlation(corr: &DMatrix<f64>) -> Result<(), LinalgError> {
    super::check_unit_diagonal(corr)?;
    let n = corr.nrows();
    for i in 0..n {
        for j in 0..n {
            let c = corr[(i, j)];
            if !(-1.0..=1.0).contains(&c) {
                return Err(LinalgError::InvalidCorrelation(format!(
                    "entry ({}, {}) = {} outside [-1, 1]",
                    i, j, c
                )));
            }
        }
    }
    Ok(())
}

/// Lower-triangular factor `L` with `L·Lᵀ` the nearest usable correlation.
///
/// Validates `corr`, applies [`spectral_truncation`] when it is not positive
/// definite, then takes the Cholesky factor. Multiplying a vector of
/// independent standard normals by `L` yields correlated normals.
///
/// # Errors
///
/// - `LinalgError::InvalidCorrelation` (and shape errors) on malformed input
/// - `LinalgError::NotPositiveDefinite` if the projected matrix still
///   cannot be factorised
pub fn correlation_factor(corr: &DMatrix<f64>) -> Result<DMatrix<f64>, LinalgError> {
    validate_correlation(corr)?;
    let fixed = spectral_truncation(corr, DEFAULT_SPECTRAL_TOLERANCE)?;
    cholesky(&fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_factor() {
        let l = correlation_factor(&DMatrix::identity(4, 4)).unwrap();
        assert_eq!(l, DMatrix::identity(4, 4));
    }

    #[test]
    fn test_valid_matrix_reconstructs() {
        let c = DMatrix::from_row_slice(
            5,
            5,
            &[
                1.0, 0.75, 0.65, 0.8, 0.7, //
                0.75, 1.0, 0.6, 0.65, 0.55, //
                0.65, 0.6, 1.0, 0.6, 0.7, //
                0.8, 0.65, 0.6, 1.0, 0.65, //
                0.7, 0.55, 0.7, 0.65, 1.0,
            ],
        );
        let l = correlation_factor(&c).unwrap();
        assert_relative_eq!(&l * l.transpose(), c, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_entry() {
        let c = DMatrix::from_row_slice(2, 2, &[1.0, 1.5, 1.5, 1.0]);
        assert!(matches!(
            validate_correlation(&c),
            Err(LinalgError::InvalidCorrelation(_))
        ));
    }

    #[test]
    fn test_indefinite_is_repaired() {
        let c = DMatrix::from_row_slice(3, 3, &[1.0, 0.9, -0.9, 0.9, 1.0, 0.9, -0.9, 0.9, 1.0]);
        let l = correlation_factor(&c).unwrap();
        let back = &l * l.transpose();
        for i in 0..3 {
            assert_relative_eq!(back[(i, i)], 1.0, epsilon = 1e-12);
        }
    }
}
