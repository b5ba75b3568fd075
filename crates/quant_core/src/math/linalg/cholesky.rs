//! Cholesky factorisation.

use nalgebra::{Cholesky, DMatrix};

use super::{check_symmetric, LinalgError};

/// Lower-triangular Cholesky factor `L` with `L·Lᵀ = m`.
///
/// # Errors
///
/// - `LinalgError::Empty`, `NotSquare`, `NonFinite` or `NotSymmetric` on
///   malformed input
/// - `LinalgError::NotPositiveDefinite` if the factorisation breaks down
pub fn cholesky(m: &DMatrix<f64>) -> Result<DMatrix<f64>, LinalgError> {
    check_symmetric(m)?;
    Cholesky::new(m.clone())
        .map(|c| c.l())
        .ok_or(LinalgError::NotPositiveDefinite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ========================================
    // Factorisation
    // ========================================

    #[test]
    fn test_reconstructs_input() {
        let c = DMatrix::from_row_slice(3, 3, &[1.0, 0.5, 0.2, 0.5, 1.0, 0.3, 0.2, 0.3, 1.0]);
        let l = cholesky(&c).unwrap();
        assert_relative_eq!(&l * l.transpose(), c, epsilon = 1e-14);
    }

    #[test]
    fn test_factor_is_lower_triangular() {
        let c = DMatrix::from_row_slice(2, 2, &[4.0, 2.0, 2.0, 3.0]);
        let l = cholesky(&c).unwrap();
        assert_eq!(l[(0, 1)], 0.0);
        assert_relative_eq!(l[(0, 0)], 2.0, epsilon = 1e-15);
        assert_relative_eq!(l[(1, 0)], 1.0, epsilon = 1e-15);
        assert_relative_eq!(l[(1, 1)], 2.0f64.sqrt(), epsilon = 1e-15);
    }

    // ========================================
    // Failures
    // ========================================

    #[test]
    fn test_indefinite_fails_numerically() {
        let c = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        assert_eq!(cholesky(&c), Err(LinalgError::NotPositiveDefinite));
    }

    #[test]
    fn test_rejects_non_square_and_asymmetric() {
        let rect = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(cholesky(&rect), Err(LinalgError::NotSquare { .. })));

        let asym = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 0.4, 1.0]);
        assert!(matches!(cholesky(&asym), Err(LinalgError::NotSymmetric { .. })));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_reconstruction(vals in proptest::collection::vec(-1.0f64..1.0, 9)) {
            // A·Aᵀ + I is symmetric positive definite for any A.
            let a = DMatrix::from_row_slice(3, 3, &vals);
            let m = &a * a.transpose() + DMatrix::identity(3, 3);
            let l = cholesky(&m).unwrap();
            let back = &l * l.transpose();
            for (x, y) in back.iter().zip(m.iter()) {
                prop_assert!((x - y).abs() < 1e-12);
            }
        }
    }
}
