//! Thomas algorithm for tridiagonal systems.

use quant_core::types::PricingError;

/// Pivots at or below this magnitude are treated as singular.
const PIVOT_EPSILON: f64 = 1e-14;

/// Reusable scratch for [`solve_tridiagonal`].
#[derive(Clone, Debug, Default)]
pub(crate) struct TridiagonalScratch {
    c_star: Vec<f64>,
    d_star: Vec<f64>,
}

impl TridiagonalScratch {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            c_star: Vec::with_capacity(n),
            d_star: Vec::with_capacity(n),
        }
    }
}

/// Solves `A·x = rhs` for tridiagonal `A` into `out`.
///
/// `lower[0]` and `upper[n-1]` are ignored.
pub(crate) fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
    scratch: &mut TridiagonalScratch,
    out: &mut [f64],
) -> Result<(), PricingError> {
    let n = diag.len();
    if n == 0 || lower.len() != n || upper.len() != n || rhs.len() != n || out.len() != n {
        return Err(PricingError::InvalidArgument(
            "tridiagonal system dimensions do not agree".to_string(),
        ));
    }

    let c_star = &mut scratch.c_star;
    let d_star = &mut scratch.d_star;
    c_star.clear();
    c_star.resize(n, 0.0);
    d_star.clear();
    d_star.resize(n, 0.0);

    let mut pivot = diag[0];
    if pivot.abs() <= PIVOT_EPSILON {
        return Err(singular(0));
    }
    c_star[0] = upper[0] / pivot;
    d_star[0] = rhs[0] / pivot;

    for i in 1..n {
        pivot = diag[i] - lower[i] * c_star[i - 1];
        if pivot.abs() <= PIVOT_EPSILON {
            return Err(singular(i));
        }
        c_star[i] = if i + 1 < n { upper[i] / pivot } else { 0.0 };
        d_star[i] = (rhs[i] - lower[i] * d_star[i - 1]) / pivot;
    }

    out[n - 1] = d_star[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = d_star[i] - c_star[i] * out[i + 1];
    }
    Ok(())
}

fn singular(row: usize) -> PricingError {
    PricingError::NumericalFailure(format!("singular tridiagonal system at row {}", row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use quant_core::types::ErrorKind;

    #[test]
    fn test_solves_known_system() {
        // [2 1 0; 1 3 1; 0 1 2] x = [3, 5, 3] has x = [1, 1, 1]
        let lower = [0.0, 1.0, 1.0];
        let diag = [2.0, 3.0, 2.0];
        let upper = [1.0, 1.0, 0.0];
        let rhs = [3.0, 5.0, 3.0];
        let mut out = [0.0; 3];
        solve_tridiagonal(&lower, &diag, &upper, &rhs, &mut TridiagonalScratch::default(), &mut out).unwrap();
        for x in out {
            assert_relative_eq!(x, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_single_equation() {
        let mut out = [0.0];
        solve_tridiagonal(&[0.0], &[4.0], &[0.0], &[2.0], &mut TridiagonalScratch::default(), &mut out).unwrap();
        assert_eq!(out[0], 0.5);
    }

    #[test]
    fn test_singular_pivot_is_numerical_failure() {
        let mut out = [0.0; 2];
        let err = solve_tridiagonal(
            &[0.0, 1.0],
            &[1.0, 1.0],
            &[1.0, 0.0],
            &[1.0, 1.0],
            &mut TridiagonalScratch::default(),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericalFailure);
    }

    proptest! {
        #[test]
        fn prop_residual_vanishes_for_dominant_systems(
            rows in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0, -5.0f64..5.0), 1..40),
        ) {
            let n = rows.len();
            let lower: Vec<f64> = rows.iter().map(|r| r.0).collect();
            let upper: Vec<f64> = rows.iter().map(|r| r.1).collect();
            let diag: Vec<f64> = rows.iter().map(|r| 3.0 + r.0.abs() + r.1.abs()).collect();
            let rhs: Vec<f64> = rows.iter().map(|r| r.2).collect();
            let mut x = vec![0.0; n];
            solve_tridiagonal(&lower, &diag, &upper, &rhs, &mut TridiagonalScratch::default(), &mut x).unwrap();

            for i in 0..n {
                let mut ax = diag[i] * x[i];
                if i > 0 {
                    ax += lower[i] * x[i - 1];
                }
                if i + 1 < n {
                    ax += upper[i] * x[i + 1];
                }
                prop_assert!((ax - rhs[i]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut out = [0.0; 2];
        assert!(solve_tridiagonal(&[0.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0], &mut TridiagonalScratch::default(), &mut out).is_err());
    }
}
