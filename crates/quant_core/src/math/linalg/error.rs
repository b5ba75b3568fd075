//! Linear algebra error types.

use thiserror::Error;

use crate::types::PricingError;

/// Errors raised by the dense linear algebra routines.
///
/// # Examples
///
/// ```
/// use quant_core::math::linalg::LinalgError;
///
/// let err = LinalgError::NotSquare { rows: 2, cols: 3 };
/// assert_eq!(format!("{}", err), "Matrix is not square: 2 x 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Matrix has no rows or columns.
    #[error("Matrix is empty")]
    Empty,

    /// Square matrix required.
    #[error("Matrix is not square: {rows} x {cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Symmetric matrix required.
    #[error("Matrix is not symmetric at ({row}, {col})")]
    NotSymmetric {
        /// Row of the first asymmetric entry
        row: usize,
        /// Column of the first asymmetric entry
        col: usize,
    },

    /// Entry is NaN or infinite.
    #[error("Matrix entry ({row}, {col}) is not finite")]
    NonFinite {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },

    /// Matrix fails the correlation-matrix checks.
    #[error("Invalid correlation matrix: {0}")]
    InvalidCorrelation(String),

    /// Cholesky factorisation broke down.
    #[error("Matrix is not positive definite")]
    NotPositiveDefinite,
}

impl From<LinalgError> for PricingError {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::NotPositiveDefinite => PricingError::NumericalFailure(err.to_string()),
            _ => PricingError::InvalidArgument(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    #[test]
    fn test_conversion_kinds() {
        let e: PricingError = LinalgError::NotPositiveDefinite.into();
        assert_eq!(e.kind(), ErrorKind::NumericalFailure);

        let e: PricingError = LinalgError::NotSymmetric { row: 1, col: 0 }.into();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert!(e.message().contains("(1, 0)"));
    }
}
