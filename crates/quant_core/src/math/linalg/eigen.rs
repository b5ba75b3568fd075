//! Symmetric eigendecomposition.

use nalgebra::{DMatrix, DVector, SymmetricEigen};

use super::{check_symmetric, LinalgError};

/// Eigenvalues and eigenvectors of a real symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenDecomposition {
    /// Eigenvalues in ascending order.
    pub eigenvalues: DVector<f64>,
    /// Unit eigenvectors stored column-wise, column `j` pairing with `eigenvalues[j]`.
    pub eigenvectors: DMatrix<f64>,
}

/// Eigendecomposition of a symmetric matrix, eigenvalues sorted ascending.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use quant_core::math::linalg::eigen_sym;
///
/// let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
/// let eig = eigen_sym(&m).unwrap();
/// assert!((eig.eigenvalues[0] - 1.0).abs() < 1e-12);
/// assert!((eig.eigenvalues[1] - 3.0).abs() < 1e-12);
/// ```
pub fn eigen_sym(m: &DMatrix<f64>) -> Result<EigenDecomposition, LinalgError> {
    check_symmetric(m)?;
    let eig = SymmetricEigen::new(m.clone());

    let n = eig.eigenvalues.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eig.eigenvalues[a].total_cmp(&eig.eigenvalues[b]));

    let eigenvalues = DVector::from_iterator(n, order.iter().map(|&j| eig.eigenvalues[j]));
    let eigenvectors = DMatrix::from_fn(n, n, |i, j| eig.eigenvectors[(i, order[j])]);

    Ok(EigenDecomposition {
        eigenvalues,
        eigenvectors,
    })
}
