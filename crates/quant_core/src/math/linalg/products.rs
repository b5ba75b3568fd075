//! Vector products.

use nalgebra::{DMatrix, DVector};

/// Outer product `x·yᵀ`.
///
/// The result has `x.len()` rows and `y.len()` columns. Empty inputs
/// produce an empty matrix.
///
/// # Example
///
/// ```
/// use nalgebra::DVector;
/// use quant_core::math::linalg::outer_product;
///
/// let m = outer_product(&DVector::from_vec(vec![1.0, 2.0]), &DVector::from_vec(vec![3.0, 4.0, 5.0]));
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 10.0);
/// ```
pub fn outer_product(x: &DVector<f64>, y: &DVector<f64>) -> DMatrix<f64> {
    x * y.transpose()
}
