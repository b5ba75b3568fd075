//! Numerical utilities: polynomials, special functions, matrices,
//! piecewise curves, root finding and compounding.

use nalgebra::{DMatrix, DVector};
use quant_core::math::compounding;
use quant_core::math::distributions;
use quant_core::math::interpolators::{PiecewisePolynomial, PolyOrder};
use quant_core::math::linalg::{self, EigenDecomposition, DEFAULT_SPECTRAL_TOLERANCE};
use quant_core::math::solvers::{bracket_roots, SecantSolver, SolverConfig};
use quant_core::math::Polynomial;
use quant_core::types::PricingError;

/// Library version.
pub fn version() -> &'static str {
    crate::VERSION
}

/// Greeting used by bindings as a smoke test.
pub fn say_hello(name: &str) -> String {
    format!("Hello {}!", name)
}

/// Outer product `x·yᵗ`.
pub fn outer_prod(x: &[f64], y: &[f64]) -> Result<DMatrix<f64>, PricingError> {
    if x.is_empty() || y.is_empty() {
        return Err(PricingError::InvalidArgument(
            "outer product needs non-empty vectors".to_string(),
        ));
    }
    Ok(linalg::outer_product(
        &DVector::from_column_slice(x),
        &DVector::from_column_slice(y),
    ))
}

/// Coefficients of the product of two polynomials, lowest order first.
pub fn poly_prod(p1: &[f64], p2: &[f64]) -> Result<Vec<f64>, PricingError> {
    let a = Polynomial::new(p1.to_vec())?;
    let b = Polynomial::new(p2.to_vec())?;
    Ok(a.product(&b).coefficients().to_vec())
}

/// Error function.
pub fn erf(x: f64) -> f64 {
    distributions::erf(x)
}

/// Inverse error function on `[-1, 1]`, infinite at the endpoints.
pub fn inv_erf(x: f64) -> Result<f64, PricingError> {
    distributions::inv_erf(x)
}

/// Standard normal CDF.
pub fn normal_cdf(x: f64) -> f64 {
    distributions::norm_cdf(x)
}

/// Standard normal quantile on `[0, 1]`, infinite at the endpoints.
pub fn normal_inv_cdf(p: f64) -> Result<f64, PricingError> {
    distributions::norm_inv_cdf(p)
}

/// Returns its argument; used by bindings to test matrix marshalling.
pub fn echo_matrix(m: &DMatrix<f64>) -> DMatrix<f64> {
    m.clone()
}

/// Lower Cholesky factor.
pub fn chol_dcmp(m: &DMatrix<f64>) -> Result<DMatrix<f64>, PricingError> {
    Ok(linalg::cholesky(m)?)
}

/// Symmetric eigendecomposition, eigenvalues ascending.
pub fn eigen_sym(m: &DMatrix<f64>) -> Result<EigenDecomposition, PricingError> {
    Ok(linalg::eigen_sym(m)?)
}

/// Nearest valid correlation matrix by spectral truncation.
pub fn spec_trunc(m: &DMatrix<f64>) -> Result<DMatrix<f64>, PricingError> {
    Ok(linalg::spectral_truncation(m, DEFAULT_SPECTRAL_TOLERANCE)?)
}

fn ppoly(breakpoints: &[f64], values: &[f64], order: usize) -> Result<PiecewisePolynomial, PricingError> {
    let order = PolyOrder::try_from(order)?;
    Ok(PiecewisePolynomial::new(breakpoints, values, order)?)
}

/// Evaluates a piecewise polynomial (or its `deriv`-th derivative) at `xs`.
pub fn ppoly_eval(
    breakpoints: &[f64],
    values: &[f64],
    order: usize,
    xs: &[f64],
    deriv: usize,
) -> Result<Vec<f64>, PricingError> {
    Ok(ppoly(breakpoints, values, order)?.evaluate_many(xs, deriv))
}

/// Integrals of a piecewise polynomial from `x_start` to each of `x_ends`.
pub fn ppoly_integral(
    breakpoints: &[f64],
    values: &[f64],
    order: usize,
    x_start: f64,
    x_ends: &[f64],
) -> Result<Vec<f64>, PricingError> {
    Ok(ppoly(breakpoints, values, order)?.integrals(x_start, x_ends))
}

/// Sum of two piecewise polynomials as `(breakpoints, values)`.
pub fn ppoly_sum(
    breakpoints1: &[f64],
    values1: &[f64],
    breakpoints2: &[f64],
    values2: &[f64],
    order: usize,
) -> Result<(Vec<f64>, Vec<f64>), PricingError> {
    let a = ppoly(breakpoints1, values1, order)?;
    let b = ppoly(breakpoints2, values2, order)?;
    let sum = a.sum(&b, PolyOrder::try_from(order)?)?;
    Ok((sum.breakpoints().to_vec(), sum.values().to_vec()))
}

/// Sub-intervals of `[lo, hi]` over which the polynomial changes sign.
pub fn poly_bracket(
    coefficients: &[f64],
    lo: f64,
    hi: f64,
    n_subs: usize,
) -> Result<Vec<(f64, f64)>, PricingError> {
    let p = Polynomial::new(coefficients.to_vec())?;
    Ok(bracket_roots(|x| p.evaluate(x), lo, hi, n_subs)?)
}

/// Secant root of the polynomial started from `lo` and `hi`.
pub fn poly_secant(coefficients: &[f64], lo: f64, hi: f64, tolerance: f64) -> Result<f64, PricingError> {
    let p = Polynomial::new(coefficients.to_vec())?;
    let solver = SecantSolver::new(SolverConfig::with_tolerance(tolerance)?);
    Ok(solver.find_root(|x| p.evaluate(x), lo, hi)?)
}

/// Rate compounded `freq` times a year to its continuous equivalent.
pub fn to_cont_cmpd(rate: f64, freq: u32) -> Result<f64, PricingError> {
    compounding::to_cont_cmpd(rate, freq)
}

/// Continuous rate to its equivalent compounded `freq` times a year.
pub fn from_cont_cmpd(rate: f64, freq: u32) -> Result<f64, PricingError> {
    compounding::from_cont_cmpd(rate, freq)
}
