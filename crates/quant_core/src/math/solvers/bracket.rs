//! Root bracketing by uniform subdivision.

use num_traits::Float;

use crate::types::SolverError;

/// Find every sub-interval of `[lo, hi]` over which `f` changes sign.
///
/// The interval is split into `n_subs` equal pieces and `f` is evaluated at
/// the `n_subs + 1` boundary points. Each consecutive pair `(x_i, x_{i+1})`
/// with `f(x_i)·f(x_{i+1}) <= 0` is returned, ordered by its lower bound.
/// An empty result means no sign change was detected; it is not an error.
///
/// # Arguments
///
/// * `f` - Scalar function to bracket
/// * `lo` - Lower end of the search interval
/// * `hi` - Upper end of the search interval (must exceed `lo`)
/// * `n_subs` - Number of sub-intervals (must be > 0)
///
/// # Errors
///
/// `SolverError::InvalidInterval` if `lo >= hi`, either bound is not finite,
/// or `n_subs == 0`.
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::bracket_roots;
///
/// // x² + 2x has roots at -2 and 0
/// let brackets = bracket_roots(|x: f64| x * x + 2.0 * x, -4.0, 3.0, 10).unwrap();
///
/// assert_eq!(brackets.len(), 2);
/// assert!(brackets[0].0 <= -2.0 && -2.0 <= brackets[0].1);
/// assert!(brackets[1].0 <= 0.0 && 0.0 <= brackets[1].1);
/// ```
pub fn bracket_roots<T, F>(f: F, lo: T, hi: T, n_subs: usize) -> Result<Vec<(T, T)>, SolverError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if n_subs == 0 {
        return Err(SolverError::InvalidInterval(
            "number of subdivisions must be > 0".to_string(),
        ));
    }
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(SolverError::InvalidInterval(format!(
            "expected finite lo < hi, got [{}, {}]",
            lo.to_f64().unwrap_or(f64::NAN),
            hi.to_f64().unwrap_or(f64::NAN)
        )));
    }

    let n = T::from(n_subs).ok_or_else(|| {
        SolverError::InvalidInterval(format!("subdivision count {} not representable", n_subs))
    })?;
    let step = (hi - lo) / n;

    let mut brackets = Vec::new();
    let mut x_prev = lo;
    let mut f_prev = f(lo);
    for i in 1..=n_subs {
        // The last boundary is hit exactly rather than accumulated.
        let x = if i == n_subs {
            hi
        } else {
            lo + step * T::from(i).unwrap_or_else(T::nan)
        };
        let fx = f(x);
        if f_prev * fx <= T::zero() {
            brackets.push((x_prev, x));
        }
        x_prev = x;
        f_prev = fx;
    }
    Ok(brackets)
}
