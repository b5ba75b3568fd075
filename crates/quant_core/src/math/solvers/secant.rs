//! Secant-method root finder.

use num_traits::Float;

use super::SolverConfig;
use crate::types::SolverError;

/// Two-point secant iteration.
///
/// Seeds the iteration with the two bracket endpoints and repeatedly
/// replaces the older point with the secant intercept:
///
/// ```text
/// x_{k+1} = x_k - f(x_k)·(x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// ```
///
/// The iteration stops as soon as `|f(x)| < tolerance`. Iterates are not
/// confined to the seed interval; an iteration that wanders off is reported
/// as a failure once the iteration budget is spent, never clamped.
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::{SecantSolver, SolverConfig};
///
/// let solver = SecantSolver::new(SolverConfig::with_tolerance(1e-12).unwrap());
/// let root = solver.find_root(|x: f64| x * x + 2.0 * x, -2.6, -1.9).unwrap();
/// assert!((root + 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Solver configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` starting from the points `lo` and `hi`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - a point with `|f(x)| < tolerance`
    /// * `Err(SolverError::DerivativeNearZero)` - two iterates share a function value
    /// * `Err(SolverError::NumericalInstability)` - an iterate became non-finite
    /// * `Err(SolverError::MaxIterationsExceeded)` - tolerance not reached in budget
    pub fn find_root<F>(&self, f: F, lo: T, hi: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let tol = self.config.tolerance;

        let mut x_prev = lo;
        let mut f_prev = f(lo);
        if f_prev.abs() < tol {
            return Ok(lo);
        }
        let mut x = hi;
        let mut fx = f(hi);
        if fx.abs() < tol {
            return Ok(hi);
        }

        for _iteration in 0..self.config.max_iterations {
            let df = fx - f_prev;
            if df == T::zero() {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            let x_next = x - fx * (x - x_prev) / df;
            if !x_next.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "secant iterate diverged from x = {}",
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }

            x_prev = x;
            f_prev = fx;
            x = x_next;
            fx = f(x);

            if fx.abs() < tol {
                return Ok(x);
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}
