//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for iterative root-finding.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// let tight = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(tight.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on `|f(x)|`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// Exhausting the budget returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration with the given tolerance and iteration bound.
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidConfig` if `tolerance` is not positive and finite
    /// or `max_iterations` is zero.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        if !(tolerance > T::zero()) || !tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(
                "tolerance must be positive and finite".to_string(),
            ));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// Default iteration bound with a custom tolerance.
    pub fn with_tolerance(tolerance: T) -> Result<Self, SolverError> {
        Self::new(tolerance, Self::default().max_iterations)
    }
}
