//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The top-level error returned by every public operation
//! - `ErrorKind`: The four error categories a caller can branch on
//! - `InterpolationError`: Errors from curve construction and evaluation
//! - `SolverError`: Errors from root-finding solvers
//!
//! Domain errors from other modules (`LinalgError`, `MarketDataError`, and
//! the errors of higher layers) convert into `PricingError` via `From`, so
//! `?` works across module and crate boundaries.

use thiserror::Error;

/// The category of a [`PricingError`].
///
/// Bindings translate these into their host-language error conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Shape mismatch, non-monotonic breakpoints, non-positive volatility,
    /// time or path count, malformed correlation matrix.
    InvalidArgument,
    /// Unresolved market-object name.
    NotFound,
    /// Non-convergent iteration, failed factorisation, singular system.
    NumericalFailure,
    /// Unrecognised engine kind or invalid engine configuration.
    ConfigurationError,
}

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidArgument`: Invalid market data or parameters
/// - `NotFound`: A named market object does not exist
/// - `NumericalFailure`: Computation failed to converge or produced no valid value
/// - `ConfigurationError`: Engine configuration could not be resolved
///
/// # Examples
/// ```
/// use quant_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::InvalidArgument("negative spot".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: negative spot");
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Named market object not present in the store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Numerical procedure failed.
    #[error("Numerical failure: {0}")]
    NumericalFailure(String),

    /// Engine configuration error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl PricingError {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PricingError::NotFound(_) => ErrorKind::NotFound,
            PricingError::NumericalFailure(_) => ErrorKind::NumericalFailure,
            PricingError::ConfigurationError(_) => ErrorKind::ConfigurationError,
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            PricingError::InvalidArgument(msg)
            | PricingError::NotFound(msg)
            | PricingError::NumericalFailure(msg)
            | PricingError::ConfigurationError(msg) => msg,
        }
    }
}

/// Curve construction and evaluation errors.
///
/// # Examples
/// ```
/// use quant_core::types::InterpolationError;
///
/// let err = InterpolationError::NonMonotonicData { index: 2 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Insufficient data points.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Breakpoints and values differ in length.
    #[error("Length mismatch: {breakpoints} breakpoints, {values} values")]
    LengthMismatch {
        /// Number of breakpoints
        breakpoints: usize,
        /// Number of values
        values: usize,
    },

    /// Breakpoints are not strictly increasing.
    #[error("Breakpoints are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index of the first offending breakpoint
        index: usize,
    },

    /// Unsupported polynomial order.
    #[error("Unsupported polynomial order: {order} (expected 0 or 1)")]
    InvalidOrder {
        /// The requested order
        order: usize,
    },

    /// General invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use quant_core::types::{ErrorKind, PricingError, SolverError};
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert_eq!(format!("{}", err), "Maximum iterations (100) exceeded");
/// assert_eq!(PricingError::from(err).kind(), ErrorKind::NumericalFailure);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The iteration bound was reached without meeting the tolerance.
    #[error("Maximum iterations ({iterations}) exceeded")]
    MaxIterationsExceeded {
        /// Number of iterations performed
        iterations: usize,
    },

    /// The secant slope vanished and the next iterate is undefined.
    #[error("Secant slope near zero at x = {x}")]
    DerivativeNearZero {
        /// The point where the slope vanished
        x: f64,
    },

    /// The iteration produced a non-finite value.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Invalid search interval or subdivision count.
    #[error("Invalid search interval: {0}")]
    InvalidInterval(String),

    /// Invalid solver settings.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::InvalidInterval(_) | SolverError::InvalidConfig(_) => {
                PricingError::InvalidArgument(err.to_string())
            }
            SolverError::MaxIterationsExceeded { .. }
            | SolverError::DerivativeNearZero { .. }
            | SolverError::NumericalInstability(_) => {
                PricingError::NumericalFailure(err.to_string())
            }
        }
    }
}
