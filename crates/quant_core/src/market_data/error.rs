//! Market data error types.
//!
//! Structured errors for yield curve and volatility term structure
//! construction, queries, and market store lookups.

use thiserror::Error;

use crate::types::{InterpolationError, PricingError};

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative or non-finite time
/// - `NonIncreasingMaturity`: Input maturities not strictly increasing
/// - `LengthMismatch` / `InsufficientData`: Malformed input vectors
/// - `NonFiniteValue`, `NonPositiveDiscount`, `NonPositiveVolatility`: Bad values
/// - `NegativeForwardVariance`: Spot vols that imply a negative forward variance
/// - `InvalidTimeOrder`: Query with `t2 < t1`
/// - `InvalidValueType`: Unknown value-type code
/// - `EmptyName` / `NotFound`: Market store naming errors
/// - `Interpolation`: Wrapped interpolation error
///
/// # Examples
///
/// ```
/// use quant_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative or non-finite time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Maturities must be strictly increasing and positive.
    #[error("Maturity at index {index} is not positive and strictly increasing: t = {t}")]
    NonIncreasingMaturity {
        /// Index of the offending maturity
        index: usize,
        /// The offending maturity
        t: f64,
    },

    /// Maturities and values differ in length.
    #[error("Length mismatch: {maturities} maturities, {values} values")]
    LengthMismatch {
        /// Number of maturities
        maturities: usize,
        /// Number of values
        values: usize,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Input value is NaN or infinite.
    #[error("Value at index {index} is not finite")]
    NonFiniteValue {
        /// Index of the offending value
        index: usize,
    },

    /// Discount factors must be positive.
    #[error("Discount factor at index {index} is not positive: {df}")]
    NonPositiveDiscount {
        /// Index of the offending discount factor
        index: usize,
        /// The offending discount factor
        df: f64,
    },

    /// Volatilities must be positive.
    #[error("Volatility at index {index} is not positive: {vol}")]
    NonPositiveVolatility {
        /// Index of the offending volatility
        index: usize,
        /// The offending volatility
        vol: f64,
    },

    /// Spot volatilities imply a negative forward variance.
    #[error("Negative forward variance between maturities {index} and {}", .index + 1)]
    NegativeForwardVariance {
        /// Index of the left maturity of the offending interval
        index: usize,
    },

    /// Interval query with reversed endpoints.
    #[error("Invalid time interval: t1 = {t1} > t2 = {t2}")]
    InvalidTimeOrder {
        /// Interval start
        t1: f64,
        /// Interval end
        t2: f64,
    },

    /// Unknown value-type code.
    #[error("Invalid {kind} value type: {code}")]
    InvalidValueType {
        /// Family of the value type ("yield" or "volatility")
        kind: &'static str,
        /// The code that failed to parse
        code: i32,
    },

    /// Market object names must not be blank.
    #[error("Market object name must not be empty")]
    EmptyName,

    /// No market object under the requested name.
    #[error("Market object not found: {name}")]
    NotFound {
        /// The requested name
        name: String,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::NotFound { .. } => PricingError::NotFound(err.to_string()),
            _ => PricingError::InvalidArgument(err.to_string()),
        }
    }
}
