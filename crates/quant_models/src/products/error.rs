//! Product error types.
//!
//! Structured errors for product construction.

use quant_core::types::PricingError;
use thiserror::Error;

/// Product construction errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Expiry time is non-positive
/// - `InvalidFixTimes`: Fixing schedule empty or not strictly increasing
/// - `InvalidQuantities`: Basket quantities empty or non-finite
///
/// # Examples
/// ```
/// use quant_models::products::ProductError;
///
/// let err = ProductError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Fixing times must be non-empty, positive and strictly increasing.
    #[error("Invalid fixing times: {message}")]
    InvalidFixTimes {
        /// Description of the problem
        message: String,
    },

    /// Basket quantities must be non-empty and finite.
    #[error("Invalid basket quantities: {message}")]
    InvalidQuantities {
        /// Description of the problem
        message: String,
    },
}

impl From<ProductError> for PricingError {
    fn from(err: ProductError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

pub(crate) fn check_strike(strike: f64) -> Result<(), ProductError> {
    if !(strike > 0.0) || !strike.is_finite() {
        return Err(ProductError::InvalidStrike { strike });
    }
    Ok(())
}

pub(crate) fn check_expiry(expiry: f64) -> Result<(), ProductError> {
    if !(expiry > 0.0) || !expiry.is_finite() {
        return Err(ProductError::InvalidExpiry { expiry });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quant_core::types::ErrorKind;

    #[test]
    fn test_display_and_conversion() {
        let err = ProductError::InvalidFixTimes {
            message: "empty".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid fixing times: empty");
        assert_eq!(PricingError::from(err).kind(), ErrorKind::InvalidArgument);
    }
}
