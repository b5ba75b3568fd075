//! Engine configuration errors.

use quant_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo and PDE engines.
///
/// Raised when a config is built or parsed. A zero path count maps to
/// `PricingError::InvalidArgument`, every other variant to
/// `PricingError::ConfigurationError`.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Non-positive path count.
    #[error("Invalid path count {0}: must be positive")]
    InvalidPathCount(usize),

    /// Unrecognised engine kind name.
    #[error("Unknown {kind} '{name}'")]
    UnknownKind {
        /// Kind of setting (e.g. "random number generator")
        kind: &'static str,
        /// The rejected name
        name: String,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(_) => PricingError::InvalidArgument(err.to_string()),
            _ => PricingError::ConfigurationError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quant_core::types::ErrorKind;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::UnknownKind {
            kind: "random number generator",
            name: "SOBOL".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown random number generator 'SOBOL'");

        let err = ConfigError::InvalidParameter {
            name: "theta",
            value: "must lie in [0, 1]".to_string(),
        };
        assert!(err.to_string().contains("theta"));
    }

    #[test]
    fn test_error_kind_mapping() {
        let err: PricingError = ConfigError::InvalidPathCount(0).into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: PricingError = ConfigError::UnknownKind {
            kind: "random number generator",
            name: "SOBOL".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);

        let err: PricingError = ConfigError::InvalidParameter {
            name: "theta",
            value: "must lie in [0, 1]".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
    }
}
