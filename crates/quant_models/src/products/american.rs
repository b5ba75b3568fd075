//! American call / put.

use quant_core::types::OptionType;

use super::error::{check_expiry, check_strike, ProductError};
use super::{GridProduct, Instrument};

/// American call or put, exercisable at any time up to expiry.
///
/// Only the grid view is provided: pricing requires a backward induction
/// engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AmericanCallPut {
    option: OptionType,
    strike: f64,
    expiry: f64,
}

impl AmericanCallPut {
    /// Create an American option.
    ///
    /// # Errors
    /// - `ProductError::InvalidStrike` if strike <= 0
    /// - `ProductError::InvalidExpiry` if expiry <= 0
    pub fn new(option: OptionType, strike: f64, expiry: f64) -> Result<Self, ProductError> {
        check_strike(strike)?;
        check_expiry(expiry)?;
        Ok(Self {
            option,
            strike,
            expiry,
        })
    }
}

impl Instrument for AmericanCallPut {
    fn type_name(&self) -> &'static str {
        "AmericanCallPut"
    }
}

impl GridProduct for AmericanCallPut {
    fn expiry(&self) -> f64 {
        self.expiry
    }

    fn payoff(&self, spot: f64) -> f64 {
        self.option.intrinsic(spot, self.strike)
    }

    fn is_early_exercise(&self) -> bool {
        true
    }
}
