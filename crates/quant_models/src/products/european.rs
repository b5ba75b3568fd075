//! European call / put.

use quant_core::types::OptionType;

use super::error::{check_expiry, check_strike, ProductError};
use super::{GridProduct, Instrument, Product};

/// European call or put paying `max(φ(S_T - K), 0)` at expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanCallPut {
    option: OptionType,
    strike: f64,
    times: [f64; 1],
}

impl EuropeanCallPut {
    /// Create a European option.
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
            times: [expiry],
        })
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl Instrument for EuropeanCallPut {
    fn type_name(&self) -> &'static str {
        "EuropeanCallPut"
    }
}

impl Product for EuropeanCallPut {
    fn fix_times(&self) -> &[f64] {
        &self.times
    }

    fn pay_times(&self) -> &[f64] {
        &self.times
    }

    fn eval_path(&self, path: &[f64], pay_amounts: &mut [f64]) {
        pay_amounts[0] = self.option.intrinsic(path[0], self.strike);
    }
}

impl GridProduct for EuropeanCallPut {
    fn expiry(&self) -> f64 {
        self.times[0]
    }

    fn payoff(&self, spot: f64) -> f64 {
        self.option.intrinsic(spot, self.strike)
    }
}
