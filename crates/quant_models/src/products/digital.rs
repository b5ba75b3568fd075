//! Cash-or-nothing digital call / put.

use quant_core::types::OptionType;

use super::error::{check_expiry, check_strike, ProductError};
use super::{GridProduct, Instrument, Product};

/// Digital paying 1 at expiry if `S_T >= K` (call) or `S_T <= K` (put).
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalCallPut {
    option: OptionType,
    strike: f64,
    times: [f64; 1],
}

impl DigitalCallPut {
    /// Create a digital option.
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
}

impl Instrument for DigitalCallPut {
    fn type_name(&self) -> &'static str {
        "DigitalCallPut"
    }
}

impl Product for DigitalCallPut {
    fn fix_times(&self) -> &[f64] {
        &self.times
    }

    fn pay_times(&self) -> &[f64] {
        &self.times
    }

    fn eval_path(&self, path: &[f64], pay_amounts: &mut [f64]) {
        pay_amounts[0] = self.option.digital(path[0], self.strike);
    }
}

impl GridProduct for DigitalCallPut {
    fn expiry(&self) -> f64 {
        self.times[0]
    }

    fn payoff(&self, spot: f64) -> f64 {
        self.option.digital(spot, self.strike)
    }
}
