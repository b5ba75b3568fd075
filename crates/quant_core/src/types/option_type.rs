//! Payoff direction for options and forwards.

use std::fmt;
use std::str::FromStr;

use super::PricingError;

/// Payoff direction.
///
/// Calls (and long forwards) carry sign +1, puts (and short forwards) -1.
///
/// # Examples
///
/// ```
/// use quant_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.sign(), 1.0);
/// assert_eq!(OptionType::try_from(-1).unwrap(), OptionType::Put);
/// assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option / long forward.
    Call,
    /// Put option / short forward.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Vanilla payoff `max(φ(S - K), 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.sign() * (spot - strike)).max(0.0)
    }

    /// Digital payoff: 1 if `S >= K` for calls, 1 if `S <= K` for puts.
    #[inline]
    pub fn digital(&self, spot: f64, strike: f64) -> f64 {
        let in_the_money = match self {
            OptionType::Call => spot >= strike,
            OptionType::Put => spot <= strike,
        };
        if in_the_money {
            1.0
        } else {
            0.0
        }
    }
}

impl TryFrom<i32> for OptionType {
    type Error = PricingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(OptionType::Call),
            -1 => Ok(OptionType::Put),
            other => Err(PricingError::InvalidArgument(format!(
                "payoff type must be 1 (call) or -1 (put), got {}",
                other
            ))),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" | "1" => Ok(OptionType::Call),
            "put" | "p" | "-1" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidArgument(format!(
                "unknown payoff type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}
