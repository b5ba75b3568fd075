//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to closed-form pricers

use quant_core::market_data::MarketDataError;
use quant_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant except `MarketData` describes an invalid argument; market
/// data errors keep their own classification when converted.
///
/// # Examples
/// ```
/// use quant_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time (negative or non-finite).
    #[error("Invalid {name}: t = {time}")]
    InvalidTime {
        /// Which time argument failed
        name: &'static str,
        /// The invalid time value
        time: f64,
    },

    /// Invalid volatility (negative or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-finite rate or yield.
    #[error("Invalid {name}: {rate}")]
    InvalidRate {
        /// Which rate argument failed
        name: &'static str,
        /// The invalid rate value
        rate: f64,
    },

    /// Correlation outside [-1, 1].
    #[error("Invalid correlation: ρ = {correlation}")]
    InvalidCorrelation {
        /// The invalid correlation value
        correlation: f64,
    },

    /// Knock-out barrier not strictly between spot and strike.
    #[error("Invalid knock-out level {barrier}: must lie strictly between strike {strike} and spot {spot}")]
    InvalidBarrier {
        /// Knock-out level
        barrier: f64,
        /// Forward strike
        strike: f64,
        /// Spot price
        spot: f64,
    },

    /// Recovery rate outside [0, 1].
    #[error("Invalid recovery rate: {recovery}")]
    InvalidRecovery {
        /// The invalid recovery value
        recovery: f64,
    },

    /// Payment frequency of zero.
    #[error("Invalid payment frequency: {frequency}")]
    InvalidFrequency {
        /// The invalid frequency
        frequency: u32,
    },

    /// Curve lookup or query failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::MarketData(inner) => inner.into(),
            _ => PricingError::InvalidArgument(err.to_string()),
        }
    }
}

pub(crate) fn check_spot(spot: f64) -> Result<(), AnalyticalError> {
    if !(spot > 0.0) || !spot.is_finite() {
        return Err(AnalyticalError::InvalidSpot { spot });
    }
    Ok(())
}

pub(crate) fn check_strike(strike: f64) -> Result<(), AnalyticalError> {
    if !(strike > 0.0) || !strike.is_finite() {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    Ok(())
}

pub(crate) fn check_time(name: &'static str, time: f64) -> Result<(), AnalyticalError> {
    if !(time >= 0.0) || !time.is_finite() {
        return Err(AnalyticalError::InvalidTime { name, time });
    }
    Ok(())
}

pub(crate) fn check_vol(volatility: f64) -> Result<(), AnalyticalError> {
    if !(volatility >= 0.0) || !volatility.is_finite() {
        return Err(AnalyticalError::InvalidVolatility { volatility });
    }
    Ok(())
}

pub(crate) fn check_rate(name: &'static str, rate: f64) -> Result<(), AnalyticalError> {
    if !rate.is_finite() {
        return Err(AnalyticalError::InvalidRate { name, rate });
    }
    Ok(())
}

pub(crate) fn check_correlation(correlation: f64) -> Result<(), AnalyticalError> {
    if !(-1.0..=1.0).contains(&correlation) {
        return Err(AnalyticalError::InvalidCorrelation { correlation });
    }
    Ok(())
}
