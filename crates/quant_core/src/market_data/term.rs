//! Validation shared by the term structures.

use super::MarketDataError;

/// Maturities non-empty, positive, finite, strictly increasing; values finite and same length.
pub(crate) fn validate_term_inputs(maturities: &[f64], values: &[f64]) -> Result<(), MarketDataError> {
    if maturities.is_empty() {
        return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
    }
    if maturities.len() != values.len() {
        return Err(MarketDataError::LengthMismatch {
            maturities: maturities.len(),
            values: values.len(),
        });
    }
    let mut prev = 0.0;
    for (index, &t) in maturities.iter().enumerate() {
        if !t.is_finite() || t <= prev {
            return Err(MarketDataError::NonIncreasingMaturity { index, t });
        }
        prev = t;
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(MarketDataError::NonFiniteValue { index });
    }
    Ok(())
}

/// Query time must be finite and non-negative.
pub(crate) fn check_time(t: f64) -> Result<(), MarketDataError> {
    if !t.is_finite() || t < 0.0 {
        return Err(MarketDataError::InvalidMaturity { t });
    }
    Ok(())
}

/// Both ends valid and `t1 <= t2`.
pub(crate) fn check_interval(t1: f64, t2: f64) -> Result<(), MarketDataError> {
    check_time(t1)?;
    check_time(t2)?;
    if t2 < t1 {
        return Err(MarketDataError::InvalidTimeOrder { t1, t2 });
    }
    Ok(())
}

/// Breakpoints `[0, t1, …, t(n-1)]` for a piecewise-flat curve whose `i`-th
/// segment ends at `maturities[i]`.
pub(crate) fn left_breakpoints(maturities: &[f64]) -> Vec<f64> {
    std::iter::once(0.0)
        .chain(maturities[..maturities.len() - 1].iter().copied())
        .collect()
}

/// Per-interval averages from cumulative totals: `(c_i - c_{i-1}) / (t_i - t_{i-1})`.
pub(crate) fn interval_averages(maturities: &[f64], cumulative: &[f64]) -> Vec<f64> {
    let mut prev_t = 0.0;
    let mut prev_c = 0.0;
    maturities
        .iter()
        .zip(cumulative)
        .map(|(&t, &c)| {
            let avg = (c - prev_c) / (t - prev_t);
            prev_t = t;
            prev_c = c;
            avg
        })
        .collect()
}
