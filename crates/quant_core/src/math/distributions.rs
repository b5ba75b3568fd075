//! Error function and standard normal distribution.
//!
//! Thin, validated wrappers over `statrs` special functions:
//! - [`erf`], [`inv_erf`]: error function and its inverse
//! - [`norm_cdf`], [`norm_pdf`], [`norm_inv_cdf`]: standard normal
//!
//! All functions are pure and reentrant.

use statrs::function::erf as sf;

use crate::types::PricingError;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function `erf(x) = 2/√π ∫_0^x e^{-t²} dt`.
#[inline]
pub fn erf(x: f64) -> f64 {
    sf::erf(x)
}

/// Inverse error function on `[-1, 1]`.
///
/// Returns ±∞ at the endpoints.
///
/// # Errors
///
/// `PricingError::InvalidArgument` if `x` lies outside `[-1, 1]`.
pub fn inv_erf(x: f64) -> Result<f64, PricingError> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(PricingError::InvalidArgument(format!(
            "inverse erf argument must lie in [-1, 1], got {}",
            x
        )));
    }
    if x == 1.0 {
        return Ok(f64::INFINITY);
    }
    if x == -1.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(sf::erf_inv(x))
}

/// Standard normal cumulative distribution function.
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * sf::erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Inverse of the standard normal CDF on `[0, 1]`.
///
/// Returns ±∞ at the endpoints.
///
/// # Errors
///
/// `PricingError::InvalidArgument` if `p` lies outside `[0, 1]`.
///
/// # Example
///
/// ```
/// use quant_core::math::distributions::{norm_cdf, norm_inv_cdf};
///
/// let x = norm_inv_cdf(0.975).unwrap();
/// assert!((x - 1.959_963_984_540_054).abs() < 1e-9);
/// assert!((norm_cdf(x) - 0.975).abs() < 1e-12);
/// ```
pub fn norm_inv_cdf(p: f64) -> Result<f64, PricingError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(PricingError::InvalidArgument(format!(
            "probability must lie in [0, 1], got {}",
            p
        )));
    }
    if p == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(-std::f64::consts::SQRT_2 * sf::erfc_inv(2.0 * p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_erf_known_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_abs_diff_eq!(erf(1.0), 0.842_700_792_949_714_9, epsilon = 1e-14);
        assert_abs_diff_eq!(erf(-1.0), -0.842_700_792_949_714_9, epsilon = 1e-14);
    }

    #[test]
    fn test_inv_erf_endpoints_and_domain() {
        assert_eq!(inv_erf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(inv_erf(-1.0).unwrap(), f64::NEG_INFINITY);
        assert!(inv_erf(1.5).is_err());
        assert!(inv_erf(f64::NAN).is_err());
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        for x in [0.1, 0.7, 1.3, 2.9] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_far_tail_is_accurate() {
        // erfc-based evaluation keeps relative accuracy deep in the left tail.
        let v = norm_cdf(-10.0);
        assert!(v > 7.6e-24 && v < 7.7e-24);
    }

    #[test]
    fn test_norm_pdf_peak() {
        assert_abs_diff_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-16);
    }

    #[test]
    fn test_norm_inv_cdf_domain() {
        assert_eq!(norm_inv_cdf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(norm_inv_cdf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(norm_inv_cdf(0.5).unwrap(), 0.0);
        assert!(norm_inv_cdf(-0.1).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_inv_erf_round_trip(x in -0.999f64..0.999) {
            let y = inv_erf(x).unwrap();
            prop_assert!((erf(y) - x).abs() < 1e-12);
        }

        #[test]
        fn prop_norm_inv_cdf_round_trip(p in 1e-6f64..(1.0 - 1e-6)) {
            let x = norm_inv_cdf(p).unwrap();
            prop_assert!((norm_cdf(x) - p).abs() < 1e-12);
        }
    }
}
