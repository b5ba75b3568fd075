//! Single-point knock-out forward.

use quant_core::types::OptionType;

use super::black_scholes::{black_digital, black_european};
use super::error::{check_rate, check_spot, check_strike, check_time, check_vol, AnalyticalError};

/// Forward contract that is extinguished if, at the knock-out time, the
/// asset is on the wrong side of the barrier.
///
/// A `Call` is a long forward (receives `S_T - K`) alive only if
/// `S(t_ko) > B`; a `Put` is a short forward (receives `K - S_T`) alive only
/// if `S(t_ko) < B`. Conditioning at `t_ko` splits the value into a vanilla
/// and a digital option struck at the barrier:
///
/// ```text
/// V = e^{-q(T-t_ko)} · [ V_φ(S, B, t_ko) + φ·(B - e^{-(r-q)(T-t_ko)}·K) · D_φ(S, B, t_ko) ]
/// ```
///
/// # Errors
///
/// `AnalyticalError::InvalidTime` unless `0 <= t_ko <= t_exp`, and
/// `AnalyticalError::InvalidBarrier` unless `K < B < S` for a call or
/// `S < B < K` for a put.
///
/// # Examples
/// ```
/// use quant_models::analytical::knockout_forward;
/// use quant_core::types::OptionType;
///
/// let v = knockout_forward(OptionType::Call, 100.0, 80.0, 90.0, 1.0, 0.5, 0.03, 0.0, 0.2).unwrap();
/// // Worth less than the plain forward, which never knocks out
/// assert!(v < 100.0 - 80.0 * (-0.03f64).exp());
/// assert!(v > 0.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn knockout_forward(
    option: OptionType,
    spot: f64,
    strike: f64,
    ko_level: f64,
    time_to_exp: f64,
    time_to_ko: f64,
    rate: f64,
    div_yield: f64,
    volatility: f64,
) -> Result<f64, AnalyticalError> {
    check_spot(spot)?;
    check_strike(strike)?;
    check_time("time to expiry", time_to_exp)?;
    check_time("time to knock-out", time_to_ko)?;
    if time_to_ko > time_to_exp {
        return Err(AnalyticalError::InvalidTime {
            name: "time to knock-out (after expiry)",
            time: time_to_ko,
        });
    }
    check_rate("interest rate", rate)?;
    check_rate("dividend yield", div_yield)?;
    check_vol(volatility)?;

    let between = match option {
        OptionType::Call => strike < ko_level && ko_level < spot,
        OptionType::Put => spot < ko_level && ko_level < strike,
    };
    if !between {
        return Err(AnalyticalError::InvalidBarrier {
            barrier: ko_level,
            strike,
            spot,
        });
    }

    let phi = option.sign();
    let tau = time_to_exp - time_to_ko;
    let vanilla = black_european(option, spot, ko_level, time_to_ko, rate, div_yield, volatility).price;
    let digital = black_digital(option, spot, ko_level, time_to_ko, rate, div_yield, volatility).price;
    let fwd_strike = (-(rate - div_yield) * tau).exp() * strike;

    Ok((-div_yield * tau).exp() * (vanilla + phi * (ko_level - fwd_strike) * digital))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quant_core::math::distributions::norm_pdf;

    /// e^{-r·t_ko}·E[1{alive}·(forward value at t_ko)] by trapezoid quadrature
    /// over the alive region in the standard normal variable.
    #[allow(clippy::too_many_arguments)]
    fn quadrature(option: OptionType, s: f64, k: f64, b: f64, t: f64, tko: f64, r: f64, q: f64, vol: f64) -> f64 {
        let phi = option.sign();
        let tau = t - tko;
        let drift = (r - q - 0.5 * vol * vol) * tko;
        let sd = vol * tko.sqrt();
        let z_barrier = ((b / s).ln() - drift) / sd;
        let (lo, hi) = match option {
            OptionType::Call => (z_barrier, 10.0),
            OptionType::Put => (-10.0, z_barrier),
        };
        let n = 20_000;
        let h = (hi - lo) / n as f64;
        let mut sum = 0.0;
        for i in 0..=n {
            let z = lo + i as f64 * h;
            let st = s * (drift + sd * z).exp();
            let value = phi * (st * (-q * tau).exp() - k * (-r * tau).exp());
            let w = if i == 0 || i == n { 0.5 } else { 1.0 };
            sum += w * value * norm_pdf(z);
        }
        (-r * tko).exp() * sum * h
    }

    #[test]
    fn test_matches_quadrature() {
        let cases = [
            (OptionType::Call, 100.0, 80.0, 90.0),
            (OptionType::Put, 100.0, 120.0, 110.0),
        ];
        for (option, s, k, b) in cases {
            let analytic = knockout_forward(option, s, k, b, 1.5, 0.75, 0.04, 0.01, 0.3).unwrap();
            let numeric = quadrature(option, s, k, b, 1.5, 0.75, 0.04, 0.01, 0.3);
            assert_relative_eq!(analytic, numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_immediate_knockout_check_is_plain_forward() {
        // t_ko = 0 with spot beyond the barrier: the forward is alive for sure.
        let v = knockout_forward(OptionType::Call, 100.0, 80.0, 90.0, 2.0, 0.0, 0.05, 0.02, 0.2).unwrap();
        let fwd_value = 100.0 * (-0.04f64).exp() - 80.0 * (-0.1f64).exp();
        assert_relative_eq!(v, fwd_value, epsilon = 1e-12);
    }

    #[test]
    fn test_barrier_must_separate_spot_and_strike() {
        let c = OptionType::Call;
        assert!(matches!(
            knockout_forward(c, 100.0, 80.0, 110.0, 1.0, 0.5, 0.03, 0.0, 0.2),
            Err(AnalyticalError::InvalidBarrier { .. })
        ));
        assert!(matches!(
            knockout_forward(c, 100.0, 80.0, 80.0, 1.0, 0.5, 0.03, 0.0, 0.2),
            Err(AnalyticalError::InvalidBarrier { .. })
        ));
        assert!(matches!(
            knockout_forward(OptionType::Put, 100.0, 120.0, 90.0, 1.0, 0.5, 0.03, 0.0, 0.2),
            Err(AnalyticalError::InvalidBarrier { .. })
        ));
    }

    #[test]
    fn test_knockout_after_expiry_rejected() {
        assert!(matches!(
            knockout_forward(OptionType::Call, 100.0, 80.0, 90.0, 1.0, 1.5, 0.03, 0.0, 0.2),
            Err(AnalyticalError::InvalidTime { .. })
        ));
    }
}
