//! Arithmetic Asian option on a weighted basket.

use quant_core::types::OptionType;

use super::error::{check_strike, ProductError};
use super::{Instrument, Product};

/// Call or put on the time-average of a weighted basket.
///
/// With basket level `B(t) = Σ_a q_a·S_a(t)`, the payoff is
/// `max(φ(mean_k B(t_k) - K), 0)`, paid at the last fixing time.
///
/// # Examples
///
/// ```
/// use quant_core::types::OptionType;
/// use quant_models::products::{AsianBasket, Product};
///
/// let asian = AsianBasket::new(
///     OptionType::Call,
///     100.0,
///     vec![0.5, 0.5],
///     vec![0.5, 1.0],
/// ).unwrap();
///
/// // Two fixings, two assets, row-major by fixing.
/// let path = [100.0, 120.0, 110.0, 130.0];
/// let mut amounts = [0.0];
/// asian.eval_path(&path, &mut amounts);
/// assert!((amounts[0] - 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AsianBasket {
    option: OptionType,
    strike: f64,
    quantities: Vec<f64>,
    fix_times: Vec<f64>,
    pay_time: [f64; 1],
}

impl AsianBasket {
    /// Create an Asian basket option.
    ///
    /// # Arguments
    ///
    /// * `option` - Call or put on the average
    /// * `strike` - Strike on the averaged basket level (> 0)
    /// * `quantities` - Units held of each asset (non-empty, finite)
    /// * `fix_times` - Averaging dates (non-empty, strictly increasing, > 0)
    pub fn new(
        option: OptionType,
        strike: f64,
        quantities: Vec<f64>,
        fix_times: Vec<f64>,
    ) -> Result<Self, ProductError> {
        check_strike(strike)?;

        if quantities.is_empty() {
            return Err(ProductError::InvalidQuantities {
                message: "basket must hold at least one asset".to_string(),
            });
        }
        if let Some(i) = quantities.iter().position(|q| !q.is_finite()) {
            return Err(ProductError::InvalidQuantities {
                message: format!("quantity {} is not finite", i),
            });
        }

        let last = match fix_times.last() {
            Some(&t) => t,
            None => {
                return Err(ProductError::InvalidFixTimes {
                    message: "at least one fixing time is required".to_string(),
                })
            }
        };
        if !(fix_times[0] > 0.0) || !last.is_finite() {
            return Err(ProductError::InvalidFixTimes {
                message: format!("fixing times must be positive and finite, got {:?}", fix_times),
            });
        }
        if let Some(i) = fix_times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ProductError::InvalidFixTimes {
                message: format!("fixing times not strictly increasing at index {}", i + 1),
            });
        }

        Ok(Self {
            option,
            strike,
            quantities,
            fix_times,
            pay_time: [last],
        })
    }

    /// Units held of each asset.
    #[inline]
    pub fn quantities(&self) -> &[f64] {
        &self.quantities
    }
}

impl Instrument for AsianBasket {
    fn type_name(&self) -> &'static str {
        "AsianBasket"
    }
}

impl Product for AsianBasket {
    fn n_assets(&self) -> usize {
        self.quantities.len()
    }

    fn fix_times(&self) -> &[f64] {
        &self.fix_times
    }

    fn pay_times(&self) -> &[f64] {
        &self.pay_time
    }

    fn eval_path(&self, path: &[f64], pay_amounts: &mut [f64]) {
        let n_assets = self.quantities.len();
        let total: f64 = path
            .chunks_exact(n_assets)
            .map(|fixing| {
                fixing
                    .iter()
                    .zip(&self.quantities)
                    .map(|(s, q)| q * s)
                    .sum::<f64>()
            })
            .sum();
        let average = total / self.fix_times.len() as f64;
        pay_amounts[0] = self.option.intrinsic(average, self.strike);
    }
}
