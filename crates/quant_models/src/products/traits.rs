//! Product trait definitions.
//!
//! Products describe cash flows only; models and numerical engines live in
//! the pricing layer. Two views are provided:
//!
//! - [`Product`]: cash flows as a function of a simulated price path
//!   (Monte Carlo)
//! - [`GridProduct`]: a single-asset payoff plus exercise rule on a spot
//!   grid (PDE)
//!
//! A product implements whichever views it supports.

/// Common product metadata.
pub trait Instrument: Send + Sync {
    /// Human-readable product name, used in logs.
    fn type_name(&self) -> &'static str;
}

/// Path-dependent view of a product.
///
/// A path holds the asset prices at each fixing time, stored row-major:
/// `path[k * n_assets() + a]` is the price of asset `a` at `fix_times()[k]`.
///
/// # Examples
///
/// ```
/// use quant_core::types::OptionType;
/// use quant_models::products::{EuropeanCallPut, Product};
///
/// let call = EuropeanCallPut::new(OptionType::Call, 100.0, 1.0).unwrap();
/// let mut amounts = vec![0.0; call.pay_times().len()];
/// call.eval_path(&[112.0], &mut amounts);
/// assert_eq!(amounts, vec![12.0]);
/// ```
pub trait Product: Instrument {
    /// Number of assets observed on each fixing.
    #[inline]
    fn n_assets(&self) -> usize {
        1
    }

    /// Strictly increasing, positive fixing times.
    fn fix_times(&self) -> &[f64];

    /// Payment times, one per pay amount.
    fn pay_times(&self) -> &[f64];

    /// Write the cash flow paid at each `pay_times()[j]` into `pay_amounts[j]`.
    ///
    /// `path` has `fix_times().len() * n_assets()` entries and
    /// `pay_amounts` has `pay_times().len()` entries.
    fn eval_path(&self, path: &[f64], pay_amounts: &mut [f64]);
}

/// Single-asset grid view of a product.
pub trait GridProduct: Instrument {
    /// Expiry (terminal payoff time) in years.
    fn expiry(&self) -> f64;

    /// Payoff received when exercised (or at expiry) with the asset at `spot`.
    fn payoff(&self, spot: f64) -> f64;

    /// Whether the holder may exercise before expiry.
    #[inline]
    fn is_early_exercise(&self) -> bool {
        false
    }

    /// Node value after the holder's exercise decision.
    ///
    /// Early-exercise products take the larger of continuation and payoff;
    /// others keep the continuation value.
    #[inline]
    fn exercise(&self, spot: f64, continuation: f64) -> f64 {
        if self.is_early_exercise() {
            continuation.max(self.payoff(spot))
        } else {
            continuation
        }
    }
}
