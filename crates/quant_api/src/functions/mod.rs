//! Flat function API.
//!
//! Each function validates its arguments, resolves market names against an
//! explicit [`MarketStore`], and returns `Result<_, PricingError>`. Option
//! types arrive as the integer codes `1` (call) and `-1` (put).
//!
//! | Module | Functions |
//! |---|---|
//! | [`utilities`] | polynomials, special functions, matrices, curves, root finding, compounding |
//! | [`analytic`] | forwards, European and digital Greeks, knock-out forwards |
//! | [`market`] | market store, curve queries, caplets, CDS legs |
//! | [`monte_carlo`] | European and Asian basket Monte Carlo |
//! | [`pde`] | European, digital and American finite differences |
//! | [`quanto`] | quanto European by all three methods |

use std::sync::Arc;

use quant_core::market_data::{MarketStore, VolatilityTermStructure};
use quant_core::types::{OptionType, PricingError};

pub mod analytic;
pub mod market;
pub mod monte_carlo;
pub mod pde;
pub mod quanto;
pub mod utilities;

pub use analytic::{digi_bs, euro_bs, fwd_price, ko_fwd, quanto_fwd_price};
pub use market::{
    cap_floorlet_bs, cds_pv, discount, fwd_discount, fwd_rate, fwd_vol, mkt_clear, mkt_list,
    spot_rate, spot_vol, vol_create, yc_create,
};
pub use monte_carlo::{asian_basket_bs_mc, euro_bs_mc};
pub use pde::{amer_bs_pde, digi_bs_pde, euro_bs_pde};
pub use quanto::{quanto_euro_bs, quanto_euro_bs_mc, quanto_euro_bs_pde};
pub use utilities::{
    chol_dcmp, echo_matrix, eigen_sym, erf, from_cont_cmpd, inv_erf, normal_cdf, normal_inv_cdf,
    outer_prod, poly_bracket, poly_prod, poly_secant, ppoly_eval, ppoly_integral, ppoly_sum,
    say_hello, spec_trunc, to_cont_cmpd, version,
};

/// Volatility argument: a flat level or the name of a stored term structure.
#[derive(Debug, Clone, PartialEq)]
pub enum VolInput {
    /// Constant volatility
    Constant(f64),
    /// Name of a volatility in the market store
    Named(String),
}

impl VolInput {
    pub(crate) fn resolve(&self, store: &MarketStore) -> Result<Arc<VolatilityTermStructure>, PricingError> {
        match self {
            VolInput::Constant(vol) => Ok(Arc::new(VolatilityTermStructure::constant(*vol)?)),
            VolInput::Named(name) => Ok(store.volatility(name)?),
        }
    }
}

impl From<f64> for VolInput {
    fn from(vol: f64) -> Self {
        VolInput::Constant(vol)
    }
}

impl From<&str> for VolInput {
    fn from(name: &str) -> Self {
        VolInput::Named(name.to_string())
    }
}

#[inline]
pub(crate) fn option_type(payoff: i32) -> Result<OptionType, PricingError> {
    OptionType::try_from(payoff)
}
