//! Theta-scheme solver for the one-factor Black-Scholes PDE.
//!
//! In `x = ln S` the backward equation over a step with piecewise constant
//! rate `r`, dividend yield `q` and variance rate `v` is
//!
//! ```text
//! ∂V/∂t + (r - q - v/2)·∂V/∂x + (v/2)·∂²V/∂x² - r·V = 0
//! ```
//!
//! The convection-diffusion operator `L` is discretised with central
//! differences and stepped with
//! `(I - θ·Δt·L)·V_old = (I + (1 - θ)·Δt·L)·V_new`; the `-r·V` term is
//! applied afterwards as the forward discount factor over the step.
//! Boundary nodes follow from zero convexity, which is folded into the
//! first and last interior rows of `L`.

use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
use quant_core::types::{OptionType, PricingError};
use quant_models::analytical::quanto_drift_adjustment;
use quant_models::products::{AmericanCallPut, DigitalCallPut, EuropeanCallPut, GridProduct};
use tracing::debug;

use super::config::PdeConfig;
use super::grid::LogSpotGrid;
use super::result::{PdeGrid, PdeResult};
use super::tridiagonal::{solve_tridiagonal, TridiagonalScratch};

/// Finite-difference pricing engine.
///
/// # Examples
///
/// ```rust
/// use quant_core::market_data::{VolatilityTermStructure, YieldCurve};
/// use quant_core::types::OptionType;
/// use quant_models::products::EuropeanCallPut;
/// use quant_pricing::pde::{PdeConfig, PdeSolver};
///
/// let config = PdeConfig::builder()
///     .n_time_steps(100)
///     .n_spot_nodes(200)
///     .theta(0.5)
///     .build()
///     .unwrap();
/// let curve = YieldCurve::flat(0.05).unwrap();
/// let vol = VolatilityTermStructure::constant(0.2).unwrap();
/// let call = EuropeanCallPut::new(OptionType::Call, 100.0, 1.0).unwrap();
///
/// let result = PdeSolver::new(config).solve(&call, 100.0, &curve, 0.0, &vol, false).unwrap();
/// assert!((result.price() - 10.4506).abs() < 0.05);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PdeSolver {
    config: PdeConfig,
}

impl PdeSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: PdeConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &PdeConfig {
        &self.config
    }

    /// Price `product` by stepping its payoff back from expiry to time 0.
    ///
    /// The asset grows at the forward rates of `discount` less `div_yield`.
    /// With `store_grid` every time level is kept and returned as
    /// [`PdeResult::PriceWithGrid`].
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` on a non-positive spot, a non-finite dividend
    ///   yield or zero variance to expiry
    /// - `NumericalFailure` on a singular system or a non-finite price
    pub fn solve(
        &self,
        product: &dyn GridProduct,
        spot: f64,
        discount: &YieldCurve,
        div_yield: f64,
        vol: &VolatilityTermStructure,
        store_grid: bool,
    ) -> Result<PdeResult, PricingError> {
        if !(spot > 0.0) || !spot.is_finite() {
            return Err(PricingError::InvalidArgument(format!(
                "spot must be positive, got {}",
                spot
            )));
        }
        if !div_yield.is_finite() {
            return Err(PricingError::InvalidArgument(format!(
                "dividend yield must be finite, got {}",
                div_yield
            )));
        }

        let expiry = product.expiry();
        let grid = LogSpotGrid::new(&self.config, spot, expiry, discount, div_yield, vol)?;
        let n = self.config.n_spot_nodes();
        let theta = self.config.theta();

        debug!(
            product = product.type_name(),
            n_time_steps = self.config.n_time_steps(),
            n_spot_nodes = n,
            n_std_devs = self.config.n_std_devs(),
            theta,
            store_grid,
            "starting PDE solve"
        );

        let spots = grid.spots();
        let times = grid.times();
        let dx = grid.dx();

        let mut values: Vec<f64> = spots.iter().map(|&s| product.payoff(s)).collect();
        let mut rows = if store_grid {
            let mut rows = vec![Vec::new(); times.len()];
            rows[times.len() - 1] = values.clone();
            Some(rows)
        } else {
            None
        };

        let mut op = Operator::new(n);
        let mut rhs = vec![0.0; n];
        let mut interior = vec![0.0; n];
        let mut scratch = TridiagonalScratch::with_capacity(n);

        for k in (1..times.len()).rev() {
            let (t0, t1) = (times[k - 1], times[k]);
            let dt = t1 - t0;
            let rate = discount.fwd_rate(t0, t1)?;
            let var_rate = vol.variance(t0, t1)? / dt;
            op.set(rate - div_yield - 0.5 * var_rate, var_rate, dx);

            let explicit = (1.0 - theta) * dt;
            op.apply(explicit, &values[1..=n], &mut rhs);

            if theta > 0.0 {
                op.solve_implicit(theta * dt, &rhs, &mut scratch, &mut interior)?;
            } else {
                interior.copy_from_slice(&rhs);
            }

            let df = discount.fwd_discount(t0, t1)?;
            for (v, u) in values[1..=n].iter_mut().zip(&interior) {
                *v = u * df;
            }
            values[0] = 2.0 * values[1] - values[2];
            values[n + 1] = 2.0 * values[n] - values[n - 1];

            for (v, &s) in values.iter_mut().zip(spots) {
                *v = product.exercise(s, *v);
            }

            if let Some(rows) = rows.as_mut() {
                rows[k - 1] = values.clone();
            }
        }

        let price = grid.interpolate(&values, spot);
        if !price.is_finite() {
            return Err(PricingError::NumericalFailure(format!(
                "PDE price is not finite ({})",
                price
            )));
        }
        debug!(price, "PDE solve finished");

        Ok(match rows {
            None => PdeResult::PriceOnly { price },
            Some(values) => PdeResult::PriceWithGrid {
                price,
                grid: PdeGrid {
                    times: times.to_vec(),
                    spots: spots.to_vec(),
                    values,
                },
            },
        })
    }

    /// Price a quanto `product` paid in the discount curve's currency.
    ///
    /// The asset is modelled with constant volatility `asset_vol` and the
    /// effective dividend yield `r_d(T) - r_f(T) + q + ρ·σ_S·σ_X`, with
    /// spot rates taken at the product's expiry.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a non-positive asset volatility, a negative FX
    /// volatility or `|correlation| > 1`; otherwise see [`Self::solve`].
    #[allow(clippy::too_many_arguments)]
    pub fn solve_quanto(
        &self,
        product: &dyn GridProduct,
        spot: f64,
        discount: &YieldCurve,
        foreign: &YieldCurve,
        div_yield: f64,
        asset_vol: f64,
        fx_vol: f64,
        correlation: f64,
        store_grid: bool,
    ) -> Result<PdeResult, PricingError> {
        check_quanto_inputs(fx_vol, correlation)?;
        let vol = VolatilityTermStructure::constant(asset_vol)?;
        let expiry = product.expiry();
        let effective_yield = discount.spot_rate(expiry)? - foreign.spot_rate(expiry)? + div_yield
            - quanto_drift_adjustment(asset_vol, fx_vol, correlation);
        self.solve(product, spot, discount, effective_yield, &vol, store_grid)
    }
}

fn check_quanto_inputs(fx_vol: f64, correlation: f64) -> Result<(), PricingError> {
    if !(fx_vol >= 0.0) || !fx_vol.is_finite() {
        return Err(PricingError::InvalidArgument(format!(
            "FX volatility must be non-negative, got {}",
            fx_vol
        )));
    }
    if !(-1.0..=1.0).contains(&correlation) {
        return Err(PricingError::InvalidArgument(format!(
            "correlation must lie in [-1, 1], got {}",
            correlation
        )));
    }
    Ok(())
}

/// Tridiagonal `L` over the interior nodes with boundary rows folded in.
struct Operator {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
    // Implicit system
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
}

impl Operator {
    fn new(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
            a: vec![0.0; n],
            b: vec![0.0; n],
            c: vec![0.0; n],
        }
    }

    fn set(&mut self, drift: f64, var_rate: f64, dx: f64) {
        let n = self.diag.len();
        let diffusion = 0.5 * var_rate / (dx * dx);
        let convection = 0.5 * drift / dx;
        let lo = diffusion - convection;
        let mid = -2.0 * diffusion;
        let up = diffusion + convection;

        self.lower.fill(lo);
        self.diag.fill(mid);
        self.upper.fill(up);

        // V_0 = 2V_1 - V_2 and V_{n+1} = 2V_n - V_{n-1}
        self.lower[0] = 0.0;
        self.diag[0] = mid + 2.0 * lo;
        self.upper[0] = up - lo;
        self.lower[n - 1] = lo - up;
        self.diag[n - 1] = mid + 2.0 * up;
        self.upper[n - 1] = 0.0;
    }

    /// `out = u + w·L·u`
    fn apply(&self, w: f64, u: &[f64], out: &mut [f64]) {
        let n = u.len();
        for i in 0..n {
            let mut lu = self.diag[i] * u[i];
            if i > 0 {
                lu += self.lower[i] * u[i - 1];
            }
            if i + 1 < n {
                lu += self.upper[i] * u[i + 1];
            }
            out[i] = u[i] + w * lu;
        }
    }

    /// Solves `(I - w·L)·out = rhs`.
    fn solve_implicit(
        &mut self,
        w: f64,
        rhs: &[f64],
        scratch: &mut TridiagonalScratch,
        out: &mut [f64],
    ) -> Result<(), PricingError> {
        for i in 0..self.diag.len() {
            self.a[i] = -w * self.lower[i];
            self.b[i] = 1.0 - w * self.diag[i];
            self.c[i] = -w * self.upper[i];
        }
        solve_tridiagonal(&self.a, &self.b, &self.c, rhs, scratch, out)
    }
}

/// PDE price of a European option.
///
/// # Errors
///
/// `InvalidArgument` on invalid contract or model inputs; see
/// [`PdeSolver::solve`].
#[allow(clippy::too_many_arguments)]
pub fn price_european(
    option: OptionType,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    discount: &YieldCurve,
    div_yield: f64,
    vol: &VolatilityTermStructure,
    config: &PdeConfig,
    store_grid: bool,
) -> Result<PdeResult, PricingError> {
    let product = EuropeanCallPut::new(option, strike, time_to_exp)?;
    PdeSolver::new(config.clone()).solve(&product, spot, discount, div_yield, vol, store_grid)
}

/// PDE price of a cash-or-nothing digital option.
///
/// # Errors
///
/// See [`price_european`].
#[allow(clippy::too_many_arguments)]
pub fn price_digital(
    option: OptionType,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    discount: &YieldCurve,
    div_yield: f64,
    vol: &VolatilityTermStructure,
    config: &PdeConfig,
    store_grid: bool,
) -> Result<PdeResult, PricingError> {
    let product = DigitalCallPut::new(option, strike, time_to_exp)?;
    PdeSolver::new(config.clone()).solve(&product, spot, discount, div_yield, vol, store_grid)
}

/// PDE price of an American option.
///
/// # Errors
///
/// See [`price_european`].
#[allow(clippy::too_many_arguments)]
pub fn price_american(
    option: OptionType,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    discount: &YieldCurve,
    div_yield: f64,
    vol: &VolatilityTermStructure,
    config: &PdeConfig,
    store_grid: bool,
) -> Result<PdeResult, PricingError> {
    let product = AmericanCallPut::new(option, strike, time_to_exp)?;
    PdeSolver::new(config.clone()).solve(&product, spot, discount, div_yield, vol, store_grid)
}

/// PDE price of a quanto European option; see [`PdeSolver::solve_quanto`].
///
/// # Errors
///
/// See [`PdeSolver::solve_quanto`].
#[allow(clippy::too_many_arguments)]
pub fn price_quanto_european(
    option: OptionType,
    strike: f64,
    time_to_exp: f64,
    spot: f64,
    discount: &YieldCurve,
    foreign: &YieldCurve,
    div_yield: f64,
    asset_vol: f64,
    fx_vol: f64,
    correlation: f64,
    config: &PdeConfig,
    store_grid: bool,
) -> Result<PdeResult, PricingError> {
    let product = EuropeanCallPut::new(option, strike, time_to_exp)?;
    PdeSolver::new(config.clone()).solve_quanto(
        &product,
        spot,
        discount,
        foreign,
        div_yield,
        asset_vol,
        fx_vol,
        correlation,
        store_grid,
    )
}
