//! Piecewise-polynomial curves of order 0 (flat) and 1 (linear).
//!
//! A [`PiecewisePolynomial`] is defined by strictly increasing breakpoints
//! `b_0 < b_1 < ... < b_{n-1}` and one value per breakpoint. Segment `i`
//! covers `[b_i, b_{i+1})`:
//!
//! - **Flat**: the function equals `v_i` on the whole segment
//! - **Linear**: the function interpolates linearly from `v_i` to `v_{i+1}`
//!
//! Outside `[b_0, b_{n-1}]` the curve is extrapolated as a constant equal to
//! the nearest edge value, with zero derivative.
//!
//! Integrals are computed in closed form from cumulative segment areas, so
//! `integral(x, x)` is exactly zero and integrals are additive over
//! adjacent intervals.

use std::fmt;

use crate::types::InterpolationError;

/// Polynomial order of each curve segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolyOrder {
    /// Piecewise constant, right-open segments.
    #[default]
    Flat,
    /// Piecewise linear between breakpoints.
    Linear,
}

impl PolyOrder {
    /// Numeric order (0 or 1).
    #[inline]
    pub fn degree(&self) -> usize {
        match self {
            PolyOrder::Flat => 0,
            PolyOrder::Linear => 1,
        }
    }
}

impl TryFrom<usize> for PolyOrder {
    type Error = InterpolationError;

    fn try_from(order: usize) -> Result<Self, Self::Error> {
        match order {
            0 => Ok(PolyOrder::Flat),
            1 => Ok(PolyOrder::Linear),
            _ => Err(InterpolationError::InvalidOrder { order }),
        }
    }
}

impl fmt::Display for PolyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyOrder::Flat => write!(f, "flat"),
            PolyOrder::Linear => write!(f, "linear"),
        }
    }
}

/// Immutable piecewise-polynomial curve.
///
/// # Example
///
/// ```
/// use quant_core::math::interpolators::{PiecewisePolynomial, PolyOrder};
///
/// let curve = PiecewisePolynomial::new(&[1.0, 2.0, 3.0], &[10.0, 20.0, 40.0], PolyOrder::Linear)
///     .unwrap();
///
/// assert_eq!(curve.evaluate(2.0, 0), 20.0);
/// assert_eq!(curve.evaluate(2.5, 0), 30.0);
/// assert_eq!(curve.evaluate(2.5, 1), 20.0);
/// assert_eq!(curve.evaluate(0.0, 0), 10.0); // flat extrapolation
///
/// // Trapezoid areas: 15 + 30
/// assert_eq!(curve.integral(1.0, 3.0), 45.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
    order: PolyOrder,
    /// `cumulative[i]` is the integral from `b_0` to `b_i`.
    cumulative: Vec<f64>,
}

impl PiecewisePolynomial {
    /// Build a curve from breakpoints and values.
    ///
    /// # Arguments
    ///
    /// * `breakpoints` - Strictly increasing, finite breakpoints
    /// * `values` - One finite value per breakpoint
    /// * `order` - Segment polynomial order
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InsufficientData` - no breakpoints
    /// * `InterpolationError::LengthMismatch` - lengths differ
    /// * `InterpolationError::NonMonotonicData` - breakpoints not strictly increasing
    /// * `InterpolationError::InvalidInput` - non-finite input
    pub fn new(
        breakpoints: &[f64],
        values: &[f64],
        order: PolyOrder,
    ) -> Result<Self, InterpolationError> {
        if breakpoints.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        if breakpoints.len() != values.len() {
            return Err(InterpolationError::LengthMismatch {
                breakpoints: breakpoints.len(),
                values: values.len(),
            });
        }
        if breakpoints.iter().chain(values).any(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput(
                "breakpoints and values must be finite".to_string(),
            ));
        }
        if let Some(index) = breakpoints.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InterpolationError::NonMonotonicData { index: index + 1 });
        }

        let mut cumulative = Vec::with_capacity(breakpoints.len());
        cumulative.push(0.0);
        for i in 0..breakpoints.len() - 1 {
            let width = breakpoints[i + 1] - breakpoints[i];
            let area = match order {
                PolyOrder::Flat => values[i] * width,
                PolyOrder::Linear => 0.5 * (values[i] + values[i + 1]) * width,
            };
            cumulative.push(cumulative[i] + area);
        }

        Ok(Self {
            breakpoints: breakpoints.to_vec(),
            values: values.to_vec(),
            order,
            cumulative,
        })
    }

    /// Breakpoints of the curve.
    #[inline]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Values at the breakpoints.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Segment order.
    #[inline]
    pub fn order(&self) -> PolyOrder {
        self.order
    }

    /// Number of breakpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Always false: a curve holds at least one breakpoint.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Index of the segment whose left breakpoint is the greatest one `<= x`.
    ///
    /// Only meaningful for `b_0 <= x < b_{n-1}`.
    #[inline]
    fn find_segment(&self, x: f64) -> usize {
        let pos = self.breakpoints.partition_point(|&b| b <= x);
        pos.saturating_sub(1).min(self.breakpoints.len() - 1)
    }

    #[inline]
    fn slope(&self, i: usize) -> f64 {
        (self.values[i + 1] - self.values[i]) / (self.breakpoints[i + 1] - self.breakpoints[i])
    }

    #[inline]
    fn first(&self) -> f64 {
        self.breakpoints[0]
    }

    #[inline]
    fn last(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Evaluate the curve or one of its derivatives at `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - Query point
    /// * `deriv_order` - 0 for the value, 1 for the first derivative; higher
    ///   derivatives are identically zero
    pub fn evaluate(&self, x: f64, deriv_order: usize) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n = self.breakpoints.len();
        if x < self.first() {
            return if deriv_order == 0 { self.values[0] } else { 0.0 };
        }
        if x >= self.last() {
            return if deriv_order == 0 {
                self.values[n - 1]
            } else {
                0.0
            };
        }

        let i = self.find_segment(x);
        match (self.order, deriv_order) {
            (PolyOrder::Flat, 0) => self.values[i],
            (PolyOrder::Flat, _) => 0.0,
            (PolyOrder::Linear, 0) => {
                let dx = x - self.breakpoints[i];
                if dx == 0.0 {
                    self.values[i]
                } else {
                    self.values[i] + self.slope(i) * dx
                }
            }
            (PolyOrder::Linear, 1) => self.slope(i),
            (PolyOrder::Linear, _) => 0.0,
        }
    }

    /// Evaluate at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64], deriv_order: usize) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x, deriv_order)).collect()
    }

    /// Integral of the curve from `b_0` to `x` (negative for `x < b_0`).
    fn antiderivative(&self, x: f64) -> f64 {
        let n = self.breakpoints.len();
        if x <= self.first() {
            return (x - self.first()) * self.values[0];
        }
        if x >= self.last() {
            return self.cumulative[n - 1] + (x - self.last()) * self.values[n - 1];
        }

        let i = self.find_segment(x);
        let dx = x - self.breakpoints[i];
        let partial = match self.order {
            PolyOrder::Flat => self.values[i] * dx,
            PolyOrder::Linear => dx * (self.values[i] + 0.5 * self.slope(i) * dx),
        };
        self.cumulative[i] + partial
    }

    /// Definite integral from `x_start` to `x_end`.
    ///
    /// Returns the negated integral when `x_end < x_start` and exactly zero
    /// when the two coincide.
    pub fn integral(&self, x_start: f64, x_end: f64) -> f64 {
        if x_start == x_end {
            return 0.0;
        }
        self.antiderivative(x_end) - self.antiderivative(x_start)
    }

    /// Definite integrals from `x_start` to each point of `x_ends`.
    pub fn integrals(&self, x_start: f64, x_ends: &[f64]) -> Vec<f64> {
        let base = self.antiderivative(x_start);
        x_ends
            .iter()
            .map(|&x| {
                if x == x_start {
                    0.0
                } else {
                    self.antiderivative(x) - base
                }
            })
            .collect()
    }

    /// Pointwise sum of two curves on the union of their breakpoints.
    ///
    /// Both curves are evaluated at every union breakpoint; the result has
    /// the requested segment order.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::interpolators::{PiecewisePolynomial, PolyOrder};
    ///
    /// let a = PiecewisePolynomial::new(&[0.0, 2.0], &[1.0, 3.0], PolyOrder::Linear).unwrap();
    /// let b = PiecewisePolynomial::new(&[1.0], &[10.0], PolyOrder::Flat).unwrap();
    /// let s = a.sum(&b, PolyOrder::Linear).unwrap();
    ///
    /// assert_eq!(s.breakpoints(), &[0.0, 1.0, 2.0]);
    /// assert_eq!(s.values(), &[11.0, 12.0, 13.0]);
    /// ```
    pub fn sum(&self, other: &Self, order: PolyOrder) -> Result<Self, InterpolationError> {
        let mut union = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.len() || j < other.len() {
            let next = match (self.breakpoints.get(i), other.breakpoints.get(j)) {
                (Some(&a), Some(&b)) if a < b => {
                    i += 1;
                    a
                }
                (Some(&a), Some(&b)) if b < a => {
                    j += 1;
                    b
                }
                (Some(&a), Some(_)) => {
                    i += 1;
                    j += 1;
                    a
                }
                (Some(&a), None) => {
                    i += 1;
                    a
                }
                (None, Some(&b)) => {
                    j += 1;
                    b
                }
                (None, None) => break,
            };
            union.push(next);
        }

        let values: Vec<f64> = union
            .iter()
            .map(|&x| self.evaluate(x, 0) + other.evaluate(x, 0))
            .collect();
        Self::new(&union, &values, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn linear_curve() -> PiecewisePolynomial {
        // bkpts 1..5, values -10..10 step 5
        PiecewisePolynomial::new(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[-10.0, -5.0, 0.0, 5.0, 10.0],
            PolyOrder::Linear,
        )
        .unwrap()
    }

    fn flat_curve() -> PiecewisePolynomial {
        PiecewisePolynomial::new(&[0.0, 1.0, 3.0], &[2.0, 4.0, 8.0], PolyOrder::Flat).unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_rejects_empty() {
        let result = PiecewisePolynomial::new(&[], &[], PolyOrder::Flat);
        assert!(matches!(
            result,
            Err(InterpolationError::InsufficientData { got: 0, need: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = PiecewisePolynomial::new(&[0.0, 1.0], &[1.0], PolyOrder::Linear);
        assert!(matches!(
            result,
            Err(InterpolationError::LengthMismatch {
                breakpoints: 2,
                values: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_non_increasing() {
        let result = PiecewisePolynomial::new(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0], PolyOrder::Flat);
        assert!(matches!(
            result,
            Err(InterpolationError::NonMonotonicData { index: 2 })
        ));

        let result = PiecewisePolynomial::new(&[2.0, 1.0], &[1.0, 2.0], PolyOrder::Flat);
        assert!(matches!(
            result,
            Err(InterpolationError::NonMonotonicData { index: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = PiecewisePolynomial::new(&[0.0, f64::NAN], &[1.0, 2.0], PolyOrder::Flat);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_poly_order_try_from() {
        assert_eq!(PolyOrder::try_from(0).unwrap(), PolyOrder::Flat);
        assert_eq!(PolyOrder::try_from(1).unwrap(), PolyOrder::Linear);
        assert!(matches!(
            PolyOrder::try_from(3),
            Err(InterpolationError::InvalidOrder { order: 3 })
        ));
    }

    // ========================================
    // Evaluation
    // ========================================

    #[test]
    fn test_linear_evaluate() {
        let c = linear_curve();
        assert_eq!(c.evaluate(0.5, 0), -10.0);
        assert_eq!(c.evaluate(1.5, 0), -7.5);
        assert_eq!(c.evaluate(3.0, 0), 0.0);
        assert_eq!(c.evaluate(5.5, 0), 10.0);
    }

    #[test]
    fn test_linear_derivatives() {
        let c = linear_curve();
        assert_eq!(c.evaluate(0.5, 1), 0.0);
        assert_eq!(c.evaluate(1.5, 1), 5.0);
        assert_eq!(c.evaluate(4.999, 1), 5.0);
        assert_eq!(c.evaluate(5.0, 1), 0.0);
        assert_eq!(c.evaluate(2.5, 2), 0.0);
    }

    #[test]
    fn test_flat_is_right_open() {
        let c = flat_curve();
        assert_eq!(c.evaluate(-1.0, 0), 2.0);
        assert_eq!(c.evaluate(0.0, 0), 2.0);
        assert_eq!(c.evaluate(0.999, 0), 2.0);
        assert_eq!(c.evaluate(1.0, 0), 4.0);
        assert_eq!(c.evaluate(2.9, 0), 4.0);
        assert_eq!(c.evaluate(3.0, 0), 8.0);
        assert_eq!(c.evaluate(100.0, 0), 8.0);
        assert_eq!(c.evaluate(2.0, 1), 0.0);
    }

    #[test]
    fn test_single_breakpoint_is_constant() {
        let c = PiecewisePolynomial::new(&[1.0], &[3.0], PolyOrder::Linear).unwrap();
        assert_eq!(c.evaluate(-5.0, 0), 3.0);
        assert_eq!(c.evaluate(1.0, 0), 3.0);
        assert_eq!(c.evaluate(5.0, 0), 3.0);
        assert_eq!(c.integral(0.0, 2.0), 6.0);
    }

    #[test]
    fn test_evaluate_many() {
        let c = linear_curve();
        let v = c.evaluate_many(&[1.0, 2.5, 6.0], 0);
        assert_eq!(v, vec![-10.0, -2.5, 10.0]);
    }

    #[test]
    fn test_nan_query_propagates() {
        assert!(linear_curve().evaluate(f64::NAN, 0).is_nan());
    }

    // ========================================
    // Integration
    // ========================================

    #[test]
    fn test_linear_integral_inside_span() {
        let c = linear_curve();
        // Antisymmetric about x = 3
        assert_relative_eq!(c.integral(1.0, 5.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.integral(1.0, 3.0), -10.0, epsilon = 1e-12);
        assert_relative_eq!(c.integral(1.5, 2.5), -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_integral_with_extrapolation() {
        let c = linear_curve();
        assert_relative_eq!(c.integral(0.5, 1.0), -5.0, epsilon = 1e-12);
        assert_relative_eq!(c.integral(5.0, 6.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(c.integral(0.5, 6.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_integral() {
        let c = flat_curve();
        // 2*1 + 4*2
        assert_relative_eq!(c.integral(0.0, 3.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(c.integral(0.5, 1.5), 1.0 + 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.integral(3.0, 4.0), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_integral_is_negated() {
        let c = flat_curve();
        assert_relative_eq!(c.integral(3.0, 0.0), -c.integral(0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_integrals_vector() {
        let c = linear_curve();
        let xs = [0.5, 1.0, 3.0, 6.0];
        let ints = c.integrals(0.5, &xs);
        assert_eq!(ints[0], 0.0);
        for (x, v) in xs.iter().zip(&ints) {
            assert_relative_eq!(*v, c.integral(0.5, *x), epsilon = 1e-12);
        }
    }

    // ========================================
    // Summation
    // ========================================

    #[test]
    fn test_sum_union_breakpoints() {
        let a = PiecewisePolynomial::new(&[0.0, 2.0, 4.0], &[1.0, 1.0, 1.0], PolyOrder::Flat)
            .unwrap();
        let b = PiecewisePolynomial::new(&[1.0, 2.0, 3.0], &[5.0, 6.0, 7.0], PolyOrder::Flat)
            .unwrap();
        let s = a.sum(&b, PolyOrder::Flat).unwrap();
        assert_eq!(s.breakpoints(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.values(), &[6.0, 6.0, 7.0, 8.0, 8.0]);
    }

    #[test]
    fn test_sum_with_self_doubles() {
        let c = linear_curve();
        let s = c.sum(&c, PolyOrder::Linear).unwrap();
        for x in [0.0, 1.0, 1.3, 2.7, 4.0, 5.0, 7.0] {
            assert_relative_eq!(s.evaluate(x, 0), 2.0 * c.evaluate(x, 0), epsilon = 1e-12);
        }
    }

    // ========================================
    // Property-Based Tests
    // ========================================

    fn curve_inputs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1usize..12).prop_flat_map(|n| {
            (
                prop::collection::vec(0.01f64..2.0, n),
                prop::collection::vec(-100.0f64..100.0, n),
            )
                .prop_map(|(steps, values)| {
                    let mut x = -1.0;
                    let bkpts = steps
                        .iter()
                        .map(|s| {
                            x += s;
                            x
                        })
                        .collect();
                    (bkpts, values)
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_evaluate_at_breakpoint_is_exact((bk, vals) in curve_inputs(), linear in any::<bool>()) {
            let order = if linear { PolyOrder::Linear } else { PolyOrder::Flat };
            let c = PiecewisePolynomial::new(&bk, &vals, order).unwrap();
            for (x, v) in bk.iter().zip(&vals) {
                prop_assert_eq!(c.evaluate(*x, 0), *v);
            }
        }

        #[test]
        fn prop_integral_over_empty_interval_is_zero((bk, vals) in curve_inputs(), x in -5.0f64..30.0) {
            let c = PiecewisePolynomial::new(&bk, &vals, PolyOrder::Linear).unwrap();
            prop_assert_eq!(c.integral(x, x), 0.0);
            prop_assert_eq!(c.integrals(x, &[x])[0], 0.0);
        }

        #[test]
        fn prop_integral_is_additive(
            (bk, vals) in curve_inputs(),
            a in -5.0f64..30.0,
            b in -5.0f64..30.0,
            m in -5.0f64..30.0,
        ) {
            let c = PiecewisePolynomial::new(&bk, &vals, PolyOrder::Flat).unwrap();
            let whole = c.integral(a, b);
            let split = c.integral(a, m) + c.integral(m, b);
            prop_assert!((whole - split).abs() < 1e-8 * (1.0 + whole.abs()));
        }

        #[test]
        fn prop_sum_self_is_double((bk, vals) in curve_inputs(), x in -5.0f64..30.0, linear in any::<bool>()) {
            let order = if linear { PolyOrder::Linear } else { PolyOrder::Flat };
            let c = PiecewisePolynomial::new(&bk, &vals, order).unwrap();
            let s = c.sum(&c, order).unwrap();
            let expected = 2.0 * c.evaluate(x, 0);
            prop_assert!((s.evaluate(x, 0) - expected).abs() < 1e-9 * (1.0 + expected.abs()));
        }
    }
}
