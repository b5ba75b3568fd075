//! Price and first/second order sensitivities.

/// Price with analytic Greeks.
///
/// `theta` is the calendar decay `-∂V/∂T`; `vega` is per unit volatility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Present value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// -∂V/∂T
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
}

impl Greeks {
    /// Values in the fixed order `[price, delta, gamma, theta, vega]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.price, self.delta, self.gamma, self.theta, self.vega]
    }
}

impl From<Greeks> for [f64; 5] {
    fn from(g: Greeks) -> Self {
        g.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order() {
        let g = Greeks {
            price: 1.0,
            delta: 2.0,
            gamma: 3.0,
            theta: 4.0,
            vega: 5.0,
        };
        assert_eq!(g.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
        let arr: [f64; 5] = g.into();
        assert_eq!(arr, g.to_array());
    }
}
