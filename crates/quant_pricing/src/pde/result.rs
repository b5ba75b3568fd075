//! PDE solver output.

/// Full value surface of a PDE solve.
///
/// `values[k][i]` is the option value at `times[k]` and `spots[i]`; the
/// first row is time 0 and the last row the terminal payoff.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdeGrid {
    /// Time levels from 0 to expiry
    pub times: Vec<f64>,
    /// Spot levels, boundary nodes included
    pub spots: Vec<f64>,
    /// One row per time level, one column per spot level
    pub values: Vec<Vec<f64>>,
}

/// Result of a PDE solve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum PdeResult {
    /// Price at the initial spot.
    PriceOnly {
        /// Present value
        price: f64,
    },
    /// Price together with the full value grid.
    PriceWithGrid {
        /// Present value
        price: f64,
        /// Value surface
        grid: PdeGrid,
    },
}

impl PdeResult {
    /// Present value at the initial spot.
    #[inline]
    pub fn price(&self) -> f64 {
        match self {
            Self::PriceOnly { price } | Self::PriceWithGrid { price, .. } => *price,
        }
    }

    /// Value grid, if it was requested.
    #[inline]
    pub fn grid(&self) -> Option<&PdeGrid> {
        match self {
            Self::PriceOnly { .. } => None,
            Self::PriceWithGrid { grid, .. } => Some(grid),
        }
    }
}
