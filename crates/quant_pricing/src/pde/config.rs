//! Finite-difference grid and scheme parameters.

use crate::error::ConfigError;

/// Default number of time steps.
pub const DEFAULT_TIME_STEPS: usize = 1;

/// Default number of interior spot nodes.
pub const DEFAULT_SPOT_NODES: usize = 10;

/// Default half-width of the grid in standard deviations.
pub const DEFAULT_STD_DEVS: f64 = 4.0;

/// Default theta (fully explicit).
pub const DEFAULT_THETA: f64 = 0.0;

/// PDE solver configuration.
///
/// `theta = 0` is the explicit scheme, `0.5` Crank-Nicolson and `1` fully
/// implicit.
///
/// # Examples
///
/// ```rust
/// use quant_pricing::pde::PdeConfig;
///
/// let config = PdeConfig::builder()
///     .n_time_steps(100)
///     .n_spot_nodes(200)
///     .theta(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(config.n_std_devs(), 4.0);
///
/// assert!(PdeConfig::builder().theta(1.5).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PdeConfigBuilder"))]
pub struct PdeConfig {
    n_time_steps: usize,
    n_spot_nodes: usize,
    n_std_devs: f64,
    theta: f64,
}

impl Default for PdeConfig {
    fn default() -> Self {
        Self {
            n_time_steps: DEFAULT_TIME_STEPS,
            n_spot_nodes: DEFAULT_SPOT_NODES,
            n_std_devs: DEFAULT_STD_DEVS,
            theta: DEFAULT_THETA,
        }
    }
}

impl PdeConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> PdeConfigBuilder {
        PdeConfigBuilder::default()
    }

    /// Number of time steps.
    #[inline]
    pub fn n_time_steps(&self) -> usize {
        self.n_time_steps
    }

    /// Number of interior spot nodes (two boundary nodes are added).
    #[inline]
    pub fn n_spot_nodes(&self) -> usize {
        self.n_spot_nodes
    }

    /// Grid half-width in standard deviations of the terminal log-spot.
    #[inline]
    pub fn n_std_devs(&self) -> f64 {
        self.n_std_devs
    }

    /// Implicitness weight in `[0, 1]`.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_time_steps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "n_time_steps",
                value: "must be at least 1".to_string(),
            });
        }
        if self.n_spot_nodes < 3 {
            return Err(ConfigError::InvalidParameter {
                name: "n_spot_nodes",
                value: format!("{} is below the minimum of 3", self.n_spot_nodes),
            });
        }
        if !(self.n_std_devs > 0.0) || !self.n_std_devs.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "n_std_devs",
                value: format!("{} must be positive", self.n_std_devs),
            });
        }
        if !(0.0..=1.0).contains(&self.theta) {
            return Err(ConfigError::InvalidParameter {
                name: "theta",
                value: format!("{} must lie in [0, 1]", self.theta),
            });
        }
        Ok(())
    }
}

/// Builder for [`PdeConfig`]; unset fields take the `DEFAULT_*` values.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PdeConfigBuilder {
    n_time_steps: Option<usize>,
    n_spot_nodes: Option<usize>,
    n_std_devs: Option<f64>,
    theta: Option<f64>,
}

impl PdeConfigBuilder {
    /// Sets the number of time steps.
    #[inline]
    pub fn n_time_steps(mut self, n: usize) -> Self {
        self.n_time_steps = Some(n);
        self
    }

    /// Sets the number of interior spot nodes.
    #[inline]
    pub fn n_spot_nodes(mut self, n: usize) -> Self {
        self.n_spot_nodes = Some(n);
        self
    }

    /// Sets the grid half-width in standard deviations.
    #[inline]
    pub fn n_std_devs(mut self, n: f64) -> Self {
        self.n_std_devs = Some(n);
        self
    }

    /// Sets the implicitness weight.
    #[inline]
    pub fn theta(mut self, theta: f64) -> Self {
        self.theta = Some(theta);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`PdeConfig::validate`].
    pub fn build(self) -> Result<PdeConfig, ConfigError> {
        let config = PdeConfig {
            n_time_steps: self.n_time_steps.unwrap_or(DEFAULT_TIME_STEPS),
            n_spot_nodes: self.n_spot_nodes.unwrap_or(DEFAULT_SPOT_NODES),
            n_std_devs: self.n_std_devs.unwrap_or(DEFAULT_STD_DEVS),
            theta: self.theta.unwrap_or(DEFAULT_THETA),
        };
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<PdeConfigBuilder> for PdeConfig {
    type Error = ConfigError;

    fn try_from(builder: PdeConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PdeConfig::builder().build().unwrap();
        assert_eq!(config, PdeConfig::default());
        assert_eq!(config.n_time_steps(), 1);
        assert_eq!(config.n_spot_nodes(), 10);
        assert_eq!(config.n_std_devs(), 4.0);
        assert_eq!(config.theta(), 0.0);
    }

    #[test]
    fn test_bounds() {
        assert!(PdeConfig::builder().n_time_steps(0).build().is_err());
        assert!(PdeConfig::builder().n_spot_nodes(2).build().is_err());
        assert!(PdeConfig::builder().n_spot_nodes(3).build().is_ok());
        assert!(PdeConfig::builder().n_std_devs(0.0).build().is_err());
        assert!(PdeConfig::builder().n_std_devs(f64::NAN).build().is_err());
        assert!(PdeConfig::builder().theta(-0.1).build().is_err());
        assert!(PdeConfig::builder().theta(1.0).build().is_ok());
    }

    #[test]
    fn test_error_names_field() {
        match PdeConfig::builder().theta(2.0).build() {
            Err(ConfigError::InvalidParameter { name, .. }) => assert_eq!(name, "theta"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
