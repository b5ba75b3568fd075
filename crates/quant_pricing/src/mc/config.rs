//! Monte Carlo simulation configuration.
//!
//! This module provides the engine kinds and a validating builder for
//! [`MonteCarloConfig`].

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Default simulation seed (the reference Mersenne Twister seed).
pub const DEFAULT_SEED: u64 = 5489;

/// Uniform random number engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum UrngKind {
    /// Mersenne Twister MT19937.
    #[default]
    Mt19937,
    /// Park-Miller minimal standard LCG.
    MinStdRand,
    /// RANLUX luxury level 3 (24-bit).
    Ranlux3,
    /// RANLUX luxury level 4 (48-bit).
    Ranlux4,
}

/// Path discretisation scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum PathGenKind {
    /// Log-Euler stepping between fixing times.
    #[default]
    Euler,
}

/// Variance reduction technique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ControlVariate {
    /// Plain sampling.
    #[default]
    None,
    /// Antithetic pairs: each sample averages a path and its mirror.
    Antithetic,
}

macro_rules! named_kind {
    ($kind:ty, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $kind {
            /// Canonical upper-case name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $kind {
            type Err = ConfigError;

            /// Case-insensitive parse of the canonical name.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ConfigError::UnknownKind {
                        kind: $label,
                        name: s.to_string(),
                    }),
                }
            }
        }
    };
}

named_kind!(UrngKind, "random number generator", {
    Mt19937 => "MT19937",
    MinStdRand => "MINSTDRAND",
    Ranlux3 => "RANLUX3",
    Ranlux4 => "RANLUX4",
});

named_kind!(PathGenKind, "path generator", {
    Euler => "EULER",
});

named_kind!(ControlVariate, "control variate", {
    None => "NONE",
    Antithetic => "ANTITHETIC",
});

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use quant_pricing::mc::{ControlVariate, MonteCarloConfig, UrngKind};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .urng("ranlux4".parse().unwrap())
///     .control_variate(ControlVariate::Antithetic)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.urng(), UrngKind::Ranlux4);
/// assert_eq!(config.n_samples(), 5_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MonteCarloConfigBuilder"))]
pub struct MonteCarloConfig {
    urng: UrngKind,
    path_gen: PathGenKind,
    control_variate: ControlVariate,
    n_paths: usize,
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Uniform engine.
    #[inline]
    pub fn urng(&self) -> UrngKind {
        self.urng
    }

    /// Path discretisation.
    #[inline]
    pub fn path_gen(&self) -> PathGenKind {
        self.path_gen
    }

    /// Variance reduction.
    #[inline]
    pub fn control_variate(&self) -> ControlVariate {
        self.control_variate
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Simulation seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of independent samples: `ceil(n_paths / 2)` antithetic pairs,
    /// otherwise one per path.
    ///
    /// An odd `n_paths` under [`ControlVariate::Antithetic`] simulates
    /// `n_paths + 1` paths, the last pair being completed.
    #[inline]
    pub fn n_samples(&self) -> usize {
        match self.control_variate {
            ControlVariate::None => self.n_paths,
            ControlVariate::Antithetic => self.n_paths.div_ceil(2),
        }
    }

    /// Copy of this configuration with a different path count.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` on a zero path count.
    pub fn with_n_paths(&self, n_paths: usize) -> Result<Self, ConfigError> {
        let config = Self {
            n_paths,
            ..self.clone()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPathCount` if `n_paths` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset kinds take their defaults (MT19937, Euler, no control variate) and
/// the seed defaults to [`DEFAULT_SEED`]. The path count must be given.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MonteCarloConfigBuilder {
    urng: UrngKind,
    path_gen: PathGenKind,
    control_variate: ControlVariate,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the uniform engine.
    #[inline]
    pub fn urng(mut self, urng: UrngKind) -> Self {
        self.urng = urng;
        self
    }

    /// Sets the path discretisation.
    #[inline]
    pub fn path_gen(mut self, path_gen: PathGenKind) -> Self {
        self.path_gen = path_gen;
        self
    }

    /// Sets the variance reduction.
    #[inline]
    pub fn control_variate(mut self, control_variate: ControlVariate) -> Self {
        self.control_variate = control_variate;
        self
    }

    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths, at least 1
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is not set or invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            urng: self.urng,
            path_gen: self.path_gen,
            control_variate: self.control_variate,
            n_paths,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<MonteCarloConfigBuilder> for MonteCarloConfig {
    type Error = ConfigError;

    fn try_from(builder: MonteCarloConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Kind names
    // ========================================

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("MT19937".parse::<UrngKind>().unwrap(), UrngKind::Mt19937);
        assert_eq!("minstdrand".parse::<UrngKind>().unwrap(), UrngKind::MinStdRand);
        assert_eq!("Ranlux3".parse::<UrngKind>().unwrap(), UrngKind::Ranlux3);
        assert_eq!(" RANLUX4 ".parse::<UrngKind>().unwrap(), UrngKind::Ranlux4);
        assert_eq!("euler".parse::<PathGenKind>().unwrap(), PathGenKind::Euler);
        assert_eq!("NONE".parse::<ControlVariate>().unwrap(), ControlVariate::None);
        assert_eq!(
            "antithetic".parse::<ControlVariate>().unwrap(),
            ControlVariate::Antithetic
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(matches!(
            "SOBOL".parse::<UrngKind>(),
            Err(ConfigError::UnknownKind { .. })
        ));
        assert!("MILSTEIN".parse::<PathGenKind>().is_err());
        assert!("CONTROL".parse::<ControlVariate>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [
            UrngKind::Mt19937,
            UrngKind::MinStdRand,
            UrngKind::Ranlux3,
            UrngKind::Ranlux4,
        ] {
            assert_eq!(kind.to_string().parse::<UrngKind>().unwrap(), kind);
        }
    }

    // ========================================
    // Builder
    // ========================================

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().n_paths(1000).build().unwrap();

        assert_eq!(config.n_paths(), 1000);
        assert_eq!(config.urng(), UrngKind::Mt19937);
        assert_eq!(config.path_gen(), PathGenKind::Euler);
        assert_eq!(config.control_variate(), ControlVariate::None);
        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(config.n_samples(), 1000);
    }

    #[test]
    fn test_antithetic_sample_count_rounds_up() {
        let config = MonteCarloConfig::builder()
            .n_paths(1001)
            .control_variate(ControlVariate::Antithetic)
            .build()
            .unwrap();
        assert_eq!(config.n_samples(), 501);
        // The odd path is completed into a full pair
        assert_eq!(2 * config.n_samples(), config.n_paths() + 1);
    }

    #[test]
    fn test_config_invalid_path_counts() {
        assert!(matches!(
            MonteCarloConfig::builder().n_paths(0).build(),
            Err(ConfigError::InvalidPathCount(0))
        ));
        assert!(MonteCarloConfig::builder().n_paths(10_000_001).build().is_ok());
        assert!(MonteCarloConfig::builder().n_paths(usize::MAX).build().is_ok());
    }

    #[test]
    fn test_config_missing_paths() {
        let result = MonteCarloConfig::builder().seed(1).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_paths",
                ..
            })
        ));
    }

    #[test]
    fn test_with_n_paths() {
        let config = MonteCarloConfig::builder().n_paths(10).seed(3).build().unwrap();
        let bigger = config.with_n_paths(500).unwrap();
        assert_eq!(bigger.n_paths(), 500);
        assert_eq!(bigger.seed(), 3);
        assert!(config.with_n_paths(0).is_err());
    }
}
