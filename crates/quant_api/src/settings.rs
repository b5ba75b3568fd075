//! Engine settings management
//!
//! Loads engine defaults from an optional TOML document, then applies
//! `QUANT_*` environment overrides.
//!
//! ```toml
//! log_level = "debug"
//!
//! [monte_carlo]
//! urng = "ranlux4"
//! control_variate = "antithetic"
//! n_paths = 50000
//! seed = 42
//!
//! [pde]
//! n_time_steps = 200
//! n_spot_nodes = 400
//! theta = 0.5
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use quant_core::types::PricingError;
use quant_pricing::mc::{ControlVariate, MonteCarloConfig, PathGenKind, UrngKind, DEFAULT_SEED};
use quant_pricing::pde::config::{DEFAULT_SPOT_NODES, DEFAULT_STD_DEVS, DEFAULT_THETA, DEFAULT_TIME_STEPS};
use quant_pricing::pde::PdeConfig;
use quant_pricing::ConfigError;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default Monte Carlo path count.
pub const DEFAULT_MC_PATHS: usize = 10_000;

/// Log level override.
pub const ENV_LOG_LEVEL: &str = "QUANT_LOG_LEVEL";
/// Monte Carlo path count override.
pub const ENV_MC_PATHS: &str = "QUANT_MC_PATHS";
/// Monte Carlo seed override.
pub const ENV_MC_SEED: &str = "QUANT_MC_SEED";
/// Uniform generator override.
pub const ENV_MC_URNG: &str = "QUANT_MC_URNG";
/// Control variate override.
pub const ENV_MC_CONTROL_VARIATE: &str = "QUANT_MC_CONTROL_VARIATE";
/// PDE time step override.
pub const ENV_PDE_TIME_STEPS: &str = "QUANT_PDE_TIME_STEPS";
/// PDE spot node override.
pub const ENV_PDE_SPOT_NODES: &str = "QUANT_PDE_SPOT_NODES";
/// PDE theta override.
pub const ENV_PDE_THETA: &str = "QUANT_PDE_THETA";

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Unrecognised log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unreadable or malformed settings document.
    #[error("Settings file error: {0}")]
    FileError(String),

    /// Unparseable environment override.
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Settings that do not form a valid engine configuration.
    #[error(transparent)]
    Engine(#[from] ConfigError),
}

impl From<SettingsError> for PricingError {
    fn from(err: SettingsError) -> Self {
        PricingError::ConfigurationError(err.to_string())
    }
}

/// Log levels accepted by [`crate::telemetry::init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Engine configuration
    Debug,
    /// Market store mutations
    #[default]
    Info,
    /// Recoverable anomalies
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(SettingsError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Case-insensitive deserialisation through `FromStr`.
fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// Monte Carlo defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct McSettings {
    /// Uniform generator (default MT19937)
    #[serde(deserialize_with = "deserialize_from_str")]
    pub urng: UrngKind,
    /// Path discretisation (default EULER)
    #[serde(deserialize_with = "deserialize_from_str")]
    pub path_gen: PathGenKind,
    /// Variance reduction (default NONE)
    #[serde(deserialize_with = "deserialize_from_str")]
    pub control_variate: ControlVariate,
    /// Number of paths (default 10 000)
    pub n_paths: usize,
    /// Base seed (default 5489)
    pub seed: u64,
}

impl Default for McSettings {
    fn default() -> Self {
        Self {
            urng: UrngKind::default(),
            path_gen: PathGenKind::default(),
            control_variate: ControlVariate::default(),
            n_paths: DEFAULT_MC_PATHS,
            seed: DEFAULT_SEED,
        }
    }
}

impl McSettings {
    /// Validated engine configuration.
    pub fn to_config(&self) -> Result<MonteCarloConfig, ConfigError> {
        MonteCarloConfig::builder()
            .urng(self.urng)
            .path_gen(self.path_gen)
            .control_variate(self.control_variate)
            .n_paths(self.n_paths)
            .seed(self.seed)
            .build()
    }
}

/// PDE defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PdeSettings {
    /// Time steps (default 1)
    pub n_time_steps: usize,
    /// Interior spot nodes (default 10)
    pub n_spot_nodes: usize,
    /// Grid half-width in standard deviations (default 4)
    pub n_std_devs: f64,
    /// Implicitness weight (default 0, explicit)
    pub theta: f64,
}

impl Default for PdeSettings {
    fn default() -> Self {
        Self {
            n_time_steps: DEFAULT_TIME_STEPS,
            n_spot_nodes: DEFAULT_SPOT_NODES,
            n_std_devs: DEFAULT_STD_DEVS,
            theta: DEFAULT_THETA,
        }
    }
}

impl PdeSettings {
    /// Validated engine configuration.
    pub fn to_config(&self) -> Result<PdeConfig, ConfigError> {
        PdeConfig::builder()
            .n_time_steps(self.n_time_steps)
            .n_spot_nodes(self.n_spot_nodes)
            .n_std_devs(self.n_std_devs)
            .theta(self.theta)
            .build()
    }
}

/// Process-wide engine settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Fallback log level when `RUST_LOG` is unset (default info)
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Monte Carlo defaults
    pub monte_carlo: McSettings,
    /// PDE defaults
    pub pde: PdeSettings,
}

impl EngineSettings {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: EngineSettings = toml::from_str(content)
            .map_err(|e| SettingsError::FileError(format!("Failed to parse TOML: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::FileError(format!("Failed to read settings file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Defaults with the process environment applied.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.apply_env_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Build settings from all sources.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Settings file
    /// 3. Default values
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_env_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        debug!(
            log_level = %settings.log_level,
            n_paths = settings.monte_carlo.n_paths,
            n_time_steps = settings.pde.n_time_steps,
            "Engine settings loaded"
        );
        Ok(settings)
    }

    /// Applies every `QUANT_*` variable that `lookup` resolves.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(urng) = lookup(ENV_MC_URNG) {
            self.monte_carlo.urng = urng.parse()?;
        }
        if let Some(cv) = lookup(ENV_MC_CONTROL_VARIATE) {
            self.monte_carlo.control_variate = cv.parse()?;
        }
        if let Some(n) = env_value(&lookup, ENV_MC_PATHS)? {
            self.monte_carlo.n_paths = n;
        }
        if let Some(seed) = env_value(&lookup, ENV_MC_SEED)? {
            self.monte_carlo.seed = seed;
        }
        if let Some(n) = env_value(&lookup, ENV_PDE_TIME_STEPS)? {
            self.pde.n_time_steps = n;
        }
        if let Some(n) = env_value(&lookup, ENV_PDE_SPOT_NODES)? {
            self.pde.n_spot_nodes = n;
        }
        if let Some(theta) = env_value(&lookup, ENV_PDE_THETA)? {
            self.pde.theta = theta;
        }
        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.monte_carlo.to_config()?;
        self.pde.to_config()?;
        Ok(())
    }

    /// Monte Carlo engine configuration.
    pub fn mc_config(&self) -> Result<MonteCarloConfig, SettingsError> {
        Ok(self.monte_carlo.to_config()?)
    }

    /// PDE engine configuration.
    pub fn pde_config(&self) -> Result<PdeConfig, SettingsError> {
        Ok(self.pde.to_config()?)
    }
}

fn env_value<F, T>(lookup: &F, key: &str) -> Result<Option<T>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::EnvError(format!("{}: invalid value '{}'", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quant_core::types::ErrorKind;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================
    // Defaults
    // ========================================

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.monte_carlo.n_paths, 10_000);
        assert_eq!(settings.monte_carlo.seed, DEFAULT_SEED);
        assert_eq!(settings.monte_carlo.urng, UrngKind::Mt19937);
        assert_eq!(settings.pde.to_config().unwrap(), PdeConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str(" Warn ").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    // ========================================
    // TOML
    // ========================================

    #[test]
    fn test_toml_parsing() {
        let settings = EngineSettings::from_toml_str(
            r#"
            log_level = "DEBUG"

            [monte_carlo]
            urng = "ranlux4"
            control_variate = "Antithetic"
            n_paths = 50000
            seed = 42

            [pde]
            n_time_steps = 200
            n_spot_nodes = 400
            theta = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level, LogLevel::Debug);
        let mc = settings.mc_config().unwrap();
        assert_eq!(mc.urng(), UrngKind::Ranlux4);
        assert_eq!(mc.control_variate(), ControlVariate::Antithetic);
        assert_eq!(mc.n_paths(), 50_000);
        assert_eq!(mc.seed(), 42);

        let pde = settings.pde_config().unwrap();
        assert_eq!(pde.n_time_steps(), 200);
        assert_eq!(pde.n_spot_nodes(), 400);
        assert_eq!(pde.n_std_devs(), DEFAULT_STD_DEVS);
        assert_eq!(pde.theta(), 0.5);
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let settings = EngineSettings::from_toml_str("[pde]\ntheta = 1.0\n").unwrap();
        assert_eq!(settings.monte_carlo, McSettings::default());
        assert_eq!(settings.pde.theta, 1.0);
        assert_eq!(settings.pde.n_spot_nodes, DEFAULT_SPOT_NODES);
    }

    #[test]
    fn test_toml_rejects_bad_documents() {
        assert!(matches!(
            EngineSettings::from_toml_str("[monte_carlo]\nurng = \"sobol\"\n"),
            Err(SettingsError::FileError(_))
        ));
        assert!(matches!(
            EngineSettings::from_toml_str("[pde]\ngamma = 1.0\n"),
            Err(SettingsError::FileError(_))
        ));
        assert!(matches!(
            EngineSettings::from_toml_str("[pde]\ntheta = 2.0\n"),
            Err(SettingsError::Engine(_))
        ));
        assert!(matches!(
            EngineSettings::from_toml_str("[monte_carlo]\nn_paths = 0\n"),
            Err(SettingsError::Engine(ConfigError::InvalidPathCount(0)))
        ));
    }

    // ========================================
    // Environment
    // ========================================

    #[test]
    fn test_env_overrides() {
        let mut settings = EngineSettings::from_toml_str("[monte_carlo]\nn_paths = 500\n").unwrap();
        settings
            .apply_env_overrides(env(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_MC_PATHS, "2000"),
                (ENV_MC_SEED, "7"),
                (ENV_PDE_THETA, "0.5"),
            ]))
            .unwrap();

        assert_eq!(settings.log_level, LogLevel::Warn);
        assert_eq!(settings.monte_carlo.n_paths, 2000);
        assert_eq!(settings.monte_carlo.seed, 7);
        assert_eq!(settings.pde.theta, 0.5);
        assert_eq!(settings.pde.n_time_steps, DEFAULT_TIME_STEPS);
    }

    #[test]
    fn test_env_override_errors() {
        let mut settings = EngineSettings::default();
        assert!(matches!(
            settings.apply_env_overrides(env(&[(ENV_MC_PATHS, "many")])),
            Err(SettingsError::EnvError(_))
        ));
        assert!(matches!(
            settings.apply_env_overrides(env(&[(ENV_LOG_LEVEL, "loud")])),
            Err(SettingsError::InvalidLogLevel(_))
        ));
        assert!(matches!(
            settings.apply_env_overrides(env(&[(ENV_MC_URNG, "xorshift")])),
            Err(SettingsError::Engine(ConfigError::UnknownKind { .. }))
        ));
    }

    #[test]
    fn test_maps_to_configuration_error() {
        let err: PricingError = SettingsError::EnvError("bad".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
    }
}
