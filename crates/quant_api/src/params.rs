//! String-keyed engine parameter maps.
//!
//! Bindings that pass dictionaries resolve them here, once, into typed
//! configs. Keys are matched case-insensitively after trimming; values
//! naming engine kinds are case-insensitive too.
//!
//! | Engine | Required keys | Optional keys |
//! |---|---|---|
//! | Monte Carlo | `URNGTYPE`, `PATHGENTYPE` | `CONTROLVARTYPE`, `SEED` |
//! | PDE | `NTIMESTEPS`, `NSPOTNODES`, `NSTDDEVS`, `THETA` | |

use std::collections::HashMap;
use std::str::FromStr;

use quant_core::types::PricingError;
use quant_pricing::mc::MonteCarloConfig;
use quant_pricing::pde::PdeConfig;
use quant_pricing::ConfigError;

const MC_KEYS: [&str; 4] = ["URNGTYPE", "PATHGENTYPE", "CONTROLVARTYPE", "SEED"];
const PDE_KEYS: [&str; 4] = ["NTIMESTEPS", "NSPOTNODES", "NSTDDEVS", "THETA"];

/// Trimmed, upper-cased view of a parameter map restricted to `allowed`.
struct Params<'a> {
    entries: HashMap<String, &'a str>,
}

impl<'a> Params<'a> {
    fn new(params: &'a HashMap<String, String>, allowed: &[&str]) -> Result<Self, ConfigError> {
        let mut entries = HashMap::with_capacity(params.len());
        for (key, value) in params {
            let key = key.trim().to_ascii_uppercase();
            if !allowed.contains(&key.as_str()) {
                return Err(ConfigError::InvalidParameter {
                    name: "parameter map",
                    value: format!("unknown key '{}'", key),
                });
            }
            entries.insert(key, value.as_str());
        }
        Ok(Self { entries })
    }

    fn optional<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
    {
        match self.entries.get(key) {
            None => Ok(None),
            Some(raw) => raw.trim().parse().map(Some).map_err(|_| ConfigError::InvalidParameter {
                name: key,
                value: format!("cannot parse '{}'", raw),
            }),
        }
    }

    fn required<T>(&self, key: &'static str) -> Result<T, ConfigError>
    where
        T: FromStr,
    {
        self.optional(key)?.ok_or_else(|| missing(key))
    }

    /// Engine kinds surface their own `UnknownKind` error.
    fn kind<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr<Err = ConfigError>,
    {
        self.entries.get(key).map(|raw| raw.parse()).transpose()
    }
}

fn missing(key: &'static str) -> ConfigError {
    ConfigError::InvalidParameter {
        name: key,
        value: "missing".to_string(),
    }
}

/// Monte Carlo configuration from a parameter map and a path count.
///
/// # Errors
///
/// `ConfigurationError` on a missing required key, an unknown key, an
/// unknown engine name or an unparseable seed. `InvalidArgument` on a zero
/// path count.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use quant_api::params::mc_params_from_map;
/// use quant_pricing::mc::UrngKind;
///
/// let params = HashMap::from([
///     ("URNGTYPE".to_string(), "ranlux3".to_string()),
///     ("PATHGENTYPE".to_string(), "EULER".to_string()),
/// ]);
/// let config = mc_params_from_map(&params, 1000).unwrap();
/// assert_eq!(config.urng(), UrngKind::Ranlux3);
/// assert_eq!(config.n_paths(), 1000);
/// ```
pub fn mc_params_from_map(
    params: &HashMap<String, String>,
    n_paths: usize,
) -> Result<MonteCarloConfig, PricingError> {
    let p = Params::new(params, &MC_KEYS)?;
    let mut builder = MonteCarloConfig::builder()
        .urng(p.kind("URNGTYPE")?.ok_or_else(|| missing("URNGTYPE"))?)
        .path_gen(p.kind("PATHGENTYPE")?.ok_or_else(|| missing("PATHGENTYPE"))?)
        .n_paths(n_paths);
    if let Some(cv) = p.kind("CONTROLVARTYPE")? {
        builder = builder.control_variate(cv);
    }
    if let Some(seed) = p.optional("SEED")? {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}

/// PDE configuration from a parameter map.
///
/// # Errors
///
/// `ConfigurationError` on a missing or unknown key, an unparseable value,
/// or values that fail [`PdeConfig::validate`].
pub fn pde_params_from_map(params: &HashMap<String, String>) -> Result<PdeConfig, PricingError> {
    let p = Params::new(params, &PDE_KEYS)?;
    let config = PdeConfig::builder()
        .n_time_steps(p.required("NTIMESTEPS")?)
        .n_spot_nodes(p.required("NSPOTNODES")?)
        .n_std_devs(p.required("NSTDDEVS")?)
        .theta(p.required("THETA")?)
        .build()?;
    Ok(config)
}
