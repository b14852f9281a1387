//! Runtime settings for the calculators.
//!
//! Settings are layered:
//! - Default values
//! - Environment variable overrides
//!
//! No configuration file is read; a calculation only ever touches the
//! standard streams.
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `OPCALC_` and use double
//! underscores to separate nested levels:
//! - `OPCALC_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `OPCALC_LOGGING__MODULES__OPCALC=trace` sets `logging.modules.opcalc`

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const ENV_PREFIX: &str = "OPCALC_";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for every target (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target level overrides, e.g. `opcalc::cli = "trace"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive string understood by `EnvFilter`.
    pub fn filter_directive(&self) -> String {
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();

        let mut filter = self.default.clone();
        for (module, level) in modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

impl Settings {
    /// Load settings from defaults and `OPCALC_` environment variables.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            // Double underscore separates nested levels; single underscores
            // stay part of the field name
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }
}
