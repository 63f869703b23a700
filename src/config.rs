//! Configuration file structures for minefeed.
//!
//! The configuration is read from a YAML file and can be overridden with
//! environment variables prefixed with `MINEFEED_`, nested keys being separated
//! by a double underscore. Every field has a default, so a partial or missing
//! file yields a working configuration.
//!
//! # Configuration File Format
//!
//! ```yaml
//! feed:
//!   # Start with speed mode on: posts wait for a 10 seconds countdown
//!   speed_mode: false
//!   # Optional JSON array of alerts to start with
//!   seed_path: "./seed.json"
//!
//! metrics:
//!   # Seconds between two refreshes of the performance figures
//!   refresh_interval: 30
//!   # Fixed seed of the mock figures generator
//!   rng_seed: 42
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export MINEFEED_FEED__SPEED_MODE=true
//! export MINEFEED_METRICS__REFRESH_INTERVAL=10
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Prefix of the environment variables overriding the configuration file.
const ENV_PREFIX: &str = "MINEFEED_";

/// Root configuration structure.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Alert feed configuration
    #[serde(default)]
    pub feed: Feed,
    /// Performance metrics configuration
    #[serde(default)]
    pub metrics: Metrics,
}

/// Alert feed configuration.
///
/// # YAML Section
///
/// ```yaml
/// feed:
///   speed_mode: true
///   seed_path: "./seed.json"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Feed {
    /// Initial speed mode.
    ///
    /// When on, post requests start a cancelable countdown instead of
    /// posting right away.
    #[serde(default)]
    pub speed_mode: bool,

    /// Path to a JSON array of seed alerts.
    ///
    /// The built-in alerts are used when absent or unreadable.
    #[serde(default)]
    pub seed_path: Option<String>,
}

/// Performance metrics configuration.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Metrics {
    /// Refresh interval in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// Seed of the mock figures generator, random when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            refresh_interval: default_refresh_interval(),
            rng_seed: None,
        }
    }
}

fn default_refresh_interval() -> u64 {
    30
}

impl Config {
    /// Loads the configuration from a YAML file merged with the environment.
    ///
    /// Environment variables take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file is not valid YAML or if a
    /// value has the wrong type.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}
