//! Service configuration.
//!
//! Read from an optional JSON file (`--config`), every key falling back to its default, then
//! adjusted by command-line overrides.

use crate::car_actor::ValidationRules;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interface the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Oldest accepted model year
    #[serde(default = "default_min_year")]
    pub min_year: i64,

    /// Newest accepted model year
    #[serde(default = "default_max_year")]
    pub max_year: i64,

    /// Buffer size of the car actor's request channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Load the demo fleet at startup
    #[serde(default)]
    pub seed_demo_data: bool,

    /// Length of the expiring-insurance window, in days
    #[serde(default = "default_expiring_window_days")]
    pub expiring_window_days: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_min_year() -> i64 {
    1900
}

fn default_max_year() -> i64 {
    2030
}

fn default_channel_capacity() -> usize {
    32
}

fn default_expiring_window_days() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            min_year: default_min_year(),
            max_year: default_max_year(),
            channel_capacity: default_channel_capacity(),
            seed_demo_data: false,
            expiring_window_days: default_expiring_window_days(),
        }
    }
}

impl Config {
    /// Load config from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Year bounds handed to the car actor.
    pub fn validation_rules(&self) -> Result<ValidationRules, ConfigError> {
        if self.min_year > self.max_year {
            return Err(ConfigError::Invalid(format!(
                "min_year ({}) is greater than max_year ({})",
                self.min_year, self.max_year
            )));
        }
        Ok(ValidationRules {
            min_year: self.min_year,
            max_year: self.max_year,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("bad bind address {}: {e}", self.host)))
    }
}
