//! CLI configuration at ~/.geocell/config.json.
//!
//! Every field is optional in the file; missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::geohash::types::{check_precision, GeoHashError, DEFAULT_PRECISION};
use crate::logging::LogLevel;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid default_precision in config: {0}")]
    Precision(#[from] GeoHashError),
}

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_precision")]
    pub default_precision: usize,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: DEFAULT_PRECISION,
            output: OutputFormat::default(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load from the default location (~/.geocell/config.json).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from a specific path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".geocell")
            .join("config.json")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_precision(self.default_precision)?;
        Ok(())
    }
}
