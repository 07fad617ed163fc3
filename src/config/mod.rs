//! Miner and verifier configuration
//!
//! Settings are read from a JSON file. Every field is optional in the file;
//! missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::SearchLimits;

/// Default difficulty in leading zero hex characters
pub const DEFAULT_DIFFICULTY: i32 = 3;

/// Default maximum proof age (2 hours)
pub const DEFAULT_MAX_AGE_SECS: u64 = 2 * 60 * 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Proof-of-work settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowConfig {
    /// Leading zero hex characters required when mining
    pub difficulty: i32,
    /// Oldest proof the verifier accepts, in seconds
    pub max_age_secs: u64,
    /// Give up mining after this many digests
    pub max_attempts: Option<u64>,
    /// Give up mining after this many seconds
    pub timeout_secs: Option<u64>,
    /// Mining workers (default: number of CPU cores)
    pub threads: Option<usize>,
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            max_attempts: None,
            timeout_secs: None,
            threads: None,
        }
    }
}

impl PowConfig {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise the default config file if it exists,
    /// otherwise the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        Self::load_fallback(default_config_path())
    }

    fn load_fallback(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => {
                debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Maximum proof age as a `Duration`
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    /// Stopping conditions for a search started now
    pub fn limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::unbounded();
        if let Some(max_attempts) = self.max_attempts {
            limits = limits.with_max_attempts(max_attempts);
        }
        if let Some(secs) = self.timeout_secs {
            limits = limits.with_timeout(Duration::from_secs(secs));
        }
        limits
    }
}

/// Get the default config file path (`~/.pow512/config.json`)
#[cfg(feature = "cli")]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pow512").join("config.json"))
}

#[cfg(not(feature = "cli"))]
pub fn default_config_path() -> Option<PathBuf> {
    None
}
