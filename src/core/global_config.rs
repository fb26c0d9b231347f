//! Global configuration management
//!
//! Reads engine settings from `config.toml` in the config directory. Every
//! field is optional; a missing file is the same as an empty one.

use crate::config::defaults::DEFAULT_JAVA_COMMAND;
use crate::infra::dirs::OdlDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for opendataloader-pdf
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// `[engine]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the engine JAR
    pub jar: Option<PathBuf>,

    /// Java executable name or path
    pub java: Option<String>,

    /// Options passed to the JVM before `-jar`
    pub java_options: Option<Vec<String>>,

    /// Engine timeout in seconds, 0 disables it
    pub timeout: Option<u64>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// # Errors
    ///
    /// Returns `GlobalConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &OdlDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let config = toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Effective java command
    #[must_use]
    pub fn java(&self) -> &str {
        self.engine.java.as_deref().unwrap_or(DEFAULT_JAVA_COMMAND)
    }

    #[must_use]
    pub fn java_options(&self) -> &[String] {
        self.engine.java_options.as_deref().unwrap_or_default()
    }

    /// Effective engine timeout, `None` when unset or 0
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.engine
            .timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
