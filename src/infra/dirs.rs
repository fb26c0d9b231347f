//! Platform-specific directory management
//!
//! The config directory follows the XDG Base Directory Specification on Linux
//! and standard locations elsewhere. `OPENDATALOADER_PDF_CONFIG_DIR` overrides it.

use crate::config::defaults::{APP_NAME, CONFIG_FILE_NAME, ENV_CONFIG_DIR};
use std::env;
use std::path::{Path, PathBuf};

/// Directory provider for opendataloader-pdf
#[derive(Debug, Clone)]
pub struct OdlDirs {
    config_dir: PathBuf,
}

impl OdlDirs {
    /// Resolve directories from the environment, then platform defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Config directory
    ///
    /// - Linux: `$XDG_CONFIG_HOME/opendataloader-pdf` or `~/.config/opendataloader-pdf`
    /// - macOS: `~/Library/Application Support/opendataloader-pdf`
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the global `config.toml`
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        match env::var_os(ENV_CONFIG_DIR) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => Self::platform_config_dir(),
        }
    }

    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for OdlDirs {
    fn default() -> Self {
        Self::new()
    }
}
