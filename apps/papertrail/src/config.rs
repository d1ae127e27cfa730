//! Configuration for the papertrail CLI
//!
//! Read from `--config <path>` or `<config dir>/papertrail/config.toml`.
//! Every section and field is optional; missing values take defaults.

use std::path::{Path, PathBuf};

use papertrail_extract::ExtractorConfig;
use papertrail_styles::CitationStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// CLI-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperTrailConfig {
    /// Page fetching settings
    pub extract: ExtractorConfig,
    /// Database location
    pub store: StoreConfig,
    /// Bibliography output settings
    pub output: OutputConfig,
}

/// Database settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite file; the platform data directory when unset
    pub path: Option<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Style used when `--style` is not given
    pub default_style: CitationStyle,
}

impl PaperTrailConfig {
    /// Parse configuration from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load from an explicit path, which must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `path` when given, else the default location if it exists,
    /// else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Database path: explicit override, then config, then data dir
    pub fn database_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.store.path.clone())
            .unwrap_or_else(default_database_path)
    }
}

/// `<config dir>/papertrail/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("papertrail").join("config.toml"))
}

/// `<data dir>/papertrail/citations.db`, or `citations.db` in the working
/// directory when the platform has no data dir
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("papertrail"))
        .unwrap_or_default()
        .join("citations.db")
}
