//! Site configuration loaded from a TOML file.
//!
//! The file is optional. Every field falls back to its default, and command
//! line flags override whatever the file says.

mod loader;

pub use loader::{load_config, load_config_from};

use crate::utils::{get_cms_home, DEFAULT_DATA_DIR, DEFAULT_PUBLIC_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_level() -> String {
    "info".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

/// `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// `daily`, `hourly` or `never`.
    #[serde(default = "default_rotation")]
    pub rotation: String,
    /// Log directory; `~/.site-cms/logs` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            rotation: default_rotation(),
            dir: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_DIR)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CmsConfig {
    /// Directory holding the JSON documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Web root that media reference paths resolve against.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Public site origin, used for business card links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
            base_url: default_base_url(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Resolve the default config file path (`~/.site-cms/config.toml`).
#[must_use]
pub fn config_path() -> PathBuf {
    get_cms_home().join(CONFIG_FILENAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
