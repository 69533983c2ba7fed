mod init;
pub use init::{init_logging, parse_level, parse_rotation};

use crate::config::LoggingConfig;
use crate::utils::get_cms_home;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename inside the log directory.
pub const LOG_FILENAME: &str = "site-cms.log";

/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: get_cms_home().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: config.dir.clone().unwrap_or(defaults.log_dir),
            log_level: parse_level(&config.level),
            json_format: config.json,
            rotation: parse_rotation(&config.rotation),
        }
    }
}
