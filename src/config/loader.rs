use super::{config_path, CmsConfig, ConfigError};
use std::path::Path;
use tracing::debug;

/// Load configuration from `explicit` if given, else from the default path.
///
/// A missing default file yields `CmsConfig::default()`. An explicitly named
/// file must exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<CmsConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let path = config_path();
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(CmsConfig::default());
    }
    load_config_from(&path)
}

/// Parse the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<CmsConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: CmsConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
