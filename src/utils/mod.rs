mod atomic;

pub use atomic::{atomic_create, atomic_write};

use std::path::{Path, PathBuf};

/// Default directory holding one JSON document per resource type
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default directory served as the public web root
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// The name of the per-user folder holding config and logs
pub const CMS_HOME_FOLDER: &str = ".site-cms";

/// Extension of every persisted document
pub const DOCUMENT_EXTENSION: &str = "json";

/// Get the path to the per-user folder (`~/.site-cms`).
///
/// Falls back to the current directory when no home directory is known.
#[must_use]
pub fn get_cms_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CMS_HOME_FOLDER)
}

/// Get the path of a named document inside a data directory
#[must_use]
pub fn get_document_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(format!("{name}.{DOCUMENT_EXTENSION}"))
}

/// Get the current calendar date as `YYYY-MM-DD` (UTC)
#[must_use]
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
