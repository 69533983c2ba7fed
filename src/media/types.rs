use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Directory names never descended into when scanning for media.
pub const IGNORED_DIRECTORIES: &[&str] = &["node_modules", ".git", "admin", "vendor", "fonts"];

/// Extensions (lowercase, without dot) recognised as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp", "ico", "bmp"];

/// Suffix appended to a file while `replace` holds a copy of it.
pub const BACKUP_SUFFIX: &str = "bak";

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid media path: {0}")]
    InvalidPath(String),

    /// Writing the new content failed; the previous file was restored.
    #[error("Upload to '{path}' failed: {source}")]
    UploadFailed {
        path: String,
        source: std::io::Error,
    },

    /// Writing failed and the backup could not be moved back. The backup file
    /// is left in place.
    #[error("Restoring '{path}' from backup failed: {source}")]
    RestoreFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),
}

/// An image found under the public root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    pub name: String,
    /// Reference path relative to the public root, with a leading `/`.
    pub path: String,
    /// Containing directory in the same form as `path` (`/` for the root).
    pub directory: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Whether `extension` is one of [`IMAGE_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_image_extension(extension: &str) -> bool {
    let lowered = extension.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&lowered.as_str())
}

#[must_use]
pub fn is_ignored_directory(name: &str) -> bool {
    IGNORED_DIRECTORIES.contains(&name)
}
