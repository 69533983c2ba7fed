//! Media/upload adapter over the site's public directory.
//!
//! Reference paths are what records store: `/img/gallery/gallery-<ts>.jpg`,
//! always relative to the public root and always starting with `/`.

mod scan;
mod types;

pub use scan::group_by_directory;
pub use types::{
    is_ignored_directory, is_image_extension, MediaError, MediaFile, BACKUP_SUFFIX,
    IGNORED_DIRECTORIES, IMAGE_EXTENSIONS,
};

use crate::form::UploadedFile;
use crate::utils::atomic_create;
use chrono::Utc;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct MediaStore {
    public_root: PathBuf,
}

impl MediaStore {
    #[must_use]
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
        }
    }

    #[must_use]
    pub fn public_root(&self) -> &Path {
        &self.public_root
    }

    /// Map a reference path onto the filesystem.
    ///
    /// Only plain components are accepted, so a reference can never point
    /// outside the public root.
    pub fn resolve(&self, reference: &str) -> Result<PathBuf, MediaError> {
        let relative = Path::new(reference.trim_start_matches('/'));
        let mut resolved = self.public_root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return Err(MediaError::InvalidPath(reference.to_string())),
            }
        }
        Ok(resolved)
    }

    /// Persist an upload under `directory` and return its reference path.
    ///
    /// The stored name is `<prefix>-<nanosecond timestamp><original extension>`.
    /// Only the extension of the client filename survives. The bytes land under
    /// the final name in one step, so a failed write leaves no partial file.
    pub async fn store(
        &self,
        file: &UploadedFile,
        directory: &str,
        prefix: &str,
    ) -> Result<String, MediaError> {
        let dir_path = self.resolve(directory)?;
        fs::create_dir_all(&dir_path).await?;

        let extension = Path::new(&file.name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let mut stamp = timestamp();
        let filename = loop {
            let candidate = format!("{prefix}-{stamp}{extension}");
            match atomic_create(&dir_path.join(&candidate), file.data.clone()).await {
                Ok(()) => break candidate,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => stamp += 1,
                Err(e) => return Err(e.into()),
            }
        };

        let reference = format!("{}/{}", directory.trim_end_matches('/'), filename);
        info!("Stored upload '{}' as {}", file.name, reference);
        Ok(reference)
    }

    /// Overwrite an existing file with new content.
    ///
    /// The current file is copied to a `.bak` sibling first. If the write
    /// fails the backup is moved back and [`MediaError::UploadFailed`] is
    /// returned; on success the backup is removed. Either way no backup is
    /// left behind unless the restore itself fails.
    pub async fn replace(&self, reference: &str, file: &UploadedFile) -> Result<(), MediaError> {
        let target = self.resolve(reference)?;
        let data = file.data.clone();
        let reference_owned = reference.to_string();

        tokio::task::spawn_blocking(move || {
            swap_in(&target, &reference_owned, |path| std::fs::write(path, &data))
        })
        .await
        .map_err(io::Error::other)??;

        info!("Replaced {}", reference);
        Ok(())
    }

    /// Remove a file. Returns `false` when there was nothing to remove.
    pub async fn delete(&self, reference: &str) -> Result<bool, MediaError> {
        let path = self.resolve(reference)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted {}", reference);
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Delete of {} skipped; file absent", reference);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All images under the public root, sorted by reference path.
    pub async fn scan(&self) -> Result<Vec<MediaFile>, MediaError> {
        let root = self.public_root.clone();
        tokio::task::spawn_blocking(move || scan::scan_images(&root))
            .await
            .map_err(io::Error::other)?
    }
}

fn timestamp() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1000))
}

#[must_use]
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".");
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Two-phase overwrite: back up, write, then drop or restore the backup.
///
/// A target that does not exist yet has nothing to back up; a failed write
/// then removes whatever partial file it produced.
fn swap_in<F>(target: &Path, reference: &str, write: F) -> Result<(), MediaError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let backup = backup_path(target);
    let had_original = target.exists();
    if had_original {
        std::fs::copy(target, &backup)?;
    }

    match write(target) {
        Ok(()) => {
            if had_original {
                std::fs::remove_file(&backup)?;
            }
            Ok(())
        }
        Err(source) => {
            warn!("Write to {} failed, restoring: {}", reference, source);
            if had_original {
                std::fs::rename(&backup, target).map_err(|restore| MediaError::RestoreFailed {
                    path: reference.to_string(),
                    source: restore,
                })?;
            } else if target.exists() {
                std::fs::remove_file(target)?;
            }
            Err(MediaError::UploadFailed {
                path: reference.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
#[path = "media_tests.rs"]
mod tests;
