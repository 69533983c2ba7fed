//! Whole-file snapshots written through a sibling temp file.
//!
//! Collection documents and uploaded media are both written as one complete
//! snapshot: the bytes go to a `NamedTempFile` in the target directory, which is
//! then persisted under the final name. A failed write drops the temp file, so
//! the final name only ever holds a complete snapshot.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// What to do when the target name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persist {
    /// Swap the new snapshot in over the old one.
    Replace,
    /// Fail with `AlreadyExists` and leave the existing file alone.
    CreateNew,
}

/// Replace the document at `path` with a new snapshot.
///
/// Readers see either the previous snapshot or the new one.
///
/// # Errors
///
/// Fails when `path` has no parent directory, the directory does not exist, or
/// the temp file cannot be written or renamed.
pub async fn atomic_write(path: &Path, content: impl Into<Vec<u8>>) -> io::Result<()> {
    write_snapshot(path, content.into(), Persist::Replace).await
}

/// Write a snapshot under a name that must not exist yet.
///
/// # Errors
///
/// An existing file at `path` yields `io::ErrorKind::AlreadyExists` and is not
/// touched. Otherwise as [`atomic_write`].
pub async fn atomic_create(path: &Path, content: impl Into<Vec<u8>>) -> io::Result<()> {
    write_snapshot(path, content.into(), Persist::CreateNew).await
}

async fn write_snapshot(path: &Path, content: Vec<u8>, mode: Persist) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        let mut snapshot = NamedTempFile::new_in(&parent)?;
        snapshot.write_all(&content)?;
        snapshot.flush()?;

        match mode {
            Persist::Replace => snapshot.persist(&target)?,
            Persist::CreateNew => snapshot.persist_noclobber(&target)?,
        };
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
