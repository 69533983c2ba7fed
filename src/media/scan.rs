use super::types::{is_ignored_directory, is_image_extension, MediaError, MediaFile};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

pub(super) fn scan_images(root: &Path) -> Result<Vec<MediaFile>, MediaError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !entry.file_type().is_dir()
            || !is_ignored_directory(&entry.file_name().to_string_lossy())
    });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_image = entry
            .path()
            .extension()
            .is_some_and(|ext| is_image_extension(&ext.to_string_lossy()));
        if !is_image {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let path = to_reference(relative);
        let directory = relative
            .parent()
            .map_or_else(|| "/".to_string(), to_reference);

        let metadata = entry.metadata()?;
        let modified: DateTime<Utc> = metadata.modified()?.into();

        files.push(MediaFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            directory,
            size: metadata.len(),
            modified,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn to_reference(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Bucket scanned files by their containing directory, as the media browser
/// shows them.
#[must_use]
pub fn group_by_directory(files: &[MediaFile]) -> BTreeMap<String, Vec<MediaFile>> {
    let mut groups: BTreeMap<String, Vec<MediaFile>> = BTreeMap::new();
    for file in files {
        groups
            .entry(file.directory.clone())
            .or_default()
            .push(file.clone());
    }
    groups
}
