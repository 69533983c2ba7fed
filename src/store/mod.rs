//! Whole-document JSON persistence.
//!
//! Every resource type lives in one document, `<data_dir>/<name>.json`.
//! Collections are JSON arrays of objects; `settings` is a single object.
//! A missing document reads as empty. A document that exists but cannot be
//! parsed is an error and is never silently replaced by an empty collection.
//!
//! There is no locking: two writers racing on the same document resolve as
//! last-`save`-wins. Writes go through a temp file and rename, so a crash
//! mid-write leaves the previous snapshot intact.

mod error;

pub use error::StoreError;

use crate::utils::{atomic_write, get_document_path};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// One record of a collection: a JSON object with an integer `id`.
pub type Record = serde_json::Map<String, Value>;

/// Handle to the directory holding all documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn document_path(&self, name: &str) -> PathBuf {
        get_document_path(&self.data_dir, name)
    }

    /// Load a collection document.
    ///
    /// Returns an empty collection when the document does not exist.
    pub async fn load(&self, name: &str) -> Result<Vec<Record>, StoreError> {
        let Some(value) = self.read_value(name).await? else {
            return Ok(Vec::new());
        };
        let Value::Array(entries) = value else {
            return Err(StoreError::UnexpectedShape {
                name: name.to_string(),
                expected: "an array of records",
            });
        };

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            let Value::Object(record) = entry else {
                return Err(StoreError::UnexpectedShape {
                    name: name.to_string(),
                    expected: "an array of records",
                });
            };
            records.push(record);
        }
        debug!("Loaded {} records from '{}'", records.len(), name);
        Ok(records)
    }

    /// Persist a full collection, replacing the previous snapshot.
    pub async fn save(&self, name: &str, records: &[Record]) -> Result<(), StoreError> {
        self.save_typed(name, records).await?;
        debug!("Saved {} records to '{}'", records.len(), name);
        Ok(())
    }

    /// Load a document into a typed value, or its `Default` when absent.
    pub async fn load_typed<T>(&self, name: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(value) = self.read_value(name).await? else {
            return Ok(T::default());
        };
        serde_json::from_value(value).map_err(|source| StoreError::CorruptData {
            name: name.to_string(),
            source,
        })
    }

    /// Persist any serializable value as a document.
    pub async fn save_typed<T>(&self, name: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        fs::create_dir_all(&self.data_dir).await?;
        let content = serde_json::to_string_pretty(value)?;
        atomic_write(&self.document_path(name), content).await?;
        Ok(())
    }

    async fn read_value(&self, name: &str) -> Result<Option<Value>, StoreError> {
        let path = self.document_path(name);
        if !path.exists() {
            debug!("Document '{}' not found; treating as empty", name);
            return Ok(None);
        }
        let content = fs::read_to_string(&path).await?;
        let value = serde_json::from_str(&content).map_err(|source| StoreError::CorruptData {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(value))
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
