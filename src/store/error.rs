//! Error type for document persistence.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document exists but is not valid JSON.
    #[error("Corrupt data in document '{name}': {source}")]
    CorruptData {
        name: String,
        source: serde_json::Error,
    },

    /// The document is valid JSON but not the expected top-level shape.
    #[error("Document '{name}' is not {expected}")]
    UnexpectedShape { name: String, expected: &'static str },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the error came from an unreadable document rather than from I/O.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            StoreError::CorruptData { .. } | StoreError::UnexpectedShape { .. }
        )
    }
}
