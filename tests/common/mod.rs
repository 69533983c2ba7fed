//! Common test utilities

use serde_json::Value;
use site_cms::item::CmsContext;
use site_cms::media::MediaStore;
use site_cms::store::{DocumentStore, Record};
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A data directory and public root side by side in one temp dir.
pub struct TestSite {
    #[allow(dead_code)] // Held so the directory outlives the test
    pub dir: TempDir,
    pub store: DocumentStore,
    pub media: MediaStore,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = create_test_dir();
        let store = DocumentStore::new(dir.path().join("data"));
        let media = MediaStore::new(dir.path().join("public"));
        Self { dir, store, media }
    }

    #[allow(dead_code)]
    pub fn ctx(&self) -> CmsContext<'_> {
        CmsContext::new(&self.store, &self.media)
    }
}

/// Write a raw JSON document into the site's data directory.
#[allow(dead_code)]
pub fn seed_document(store: &DocumentStore, name: &str, value: &Value) {
    std::fs::create_dir_all(store.data_dir()).expect("Failed to create data dir");
    std::fs::write(
        store.document_path(name),
        serde_json::to_string_pretty(value).expect("Failed to serialize seed"),
    )
    .expect("Failed to write seed document");
}

/// Read a document straight from disk, bypassing the store.
#[allow(dead_code)] // Not every test binary reads raw documents
pub fn read_document(store: &DocumentStore, name: &str) -> Value {
    let content =
        std::fs::read_to_string(store.document_path(name)).expect("Failed to read document");
    serde_json::from_str(&content).expect("Document should be valid JSON")
}

#[allow(dead_code)]
pub fn ids(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_i64))
        .collect()
}

/// Write a file under `root`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, data: &[u8]) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("path has parent")).expect("mkdir");
    std::fs::write(path, data).expect("write file");
}
