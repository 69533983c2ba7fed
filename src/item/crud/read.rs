//! Listing and single-record reads.

use super::build::record_id;
use crate::item::ItemError;
use crate::resource::ResourceKind;
use crate::store::{DocumentStore, Record};
use serde_json::Value;

/// Filters applied by [`list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Drop records whose `published` flag is not `true`.
    pub published_only: bool,
    /// Order by the resource's sort key, if it has one.
    pub sorted: bool,
}

impl ListOptions {
    /// What visitors see: published records in display order.
    #[must_use]
    pub fn public() -> Self {
        Self {
            published_only: true,
            sorted: true,
        }
    }

    /// Everything, in stored order.
    #[must_use]
    pub fn admin() -> Self {
        Self::default()
    }
}

pub async fn list(
    store: &DocumentStore,
    kind: ResourceKind,
    options: ListOptions,
) -> Result<Vec<Record>, ItemError> {
    let schema = kind.schema();
    let mut records = store.load(schema.document()).await?;

    if options.published_only && schema.has_published_flag() {
        records.retain(is_published);
    }
    if options.sorted {
        if let Some(key) = schema.sort_key {
            sort_records(&mut records, key);
        }
    }
    Ok(records)
}

pub async fn get(
    store: &DocumentStore,
    kind: ResourceKind,
    id: i64,
) -> Result<Option<Record>, ItemError> {
    let records = store.load(kind.document()).await?;
    Ok(records.into_iter().find(|r| record_id(r) == Some(id)))
}

/// Stable ascending sort on an integer key; records missing it sort as 0.
pub fn sort_records(records: &mut [Record], key: &str) {
    records.sort_by_key(|record| record.get(key).and_then(Value::as_i64).unwrap_or(0));
}

pub(crate) fn is_published(record: &Record) -> bool {
    record.get("published").and_then(Value::as_bool) == Some(true)
}
