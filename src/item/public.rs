//! Read helpers for the public site pages.

use super::crud::{is_published, list, record_id, ListOptions};
use super::ItemError;
use crate::resource::ResourceKind;
use crate::store::{DocumentStore, Record};
use serde_json::Value;

/// Number of related items shown beside a detail page.
pub const RELATED_LIMIT: usize = 3;

/// First published record carrying `slug`.
///
/// Slugs are not unique; with duplicates the earliest stored record wins.
pub async fn find_published_by_slug(
    store: &DocumentStore,
    kind: ResourceKind,
    slug: &str,
) -> Result<Option<Record>, ItemError> {
    let unordered = ListOptions {
        published_only: true,
        sorted: false,
    };
    let records = list(store, kind, unordered).await?;
    Ok(records
        .into_iter()
        .find(|r| r.get("slug").and_then(Value::as_str) == Some(slug)))
}

/// Other published records sharing `record`'s value for `group_field`.
///
/// Records without a value for the field relate to nothing.
#[must_use]
pub fn related(records: &[Record], record: &Record, group_field: &str, limit: usize) -> Vec<Record> {
    let Some(group) = record.get(group_field).filter(|v| !v.is_null()) else {
        return Vec::new();
    };
    let own_id = record_id(record);
    records
        .iter()
        .filter(|r| is_published(r))
        .filter(|r| record_id(r) != own_id)
        .filter(|r| r.get(group_field) == Some(group))
        .take(limit)
        .cloned()
        .collect()
}

/// The first `n` records, as the home page shows articles.
#[must_use]
pub fn latest(records: &[Record], n: usize) -> Vec<Record> {
    records.iter().take(n).cloned().collect()
}

/// The last `n` records, as the footer gallery shows them.
#[must_use]
pub fn tail(records: &[Record], n: usize) -> Vec<Record> {
    records
        .iter()
        .skip(records.len().saturating_sub(n))
        .cloned()
        .collect()
}

/// Records whose id appears in `ids`, in stored order.
#[must_use]
pub fn lookup_by_ids(records: &[Record], ids: &[i64]) -> Vec<Record> {
    records
        .iter()
        .filter(|r| record_id(r).is_some_and(|id| ids.contains(&id)))
        .cloned()
        .collect()
}
