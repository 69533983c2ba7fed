//! Record deletion.

use super::build::record_id;
use crate::item::{CmsContext, ItemError};
use crate::resource::ResourceKind;
use tracing::{debug, info};

/// Remove the record with `id`. Returns whether anything was removed; an
/// unknown id leaves the document untouched.
pub async fn delete(ctx: CmsContext<'_>, kind: ResourceKind, id: i64) -> Result<bool, ItemError> {
    let document = kind.document();
    let mut records = ctx.store.load(document).await?;

    let before = records.len();
    records.retain(|r| record_id(r) != Some(id));
    if records.len() == before {
        debug!("Delete of {} record {} skipped; not found", kind, id);
        return Ok(false);
    }

    ctx.store.save(document, &records).await?;
    info!("Deleted {} record {}", kind, id);
    Ok(true)
}
