//! Record updates.

use super::build::{build_updated, record_id, BuildContext};
use super::create::store_uploads;
use crate::form::FormData;
use crate::item::{CmsContext, ItemError};
use crate::resource::ResourceKind;
use crate::store::Record;
use crate::utils::today;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "record", rename_all = "snake_case")]
pub enum EditOutcome {
    Updated(Record),
    /// No record had the id; the collection was not written.
    NotFound,
}

pub async fn edit(
    ctx: CmsContext<'_>,
    kind: ResourceKind,
    id: i64,
    form: &FormData,
) -> Result<EditOutcome, ItemError> {
    let schema = kind.schema();
    let mut records = ctx.store.load(schema.document()).await?;

    let Some(index) = records.iter().position(|r| record_id(r) == Some(id)) else {
        debug!("Edit of {} record {} skipped; not found", kind, id);
        return Ok(EditOutcome::NotFound);
    };

    let uploads = store_uploads(ctx.media, schema, form).await;
    let today = today();
    let Some(slot) = records.get_mut(index) else {
        return Ok(EditOutcome::NotFound);
    };
    let updated = build_updated(
        schema,
        slot,
        form,
        BuildContext {
            uploads: &uploads,
            admin: ctx.admin,
            today: &today,
        },
    );
    slot.clone_from(&updated);
    ctx.store.save(schema.document(), &records).await?;

    info!("Updated {} record {}", kind, id);
    Ok(EditOutcome::Updated(updated))
}
