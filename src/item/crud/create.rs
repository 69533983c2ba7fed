//! Record creation.

use super::build::{build_new, next_id, BuildContext, StoredUploads};
use crate::form::FormData;
use crate::item::{CmsContext, ItemError};
use crate::media::MediaStore;
use crate::resource::{ResourceKind, ResourceSchema};
use crate::store::Record;
use crate::utils::today;
use tracing::{info, warn};

/// Create a record from a form submission and append it to the collection.
pub async fn create(
    ctx: CmsContext<'_>,
    kind: ResourceKind,
    form: &FormData,
) -> Result<Record, ItemError> {
    let schema = kind.schema();
    let mut records = ctx.store.load(schema.document()).await?;

    let uploads = store_uploads(ctx.media, schema, form).await;
    let today = today();
    let id = next_id(&records);
    let record = build_new(
        schema,
        id,
        form,
        BuildContext {
            uploads: &uploads,
            admin: ctx.admin,
            today: &today,
        },
    );

    records.push(record.clone());
    ctx.store.save(schema.document(), &records).await?;

    info!("Created {} record {}", kind, id);
    Ok(record)
}

/// Store every file attached under an upload field.
///
/// A failed upload is logged and skipped; the record then falls back to the
/// typed or existing reference.
pub(super) async fn store_uploads(
    media: &MediaStore,
    schema: &ResourceSchema,
    form: &FormData,
) -> StoredUploads {
    let mut stored = StoredUploads::new();
    for (field, target) in schema.upload_fields() {
        let Some(file) = form.file(&field.upload_key()) else {
            continue;
        };
        match media.store(file, target.directory, target.prefix).await {
            Ok(reference) => {
                stored.insert(field.name, reference);
            }
            Err(e) => {
                warn!(
                    "Upload for {}.{} failed, keeping fallback: {}",
                    schema.document(),
                    field.name,
                    e
                );
            }
        }
    }
    stored
}
