//! Turning submitted form data into a record, driven by the field table.

use crate::form::FormData;
use crate::resource::{FieldKind, FieldSpec, ResourceSchema};
use crate::slug::slugify;
use crate::store::Record;
use crate::user::AdminContext;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reference paths of uploads that were stored for this submission, keyed by
/// field name.
pub type StoredUploads = BTreeMap<&'static str, String>;

/// Per-call inputs that are not part of the form itself.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub uploads: &'a StoredUploads,
    pub admin: Option<&'a AdminContext>,
    /// Date stamp in `YYYY-MM-DD` form.
    pub today: &'a str,
}

#[must_use]
pub fn record_id(record: &Record) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

/// Next id for a collection: one past the largest id, or 1 when empty.
#[must_use]
pub fn next_id(records: &[Record]) -> i64 {
    records.iter().filter_map(record_id).max().map_or(1, |max| max + 1)
}

/// Build a brand new record with `id` first and fields in schema order.
#[must_use]
pub fn build_new(schema: &ResourceSchema, id: i64, form: &FormData, ctx: BuildContext<'_>) -> Record {
    let mut record = Map::new();
    record.insert("id".to_string(), Value::from(id));
    apply_fields(schema, &mut record, form, ctx, None);
    record
}

/// Merge a submission over an existing record.
///
/// Fields the schema does not name are left as they were; create-only fields
/// (author, creation date) are never touched.
#[must_use]
pub fn build_updated(
    schema: &ResourceSchema,
    existing: &Record,
    form: &FormData,
    ctx: BuildContext<'_>,
) -> Record {
    let mut record = existing.clone();
    apply_fields(schema, &mut record, form, ctx, Some(existing));
    record
}

fn apply_fields(
    schema: &ResourceSchema,
    record: &mut Record,
    form: &FormData,
    ctx: BuildContext<'_>,
    existing: Option<&Record>,
) {
    for field in schema.fields {
        if existing.is_some() && field.is_create_only() {
            continue;
        }
        let value = field_value(field, form, ctx, existing);
        record.insert(field.name.to_string(), value);
    }
}

fn field_value(
    field: &FieldSpec,
    form: &FormData,
    ctx: BuildContext<'_>,
    existing: Option<&Record>,
) -> Value {
    match field.kind {
        FieldKind::Text => Value::from(form.get(field.name).unwrap_or_default()),
        FieldKind::TextOr(default) => Value::from(form.text(field.name).unwrap_or(default)),
        FieldKind::Reference { default, .. } => {
            if let Some(stored) = ctx.uploads.get(field.name) {
                return Value::from(stored.as_str());
            }
            if let Some(given) = form.text(field.name) {
                return Value::from(given);
            }
            existing
                .and_then(|record| record.get(field.name))
                .filter(|value| !value.is_null())
                .cloned()
                .unwrap_or_else(|| Value::from(default))
        }
        FieldKind::Int { default } => {
            let parsed = form.int(field.name);
            match default {
                Some(fallback) => Value::from(parsed.filter(|v| *v != 0).unwrap_or(fallback)),
                None => parsed.map_or(Value::Null, Value::from),
            }
        }
        FieldKind::IdList => Value::from(form.id_list(field.name)),
        FieldKind::Flag => Value::Bool(form.flag(field.name)),
        FieldKind::Group(keys) => {
            let group: Map<String, Value> = keys
                .iter()
                .map(|key| {
                    let form_key = format!("{}_{key}", field.name);
                    let value = form.get(&form_key).unwrap_or_default();
                    ((*key).to_string(), Value::from(value))
                })
                .collect();
            Value::Object(group)
        }
        FieldKind::Slug { source } => Value::from(slugify(form.get(source).unwrap_or_default())),
        FieldKind::Author => Value::from(ctx.admin.map(|a| a.name.as_str()).unwrap_or_default()),
        FieldKind::CreatedOn | FieldKind::UpdatedOn => Value::from(ctx.today),
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
