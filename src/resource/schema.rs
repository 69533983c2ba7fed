//! Schema types describing how a resource's records are built from a form.

use super::ResourceKind;

/// Where an uploaded file for a reference field is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTarget {
    /// Directory relative to the public root, with a leading `/`.
    pub directory: &'static str,
    /// Filename prefix; the stored name is `<prefix>-<timestamp><ext>`.
    pub prefix: &'static str,
}

/// How a single field is derived from submitted form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; absent input becomes `""`.
    Text,
    /// Free text that falls back to the given value when empty.
    TextOr(&'static str),
    /// Image or file reference. Create uses the default when empty; edit keeps
    /// the existing value when empty. An upload under `<name>File` wins.
    Reference {
        default: &'static str,
        upload: Option<UploadTarget>,
    },
    /// Integer parsed from the form. With a default, zero or unparsable input
    /// takes it; without one, unparsable input is `null` and zero is kept.
    Int { default: Option<i64> },
    /// List of integer foreign keys (tag ids).
    IdList,
    /// Checkbox.
    Flag,
    /// Sub-record rebuilt from `<name>_<key>` fields on every write.
    Group(&'static [&'static str]),
    /// Slug derived from another field of the same record.
    Slug { source: &'static str },
    /// Display name of the admin who created the record.
    Author,
    /// Date stamped on create only.
    CreatedOn,
    /// Date stamped on create and on every edit.
    UpdatedOn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub(crate) const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Form key carrying an uploaded file for this field.
    #[must_use]
    pub fn upload_key(&self) -> String {
        format!("{}File", self.name)
    }

    /// Whether an edit leaves this field untouched.
    #[must_use]
    pub fn is_create_only(&self) -> bool {
        matches!(self.kind, FieldKind::Author | FieldKind::CreatedOn)
    }
}

/// Configuration-driven definition of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub kind: ResourceKind,
    /// Fields in persisted key order (after `id`).
    pub fields: &'static [FieldSpec],
    /// Numeric key used for ordered listings.
    pub sort_key: Option<&'static str>,
    /// Field that groups records for "related" lookups.
    pub group_key: Option<&'static str>,
}

impl ResourceSchema {
    #[must_use]
    pub fn document(&self) -> &'static str {
        self.kind.document()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Name of the field the slug is derived from, if the resource has slugs.
    #[must_use]
    pub fn slug_source(&self) -> Option<&'static str> {
        self.fields.iter().find_map(|f| match f.kind {
            FieldKind::Slug { source } => Some(source),
            _ => None,
        })
    }

    /// Fields accepting file uploads, with their targets.
    pub fn upload_fields(&self) -> impl Iterator<Item = (&'static FieldSpec, UploadTarget)> {
        self.fields.iter().filter_map(|f| match f.kind {
            FieldKind::Reference {
                upload: Some(target),
                ..
            } => Some((f, target)),
            _ => None,
        })
    }

    /// Whether the resource carries a `published` flag.
    #[must_use]
    pub fn has_published_flag(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.name == "published" && f.kind == FieldKind::Flag)
    }
}
