//! Submitted form fields and uploaded files.
//!
//! A form maps each key to one or more string values, the way an HTML
//! form post arrives. Checkbox and multi-select semantics live here so the
//! controller only asks typed questions (`flag`, `int`, `id_list`).

use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// A file received with a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original client-side filename; only its extension is kept on disk.
    pub name: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Read a local file as if it had been uploaded.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let data = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, data })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, Vec<String>>,
    files: BTreeMap<String, UploadedFile>,
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from key/value pairs; repeated keys accumulate.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (key, value) in pairs {
            form.insert(key, value);
        }
        form
    }

    /// Append a value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(key.into()).or_default().push(value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn attach_file(&mut self, key: impl Into<String>, file: UploadedFile) {
        self.files.insert(key.into(), file);
    }

    #[must_use]
    pub fn with_file(mut self, key: impl Into<String>, file: UploadedFile) -> Self {
        self.attach_file(key, file);
        self
    }

    /// First value submitted under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values submitted under `key`, in submission order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// First value under `key` if present and non-empty.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Checkbox semantics: checked when the browser sent `on` (`true`/`1` also count).
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("on" | "true" | "1"))
    }

    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(parse_int)
    }

    /// Integer foreign keys from a single- or multi-valued field.
    #[must_use]
    pub fn id_list(&self, key: &str) -> Vec<i64> {
        parse_id_list(self.get_all(key))
    }

    #[must_use]
    pub fn file(&self, key: &str) -> Option<&UploadedFile> {
        self.files.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }
}

/// Parse a leading integer the way browsers' `parseInt` does.
///
/// Surrounding whitespace and trailing garbage are ignored (`" 12px"` is 12);
/// input without leading digits yields `None`.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Normalize submitted tag values into integer ids.
///
/// Accepts zero, one or many values; entries that are not integers are
/// dropped, so absent input is an empty list.
#[must_use]
pub fn parse_id_list(values: &[String]) -> Vec<i64> {
    values.iter().filter_map(|v| parse_int(v)).collect()
}
