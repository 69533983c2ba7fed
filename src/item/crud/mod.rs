//! Generic CRUD over every collection resource.
//!
//! Each call is one read-modify-write of the whole document. Nothing
//! coordinates concurrent callers, so of two overlapping writes the last
//! `save` wins. Per-document locking would slot in around the load/save
//! pairs in `create`, `edit` and `delete` if that ever matters.

mod build;
mod create;
mod delete;
mod edit;
mod read;

pub use build::{build_new, build_updated, next_id, record_id, BuildContext, StoredUploads};
pub use create::create;
pub use delete::delete;
pub use edit::{edit, EditOutcome};
pub use read::{get, list, sort_records, ListOptions};

pub(crate) use read::is_published;

#[cfg(test)]
#[path = "crud_tests.rs"]
mod tests;
