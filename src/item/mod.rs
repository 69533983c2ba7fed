//! CRUD controller and public read helpers.

mod context;
pub mod crud;
mod error;
pub mod public;
mod stats;

pub use context::CmsContext;
pub use crud::{create, delete, edit, get, list, EditOutcome, ListOptions};
pub use error::ItemError;
pub use public::{find_published_by_slug, latest, lookup_by_ids, related, tail, RELATED_LIMIT};
pub use stats::{dashboard_stats, DashboardStats};
