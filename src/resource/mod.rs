//! Resource registry: every content collection and its schema.
//!
//! Each resource is one JSON array document. Instead of hand-writing a
//! create/edit handler per resource, the controller walks the field table
//! returned by [`ResourceKind::schema`].

mod definitions;
pub mod schema;

pub use schema::{FieldKind, FieldSpec, ResourceSchema, UploadTarget};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Document holding the site-wide settings object.
pub const SETTINGS_DOCUMENT: &str = "settings";

/// Document holding admin accounts.
pub const USERS_DOCUMENT: &str = "users";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown resource type: {0}")]
pub struct UnknownResource(pub String);

/// Collection resource discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Articles,
    Portfolio,
    Testimonials,
    Cards,
    Services,
    ServiceCategories,
    ServiceTags,
    Projects,
    ProjectCategories,
    ProjectTags,
    CsrFocus,
    Gallery,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 12] = [
        ResourceKind::Articles,
        ResourceKind::Portfolio,
        ResourceKind::Testimonials,
        ResourceKind::Cards,
        ResourceKind::Services,
        ResourceKind::ServiceCategories,
        ResourceKind::ServiceTags,
        ResourceKind::Projects,
        ResourceKind::ProjectCategories,
        ResourceKind::ProjectTags,
        ResourceKind::CsrFocus,
        ResourceKind::Gallery,
    ];

    /// Name of the backing document (without extension).
    #[must_use]
    pub fn document(self) -> &'static str {
        match self {
            ResourceKind::Articles => "articles",
            ResourceKind::Portfolio => "portfolio",
            ResourceKind::Testimonials => "testimonials",
            ResourceKind::Cards => "cards",
            ResourceKind::Services => "services",
            ResourceKind::ServiceCategories => "service-categories",
            ResourceKind::ServiceTags => "service-tags",
            ResourceKind::Projects => "projects",
            ResourceKind::ProjectCategories => "project-categories",
            ResourceKind::ProjectTags => "project-tags",
            ResourceKind::CsrFocus => "csr-focus",
            ResourceKind::Gallery => "gallery",
        }
    }

    #[must_use]
    pub fn schema(self) -> &'static ResourceSchema {
        match self {
            ResourceKind::Articles => &definitions::ARTICLES,
            ResourceKind::Portfolio => &definitions::PORTFOLIO,
            ResourceKind::Testimonials => &definitions::TESTIMONIALS,
            ResourceKind::Cards => &definitions::CARDS,
            ResourceKind::Services => &definitions::SERVICES,
            ResourceKind::ServiceCategories => &definitions::SERVICE_CATEGORIES,
            ResourceKind::ServiceTags => &definitions::SERVICE_TAGS,
            ResourceKind::Projects => &definitions::PROJECTS,
            ResourceKind::ProjectCategories => &definitions::PROJECT_CATEGORIES,
            ResourceKind::ProjectTags => &definitions::PROJECT_TAGS,
            ResourceKind::CsrFocus => &definitions::CSR_FOCUS,
            ResourceKind::Gallery => &definitions::GALLERY,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.document() == wanted)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}
