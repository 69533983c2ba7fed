//! Field tables for every collection resource.

use super::schema::{FieldKind, FieldSpec, ResourceSchema, UploadTarget};
use super::ResourceKind;

use super::schema::FieldKind::{Author, CreatedOn, Flag, Group, IdList, Slug, Text, TextOr, UpdatedOn};

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::new(name, kind)
}

const fn reference(name: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec::new(
        name,
        FieldKind::Reference {
            default,
            upload: None,
        },
    )
}

const fn uploadable(
    name: &'static str,
    default: &'static str,
    directory: &'static str,
    prefix: &'static str,
) -> FieldSpec {
    FieldSpec::new(
        name,
        FieldKind::Reference {
            default,
            upload: Some(UploadTarget { directory, prefix }),
        },
    )
}

const fn int(name: &'static str, default: Option<i64>) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Int { default })
}

const SEO_KEYS: &[&str] = &[
    "metaTitle",
    "metaDescription",
    "metaKeywords",
    "canonical",
    "ogImage",
    "schema",
];

const CARD_SOCIAL_KEYS: &[&str] = &["linkedin", "instagram", "twitter"];

pub(super) static ARTICLES: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Articles,
    fields: &[
        field("title", Text),
        field("slug", Slug { source: "title" }),
        field("excerpt", Text),
        field("content", Text),
        reference("image", "/img/blog/blog-1.jpg"),
        field("category", Text),
        field("author", Author),
        field("date", CreatedOn),
        field("published", Flag),
    ],
    sort_key: None,
    group_key: Some("category"),
};

pub(super) static PORTFOLIO: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Portfolio,
    fields: &[
        field("title", Text),
        field("slug", Slug { source: "title" }),
        field("description", Text),
        reference("image", "/img/project/project-1.jpg"),
        field("category", Text),
        field("client", Text),
        field("date", CreatedOn),
        field("published", Flag),
    ],
    sort_key: None,
    group_key: Some("category"),
};

pub(super) static TESTIMONIALS: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Testimonials,
    fields: &[
        field("name", Text),
        field("position", Text),
        field("content", Text),
        reference("image", "/img/testimonial/testimonial-1.jpg"),
        int("rating", Some(5)),
        field("published", Flag),
    ],
    sort_key: None,
    group_key: None,
};

pub(super) static CARDS: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Cards,
    fields: &[
        field("name", Text),
        field("slug", Slug { source: "name" }),
        field("position", Text),
        field("email", Text),
        field("phone", Text),
        field("summary", Text),
        reference("photo", "/img/team/team-1.jpg"),
        field("social", Group(CARD_SOCIAL_KEYS)),
        field("published", Flag),
        field("created_at", CreatedOn),
    ],
    sort_key: None,
    group_key: None,
};

pub(super) static SERVICES: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Services,
    fields: &[
        field("title", Text),
        field("slug", Slug { source: "title" }),
        field("shortDescription", Text),
        field("content", Text),
        uploadable(
            "featuredImage",
            "/img/all-images/service/service-img1.png",
            "/img/all-images/service",
            "service",
        ),
        reference("icon", "/img/icons/service16.svg"),
        int("categoryId", None),
        field("tags", IdList),
        field("specificationLabel", TextOr("Spesifikasi")),
        uploadable(
            "specificationImage",
            "",
            "/img/all-images/service/specs",
            "spec",
        ),
        field("seo", Group(SEO_KEYS)),
        int("order", Some(1)),
        field("published", Flag),
        field("createdAt", CreatedOn),
        field("updatedAt", UpdatedOn),
    ],
    sort_key: Some("order"),
    group_key: Some("categoryId"),
};

pub(super) static SERVICE_CATEGORIES: ResourceSchema = ResourceSchema {
    kind: ResourceKind::ServiceCategories,
    fields: &[
        field("name", Text),
        field("slug", Slug { source: "name" }),
        field("description", Text),
        field("createdAt", CreatedOn),
    ],
    sort_key: None,
    group_key: None,
};

pub(super) static SERVICE_TAGS: ResourceSchema = ResourceSchema {
    kind: ResourceKind::ServiceTags,
    fields: &[
        field("name", Text),
        field("slug", Slug { source: "name" }),
        field("createdAt", CreatedOn),
    ],
    sort_key: None,
    group_key: None,
};

pub(super) static PROJECTS: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Projects,
    fields: &[
        field("title", Text),
        field("slug", Slug { source: "title" }),
        field("shortDescription", Text),
        field("content", Text),
        uploadable(
            "featuredImage",
            "/img/all-images/project/project-img14.png",
            "/img/all-images/project",
            "project",
        ),
        int("categoryId", None),
        field("tags", IdList),
        field("seo", Group(SEO_KEYS)),
        int("order", Some(1)),
        field("published", Flag),
        field("createdAt", CreatedOn),
        field("updatedAt", UpdatedOn),
    ],
    sort_key: Some("order"),
    group_key: Some("categoryId"),
};

pub(super) static PROJECT_CATEGORIES: ResourceSchema = ResourceSchema {
    kind: ResourceKind::ProjectCategories,
    fields: &[
        field("name", Text),
        field("slug", Slug { source: "name" }),
        field("description", Text),
        field("createdAt", CreatedOn),
    ],
    sort_key: None,
    group_key: None,
};

pub(super) static PROJECT_TAGS: ResourceSchema = ResourceSchema {
    kind: ResourceKind::ProjectTags,
    fields: &[
        field("name", Text),
        field("slug", Slug { source: "name" }),
        field("createdAt", CreatedOn),
    ],
    sort_key: None,
    group_key: None,
};

pub(super) static CSR_FOCUS: ResourceSchema = ResourceSchema {
    kind: ResourceKind::CsrFocus,
    fields: &[
        field("title", Text),
        field("description", Text),
        uploadable(
            "image",
            "/img/all-images/service/service-img5.png",
            "/img/all-images/csr",
            "csr-focus",
        ),
        int("order", Some(1)),
        field("published", Flag),
        field("createdAt", CreatedOn),
        field("updatedAt", UpdatedOn),
    ],
    sort_key: Some("order"),
    group_key: None,
};

pub(super) static GALLERY: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Gallery,
    fields: &[
        field("title", Text),
        field("slug", Slug { source: "title" }),
        uploadable(
            "image",
            "/img/gallery/gallery-1.jpg",
            "/img/gallery",
            "gallery",
        ),
        field("category", Text),
        field("published", Flag),
        field("createdAt", CreatedOn),
    ],
    sort_key: None,
    group_key: Some("category"),
};
