#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{ids, read_document, seed_document, TestSite};
use serde_json::json;
use site_cms::form::{FormData, UploadedFile};
use site_cms::item::{
    create, dashboard_stats, delete, edit, find_published_by_slug, list, lookup_by_ids, related,
    EditOutcome, ItemError, ListOptions, RELATED_LIMIT,
};
use site_cms::resource::ResourceKind;
use site_cms::user::authenticate;

#[tokio::test]
async fn test_admin_article_lifecycle() {
    let site = TestSite::new();
    seed_document(
        &site.store,
        "users",
        &json!([{"id": 1, "username": "admin", "password": "admin123", "name": "Administrator"}]),
    );
    let admin = authenticate(&site.store, "admin", "admin123")
        .await
        .unwrap()
        .expect("credentials should match");

    let form = FormData::from_pairs([
        ("title", "Tips Merawat Baja Ringan"),
        ("excerpt", "Singkat"),
        ("content", "<p>Isi</p>"),
        ("category", "Tips"),
        ("published", "on"),
    ]);
    let created = create(site.ctx().with_admin(&admin), ResourceKind::Articles, &form)
        .await
        .unwrap();
    assert_eq!(created["id"], json!(1));
    assert_eq!(created["slug"], json!("tips-merawat-baja-ringan"));
    assert_eq!(created["author"], json!("Administrator"));

    let outcome = edit(
        site.ctx(),
        ResourceKind::Articles,
        1,
        &FormData::from_pairs([("title", "Tips Baru"), ("category", "Tips")]),
    )
    .await
    .unwrap();
    let EditOutcome::Updated(updated) = outcome else {
        panic!("record 1 exists");
    };
    assert_eq!(updated["slug"], json!("tips-baru"));
    assert_eq!(updated["author"], json!("Administrator"));
    assert_eq!(updated["published"], json!(false));

    assert!(delete(site.ctx(), ResourceKind::Articles, 1).await.unwrap());
    assert_eq!(read_document(&site.store, "articles"), json!([]));
}

#[tokio::test]
async fn test_public_project_page_flow() {
    let site = TestSite::new();
    seed_document(
        &site.store,
        "projects",
        &json!([
            {"id": 1, "slug": "jembatan", "categoryId": 1, "tags": [2, 3], "order": 2, "published": true},
            {"id": 2, "slug": "gudang", "categoryId": 1, "tags": [], "order": 1, "published": true},
            {"id": 3, "slug": "menara", "categoryId": 2, "tags": [], "order": 3, "published": true},
            {"id": 4, "slug": "draft", "categoryId": 1, "tags": [], "order": 0, "published": false}
        ]),
    );
    seed_document(
        &site.store,
        "project-tags",
        &json!([
            {"id": 1, "name": "Baja", "slug": "baja"},
            {"id": 2, "name": "Beton", "slug": "beton"},
            {"id": 3, "name": "Kaca", "slug": "kaca"}
        ]),
    );

    let visible = list(&site.store, ResourceKind::Projects, ListOptions::public())
        .await
        .unwrap();
    assert_eq!(ids(&visible), vec![2, 1, 3]);

    let project = find_published_by_slug(&site.store, ResourceKind::Projects, "jembatan")
        .await
        .unwrap()
        .unwrap();
    assert!(find_published_by_slug(&site.store, ResourceKind::Projects, "draft")
        .await
        .unwrap()
        .is_none());

    let group_key = ResourceKind::Projects.schema().group_key.unwrap();
    let siblings = related(&visible, &project, group_key, RELATED_LIMIT);
    assert_eq!(ids(&siblings), vec![2]);

    let all_tags = list(&site.store, ResourceKind::ProjectTags, ListOptions::admin())
        .await
        .unwrap();
    let tag_ids: Vec<i64> = project["tags"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(serde_json::Value::as_i64)
        .collect();
    let tags = lookup_by_ids(&all_tags, &tag_ids);
    assert_eq!(ids(&tags), vec![2, 3]);
}

#[tokio::test]
async fn test_service_with_uploads_and_tags() {
    let site = TestSite::new();
    let form = FormData::from_pairs([
        ("title", "Rangka Atap"),
        ("shortDescription", "Atap baja ringan"),
        ("categoryId", "2"),
        ("tags", "1"),
        ("tags", "3"),
        ("seo_metaTitle", "Rangka Atap | Karya"),
        ("order", "0"),
    ])
    .with_file("featuredImageFile", UploadedFile::new("atap.png", b"png".to_vec()))
    .with_file("specificationImageFile", UploadedFile::new("spec.jpg", b"jpg".to_vec()));

    let service = create(site.ctx(), ResourceKind::Services, &form).await.unwrap();

    assert_eq!(service["categoryId"], json!(2));
    assert_eq!(service["tags"], json!([1, 3]));
    assert_eq!(service["order"], json!(1));
    assert_eq!(service["specificationLabel"], json!("Spesifikasi"));
    assert_eq!(service["seo"]["metaTitle"], json!("Rangka Atap | Karya"));
    assert_eq!(service["seo"]["canonical"], json!(""));

    let featured = service["featuredImage"].as_str().unwrap();
    let spec = service["specificationImage"].as_str().unwrap();
    assert!(featured.starts_with("/img/all-images/service/service-"));
    assert!(spec.starts_with("/img/all-images/service/specs/spec-"));
    assert!(site.media.resolve(featured).unwrap().is_file());
    assert!(site.media.resolve(spec).unwrap().is_file());

    // Editing without a new upload keeps the stored references.
    let outcome = edit(
        site.ctx(),
        ResourceKind::Services,
        1,
        &FormData::new().with("title", "Rangka Atap Baru"),
    )
    .await
    .unwrap();
    let EditOutcome::Updated(updated) = outcome else {
        panic!("service exists");
    };
    assert_eq!(updated["featuredImage"], json!(featured));
    assert_eq!(updated["specificationImage"], json!(spec));
    assert_eq!(updated["tags"], json!([]));
    assert_eq!(updated["createdAt"], service["createdAt"]);
}

#[tokio::test]
async fn test_corrupt_document_is_an_error_not_empty() {
    let site = TestSite::new();
    std::fs::create_dir_all(site.store.data_dir()).unwrap();
    std::fs::write(site.store.document_path("testimonials"), "{ not json").unwrap();

    let err = list(&site.store, ResourceKind::Testimonials, ListOptions::admin())
        .await
        .unwrap_err();
    let ItemError::StoreError(store_err) = err;
    assert!(store_err.is_corrupt());

    let before = std::fs::read(site.store.document_path("testimonials")).unwrap();
    assert!(delete(site.ctx(), ResourceKind::Testimonials, 1).await.is_err());
    assert_eq!(
        std::fs::read(site.store.document_path("testimonials")).unwrap(),
        before
    );
}

#[tokio::test]
async fn test_dashboard_stats() {
    let site = TestSite::new();
    seed_document(&site.store, "articles", &json!([{"id": 1}, {"id": 2}]));
    seed_document(&site.store, "cards", &json!([{"id": 1}]));

    let stats = dashboard_stats(&site.store).await.unwrap();
    assert_eq!(stats.articles, 2);
    assert_eq!(stats.cards, 1);
    assert_eq!(stats.services, 0);
    assert_eq!(
        serde_json::to_value(stats).unwrap(),
        json!({"articles": 2, "testimonials": 0, "cards": 1, "services": 0, "projects": 0})
    );
}

#[tokio::test]
async fn test_every_resource_supports_create() {
    let site = TestSite::new();
    for kind in ResourceKind::ALL {
        let record = create(site.ctx(), kind, &FormData::new().with("title", "X").with("name", "X"))
            .await
            .unwrap();
        assert_eq!(record["id"], json!(1), "{kind}");
        assert!(site.store.document_path(kind.document()).exists());
    }
}
