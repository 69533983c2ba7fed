#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{read_document, seed_document, TestSite};
use serde_json::json;
use site_cms::form::FormData;
use site_cms::settings::{load_settings, update_site};
use site_cms::store::DocumentStore;

#[tokio::test]
async fn test_settings_update_preserves_unedited_keys() {
    let site = TestSite::new();
    seed_document(
        &site.store,
        "settings",
        &json!({
            "site": {"name": "Karya", "logo": "/img/logo/logo.png", "whatsapp": "62812"},
            "seo": {"defaultTitle": "Karya"}
        }),
    );

    let form = FormData::from_pairs([
        ("site_name", "Karya Baja Nusantara"),
        ("site_phone", "+62 21 555"),
        ("social_instagram", "@karyabaja"),
    ]);
    let updated = update_site(&site.store, &form).await.unwrap();
    assert_eq!(updated.site.name, "Karya Baja Nusantara");

    let raw = read_document(&site.store, "settings");
    assert_eq!(raw["seo"], json!({"defaultTitle": "Karya"}));
    assert_eq!(raw["site"]["logo"], json!("/img/logo/logo.png"));
    assert_eq!(raw["site"]["whatsapp"], json!("62812"));
    assert_eq!(raw["site"]["phone"], json!("+62 21 555"));
    assert_eq!(raw["site"]["social"]["instagram"], json!("@karyabaja"));

    let reloaded = load_settings(&site.store).await.unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_settings_created_when_missing() {
    let temp_dir = common::create_test_dir();
    let store = DocumentStore::new(temp_dir.path().join("nested/data"));

    update_site(&store, &FormData::new().with("site_name", "Baru"))
        .await
        .unwrap();

    let raw = read_document(&store, "settings");
    assert_eq!(raw["site"]["name"], json!("Baru"));
}
