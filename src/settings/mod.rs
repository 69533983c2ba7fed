//! Site-wide settings: the single object-shaped `settings` document.

use crate::form::FormData;
use crate::resource::SETTINGS_DOCUMENT;
use crate::store::{DocumentStore, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSocial {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub tiktok: String,
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub shopee: String,
    #[serde(default)]
    pub tokopedia: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub social: SiteSocial,
    /// Keys the admin form does not edit (logo, maps embed, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Load settings; a missing document gives empty settings.
pub async fn load_settings(store: &DocumentStore) -> Result<SiteSettings, StoreError> {
    store.load_typed(SETTINGS_DOCUMENT).await
}

pub async fn save_settings(store: &DocumentStore, settings: &SiteSettings) -> Result<(), StoreError> {
    store.save_typed(SETTINGS_DOCUMENT, settings).await
}

/// Overwrite the editable `site` fields from a settings form.
///
/// Form keys are `site_<field>` and `social_<network>`. Other keys of `site`
/// survive; the `social` object is rebuilt from the form alone.
pub async fn update_site(store: &DocumentStore, form: &FormData) -> Result<SiteSettings, StoreError> {
    let mut settings = load_settings(store).await?;
    apply_site_form(&mut settings.site, form);
    save_settings(store, &settings).await?;
    info!("Updated site settings");
    Ok(settings)
}

fn apply_site_form(site: &mut SiteInfo, form: &FormData) {
    let text = |key: &str| form.get(key).unwrap_or_default().to_string();

    site.name = text("site_name");
    site.tagline = text("site_tagline");
    site.description = text("site_description");
    site.email = text("site_email");
    site.phone = text("site_phone");
    site.address = text("site_address");
    site.social = SiteSocial {
        instagram: text("social_instagram"),
        tiktok: text("social_tiktok"),
        youtube: text("social_youtube"),
        shopee: text("social_shopee"),
        tokopedia: text("social_tokopedia"),
        extra: Map::new(),
    };
}
