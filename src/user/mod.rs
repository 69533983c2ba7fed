//! Admin accounts stored in the `users` document.
//!
//! Credentials are compared as stored. Gating admin operations is the job of
//! whatever session layer sits in front; the controller only receives the
//! resulting [`AdminContext`].

use crate::resource::USERS_DOCUMENT;
use crate::store::{DocumentStore, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The admin performing a controller call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminContext {
    pub id: i64,
    pub username: String,
    pub name: String,
}

impl From<&User> for AdminContext {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

pub async fn list_users(store: &DocumentStore) -> Result<Vec<User>, StoreError> {
    store.load_typed(USERS_DOCUMENT).await
}

/// Check a username/password pair. `None` means the login is rejected.
pub async fn authenticate(
    store: &DocumentStore,
    username: &str,
    password: &str,
) -> Result<Option<AdminContext>, StoreError> {
    let users = list_users(store).await?;
    let admin = users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(AdminContext::from);
    if let Some(a) = &admin {
        info!("Admin '{}' authenticated", a.username);
    } else {
        debug!("Rejected login for '{}'", username);
    }
    Ok(admin)
}

/// Look up an admin by username without checking credentials.
pub async fn find_admin(
    store: &DocumentStore,
    username: &str,
) -> Result<Option<AdminContext>, StoreError> {
    let users = list_users(store).await?;
    Ok(users
        .iter()
        .find(|u| u.username == username)
        .map(AdminContext::from))
}
