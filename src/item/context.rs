use crate::media::MediaStore;
use crate::store::DocumentStore;
use crate::user::AdminContext;

/// Everything a write operation needs, passed explicitly on each call.
#[derive(Debug, Clone, Copy)]
pub struct CmsContext<'a> {
    pub store: &'a DocumentStore,
    pub media: &'a MediaStore,
    /// The admin making the change; stamped into author fields on create.
    pub admin: Option<&'a AdminContext>,
}

impl<'a> CmsContext<'a> {
    #[must_use]
    pub fn new(store: &'a DocumentStore, media: &'a MediaStore) -> Self {
        Self {
            store,
            media,
            admin: None,
        }
    }

    #[must_use]
    pub fn with_admin(mut self, admin: &'a AdminContext) -> Self {
        self.admin = Some(admin);
        self
    }
}
