use super::ItemError;
use crate::resource::ResourceKind;
use crate::store::DocumentStore;
use serde::Serialize;

/// Collection sizes for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub articles: usize,
    pub testimonials: usize,
    pub cards: usize,
    pub services: usize,
    pub projects: usize,
}

pub async fn dashboard_stats(store: &DocumentStore) -> Result<DashboardStats, ItemError> {
    let count = |kind: ResourceKind| async move {
        store.load(kind.document()).await.map(|records| records.len())
    };
    Ok(DashboardStats {
        articles: count(ResourceKind::Articles).await?,
        testimonials: count(ResourceKind::Testimonials).await?,
        cards: count(ResourceKind::Cards).await?,
        services: count(ResourceKind::Services).await?,
        projects: count(ResourceKind::Projects).await?,
    })
}
