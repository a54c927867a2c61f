//! Platform statistics computed over the entity stores.

use serde::Serialize;

use crate::models::{Dataset, DatasetStatus, UserRole};
use crate::store::AppStore;

/// Headline counters for the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub total_datasets: usize,
    pub published_datasets: usize,
    pub draft_datasets: usize,
    pub archived_datasets: usize,
    pub total_downloads: u64,
    pub total_views: u64,
    pub total_users: usize,
    pub active_users: usize,
    pub total_organizations: usize,
    pub total_themes: usize,
    pub total_licenses: usize,
    pub featured_datasets: usize,
}

/// Dataset count per theme.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCount {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub datasets_count: usize,
}

/// Dataset count per producer organization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCount {
    pub id: String,
    pub name: String,
    pub datasets_count: usize,
}

/// Full statistics snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub overview: StatsOverview,
    pub datasets_by_theme: Vec<ThemeCount>,
    pub datasets_by_organization: Vec<OrganizationCount>,
    /// Ten most recently created datasets.
    pub recent_datasets: Vec<Dataset>,
    /// Ten most downloaded datasets.
    pub top_datasets: Vec<Dataset>,
}

impl Stats {
    /// Compute statistics from the current store state.
    pub fn compute(store: &AppStore) -> Self {
        let datasets = store.datasets.all();
        let users = store.users.all();

        let overview = StatsOverview {
            total_datasets: datasets.len(),
            published_datasets: datasets
                .iter()
                .filter(|d| d.status == DatasetStatus::Published)
                .count(),
            draft_datasets: datasets
                .iter()
                .filter(|d| d.status == DatasetStatus::Draft)
                .count(),
            archived_datasets: datasets
                .iter()
                .filter(|d| d.status == DatasetStatus::Archived)
                .count(),
            total_downloads: datasets.iter().map(|d| d.downloads_count).sum(),
            total_views: datasets.iter().map(|d| d.views_count).sum(),
            total_users: users.len(),
            // "Active" on the dashboard means staff accounts, not the
            // is_active flag.
            active_users: users.iter().filter(|u| u.role != UserRole::Public).count(),
            total_organizations: store.organizations.all().len(),
            total_themes: store.themes.all().len(),
            total_licenses: store.licenses.all().len(),
            featured_datasets: datasets.iter().filter(|d| d.featured).count(),
        };

        let datasets_by_theme = store
            .themes
            .all()
            .iter()
            .map(|theme| ThemeCount {
                id: theme.id.clone(),
                name: theme.name.clone(),
                slug: theme.slug.clone(),
                datasets_count: datasets
                    .iter()
                    .filter(|d| d.theme_id.as_deref() == Some(theme.id.as_str()))
                    .count(),
            })
            .collect();

        let datasets_by_organization = store
            .organizations
            .all()
            .iter()
            .map(|org| OrganizationCount {
                id: org.id.clone(),
                name: org.name.clone(),
                datasets_count: datasets
                    .iter()
                    .filter(|d| d.producer_id == org.id)
                    .count(),
            })
            .collect();

        let mut recent: Vec<Dataset> = datasets.to_vec();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(10);

        let mut top: Vec<Dataset> = datasets.to_vec();
        top.sort_by(|a, b| b.downloads_count.cmp(&a.downloads_count));
        top.truncate(10);

        Stats {
            overview,
            datasets_by_theme,
            datasets_by_organization,
            recent_datasets: recent,
            top_datasets: top,
        }
    }
}
