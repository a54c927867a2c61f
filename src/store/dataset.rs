//! Dataset store: CRUD, filtering and selection for catalog datasets.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{save_mock_data, MockDataPatch};
use crate::errors::AppError;
use crate::models::{
    page_slice, validation::generate_slug, Dataset, DatasetFilters, DatasetForm, DatasetPatch,
    DatasetStatus, Pagination, PaginationParams,
};
use crate::storage::SharedStorage;

const DEFAULT_PAGE_LIMIT: usize = 10;

/// In-memory collection of datasets with a transient filter predicate and
/// selection pointer. Records are ordered newest first.
pub struct DatasetStore {
    storage: SharedStorage,
    datasets: Vec<Dataset>,
    filters: DatasetFilters,
    selected: Option<Dataset>,
}

impl DatasetStore {
    pub fn new(storage: SharedStorage, datasets: Vec<Dataset>) -> Self {
        Self {
            storage,
            datasets,
            filters: DatasetFilters::default(),
            selected: None,
        }
    }

    /// All records matching the active filters. Always the full filtered
    /// set; use [`DatasetStore::page`] for a slice.
    pub fn list(&self) -> Vec<Dataset> {
        if self.filters.is_empty() {
            return self.datasets.clone();
        }
        self.datasets
            .iter()
            .filter(|d| self.filters.matches(d))
            .cloned()
            .collect()
    }

    /// The unfiltered collection.
    pub fn all(&self) -> &[Dataset] {
        &self.datasets
    }

    /// One page of the filtered set plus pagination metadata.
    pub fn page(&self, params: PaginationParams) -> (Vec<Dataset>, Pagination) {
        page_slice(&self.list(), params, DEFAULT_PAGE_LIMIT)
    }

    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Merge the given filters into the active predicate.
    pub fn set_filters(&mut self, filters: DatasetFilters) {
        if filters.status.is_some() {
            self.filters.status = filters.status;
        }
        if filters.theme_id.is_some() {
            self.filters.theme_id = filters.theme_id;
        }
        if filters.producer_id.is_some() {
            self.filters.producer_id = filters.producer_id;
        }
        if filters.format.is_some() {
            self.filters.format = filters.format;
        }
        if filters.featured.is_some() {
            self.filters.featured = filters.featured;
        }
        if filters.search.is_some() {
            self.filters.search = filters.search;
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters = DatasetFilters::default();
    }

    /// Set the transient selection pointer used by edit dialogs.
    pub fn select(&mut self, dataset: Option<Dataset>) {
        self.selected = dataset;
    }

    pub fn selected(&self) -> Option<&Dataset> {
        self.selected.as_ref()
    }

    /// Create a dataset and prepend it to the collection.
    pub fn create(&mut self, form: DatasetForm) -> Result<Dataset, AppError> {
        let now = Utc::now().to_rfc3339();
        let dataset = Dataset {
            id: Uuid::new_v4().to_string(),
            slug: generate_slug(&form.title),
            title: form.title,
            short_description: form.short_description,
            description: form.description,
            format: form.format,
            download_url: None,
            api_url: None,
            spatial_coverage: form.spatial_coverage,
            temporal_coverage: form.temporal_coverage,
            publication_date: now.clone(),
            update_frequency: form.update_frequency,
            last_updated: now.clone(),
            file_size: None,
            record_count: None,
            downloads_count: 0,
            views_count: 0,
            featured: form.featured.unwrap_or(false),
            status: form.status.unwrap_or(DatasetStatus::Draft),
            current_version: 1,
            producer_id: form.producer_id,
            theme_id: form.theme_id,
            license_id: form.license_id,
            created_by_id: None,
            created_at: now.clone(),
            updated_at: now,
        };

        self.datasets.insert(0, dataset.clone());
        self.persist()?;
        tracing::debug!(id = %dataset.id, "Dataset created");
        Ok(dataset)
    }

    /// Shallow-merge the patch into the record, preserving its position.
    pub fn update(&mut self, id: &str, patch: DatasetPatch) -> Result<Dataset, AppError> {
        let Some(index) = self.datasets.iter().position(|d| d.id == id) else {
            return Err(AppError::NotFound(format!("Dataset {} not found", id)));
        };

        let dataset = &mut self.datasets[index];
        if let Some(title) = patch.title {
            dataset.title = title;
        }
        if let Some(short_description) = patch.short_description {
            dataset.short_description = Some(short_description);
        }
        if let Some(description) = patch.description {
            dataset.description = Some(description);
        }
        if let Some(format) = patch.format {
            dataset.format = format;
        }
        if let Some(status) = patch.status {
            dataset.status = status;
        }
        if let Some(producer_id) = patch.producer_id {
            dataset.producer_id = producer_id;
        }
        if let Some(theme_id) = patch.theme_id {
            dataset.theme_id = Some(theme_id);
        }
        if let Some(license_id) = patch.license_id {
            dataset.license_id = license_id;
        }
        if let Some(update_frequency) = patch.update_frequency {
            dataset.update_frequency = Some(update_frequency);
        }
        if let Some(featured) = patch.featured {
            dataset.featured = featured;
        }
        if let Some(spatial_coverage) = patch.spatial_coverage {
            dataset.spatial_coverage = Some(spatial_coverage);
        }
        if let Some(temporal_coverage) = patch.temporal_coverage {
            dataset.temporal_coverage = Some(temporal_coverage);
        }
        dataset.updated_at = Utc::now().to_rfc3339();

        let updated = dataset.clone();
        if self.selected.as_ref().map(|d| d.id.as_str()) == Some(id) {
            self.selected = Some(updated.clone());
        }
        self.persist()?;
        Ok(updated)
    }

    /// Remove the record, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let Some(index) = self.datasets.iter().position(|d| d.id == id) else {
            return Err(AppError::NotFound(format!("Dataset {} not found", id)));
        };
        self.datasets.remove(index);
        if self.selected.as_ref().map(|d| d.id.as_str()) == Some(id) {
            self.selected = None;
        }
        self.persist()?;
        tracing::debug!(id, "Dataset deleted");
        Ok(())
    }

    pub fn published(&self) -> Vec<Dataset> {
        self.datasets
            .iter()
            .filter(|d| d.status == DatasetStatus::Published)
            .cloned()
            .collect()
    }

    pub fn drafts(&self) -> Vec<Dataset> {
        self.datasets
            .iter()
            .filter(|d| d.status == DatasetStatus::Draft)
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Dataset> {
        self.datasets.iter().filter(|d| d.featured).cloned().collect()
    }

    fn persist(&self) -> Result<(), AppError> {
        save_mock_data(
            &mut *self.storage.borrow_mut(),
            &MockDataPatch {
                datasets: Some(self.datasets.clone()),
                ..Default::default()
            },
        )
    }
}
