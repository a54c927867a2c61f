//! License store: CRUD and selection for reuse licenses.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{save_mock_data, MockDataPatch};
use crate::errors::AppError;
use crate::models::{
    page_slice, validation::generate_slug, License, LicenseForm, LicensePatch, Pagination,
    PaginationParams,
};
use crate::storage::SharedStorage;

const DEFAULT_PAGE_LIMIT: usize = 100;

pub struct LicenseStore {
    storage: SharedStorage,
    licenses: Vec<License>,
    selected: Option<License>,
}

impl LicenseStore {
    pub fn new(storage: SharedStorage, licenses: Vec<License>) -> Self {
        Self {
            storage,
            licenses,
            selected: None,
        }
    }

    pub fn list(&self) -> Vec<License> {
        self.licenses.clone()
    }

    pub fn all(&self) -> &[License] {
        &self.licenses
    }

    pub fn page(&self, params: PaginationParams) -> (Vec<License>, Pagination) {
        page_slice(&self.licenses, params, DEFAULT_PAGE_LIMIT)
    }

    pub fn get(&self, id: &str) -> Option<&License> {
        self.licenses.iter().find(|l| l.id == id)
    }

    /// Case-insensitive substring match on name, slug and description.
    pub fn search(&self, term: &str) -> Vec<License> {
        let term = term.to_lowercase();
        self.licenses
            .iter()
            .filter(|l| {
                l.name.to_lowercase().contains(&term)
                    || l.slug.to_lowercase().contains(&term)
                    || l.description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&term))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn select(&mut self, license: Option<License>) {
        self.selected = license;
    }

    pub fn selected(&self) -> Option<&License> {
        self.selected.as_ref()
    }

    pub fn create(&mut self, form: LicenseForm) -> Result<License, AppError> {
        let now = Utc::now().to_rfc3339();
        let slug = match form.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => generate_slug(&form.name),
        };
        let license = License {
            id: Uuid::new_v4().to_string(),
            name: form.name,
            slug,
            description: form.description,
            url: form.url,
            created_at: now.clone(),
            updated_at: now,
        };

        self.licenses.insert(0, license.clone());
        self.persist()?;
        tracing::debug!(id = %license.id, "License created");
        Ok(license)
    }

    pub fn update(&mut self, id: &str, patch: LicensePatch) -> Result<License, AppError> {
        let Some(index) = self.licenses.iter().position(|l| l.id == id) else {
            return Err(AppError::NotFound(format!("License {} not found", id)));
        };

        let license = &mut self.licenses[index];
        // Explicit slug wins; a rename without one regenerates it.
        if let Some(slug) = patch.slug.filter(|s| !s.is_empty()) {
            license.slug = slug;
        } else if let Some(name) = &patch.name {
            license.slug = generate_slug(name);
        }
        if let Some(name) = patch.name {
            license.name = name;
        }
        if let Some(description) = patch.description {
            license.description = Some(description);
        }
        if let Some(url) = patch.url {
            license.url = Some(url);
        }
        license.updated_at = Utc::now().to_rfc3339();

        let updated = license.clone();
        if self.selected.as_ref().map(|l| l.id.as_str()) == Some(id) {
            self.selected = Some(updated.clone());
        }
        self.persist()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let Some(index) = self.licenses.iter().position(|l| l.id == id) else {
            return Err(AppError::NotFound(format!("License {} not found", id)));
        };
        self.licenses.remove(index);
        if self.selected.as_ref().map(|l| l.id.as_str()) == Some(id) {
            self.selected = None;
        }
        self.persist()?;
        tracing::debug!(id, "License deleted");
        Ok(())
    }

    fn persist(&self) -> Result<(), AppError> {
        save_mock_data(
            &mut *self.storage.borrow_mut(),
            &MockDataPatch {
                licenses: Some(self.licenses.clone()),
                ..Default::default()
            },
        )
    }
}
