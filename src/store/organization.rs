//! Organization store: CRUD and selection for producer organizations.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{save_mock_data, MockDataPatch};
use crate::errors::AppError;
use crate::models::{
    page_slice, Organization, OrganizationForm, OrganizationPatch, Pagination, PaginationParams,
};
use crate::storage::SharedStorage;

const DEFAULT_PAGE_LIMIT: usize = 10;

pub struct OrganizationStore {
    storage: SharedStorage,
    organizations: Vec<Organization>,
    selected: Option<Organization>,
}

impl OrganizationStore {
    pub fn new(storage: SharedStorage, organizations: Vec<Organization>) -> Self {
        Self {
            storage,
            organizations,
            selected: None,
        }
    }

    pub fn list(&self) -> Vec<Organization> {
        self.organizations.clone()
    }

    pub fn all(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn page(&self, params: PaginationParams) -> (Vec<Organization>, Pagination) {
        page_slice(&self.organizations, params, DEFAULT_PAGE_LIMIT)
    }

    pub fn get(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    /// Case-insensitive substring match on name and description.
    pub fn search(&self, term: &str) -> Vec<Organization> {
        let term = term.to_lowercase();
        self.organizations
            .iter()
            .filter(|o| {
                o.name.to_lowercase().contains(&term)
                    || o.description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&term))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn select(&mut self, organization: Option<Organization>) {
        self.selected = organization;
    }

    pub fn selected(&self) -> Option<&Organization> {
        self.selected.as_ref()
    }

    pub fn create(&mut self, form: OrganizationForm) -> Result<Organization, AppError> {
        let now = Utc::now().to_rfc3339();
        let organization = Organization {
            id: Uuid::new_v4().to_string(),
            name: form.name,
            description: form.description,
            email: form.email,
            website: form.website,
            logo: form.logo,
            created_at: now.clone(),
            updated_at: now,
        };

        self.organizations.insert(0, organization.clone());
        self.persist()?;
        tracing::debug!(id = %organization.id, "Organization created");
        Ok(organization)
    }

    pub fn update(&mut self, id: &str, patch: OrganizationPatch) -> Result<Organization, AppError> {
        let Some(index) = self.organizations.iter().position(|o| o.id == id) else {
            return Err(AppError::NotFound(format!("Organization {} not found", id)));
        };

        let organization = &mut self.organizations[index];
        if let Some(name) = patch.name {
            organization.name = name;
        }
        if let Some(description) = patch.description {
            organization.description = Some(description);
        }
        if let Some(email) = patch.email {
            organization.email = Some(email);
        }
        if let Some(website) = patch.website {
            organization.website = Some(website);
        }
        if let Some(logo) = patch.logo {
            organization.logo = Some(logo);
        }
        organization.updated_at = Utc::now().to_rfc3339();

        let updated = organization.clone();
        if self.selected.as_ref().map(|o| o.id.as_str()) == Some(id) {
            self.selected = Some(updated.clone());
        }
        self.persist()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let Some(index) = self.organizations.iter().position(|o| o.id == id) else {
            return Err(AppError::NotFound(format!("Organization {} not found", id)));
        };
        self.organizations.remove(index);
        if self.selected.as_ref().map(|o| o.id.as_str()) == Some(id) {
            self.selected = None;
        }
        self.persist()?;
        tracing::debug!(id, "Organization deleted");
        Ok(())
    }

    fn persist(&self) -> Result<(), AppError> {
        save_mock_data(
            &mut *self.storage.borrow_mut(),
            &MockDataPatch {
                organizations: Some(self.organizations.clone()),
                ..Default::default()
            },
        )
    }
}
