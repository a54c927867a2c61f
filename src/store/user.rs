//! User store: CRUD, filtering and selection for user accounts.
//!
//! Internally the collection holds [`StoredUser`] records so mock
//! credentials survive full-collection rewrites; everything returned to
//! callers is a password-stripped [`User`].

use chrono::Utc;
use uuid::Uuid;

use crate::db::{save_mock_data, MockDataPatch};
use crate::errors::AppError;
use crate::models::{
    page_slice, Pagination, PaginationParams, StoredUser, User, UserFilters, UserForm, UserPatch,
};
use crate::storage::SharedStorage;

const DEFAULT_PAGE_LIMIT: usize = 10;

pub struct UserStore {
    storage: SharedStorage,
    users: Vec<StoredUser>,
    filters: UserFilters,
    selected: Option<User>,
}

impl UserStore {
    pub fn new(storage: SharedStorage, users: Vec<StoredUser>) -> Self {
        Self {
            storage,
            users,
            filters: UserFilters::default(),
            selected: None,
        }
    }

    /// All users matching the active filters, passwords stripped. Always
    /// the full filtered set; use [`UserStore::page`] for a slice.
    pub fn list(&self) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| self.filters.is_empty() || self.filters.matches(u.as_user()))
            .map(|u| u.as_user().clone())
            .collect()
    }

    /// The unfiltered collection, passwords stripped.
    pub fn all(&self) -> Vec<User> {
        self.users.iter().map(|u| u.as_user().clone()).collect()
    }

    pub fn page(&self, params: PaginationParams) -> (Vec<User>, Pagination) {
        page_slice(&self.list(), params, DEFAULT_PAGE_LIMIT)
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.as_user().id == id).map(|u| u.as_user())
    }

    /// Merge the given filters into the active predicate.
    pub fn set_filters(&mut self, filters: UserFilters) {
        if filters.role.is_some() {
            self.filters.role = filters.role;
        }
        if filters.organization_id.is_some() {
            self.filters.organization_id = filters.organization_id;
        }
        if filters.is_active.is_some() {
            self.filters.is_active = filters.is_active;
        }
        if filters.search.is_some() {
            self.filters.search = filters.search;
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters = UserFilters::default();
    }

    pub fn select(&mut self, user: Option<User>) {
        self.selected = user;
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Create a user account. Accounts created through the admin form carry
    /// no mock credential; only registration sets one.
    pub fn create(&mut self, form: UserForm) -> Result<User, AppError> {
        let now = Utc::now().to_rfc3339();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: form.email,
            name: Some(form.name),
            role: form.role,
            organization_id: form.organization_id,
            is_active: form.is_active.unwrap_or(true),
            email_verified: Some(false),
            last_login_at: None,
            created_at: now.clone(),
            updated_at: now,
        };

        self.users.insert(
            0,
            StoredUser {
                user: user.clone(),
                password: None,
            },
        );
        self.persist()?;
        tracing::debug!(id = %user.id, "User created");
        Ok(user)
    }

    /// Shallow-merge the patch, preserving the stored credential.
    pub fn update(&mut self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let Some(index) = self.users.iter().position(|u| u.as_user().id == id) else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };

        let user = &mut self.users[index].user;
        if let Some(name) = patch.name {
            user.name = Some(name);
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(organization_id) = patch.organization_id {
            user.organization_id = Some(organization_id);
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now().to_rfc3339();

        let updated = user.clone();
        if self.selected.as_ref().map(|u| u.id.as_str()) == Some(id) {
            self.selected = Some(updated.clone());
        }
        self.persist()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let Some(index) = self.users.iter().position(|u| u.as_user().id == id) else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };
        self.users.remove(index);
        if self.selected.as_ref().map(|u| u.id.as_str()) == Some(id) {
            self.selected = None;
        }
        self.persist()?;
        tracing::debug!(id, "User deleted");
        Ok(())
    }

    fn persist(&self) -> Result<(), AppError> {
        save_mock_data(
            &mut *self.storage.borrow_mut(),
            &MockDataPatch {
                users: Some(self.users.clone()),
                ..Default::default()
            },
        )
    }
}
