//! Theme store: CRUD and selection for catalog themes.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{save_mock_data, MockDataPatch};
use crate::errors::AppError;
use crate::models::{
    page_slice, validation::generate_slug, Pagination, PaginationParams, Theme, ThemeForm,
    ThemePatch,
};
use crate::storage::SharedStorage;

// Themes are a small reference collection; the original UI lists them all.
const DEFAULT_PAGE_LIMIT: usize = 100;

pub struct ThemeStore {
    storage: SharedStorage,
    themes: Vec<Theme>,
    selected: Option<Theme>,
}

impl ThemeStore {
    pub fn new(storage: SharedStorage, themes: Vec<Theme>) -> Self {
        Self {
            storage,
            themes,
            selected: None,
        }
    }

    pub fn list(&self) -> Vec<Theme> {
        self.themes.clone()
    }

    pub fn all(&self) -> &[Theme] {
        &self.themes
    }

    pub fn page(&self, params: PaginationParams) -> (Vec<Theme>, Pagination) {
        page_slice(&self.themes, params, DEFAULT_PAGE_LIMIT)
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Case-insensitive substring match on name, slug and description.
    pub fn search(&self, term: &str) -> Vec<Theme> {
        let term = term.to_lowercase();
        self.themes
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&term)
                    || t.slug.to_lowercase().contains(&term)
                    || t.description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&term))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn select(&mut self, theme: Option<Theme>) {
        self.selected = theme;
    }

    pub fn selected(&self) -> Option<&Theme> {
        self.selected.as_ref()
    }

    pub fn create(&mut self, form: ThemeForm) -> Result<Theme, AppError> {
        let now = Utc::now().to_rfc3339();
        let slug = match form.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => generate_slug(&form.name),
        };
        let theme = Theme {
            id: Uuid::new_v4().to_string(),
            name: form.name,
            slug,
            description: form.description,
            icon: form.icon,
            created_at: now.clone(),
            updated_at: now,
        };

        self.themes.insert(0, theme.clone());
        self.persist()?;
        tracing::debug!(id = %theme.id, "Theme created");
        Ok(theme)
    }

    pub fn update(&mut self, id: &str, patch: ThemePatch) -> Result<Theme, AppError> {
        let Some(index) = self.themes.iter().position(|t| t.id == id) else {
            return Err(AppError::NotFound(format!("Theme {} not found", id)));
        };

        let theme = &mut self.themes[index];
        // Explicit slug wins; a rename without one regenerates it.
        if let Some(slug) = patch.slug.filter(|s| !s.is_empty()) {
            theme.slug = slug;
        } else if let Some(name) = &patch.name {
            theme.slug = generate_slug(name);
        }
        if let Some(name) = patch.name {
            theme.name = name;
        }
        if let Some(description) = patch.description {
            theme.description = Some(description);
        }
        if let Some(icon) = patch.icon {
            theme.icon = Some(icon);
        }
        theme.updated_at = Utc::now().to_rfc3339();

        let updated = theme.clone();
        if self.selected.as_ref().map(|t| t.id.as_str()) == Some(id) {
            self.selected = Some(updated.clone());
        }
        self.persist()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let Some(index) = self.themes.iter().position(|t| t.id == id) else {
            return Err(AppError::NotFound(format!("Theme {} not found", id)));
        };
        self.themes.remove(index);
        if self.selected.as_ref().map(|t| t.id.as_str()) == Some(id) {
            self.selected = None;
        }
        self.persist()?;
        tracing::debug!(id, "Theme deleted");
        Ok(())
    }

    fn persist(&self) -> Result<(), AppError> {
        save_mock_data(
            &mut *self.storage.borrow_mut(),
            &MockDataPatch {
                themes: Some(self.themes.clone()),
                ..Default::default()
            },
        )
    }
}
