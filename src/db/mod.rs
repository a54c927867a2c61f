//! Snapshot load/save over the durable key-value store.
//!
//! Each entity collection lives under its own key as a JSON array. Loading
//! falls back to the fixed seed when a blob is absent or malformed; a
//! malformed blob is reported with a warning but never surfaced as an error.
//! Saving rewrites whole collections, only for the keys present in the
//! patch.

pub mod seed;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{Dataset, License, Organization, StoredUser, Theme};
use crate::storage::{keys, Storage};

/// Full in-memory snapshot of the durable data.
#[derive(Debug, Clone)]
pub struct MockData {
    pub users: Vec<StoredUser>,
    pub organizations: Vec<Organization>,
    pub themes: Vec<Theme>,
    pub licenses: Vec<License>,
    pub datasets: Vec<Dataset>,
}

/// Partial snapshot for saving. Absent collections leave their keys
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct MockDataPatch {
    pub users: Option<Vec<StoredUser>>,
    pub organizations: Option<Vec<Organization>>,
    pub themes: Option<Vec<Theme>>,
    pub licenses: Option<Vec<License>>,
    pub datasets: Option<Vec<Dataset>>,
}

/// Read one collection, falling back to its seed when the blob is absent or
/// unparsable.
fn load_collection<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
    seed: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match storage.get(key) {
        Some(blob) => match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("Malformed blob under {}: {}; using seed data", key, err);
                seed()
            }
        },
        None => seed(),
    }
}

/// Load the full snapshot from durable storage, seeding absent collections.
pub fn load_mock_data(storage: &dyn Storage) -> MockData {
    MockData {
        users: load_collection(storage, keys::USERS, seed::seed_users),
        organizations: load_collection(storage, keys::ORGANIZATIONS, seed::seed_organizations),
        themes: load_collection(storage, keys::THEMES, seed::seed_themes),
        licenses: load_collection(storage, keys::LICENSES, seed::seed_licenses),
        datasets: load_collection(storage, keys::DATASETS, seed::seed_datasets),
    }
}

fn save_collection<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    records: &[T],
) -> Result<(), AppError> {
    let blob = serde_json::to_string(records)?;
    storage.set(key, &blob);
    Ok(())
}

/// Persist the collections present in the patch, each as a full rewrite of
/// its key.
pub fn save_mock_data(storage: &mut dyn Storage, patch: &MockDataPatch) -> Result<(), AppError> {
    if let Some(users) = &patch.users {
        save_collection(storage, keys::USERS, users)?;
    }
    if let Some(organizations) = &patch.organizations {
        save_collection(storage, keys::ORGANIZATIONS, organizations)?;
    }
    if let Some(themes) = &patch.themes {
        save_collection(storage, keys::THEMES, themes)?;
    }
    if let Some(licenses) = &patch.licenses {
        save_collection(storage, keys::LICENSES, licenses)?;
    }
    if let Some(datasets) = &patch.datasets {
        save_collection(storage, keys::DATASETS, datasets)?;
    }
    Ok(())
}

/// Write the whole snapshot back, initializing any absent keys.
pub fn initialize_mock_data(storage: &mut dyn Storage) -> Result<MockData, AppError> {
    let data = load_mock_data(storage);
    save_mock_data(
        storage,
        &MockDataPatch {
            users: Some(data.users.clone()),
            organizations: Some(data.organizations.clone()),
            themes: Some(data.themes.clone()),
            licenses: Some(data.licenses.clone()),
            datasets: Some(data.datasets.clone()),
        },
    )?;
    Ok(data)
}
