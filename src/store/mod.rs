//! Entity stores: in-memory source of truth per record type, plus CRUD.
//!
//! The stores are plain objects constructed once at application start from a
//! shared storage handle; nothing here is global. Every mutating call
//! rewrites the whole affected collection to durable storage synchronously.

mod dataset;
mod license;
mod organization;
mod theme;
mod user;

pub use dataset::DatasetStore;
pub use license::LicenseStore;
pub use organization::OrganizationStore;
pub use theme::ThemeStore;
pub use user::UserStore;

use crate::db;
use crate::errors::AppError;
use crate::storage::SharedStorage;

/// Root store aggregating the five entity stores over one storage handle.
pub struct AppStore {
    pub datasets: DatasetStore,
    pub organizations: OrganizationStore,
    pub themes: ThemeStore,
    pub licenses: LicenseStore,
    pub users: UserStore,
}

impl AppStore {
    /// Load (or seed) the durable snapshot and build the stores.
    pub fn open(storage: SharedStorage) -> Result<Self, AppError> {
        let data = db::initialize_mock_data(&mut *storage.borrow_mut())?;
        tracing::info!(
            datasets = data.datasets.len(),
            organizations = data.organizations.len(),
            themes = data.themes.len(),
            licenses = data.licenses.len(),
            users = data.users.len(),
            "Store initialized"
        );
        Ok(Self {
            datasets: DatasetStore::new(storage.clone(), data.datasets),
            organizations: OrganizationStore::new(storage.clone(), data.organizations),
            themes: ThemeStore::new(storage.clone(), data.themes),
            licenses: LicenseStore::new(storage.clone(), data.licenses),
            users: UserStore::new(storage, data.users),
        })
    }
}
