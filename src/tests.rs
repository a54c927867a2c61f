//! Integration tests for the JDOM catalog core.

use chrono::{Duration, Utc};

use crate::db::{load_mock_data, save_mock_data, MockDataPatch};
use crate::models::{
    DatasetFilters, DatasetForm, DatasetFormat, DatasetPatch, DatasetStatus, PaginationParams,
    Session, UserFilters, UserPatch, UserRole,
};
use crate::storage::{keys, shared, MemoryStorage, SharedStorage};
use crate::{AppError, AppStore, AuthStore, FileStorage, Stats};

/// Fresh in-memory fixture: seeded store plus an auth layer over the same
/// storage handle.
fn fixture() -> (SharedStorage, AppStore, AuthStore) {
    let storage = shared(MemoryStorage::new());
    let store = AppStore::open(storage.clone()).expect("open store");
    let auth = AuthStore::new(storage.clone());
    (storage, store, auth)
}

fn sample_dataset_form(title: &str) -> DatasetForm {
    DatasetForm {
        title: title.to_string(),
        short_description: Some("Description courte".to_string()),
        description: None,
        format: DatasetFormat::CSV,
        status: None,
        producer_id: "1".to_string(),
        theme_id: Some("1".to_string()),
        license_id: "1".to_string(),
        update_frequency: None,
        featured: None,
        spatial_coverage: None,
        temporal_coverage: None,
    }
}

#[test]
fn test_seed_collections() {
    let (storage, store, _auth) = fixture();

    assert_eq!(store.users.all().len(), 3);
    assert_eq!(store.organizations.all().len(), 3);
    assert_eq!(store.themes.all().len(), 5);
    assert_eq!(store.licenses.all().len(), 3);
    assert_eq!(store.datasets.all().len(), 5);

    // Opening the store initializes every collection key.
    let storage = storage.borrow();
    for key in [
        keys::USERS,
        keys::ORGANIZATIONS,
        keys::THEMES,
        keys::LICENSES,
        keys::DATASETS,
    ] {
        assert!(storage.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn test_dataset_create_unique_id_and_defaults() {
    let (_storage, mut store, _auth) = fixture();
    let before = store.datasets.all().len();

    let created = store
        .datasets
        .create(sample_dataset_form("Recensement des marchés"))
        .expect("create");

    assert_eq!(store.datasets.all().len(), before + 1);
    let ids: Vec<&str> = store.datasets.all().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids.iter().filter(|id| **id == created.id).count(),
        1,
        "id must be unique in the collection"
    );

    // Newest first.
    assert_eq!(store.datasets.all()[0].id, created.id);

    // Defaults for fields the form left out.
    assert_eq!(created.status, DatasetStatus::Draft);
    assert_eq!(created.downloads_count, 0);
    assert_eq!(created.views_count, 0);
    assert_eq!(created.current_version, 1);
    assert!(!created.featured);
    assert_eq!(created.slug, "recensement-des-marchs");

    let second = store
        .datasets
        .create(sample_dataset_form("Recensement des marchés"))
        .expect("create");
    assert_ne!(second.id, created.id);
}

#[test]
fn test_update_not_found_leaves_collection_unchanged() {
    let (_storage, mut store, _auth) = fixture();
    let snapshot: Vec<(String, String)> = store
        .datasets
        .all()
        .iter()
        .map(|d| (d.id.clone(), d.updated_at.clone()))
        .collect();

    let result = store.datasets.update(
        "missing-id",
        DatasetPatch {
            title: Some("Ne devrait pas exister".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let after: Vec<(String, String)> = store
        .datasets
        .all()
        .iter()
        .map(|d| (d.id.clone(), d.updated_at.clone()))
        .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn test_dataset_update_merges_in_place() {
    let (_storage, mut store, _auth) = fixture();
    let order_before: Vec<String> = store.datasets.all().iter().map(|d| d.id.clone()).collect();
    let target = store.datasets.all()[2].clone();

    let updated = store
        .datasets
        .update(
            &target.id,
            DatasetPatch {
                status: Some(DatasetStatus::Archived),
                ..Default::default()
            },
        )
        .expect("update");

    assert_eq!(updated.status, DatasetStatus::Archived);
    // Untouched fields survive the merge.
    assert_eq!(updated.title, target.title);
    assert_eq!(updated.created_at, target.created_at);
    assert!(updated.updated_at >= target.updated_at);

    // Order preserved.
    let order_after: Vec<String> = store.datasets.all().iter().map(|d| d.id.clone()).collect();
    assert_eq!(order_before, order_after);
}

#[test]
fn test_delete_removes_record_and_clears_selection() {
    let (_storage, mut store, _auth) = fixture();
    let target = store.datasets.all()[0].clone();
    store.datasets.select(Some(target.clone()));
    assert!(store.datasets.selected().is_some());

    store.datasets.delete(&target.id).expect("delete");

    assert!(store.datasets.list().iter().all(|d| d.id != target.id));
    assert!(store.datasets.selected().is_none());

    let missing = store.datasets.delete(&target.id);
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[test]
fn test_delete_unselected_record_keeps_selection() {
    let (_storage, mut store, _auth) = fixture();
    let selected = store.datasets.all()[0].clone();
    let other = store.datasets.all()[1].clone();
    store.datasets.select(Some(selected.clone()));

    store.datasets.delete(&other.id).expect("delete");

    assert_eq!(store.datasets.selected().map(|d| d.id.as_str()), Some(selected.id.as_str()));
}

#[test]
fn test_update_refreshes_selection() {
    let (_storage, mut store, _auth) = fixture();
    let target = store.datasets.all()[0].clone();
    store.datasets.select(Some(target.clone()));

    store
        .datasets
        .update(
            &target.id,
            DatasetPatch {
                title: Some("Titre modifié".to_string()),
                ..Default::default()
            },
        )
        .expect("update");

    assert_eq!(
        store.datasets.selected().map(|d| d.title.as_str()),
        Some("Titre modifié")
    );
}

#[test]
fn test_login_success() {
    let (_storage, _store, auth) = fixture();

    let user = auth.login("admin@jdom.ml", "Admin123!").expect("login");
    assert_eq!(user.email, "admin@jdom.ml");
    assert_eq!(user.role, UserRole::Admin);
    assert!(user.last_login_at.is_some());
    assert!(auth.is_authenticated());
    assert!(auth.is_admin());
    assert!(auth.has_role(UserRole::Admin));
    assert!(!auth.has_role(UserRole::Public));
}

#[test]
fn test_login_email_case_insensitive() {
    let (_storage, _store, auth) = fixture();
    let user = auth.login("ADMIN@JDOM.ML", "Admin123!").expect("login");
    assert_eq!(user.id, "1");
}

#[test]
fn test_login_failures() {
    let (_storage, _store, auth) = fixture();

    let wrong_password = auth.login("admin@jdom.ml", "wrong");
    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials(_))));

    let unknown_email = auth.login("nobody@jdom.ml", "Admin123!");
    assert!(matches!(unknown_email, Err(AppError::InvalidCredentials(_))));

    assert!(!auth.is_authenticated());
    assert!(auth.current_user().is_none());
}

#[test]
fn test_login_inactive_user_fails() {
    let (_storage, mut store, auth) = fixture();

    store
        .users
        .update(
            "2",
            UserPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .expect("deactivate");

    let result = auth.login("contributor@jdom.ml", "Contributor123!");
    assert!(matches!(result, Err(AppError::InvalidCredentials(_))));
}

#[test]
fn test_login_persists_last_login() {
    let (storage, _store, auth) = fixture();
    auth.login("admin@jdom.ml", "Admin123!").expect("login");

    // The whole user collection is rewritten with the refreshed timestamp.
    let data = load_mock_data(&*storage.borrow());
    let admin = data
        .users
        .iter()
        .find(|u| u.as_user().id == "1")
        .expect("admin");
    assert!(admin.as_user().last_login_at.is_some());
    // The mock credential survives the rewrite.
    assert_eq!(admin.password.as_deref(), Some("Admin123!"));
}

#[test]
fn test_session_valid_until_expiry() {
    let (storage, _store, auth) = fixture();
    auth.login("admin@jdom.ml", "Admin123!").expect("login");

    // A session one minute short of expiry is still valid.
    let session = Session {
        user_id: "1".to_string(),
        email: "admin@jdom.ml".to_string(),
        expires_at: (Utc::now() + Duration::minutes(1)).to_rfc3339(),
    };
    storage
        .borrow_mut()
        .set(keys::SESSION, &serde_json::to_string(&session).unwrap());
    assert!(auth.is_authenticated());
    assert!(auth.current_user().is_some());
}

#[test]
fn test_expired_session_auto_clears() {
    let (storage, _store, auth) = fixture();
    auth.login("admin@jdom.ml", "Admin123!").expect("login");

    let session = Session {
        user_id: "1".to_string(),
        email: "admin@jdom.ml".to_string(),
        expires_at: (Utc::now() - Duration::seconds(1)).to_rfc3339(),
    };
    storage
        .borrow_mut()
        .set(keys::SESSION, &serde_json::to_string(&session).unwrap());

    assert!(!auth.is_authenticated());
    assert!(auth.current_user().is_none());
    // Both auth keys are removed on the failed check.
    assert!(storage.borrow().get(keys::SESSION).is_none());
    assert!(storage.borrow().get(keys::CURRENT_USER).is_none());
}

#[test]
fn test_logout_clears_both_keys() {
    let (storage, _store, auth) = fixture();
    auth.login("admin@jdom.ml", "Admin123!").expect("login");
    assert!(auth.is_authenticated());

    auth.logout();

    assert!(!auth.is_authenticated());
    assert!(storage.borrow().get(keys::SESSION).is_none());
    assert!(storage.borrow().get(keys::CURRENT_USER).is_none());
}

#[test]
fn test_register_duplicate_email_case_insensitive() {
    let (_storage, _store, auth) = fixture();

    let result = auth.register("Doublon", "ADMIN@JDOM.ML", "Secret1!", UserRole::Public);
    assert!(matches!(result, Err(AppError::Duplicate(_))));
}

#[test]
fn test_register_then_login() {
    let (storage, store, auth) = fixture();
    assert_eq!(store.users.all().len(), 3);

    let registered = auth
        .register("A", "A@x.com", "Secret1!", UserRole::Public)
        .expect("register");
    assert_eq!(registered.email, "a@x.com");
    assert!(registered.last_login_at.is_none());
    // Registration does not log in.
    assert!(!auth.is_authenticated());

    let data = load_mock_data(&*storage.borrow());
    assert_eq!(data.users.len(), 4);

    auth.login("a@x.com", "Secret1!").expect("login");
    assert!(auth.is_authenticated());
    assert_eq!(
        auth.current_user().map(|u| u.email),
        Some("a@x.com".to_string())
    );
}

#[test]
fn test_save_partial_roundtrip() {
    let storage = shared(MemoryStorage::new());
    let mut datasets = crate::db::seed::seed_datasets();
    datasets.truncate(2);

    save_mock_data(
        &mut *storage.borrow_mut(),
        &MockDataPatch {
            datasets: Some(datasets.clone()),
            ..Default::default()
        },
    )
    .expect("save");

    // Other collection keys are untouched by a partial save.
    assert!(storage.borrow().get(keys::USERS).is_none());

    let loaded = load_mock_data(&*storage.borrow());
    assert_eq!(
        serde_json::to_value(&loaded.datasets).unwrap(),
        serde_json::to_value(&datasets).unwrap()
    );
    // Absent users key falls back to the seed.
    assert_eq!(loaded.users.len(), 3);
}

#[test]
fn test_malformed_blob_falls_back_to_seed() {
    let storage = shared(MemoryStorage::new());
    storage.borrow_mut().set(keys::DATASETS, "{not json");
    storage.borrow_mut().set(keys::USERS, "42");

    let loaded = load_mock_data(&*storage.borrow());
    assert_eq!(loaded.datasets.len(), 5);
    assert_eq!(loaded.users.len(), 3);

    // Opening the store over the corrupt blob heals it.
    let store = AppStore::open(storage.clone()).expect("open");
    assert_eq!(store.datasets.all().len(), 5);
    let healed = storage.borrow().get(keys::DATASETS).expect("rewritten");
    assert!(serde_json::from_str::<serde_json::Value>(&healed).is_ok());
}

#[test]
fn test_dataset_filters_are_conjunctive() {
    let (_storage, mut store, _auth) = fixture();

    store.datasets.set_filters(DatasetFilters {
        status: Some(DatasetStatus::Published),
        producer_id: Some("2".to_string()),
        ..Default::default()
    });
    let filtered = store.datasets.list();
    assert_eq!(filtered.len(), 2);
    assert!(filtered
        .iter()
        .all(|d| d.status == DatasetStatus::Published && d.producer_id == "2"));

    store.datasets.clear_filters();
    assert_eq!(store.datasets.list().len(), 5);
}

#[test]
fn test_dataset_search_case_insensitive() {
    let (_storage, mut store, _auth) = fixture();

    store.datasets.set_filters(DatasetFilters {
        search: Some("SANITAIRES".to_string()),
        ..Default::default()
    });
    let filtered = store.datasets.list();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "2");
}

#[test]
fn test_user_filters_and_search() {
    let (_storage, mut store, _auth) = fixture();

    store.users.set_filters(UserFilters {
        role: Some(UserRole::Contributor),
        ..Default::default()
    });
    let contributors = store.users.list();
    assert_eq!(contributors.len(), 1);
    assert_eq!(contributors[0].id, "2");

    store.users.clear_filters();
    store.users.set_filters(UserFilters {
        search: Some("PUBLIC@".to_string()),
        ..Default::default()
    });
    let found = store.users.list();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "3");
}

#[test]
fn test_list_returns_full_set_page_slices() {
    let (_storage, store, _auth) = fixture();

    // Listing never truncates.
    assert_eq!(store.datasets.list().len(), 5);

    let (items, pagination) = store.datasets.page(PaginationParams {
        page: Some(2),
        limit: Some(2),
    });
    assert_eq!(items.len(), 2);
    assert_eq!(pagination.total, 5);
    assert_eq!(pagination.pages, 3);
    assert_eq!(items[0].id, store.datasets.all()[2].id);
}

#[test]
fn test_derived_dataset_getters() {
    let (_storage, store, _auth) = fixture();
    assert_eq!(store.datasets.published().len(), 4);
    assert_eq!(store.datasets.drafts().len(), 1);
    assert_eq!(store.datasets.featured().len(), 1);
}

#[test]
fn test_user_store_strips_passwords() {
    let (_storage, store, _auth) = fixture();
    let blob = serde_json::to_string(&store.users.list()).expect("serialize");
    assert!(!blob.contains("password"));
    assert!(!blob.contains("Admin123!"));
}

#[test]
fn test_user_update_preserves_credential() {
    let (_storage, mut store, auth) = fixture();

    store
        .users
        .update(
            "1",
            UserPatch {
                name: Some("Renommé".to_string()),
                ..Default::default()
            },
        )
        .expect("rename");

    // The store rewrite kept the stored password intact.
    auth.login("admin@jdom.ml", "Admin123!").expect("login");
}

#[test]
fn test_orphaned_foreign_keys_are_tolerated() {
    let (_storage, mut store, _auth) = fixture();

    store.themes.delete("1").expect("delete theme");

    // Datasets still reference the removed theme; nothing enforces it.
    assert!(store
        .datasets
        .all()
        .iter()
        .any(|d| d.theme_id.as_deref() == Some("1")));
    assert!(store.datasets.get("1").is_some());
}

#[test]
fn test_stats_overview() {
    let (_storage, store, _auth) = fixture();
    let stats = Stats::compute(&store);

    assert_eq!(stats.overview.total_datasets, 5);
    assert_eq!(stats.overview.published_datasets, 4);
    assert_eq!(stats.overview.draft_datasets, 1);
    assert_eq!(stats.overview.archived_datasets, 0);
    assert_eq!(stats.overview.featured_datasets, 1);
    assert_eq!(stats.overview.total_downloads, 342 + 189 + 156 + 98 + 67);
    assert_eq!(stats.overview.total_users, 3);
    assert_eq!(stats.overview.active_users, 2);
    assert_eq!(stats.overview.total_organizations, 3);

    let economie = stats
        .datasets_by_theme
        .iter()
        .find(|t| t.slug == "economie")
        .expect("theme");
    assert_eq!(economie.datasets_count, 1);

    let instat = stats
        .datasets_by_organization
        .iter()
        .find(|o| o.id == "2")
        .expect("organization");
    assert_eq!(instat.datasets_count, 3);

    assert_eq!(stats.top_datasets[0].id, "1");
    assert_eq!(stats.recent_datasets[0].id, "5");
}

#[test]
fn test_file_storage_store_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");

    let created_id = {
        let storage = shared(FileStorage::open(dir.path()).expect("open"));
        let mut store = AppStore::open(storage).expect("open store");
        store
            .datasets
            .create(sample_dataset_form("Budget communal 2024"))
            .expect("create")
            .id
    };

    // A second process reading the same directory sees the write.
    let storage = shared(FileStorage::open(dir.path()).expect("reopen"));
    let store = AppStore::open(storage).expect("reopen store");
    assert_eq!(store.datasets.all().len(), 6);
    assert!(store.datasets.get(&created_id).is_some());
}

#[test]
fn test_theme_rename_regenerates_slug() {
    let (_storage, mut store, _auth) = fixture();

    let renamed = store
        .themes
        .update(
            "1",
            crate::models::ThemePatch {
                name: Some("Finances Publiques".to_string()),
                ..Default::default()
            },
        )
        .expect("rename");
    assert_eq!(renamed.slug, "finances-publiques");

    // An explicit slug wins over regeneration.
    let custom = store
        .themes
        .update(
            "1",
            crate::models::ThemePatch {
                name: Some("Budget".to_string()),
                slug: Some("finances".to_string()),
                ..Default::default()
            },
        )
        .expect("rename with slug");
    assert_eq!(custom.slug, "finances");

    // Patching other fields leaves the slug alone.
    let described = store
        .themes
        .update(
            "1",
            crate::models::ThemePatch {
                description: Some("Recettes et dépenses".to_string()),
                ..Default::default()
            },
        )
        .expect("describe");
    assert_eq!(described.slug, "finances");
}

#[test]
fn test_license_rename_regenerates_slug() {
    let (_storage, mut store, _auth) = fixture();

    let renamed = store
        .licenses
        .update(
            "3",
            crate::models::LicensePatch {
                name: Some("Licence Ouverte".to_string()),
                ..Default::default()
            },
        )
        .expect("rename");
    assert_eq!(renamed.slug, "licence-ouverte");
}

#[test]
fn test_theme_create_derives_slug() {
    let (_storage, mut store, _auth) = fixture();

    let theme = store
        .themes
        .create(crate::models::ThemeForm {
            name: "Eau et Assainissement".to_string(),
            slug: None,
            description: None,
            icon: None,
        })
        .expect("create");
    assert_eq!(theme.slug, "eau-et-assainissement");
}
