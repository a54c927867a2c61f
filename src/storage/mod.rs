//! Durable key-value storage layer.
//!
//! The stores never touch a backend directly; they speak to the [`Storage`]
//! trait so the same logic runs against an in-memory map in tests, a file
//! directory in the demo binary, or a real database later. Writers race on a
//! key with last-write-wins semantics; there is no cross-process
//! coordination.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Storage keys, one per entity collection plus the two auth keys.
pub mod keys {
    pub const DATASETS: &str = "mock_datasets";
    pub const ORGANIZATIONS: &str = "mock_organizations";
    pub const THEMES: &str = "mock_themes";
    pub const LICENSES: &str = "mock_licenses";
    pub const USERS: &str = "mock_users";
    pub const SESSION: &str = "mock_session";
    pub const CURRENT_USER: &str = "mock_current_user";
}

/// Durable key-value store holding JSON blobs.
pub trait Storage {
    /// Read the blob under `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write the blob under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
    /// Remove the blob under `key` if present.
    fn remove(&mut self, key: &str);
}

/// Shared handle to a storage backend. The core is single-threaded; every
/// store holds a clone of the same handle.
pub type SharedStorage = Rc<RefCell<dyn Storage>>;

/// Wrap a backend into a shared handle.
pub fn shared<S: Storage + 'static>(storage: S) -> SharedStorage {
    Rc::new(RefCell::new(storage))
}

/// In-memory backend for tests and ephemeral demo runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed backend: one JSON file per key under a data directory. This
/// is the browser-local-storage stand-in for the demo binary.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::write(self.path_for(key), value) {
            tracing::error!("Failed to write storage key {}: {}", key, err);
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.path_for(key);
        if path.exists() {
            if let Err(err) = fs::remove_file(&path) {
                tracing::error!("Failed to remove storage key {}: {}", key, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").is_none());
        storage.set("k", "v1");
        storage.set("k", "v2");
        assert_eq!(storage.get("k").as_deref(), Some("v2"));
        storage.remove("k");
        assert!(storage.get("k").is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut storage = FileStorage::open(dir.path()).expect("open");
        storage.set(keys::DATASETS, "[]");
        assert_eq!(storage.get(keys::DATASETS).as_deref(), Some("[]"));
        storage.remove(keys::DATASETS);
        assert!(storage.get(keys::DATASETS).is_none());
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let mut storage = FileStorage::open(dir.path()).expect("open");
            storage.set(keys::USERS, "[1]");
        }
        let storage = FileStorage::open(dir.path()).expect("reopen");
        assert_eq!(storage.get(keys::USERS).as_deref(), Some("[1]"));
    }
}
