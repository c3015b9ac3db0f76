//! Session storage backends
//!
//! The session layer persists exactly two string entries (the access token
//! and the serialized user record) behind a small key-value interface, so the
//! backing store can be swapped without touching auth logic:
//!
//! - `MemoryStore`: process-local, used in tests
//! - `FileStore`: a JSON map in the platform data directory, used in
//!   production

use crate::error::ApiError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// String key-value storage for session entries.
///
/// Implementations must be safe to share across tasks; reads happen on every
/// outbound request.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    /// Remove the value stored under `key`, if any
    fn remove(&self, key: &str) -> Result<(), ApiError>;
}

/// In-memory session store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        let entries = self.entries.read().expect("session store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.write().expect("session store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.write().expect("session store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

/// File-backed session store.
///
/// Entries live in a single JSON object on disk; the whole map is rewritten
/// on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open or create the store at the platform-specific data path.
    pub fn open() -> Result<Self, ApiError> {
        Self::open_at(Self::default_path())
    }

    /// Open or create the store at an explicit path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, ApiError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let entries = Self::read_entries(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Platform-specific session file path, `{data_dir}/daymark/session.json`.
    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("daymark");
        path.push("session.json");
        path
    }

    fn read_entries(path: &Path) -> Result<HashMap<String, String>, ApiError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(path)?;
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // Corrupt file: start over rather than refuse to open.
                tracing::warn!(path = %path.display(), %err, "discarding unreadable session file");
                Ok(HashMap::new())
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), ApiError> {
        let raw = serde_json::to_string(entries)
            .map_err(|err| ApiError::storage(err.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        let entries = self.entries.read().expect("session store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.write().expect("session store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.write().expect("session store lock poisoned");
        entries.remove(key);
        self.persist(&entries)
    }
}
