//! JSON file-backed key-value store.
//!
//! The file is the only copy of the data: every read loads it and every
//! mutation reloads it, applies the single change and writes it back through a
//! sibling temp file renamed into place. Entries written by other handles on
//! the same file between two calls are kept.

use super::{check_quota, KeyValueStore};
use crate::error::{StorageError, StorageResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

/// Persistent store backed by one JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    quota: Option<usize>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write. An existing file must hold a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::DirectoryError(e.to_string()))?;
        }

        let store = Self { path, quota: None };
        let entries = store.load()?;
        tracing::debug!(path = %store.path.display(), entries = entries.len(), "opened store");

        Ok(store)
    }

    /// Limit the total key and value bytes the store accepts.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries, curated or not.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.load()?.len())
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.load()?.is_empty())
    }

    fn load(&self) -> StorageResult<Entries> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StorageError::LoadFailed(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn persist(&self, entries: &Entries) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::SaveFailed(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::SaveFailed(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.load()?;
        check_quota(&entries, key, value, self.quota)?;

        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }

        self.persist(&entries)?;
        Ok(true)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }
}
