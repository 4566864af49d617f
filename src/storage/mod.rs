//! Key-value storage backends.
//!
//! Curated results live in a flat string-keyed, string-valued store that other
//! subsystems share. The [`KeyValueStore`] trait is the seam the cache is
//! written against; [`MemoryStore`] backs tests and throwaway sessions and
//! [`JsonFileStore`] persists to a single JSON file on disk.

mod json_store;
mod memory;
mod namespace;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use namespace::{Namespace, CURATED_PREFIX};

use crate::error::{StorageError, StorageResult};
use std::collections::BTreeMap;

/// A flat string-to-string persistent map.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, overwriting any existing value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> StorageResult<bool>;

    /// Snapshot of every key currently in the store.
    ///
    /// The order is backend-defined.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        (**self).remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        (**self).keys()
    }
}

/// Bytes an entry counts against a quota.
fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Bytes used by every entry in `entries`.
fn usage(entries: &BTreeMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| entry_size(k, v)).sum()
}

/// Fail if writing `key = value` would push `entries` past `quota`.
pub(crate) fn check_quota(
    entries: &BTreeMap<String, String>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> StorageResult<()> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let replaced = entries.get(key).map_or(0, |old| entry_size(key, old));
    let needed = usage(entries) - replaced + entry_size(key, value);

    if needed > quota {
        tracing::warn!(key, needed, quota, "store quota exceeded");
        return Err(StorageError::QuotaExceeded { needed, quota });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_quota_counts_replacement() {
        let mut entries = BTreeMap::new();
        entries.insert("k".to_string(), "12345".to_string());

        // 1 + 5 used; overwriting with 1 + 9 fits in 10
        assert!(check_quota(&entries, "k", "123456789", Some(10)).is_ok());
        assert!(check_quota(&entries, "k", "1234567890", Some(10)).is_err());
        // a new key adds to the existing usage
        assert!(check_quota(&entries, "j", "123", Some(10)).is_ok());
        assert!(check_quota(&entries, "j", "1234", Some(10)).is_err());
    }

    #[test]
    fn test_check_quota_unlimited() {
        let entries = BTreeMap::new();
        assert!(check_quota(&entries, "k", &"x".repeat(1 << 20), None).is_ok());
    }
}
