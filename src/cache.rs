//! Curated result cache.
//!
//! [`ResultCache`] files curated results into a shared [`KeyValueStore`] under
//! `curated_<resultId>` keys and reads them back through a [`ResultFactory`].
//! It keeps no state of its own: the store is the only source of truth, and
//! keys outside the `curated_` namespace are never read, written or deleted.

use crate::error::CacheResult;
use crate::result::{CuratedResult, ResultFactory, ResultRegistry};
use crate::storage::{KeyValueStore, Namespace};
use crate::types::ResultId;
use tracing::{debug, trace};

/// Façade over a shared store for curated results.
pub struct ResultCache<S, F = ResultRegistry> {
    store: S,
    factory: F,
    namespace: Namespace,
}

impl<S: KeyValueStore> ResultCache<S> {
    /// Create a cache over `store` using the built-in result types.
    pub fn new(store: S) -> Self {
        Self::with_factory(store, ResultRegistry::default())
    }
}

impl<S: KeyValueStore, F: ResultFactory> ResultCache<S, F> {
    /// Create a cache over `store` that rebuilds results with `factory`.
    pub fn with_factory(store: S, factory: F) -> Self {
        Self {
            store,
            factory,
            namespace: Namespace::curated(),
        }
    }

    /// Store `result`, replacing any record with the same ID.
    pub fn add(&mut self, result: &CuratedResult) -> CacheResult<()> {
        let key = self.key_for(result);
        let record = result.to_record()?;
        self.store.set(&key, &record)?;
        debug!(%key, result_type = result.result_type(), "curated result added");
        Ok(())
    }

    /// Delete the record stored for `result`. Absent records are ignored.
    pub fn remove(&mut self, result: &CuratedResult) -> CacheResult<()> {
        self.remove_id(result.result_id()).map(|_| ())
    }

    /// Delete the record stored under `id`. Returns whether one existed.
    pub fn remove_id(&mut self, id: &ResultId) -> CacheResult<bool> {
        let key = self.namespace.key(id.as_str());
        let removed = self.store.remove(&key)?;
        debug!(%key, removed, "curated result removed");
        Ok(removed)
    }

    /// Call `callback` with every stored curated result.
    ///
    /// Matching keys are snapshotted before any record is read; keys that
    /// disappear between the snapshot and their read are skipped, and keys
    /// added after it are not visited. Order follows the store's key
    /// enumeration. The first record that fails to parse or reconstruct
    /// aborts the walk and is returned as the error.
    pub fn for_each<C>(&self, mut callback: C) -> CacheResult<()>
    where
        C: FnMut(CuratedResult),
    {
        for key in self.curated_keys()? {
            let Some(raw) = self.store.get(&key)? else {
                trace!(%key, "curated key vanished before read");
                continue;
            };
            let result = self.factory.from_record(&raw)?;
            callback(result);
        }
        Ok(())
    }

    /// Collect every stored curated result.
    pub fn load_all(&self) -> CacheResult<Vec<CuratedResult>> {
        let mut results = Vec::new();
        self.for_each(|r| results.push(r))?;
        Ok(results)
    }

    /// Load the result stored under `id`, if any.
    pub fn get(&self, id: &ResultId) -> CacheResult<Option<CuratedResult>> {
        let key = self.namespace.key(id.as_str());
        match self.store.get(&key)? {
            Some(raw) => Ok(Some(self.factory.from_record(&raw)?)),
            None => Ok(None),
        }
    }

    /// Whether a record is stored under `id`.
    pub fn contains(&self, id: &ResultId) -> CacheResult<bool> {
        let key = self.namespace.key(id.as_str());
        Ok(self.store.get(&key)?.is_some())
    }

    /// Number of curated records in the store.
    pub fn len(&self) -> CacheResult<usize> {
        Ok(self.curated_keys()?.len())
    }

    /// Whether the store holds no curated records.
    pub fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Delete every curated record, leaving other keys alone.
    ///
    /// Returns the IDs of the removed records.
    pub fn clear(&mut self) -> CacheResult<Vec<String>> {
        let mut removed = Vec::new();
        for key in self.curated_keys()? {
            if self.store.remove(&key)? {
                if let Some(id) = self.namespace.strip(&key) {
                    removed.push(id.to_string());
                }
            }
        }
        debug!(removed = removed.len(), "curated results cleared");
        Ok(removed)
    }

    /// The store key for `result`: `curated_<resultId>`.
    pub fn key_for(&self, result: &CuratedResult) -> String {
        self.namespace.key(result.result_id().as_str())
    }

    /// Whether `key` is a curated result key.
    pub fn is_key(&self, key: &str) -> bool {
        self.namespace.contains(key)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the cache, returning its store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn curated_keys(&self) -> CacheResult<Vec<String>> {
        let mut keys = self.store.keys()?;
        keys.retain(|key| {
            let keep = self.is_key(key);
            if !keep {
                trace!(%key, "skipping foreign key");
            }
            keep
        });
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CacheError, ResultError, StorageError};
    use crate::result::{Photo, Tweet, Video};
    use crate::storage::MemoryStore;

    fn id(s: &str) -> ResultId {
        ResultId::new(s).unwrap()
    }

    fn photo(s: &str) -> CuratedResult {
        Photo::new(id(s), "alice").into()
    }

    fn ids(cache: &ResultCache<MemoryStore>) -> Vec<String> {
        let mut seen = Vec::new();
        cache
            .for_each(|r| seen.push(r.result_id().to_string()))
            .unwrap();
        seen
    }

    #[test]
    fn test_key_helpers() {
        let cache = ResultCache::new(MemoryStore::new());
        assert_eq!(cache.key_for(&photo("42")), "curated_42");
        assert!(cache.is_key("curated_42"));
        assert!(!cache.is_key("other_42"));
        assert!(!cache.is_key("curated"));
    }

    #[test]
    fn test_add_writes_record_under_prefixed_key() {
        let mut cache = ResultCache::new(MemoryStore::new());
        cache.add(&photo("1")).unwrap();

        assert_eq!(
            cache.store().get("curated_1").unwrap().as_deref(),
            Some(r#"{"resultType":"Photo","resultId":"1","author":"alice"}"#)
        );
    }

    #[test]
    fn test_add_then_for_each_yields_photo() {
        let mut cache = ResultCache::new(MemoryStore::new());
        cache.add(&photo("1")).unwrap();

        let mut seen = Vec::new();
        cache.for_each(|r| seen.push(r)).unwrap();

        assert_eq!(seen.len(), 1);
        assert!(matches!(&seen[0], CuratedResult::Photo(p) if p.result_id.as_str() == "1"));
    }

    #[test]
    fn test_add_overwrites_same_id() {
        let mut cache = ResultCache::new(MemoryStore::new());
        cache.add(&photo("1")).unwrap();
        cache
            .add(&Tweet::new(id("1"), "bob", "updated").into())
            .unwrap();

        let all = cache.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].result_type(), "Tweet");
    }

    #[test]
    fn test_remove_one_of_two() {
        let mut cache = ResultCache::new(MemoryStore::new());
        cache.add(&photo("1")).unwrap();
        cache.add(&photo("2")).unwrap();
        cache.remove(&photo("1")).unwrap();

        assert_eq!(ids(&cache), vec!["2"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cache = ResultCache::new(MemoryStore::new());
        cache.add(&photo("1")).unwrap();
        cache.store_mut().set("theme", "dark").unwrap();

        cache.remove(&photo("1")).unwrap();
        let once = cache.store().clone();
        cache.remove(&photo("1")).unwrap();

        assert_eq!(cache.store().keys().unwrap(), once.keys().unwrap());
        assert!(!cache.remove_id(&id("1")).unwrap());
    }

    #[test]
    fn test_foreign_keys_untouched() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        store.set("curated", "not json").unwrap();
        store.set("search_1", "{\"resultType\":\"Photo\"}").unwrap();

        let mut cache = ResultCache::new(store);
        cache.add(&photo("1")).unwrap();

        assert_eq!(ids(&cache), vec!["1"]);
        assert_eq!(cache.len().unwrap(), 1);

        assert_eq!(cache.clear().unwrap(), vec!["1"]);
        assert!(cache.is_empty().unwrap());
        assert_eq!(
            cache.into_inner().keys().unwrap(),
            vec!["curated", "search_1", "theme"]
        );
    }

    #[test]
    fn test_malformed_record_aborts() {
        let mut store = MemoryStore::new();
        store.set("curated_0", "{broken").unwrap();
        let mut cache = ResultCache::new(store);
        cache.add(&photo("1")).unwrap();

        let mut seen = 0;
        let err = cache.for_each(|_| seen += 1).unwrap_err();

        assert!(matches!(err, CacheError::Result(ResultError::Parse(_))));
        // curated_0 sorts first, so nothing was delivered
        assert_eq!(seen, 0);
    }

    #[test]
    fn test_unknown_type_aborts() {
        let mut store = MemoryStore::new();
        store
            .set("curated_9", r#"{"resultType":"Podcast","resultId":"9"}"#)
            .unwrap();
        let cache = ResultCache::new(store);

        let err = cache.load_all().unwrap_err();
        assert!(matches!(err, CacheError::Result(ResultError::UnknownType(_))));
    }

    #[test]
    fn test_quota_failure_propagates() {
        let mut cache = ResultCache::new(MemoryStore::new().with_quota(32));
        let big: CuratedResult = Tweet::new(id("1"), "carol", "x".repeat(64)).into();

        let err = cache.add(&big).unwrap_err();
        assert!(matches!(
            err,
            CacheError::Storage(StorageError::QuotaExceeded { .. })
        ));
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn test_get_and_contains() {
        let mut cache = ResultCache::new(MemoryStore::new());
        let video: CuratedResult = Video::new(id("v1"), "dan").with_duration(30).into();
        cache.add(&video).unwrap();

        assert!(cache.contains(&id("v1")).unwrap());
        assert!(!cache.contains(&id("v2")).unwrap());
        assert_eq!(cache.get(&id("v1")).unwrap(), Some(video));
        assert_eq!(cache.get(&id("v2")).unwrap(), None);
    }

    #[test]
    fn test_borrowed_store() {
        let mut store = MemoryStore::new();
        {
            let mut cache = ResultCache::new(&mut store);
            cache.add(&photo("7")).unwrap();
        }
        assert!(store.get("curated_7").unwrap().is_some());
    }
}
