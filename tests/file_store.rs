use curator::result::{Photo, Tweet};
use curator::storage::{JsonFileStore, KeyValueStore};
use curator::{CacheError, CuratedResult, ResultCache, ResultId, StorageError};
use tempfile::TempDir;

fn id(s: &str) -> ResultId {
    ResultId::new(s).unwrap()
}

fn collect_ids(cache: &ResultCache<JsonFileStore>) -> Vec<String> {
    let mut ids = Vec::new();
    cache
        .for_each(|r| ids.push(r.result_id().to_string()))
        .unwrap();
    ids
}

#[test]
fn curated_results_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    {
        let mut cache = ResultCache::new(JsonFileStore::open(&path).unwrap());
        cache.add(&Photo::new(id("1"), "alice").into()).unwrap();
        cache
            .add(&Tweet::new(id("2"), "bob", "road closed").into())
            .unwrap();
    }

    let cache = ResultCache::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(collect_ids(&cache), vec!["1", "2"]);

    let tweet = cache.get(&id("2")).unwrap().unwrap();
    assert_eq!(tweet.summary(), "road closed");
}

#[test]
fn photo_record_is_stored_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let mut cache = ResultCache::new(JsonFileStore::open(&path).unwrap());
    cache.add(&Photo::new(id("1"), "alice").into()).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        store.get("curated_1").unwrap().as_deref(),
        Some(r#"{"resultType":"Photo","resultId":"1","author":"alice"}"#)
    );
}

#[test]
fn shared_file_keeps_foreign_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("session_token", "abc").unwrap();
    store.set("curatedX", "{}").unwrap();

    let mut cache = ResultCache::new(store);
    cache.add(&Photo::new(id("1"), "alice").into()).unwrap();
    cache.add(&Photo::new(id("2"), "alice").into()).unwrap();
    cache.remove(&Photo::new(id("1"), "alice").into()).unwrap();
    cache.remove(&Photo::new(id("1"), "alice").into()).unwrap();

    assert_eq!(collect_ids(&cache), vec!["2"]);
    assert_eq!(cache.clear().unwrap(), vec!["2"]);

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.keys().unwrap(), vec!["curatedX", "session_token"]);
}

#[test]
fn quota_failure_is_reported_and_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let store = JsonFileStore::open(&path).unwrap().with_quota(64);
    let mut cache = ResultCache::new(store);

    let long: CuratedResult = Tweet::new(id("1"), "carol", "z".repeat(128)).into();
    let err = cache.add(&long).unwrap_err();
    assert!(matches!(
        err,
        CacheError::Storage(StorageError::QuotaExceeded { quota: 64, .. })
    ));

    let reopened = JsonFileStore::open(&path).unwrap();
    assert!(reopened.is_empty().unwrap());
}

#[test]
fn corrupt_record_aborts_enumeration() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("curated_bad", "not json").unwrap();

    let mut cache = ResultCache::new(store);
    cache.add(&Photo::new(id("a"), "alice").into()).unwrap();

    let mut delivered = Vec::new();
    let err = cache
        .for_each(|r| delivered.push(r.result_id().to_string()))
        .unwrap_err();

    assert!(matches!(err, CacheError::Result(_)));
    // "curated_a" sorts before "curated_bad" and was already delivered
    assert_eq!(delivered, vec!["a"]);
}

#[test]
fn foreign_write_after_open_survives_curator_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let mut cache = ResultCache::new(JsonFileStore::open(&path).unwrap());
    let mut other = JsonFileStore::open(&path).unwrap();
    other.set("session_token", "abc").unwrap();

    cache.add(&Photo::new(id("1"), "alice").into()).unwrap();
    cache.remove(&Photo::new(id("9"), "alice").into()).unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.keys().unwrap(), vec!["curated_1", "session_token"]);
    assert_eq!(reopened.get("session_token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn results_added_by_another_handle_are_enumerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");

    let cache = ResultCache::new(JsonFileStore::open(&path).unwrap());
    let mut writer = ResultCache::new(JsonFileStore::open(&path).unwrap());
    writer.add(&Photo::new(id("late"), "bob").into()).unwrap();

    assert_eq!(collect_ids(&cache), vec!["late"]);
}
