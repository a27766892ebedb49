//! Behavior of the durable favorites set: persistence, notification,
//! and tolerance of missing or damaged files.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use reelscout::favorites::{FavoritesStore, Subscription};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FavoritesStore {
    FavoritesStore::new(dir.path().join("favorites.json"))
}

fn count_signals(store: &FavoritesStore) -> (Arc<AtomicUsize>, Subscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in = Arc::clone(&hits);
    let sub = store.subscribe(move || {
        hits_in.fetch_add(1, Ordering::SeqCst);
    });
    (hits, sub)
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.list().is_empty());
    assert!(!store.contains("tt0372784"));
}

#[test]
fn add_persists_and_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    let store = FavoritesStore::new(path.clone());
    store.add("tt0372784");
    store.add("tt0468569");

    // A fresh store instance reads the same file.
    let reopened = FavoritesStore::new(path);
    assert_eq!(reopened.list(), vec!["tt0372784", "tt0468569"]);
    assert!(reopened.contains("tt0468569"));
}

#[test]
fn insertion_order_is_preserved() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add("tt0000003");
    store.add("tt0000001");
    store.add("tt0000002");

    assert_eq!(store.list(), vec!["tt0000003", "tt0000001", "tt0000002"]);
}

#[test]
fn duplicate_add_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.add("tt0372784");

    let (hits, _sub) = count_signals(&store);
    let result = store.add("tt0372784");

    assert_eq!(result, vec!["tt0372784"]);
    assert_eq!(store.list(), vec!["tt0372784"]);
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no signal for a no-op add");
}

#[test]
fn add_signals_once_per_real_insert() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (hits, _sub) = count_signals(&store);

    store.add("tt0372784");
    store.add("tt0468569");

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn remove_signals_even_when_absent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (hits, _sub) = count_signals(&store);

    store.remove("tt9999999");

    assert!(store.list().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn remove_drops_only_the_named_member() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.add("tt0372784");
    store.add("tt0468569");
    store.add("tt1345836");

    let result = store.remove("tt0468569");

    assert_eq!(result, vec!["tt0372784", "tt1345836"]);
    assert_eq!(store.list(), vec!["tt0372784", "tt1345836"]);
}

#[test]
fn corrupt_file_reads_as_empty_and_recovers_on_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, "{not json").unwrap();

    let store = FavoritesStore::new(path.clone());
    assert!(store.list().is_empty());

    store.add("tt0372784");
    assert_eq!(store.list(), vec!["tt0372784"]);

    let raw = fs::read_to_string(&path).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, vec!["tt0372784"]);
}

#[test]
fn wrong_shape_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, r#"{"ids": ["tt0372784"]}"#).unwrap();

    let store = FavoritesStore::new(path);
    assert!(store.list().is_empty());
}

#[test]
fn clones_share_signal_and_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let clone = store.clone();

    let (hits, _sub) = count_signals(&store);
    clone.add("tt0372784");

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(store.contains("tt0372784"));
}

#[test]
fn dropped_subscription_stops_receiving() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let (hits, sub) = count_signals(&store);
    store.add("tt0372784");
    drop(sub);
    store.add("tt0468569");

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn file_is_a_plain_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    let store = FavoritesStore::new(path.clone());

    store.add("tt0372784");
    store.add("tt0468569");

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&raw).unwrap(),
        serde_json::json!(["tt0372784", "tt0468569"])
    );
}

#[test]
fn separate_instances_on_one_file_observe_each_other() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    let writer = FavoritesStore::new(path.clone());
    let reader = FavoritesStore::new(path);

    writer.add("tt0372784");
    // No shared signal between instances, but the file is the truth.
    assert!(reader.contains("tt0372784"));

    writer.remove("tt0372784");
    assert!(!reader.contains("tt0372784"));
}
