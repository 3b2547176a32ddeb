//! Lifecycle tests: create/open/save/add/delete/clear and the
//! end-to-end scenarios from the store contract.

mod common;

use common::{aux_path, empty_store, sample_catalog, seeded_store};
use melodb_store::test_utils::track;
use melodb_store::{StoreError, TrackId, TrackStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_create_makes_an_empty_database_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = aux_path(&dir, "tracks.json");
    let mut store = TrackStore::new(&path);

    store.create().unwrap();
    assert!(path.exists());
    assert_eq!(store.record_count(), 0);

    // second create leaves existing content alone
    store.add(track(1, "a", "x", "m", "Rock", 100)).unwrap();
    store.create().unwrap();
    assert_eq!(store.record_count(), 1);
}

#[test]
fn test_open_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut store = TrackStore::new(aux_path(&dir, "absent.json"));
    let err = store.open().unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_open_empty_array_file_succeeds_with_empty_sequence() {
    let dir = TempDir::new().unwrap();
    let path = aux_path(&dir, "tracks.json");
    fs::write(&path, b"[]").unwrap();

    let mut store = TrackStore::new(&path);
    assert!(store.open().unwrap().is_empty());
}

#[test]
fn test_open_zero_byte_file_succeeds_with_empty_sequence() {
    let dir = TempDir::new().unwrap();
    let path = aux_path(&dir, "tracks.json");
    fs::write(&path, b"").unwrap();

    let mut store = TrackStore::new(&path);
    assert!(store.open().unwrap().is_empty());
}

#[test]
fn test_open_malformed_file_is_a_codec_error() {
    let dir = TempDir::new().unwrap();
    let path = aux_path(&dir, "tracks.json");
    fs::write(&path, b"{\"oops\":").unwrap();

    let mut store = TrackStore::new(&path);
    assert!(matches!(store.open().unwrap_err(), StoreError::Codec(_)));
}

#[test]
fn test_round_trip_law_snapshot_survives_reopen() {
    let (_dir, mut store) = seeded_store();
    let before = store.export_snapshot();

    let reopened = store.open().unwrap();
    assert_eq!(reopened, before);
    assert_eq!(store.export_snapshot(), before);
}

#[test]
fn test_round_trip_survives_a_fresh_store_instance() {
    let (dir, store) = seeded_store();
    let before = store.export_snapshot();
    let path = store.path().to_path_buf();
    drop(store);

    let mut fresh = TrackStore::new(path);
    assert_eq!(fresh.open().unwrap(), before);
    drop(dir);
}

#[test]
fn test_snapshot_order_is_ascending_id() {
    let (_dir, mut store) = empty_store();
    store.add(track(30, "c", "z", "o", "Jazz", 300)).unwrap();
    store.add(track(10, "a", "x", "m", "Rock", 100)).unwrap();
    store.add(track(20, "b", "y", "n", "Rock", 200)).unwrap();

    let ids: Vec<i64> = store.export_snapshot().iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_add_search_delete_scenario() {
    // create empty store → add → search → delete by key → open returns empty
    let (_dir, mut store) = empty_store();
    let record = track(1, "A", "X", "Y", "Rock", 180);
    store.add(record.clone()).unwrap();

    assert_eq!(store.search_by_field("genre", "Rock"), vec![record]);

    store.delete_by_key(TrackId::new(1)).unwrap();
    assert!(store.open().unwrap().is_empty());
}

#[test]
fn test_delete_by_key_of_absent_id_is_a_silent_no_op() {
    let (_dir, mut store) = seeded_store();
    let before = store.export_snapshot();

    store.delete_by_key(TrackId::new(999)).unwrap();
    assert_eq!(store.export_snapshot(), before);
}

#[test]
fn test_save_replaces_content_and_rebuilds_indexes() {
    let (_dir, mut store) = seeded_store();

    let replacement = vec![track(7, "Take Five", "Dave Brubeck", "Time Out", "Jazz", 324)];
    store.save(&replacement).unwrap();

    assert_eq!(store.export_snapshot(), replacement);
    assert!(store.search_by_field("genre", "Rock").is_empty());
    assert_eq!(store.search_by_field("genre", "Jazz").len(), 1);
}

#[test]
fn test_clear_persists_an_empty_sequence() {
    let (_dir, mut store) = seeded_store();
    store.clear().unwrap();

    assert_eq!(store.record_count(), 0);
    // the file still exists and decodes to empty
    assert!(store.open().unwrap().is_empty());
}

#[test]
fn test_delete_database_file_removes_file_and_is_idempotent() {
    let (_dir, mut store) = seeded_store();
    let path = store.path().to_path_buf();

    store.delete_database_file().unwrap();
    assert!(!path.exists());
    assert_eq!(store.record_count(), 0);
    assert!(matches!(store.open().unwrap_err(), StoreError::NotFound(_)));

    // already absent: still fine
    store.delete_database_file().unwrap();
}

#[test]
fn test_open_with_duplicate_ids_in_file_is_last_wins() {
    let dir = TempDir::new().unwrap();
    let path = aux_path(&dir, "tracks.json");
    let payload = serde_json::to_vec(&vec![
        track(1, "First", "A", "M", "Rock", 100),
        track(1, "Second", "B", "N", "Jazz", 200),
    ])
    .unwrap();
    fs::write(&path, payload).unwrap();

    let mut store = TrackStore::new(&path);
    store.open().unwrap();

    assert_eq!(store.record_count(), 1);
    let snapshot = store.export_snapshot();
    assert_eq!(snapshot[0].title, "Second");
    // the losing record left no index entries behind
    assert!(store.search_by_field("title", "First").is_empty());
    assert!(store.search_by_field("genre", "Rock").is_empty());
}

#[test]
fn test_export_snapshot_matches_persisted_sequence() {
    let (_dir, mut store) = empty_store();
    for record in sample_catalog() {
        store.add(record).unwrap();
    }
    assert_eq!(store.export_snapshot(), store.open().unwrap());
}
