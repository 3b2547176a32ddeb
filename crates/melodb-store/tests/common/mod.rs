//! Shared fixtures for melodb-store integration tests.

#![allow(dead_code)] // not every test file uses every fixture

use melodb_store::test_utils::track;
use melodb_store::{TrackRecord, TrackStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// A created (empty) store inside a temp directory. Keep the `TempDir`
/// alive for the duration of the test.
pub fn empty_store() -> (TempDir, TrackStore) {
    let dir = TempDir::new().expect("temp dir");
    let mut store = TrackStore::new(dir.path().join("tracks.json"));
    store.create().expect("create database");
    (dir, store)
}

/// A created store pre-loaded with the three-track sample catalog.
pub fn seeded_store() -> (TempDir, TrackStore) {
    let (dir, mut store) = empty_store();
    for record in sample_catalog() {
        store.add(record).expect("seed track");
    }
    (dir, store)
}

/// Three tracks: two sharing `genre = "Rock"`, one `"Jazz"`.
pub fn sample_catalog() -> Vec<TrackRecord> {
    vec![
        track(1, "Paranoid Android", "Radiohead", "OK Computer", "Rock", 386),
        track(2, "Airbag", "Radiohead", "OK Computer", "Rock", 284),
        track(3, "So What", "Miles Davis", "Kind of Blue", "Jazz", 562),
    ]
}

/// Path for an auxiliary file (backup target, scratch database) inside the
/// test's temp directory.
pub fn aux_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
