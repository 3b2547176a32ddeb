//! Primary map and per-field inverted indexes.
//!
//! The engine owns every record exactly once, in the primary map; field
//! indexes map a field's canonical string value to the *ids* of the records
//! sharing it. Resolving buckets through the primary map on lookup means a
//! bucket can never serve stale field values — the id either resolves to the
//! current record or the bucket entry has already been removed with it.
//!
//! ## Invariants
//!
//! - A record present in any bucket is present in the primary map, and vice
//!   versa; the two are only ever rebuilt or updated together.
//! - A bucket that would become empty is removed outright; no empty buckets
//!   persist.
//!
//! The engine performs no I/O. It is a derived cache over the persisted
//! file, rebuilt from the authoritative record sequence on every load, save,
//! and restore.

use melodb_commons::{Result, StoreError, TrackField, TrackId, TrackRecord};
use std::collections::BTreeMap;

/// In-memory primary map plus one inverted index per [`TrackField`].
#[derive(Debug, Default)]
pub struct IndexEngine {
    /// id → owning record. BTreeMap so snapshots come out in ascending-id
    /// order, which the store documents as its snapshot order.
    primary: BTreeMap<TrackId, TrackRecord>,
    /// field → (canonical value → bucket of ids).
    fields: BTreeMap<TrackField, BTreeMap<String, Vec<TrackId>>>,
}

impl IndexEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything and re-inserts `records` into the primary map and
    /// every field index.
    ///
    /// Duplicate ids in the input resolve last-wins: the earlier record is
    /// fully de-indexed before the later one is inserted, so no bucket entry
    /// for the loser survives.
    pub fn rebuild(&mut self, records: &[TrackRecord]) {
        self.clear();
        for record in records {
            if let Some(previous) = self.primary.remove(&record.id) {
                self.deindex(&previous);
            }
            self.index(record);
            self.primary.insert(record.id, record.clone());
        }
    }

    /// Adds a record to the primary map and appends its id to every field
    /// bucket.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when the id is already
    /// present; the engine is left untouched in that case.
    pub fn insert(&mut self, record: TrackRecord) -> Result<()> {
        if self.primary.contains_key(&record.id) {
            return Err(StoreError::DuplicateKey(record.id));
        }
        self.index(&record);
        self.primary.insert(record.id, record);
        Ok(())
    }

    /// Removes and returns the record with `id`, dropping it from every
    /// bucket it appears in. Returns `None` when the id is absent.
    pub fn remove_by_key(&mut self, id: TrackId) -> Option<TrackRecord> {
        let record = self.primary.remove(&id)?;
        self.deindex(&record);
        Some(record)
    }

    /// Removes every record in the `field = value` bucket and returns them.
    ///
    /// Fails with [`StoreError::NoMatch`] when the bucket is absent — the
    /// explicit-error deletion-miss policy this implementation commits to.
    pub fn remove_all_by_field(&mut self, field: TrackField, value: &str) -> Result<Vec<TrackRecord>> {
        let ids = self
            .fields
            .get(&field)
            .and_then(|index| index.get(value))
            .cloned()
            .ok_or_else(|| StoreError::no_match(field.as_str(), value))?;

        let removed = ids
            .into_iter()
            .filter_map(|id| self.remove_by_key(id))
            .collect();
        Ok(removed)
    }

    /// Returns the records in the `field = value` bucket; empty when the
    /// value is absent. Never fails.
    pub fn lookup_by_field(&self, field: TrackField, value: &str) -> Vec<TrackRecord> {
        self.fields
            .get(&field)
            .and_then(|index| index.get(value))
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.primary.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether a bucket exists for `field = value`. Empty buckets never
    /// persist, so existence implies at least one record.
    pub fn bucket_exists(&self, field: TrackField, value: &str) -> bool {
        self.fields
            .get(&field)
            .is_some_and(|index| index.contains_key(value))
    }

    /// Returns the record with `id`, if present.
    pub fn get(&self, id: TrackId) -> Option<&TrackRecord> {
        self.primary.get(&id)
    }

    /// Whether a record with `id` is present.
    pub fn contains_key(&self, id: TrackId) -> bool {
        self.primary.contains_key(&id)
    }

    /// All records, in ascending-id order.
    pub fn snapshot(&self) -> Vec<TrackRecord> {
        self.primary.values().cloned().collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Whether the engine holds no records.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Drops every record and every bucket.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.fields.clear();
    }

    fn index(&mut self, record: &TrackRecord) {
        for field in TrackField::ALL {
            self.fields
                .entry(field)
                .or_default()
                .entry(record.field_value(field))
                .or_default()
                .push(record.id);
        }
    }

    fn deindex(&mut self, record: &TrackRecord) {
        for field in TrackField::ALL {
            let Some(index) = self.fields.get_mut(&field) else {
                continue;
            };
            let value = record.field_value(field);
            if let Some(bucket) = index.get_mut(&value) {
                bucket.retain(|id| *id != record.id);
                if bucket.is_empty() {
                    index.remove(&value);
                }
            }
        }
    }
}
