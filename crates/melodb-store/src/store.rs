//! TrackStore — binds the index engine to a durable file and a codec.
//!
//! Every mutating operation follows the same shape: update the engine in
//! memory, persist the full current record set (whole-file rewrite through a
//! sibling temp file + rename), and on persistence failure roll the
//! in-memory change back before the error propagates. The engine is never
//! left inconsistent with the file.
//!
//! ```text
//! add / delete_* / update_field / clear
//!     │
//!     ├── mutate IndexEngine
//!     ├── encode snapshot → write tmp → rename over backing file
//!     │        └── on failure: undo the in-memory mutation, propagate
//!     └── rebuild engine from the just-committed snapshot
//! ```
//!
//! Reads (`search_by_field`, `export_snapshot`) are served purely from the
//! engine and never touch the file.

use crate::codec::{JsonCodec, TrackCodec};
use crate::index_engine::IndexEngine;
use melodb_commons::{Result, StoreError, TrackField, TrackId, TrackRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file track database with exact-match secondary indexes.
///
/// One store instance exclusively owns its backing file within one process;
/// concurrent mutation of the same path is undefined (last writer wins).
/// Every mutation rewrites the whole file, so operation cost is linear in
/// record count — the intended scale is a personal catalog, not a stream.
pub struct TrackStore {
    path: PathBuf,
    codec: Box<dyn TrackCodec>,
    engine: IndexEngine,
}

impl TrackStore {
    /// Creates a store over `path` with the default [`JsonCodec`].
    ///
    /// No I/O happens here; call [`create`](Self::create) or
    /// [`open`](Self::open) to bind to the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, Box::new(JsonCodec))
    }

    /// Creates a store over `path` with a caller-supplied codec.
    pub fn with_codec(path: impl Into<PathBuf>, codec: Box<dyn TrackCodec>) -> Self {
        Self {
            path: path.into(),
            codec,
            engine: IndexEngine::new(),
        }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file when absent (persisting an empty sequence),
    /// then rebuilds the engine from the file. Idempotent.
    pub fn create(&mut self) -> Result<()> {
        if !self.path.exists() {
            self.persist(&[])?;
            log::info!("created database file {}", self.path.display());
        }
        self.reload()
    }

    /// Decodes the backing file, rebuilds the engine from it, and returns
    /// the decoded sequence.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the file does not exist — distinct from
    /// an empty-but-present file, which yields `Ok(vec![])`.
    pub fn open(&mut self) -> Result<Vec<TrackRecord>> {
        if !self.path.exists() {
            return Err(StoreError::not_found(self.path.display().to_string()));
        }
        let bytes = fs::read(&self.path)?;
        let records = self.codec.decode(&bytes)?;
        self.engine.rebuild(&records);
        Ok(records)
    }

    /// Encodes `records` over the backing file, then rebuilds the engine
    /// from that same sequence so it reflects exactly what was committed.
    pub fn save(&mut self, records: &[TrackRecord]) -> Result<()> {
        self.persist(records)?;
        self.engine.rebuild(records);
        Ok(())
    }

    /// Inserts a record and persists the resulting snapshot.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateKey`] when the id is already present; neither
    /// the engine nor the file changes in that case. A persistence failure
    /// rolls the insert back before propagating.
    pub fn add(&mut self, record: TrackRecord) -> Result<()> {
        let id = record.id;
        self.engine.insert(record)?;
        if let Err(err) = self.commit() {
            self.engine.remove_by_key(id);
            return Err(err);
        }
        log::debug!("added track {id}");
        Ok(())
    }

    /// Removes the record with `id` and persists, or does nothing when the
    /// id is absent (silent no-op — the chosen policy for key-based misses).
    pub fn delete_by_key(&mut self, id: TrackId) -> Result<()> {
        let Some(removed) = self.engine.remove_by_key(id) else {
            log::debug!("delete of absent track {id} ignored");
            return Ok(());
        };
        if let Err(err) = self.commit() {
            // id was free a moment ago, re-insert cannot collide
            let _ = self.engine.insert(removed);
            return Err(err);
        }
        log::debug!("deleted track {id}");
        Ok(())
    }

    /// Removes every record whose `field_name` equals `value`, persists,
    /// and returns the removed records.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownField`] for a field name outside the indexed
    /// set, [`StoreError::NoMatch`] when no record carries the value — the
    /// explicit-error deletion-miss policy. A persistence failure re-inserts
    /// the removed records before propagating.
    pub fn delete_by_field(&mut self, field_name: &str, value: &str) -> Result<Vec<TrackRecord>> {
        let field = TrackField::parse(field_name)?;
        let removed = self.engine.remove_all_by_field(field, value)?;
        if let Err(err) = self.commit() {
            for record in &removed {
                let _ = self.engine.insert(record.clone());
            }
            return Err(err);
        }
        log::info!("deleted {} track(s) where {field} = {value:?}", removed.len());
        Ok(removed)
    }

    /// Returns the records whose `field_name` equals `value`, straight from
    /// the engine. An unknown field name or absent value yields an empty
    /// sequence; search never fails and never touches the file.
    pub fn search_by_field(&self, field_name: &str, value: &str) -> Vec<TrackRecord> {
        match TrackField::parse(field_name) {
            Ok(field) => self.engine.lookup_by_field(field, value),
            Err(_) => Vec::new(),
        }
    }

    /// Replaces one field of the record with `id` and persists.
    ///
    /// The edit is applied as delete-then-reinsert under the new field
    /// value, so no stale index bucket survives. Returns the updated record.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownField`] / [`StoreError::InvalidValue`] for a bad
    /// field name or unparseable numeric value, [`StoreError::NoMatch`] when
    /// no record has `id`, and [`StoreError::DuplicateKey`] when an id edit
    /// collides with an existing key. A persistence failure restores the
    /// original record before propagating.
    pub fn update_field(
        &mut self,
        id: TrackId,
        field_name: &str,
        new_value: &str,
    ) -> Result<TrackRecord> {
        let field = TrackField::parse(field_name)?;
        let updated = {
            let current = self
                .engine
                .get(id)
                .ok_or_else(|| StoreError::no_match(TrackField::Id.as_str(), id.to_string()))?;
            current.with_field(field, new_value)?
        };
        if updated.id != id && self.engine.contains_key(updated.id) {
            return Err(StoreError::DuplicateKey(updated.id));
        }

        let Some(original) = self.engine.remove_by_key(id) else {
            return Err(StoreError::no_match(TrackField::Id.as_str(), id.to_string()));
        };
        if let Err(err) = self.engine.insert(updated.clone()) {
            let _ = self.engine.insert(original);
            return Err(err);
        }
        if let Err(err) = self.commit() {
            self.engine.remove_by_key(updated.id);
            let _ = self.engine.insert(original);
            return Err(err);
        }
        log::debug!("updated {field} of track {id}");
        Ok(updated)
    }

    /// Copies the backing file byte-for-byte to `backup_path`, overwriting
    /// any existing file there.
    pub fn backup(&self, backup_path: impl AsRef<Path>) -> Result<()> {
        let backup_path = backup_path.as_ref();
        fs::copy(&self.path, backup_path)?;
        log::info!("backed up {} to {}", self.path.display(), backup_path.display());
        Ok(())
    }

    /// Copies `backup_path` byte-for-byte over the backing file and rebuilds
    /// the engine from the restored content.
    pub fn restore(&mut self, backup_path: impl AsRef<Path>) -> Result<()> {
        let backup_path = backup_path.as_ref();
        fs::copy(backup_path, &self.path)?;
        log::info!("restored {} from {}", self.path.display(), backup_path.display());
        self.reload()
    }

    /// Empties the engine and persists an empty sequence.
    pub fn clear(&mut self) -> Result<()> {
        let previous = self.engine.snapshot();
        self.engine.clear();
        if let Err(err) = self.commit() {
            self.engine.rebuild(&previous);
            return Err(err);
        }
        log::info!("cleared database {}", self.path.display());
        Ok(())
    }

    /// Removes the backing file if present and empties the engine. Does not
    /// fail when the file is already absent.
    pub fn delete_database_file(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            log::info!("deleted database file {}", self.path.display());
        }
        self.engine.clear();
        Ok(())
    }

    /// All records in ascending-id order — the exporter collaborator's sole
    /// read contract (column order `ID, Title, Artist, Album, Genre,
    /// Duration`). Never touches the file.
    pub fn export_snapshot(&self) -> Vec<TrackRecord> {
        self.engine.snapshot()
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.engine.len()
    }

    /// Re-reads the backing file and rebuilds the engine.
    fn reload(&mut self) -> Result<()> {
        self.open().map(|_| ())
    }

    /// Persists the current engine snapshot; the engine already equals the
    /// snapshot it produced, so the save-then-rebuild contract holds without
    /// a second rebuild.
    fn commit(&self) -> Result<()> {
        let snapshot = self.engine.snapshot();
        self.persist(&snapshot)
    }

    /// Whole-file rewrite: encode, write a sibling temp file, rename it over
    /// the backing file.
    fn persist(&self, records: &[TrackRecord]) -> Result<()> {
        let bytes = self.codec.encode(records)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("persisted {} track(s) to {}", records.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
