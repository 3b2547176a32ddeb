//! # melodb-store
//!
//! Flat-file indexed record store for musical track metadata.
//!
//! The store keeps an in-memory primary map plus per-field inverted indexes
//! consistent with a single durable file across create/read/update/delete
//! operations, and can rebuild the in-memory view from the persisted form at
//! any time.
//!
//! ## Architecture
//!
//! ```text
//! TrackStore (persistence orchestration: load/save/backup/restore)
//!     ↓
//! IndexEngine (primary map + per-field inverted indexes)
//!     ↓
//! TrackCodec (pluggable byte-stream codec; JsonCodec by default)
//!     ↓
//! backing file (whole-file rewrite on every save)
//! ```
//!
//! Every mutating store operation updates the engine in memory, then
//! persists the full record set through the codec; reads are served purely
//! from the engine and never touch the file. The in-memory structures are a
//! derived, disposable cache — the file is the single source of truth.

pub mod codec;
pub mod index_engine;
pub mod store;

// Test utilities (deliberately failing codec, record builders) are part of
// the public surface so dependent crates can reuse them in their own tests.
pub mod test_utils;

pub use codec::{JsonCodec, TrackCodec};
pub use index_engine::IndexEngine;
pub use store::TrackStore;

// Re-export the commons types so most callers need a single dependency
pub use melodb_commons::{Result, StoreError, TrackField, TrackId, TrackRecord};
