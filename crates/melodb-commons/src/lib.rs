//! # melodb-commons
//!
//! Shared types and errors for melodb.
//!
//! This crate provides the foundational types used across the melodb crates:
//! the persisted [`TrackRecord`] model, the type-safe [`TrackId`] wrapper,
//! the [`TrackField`] enumeration of indexable fields, and the [`StoreError`]
//! error type every store operation surfaces.
//!
//! ## Type-Safe Wrappers
//!
//! - [`TrackId`]: primary-key wrapper, prevents mixing raw integers with ids
//! - [`TrackField`]: closed set of field names accepted by field-based
//!   operations; parsing a name outside the set yields
//!   [`StoreError::UnknownField`]
//!
//! ## Example Usage
//!
//! ```rust
//! use melodb_commons::{TrackField, TrackId, TrackRecord};
//!
//! let track = TrackRecord::new(
//!     TrackId::new(1),
//!     "Paranoid Android",
//!     "Radiohead",
//!     "OK Computer",
//!     "Rock",
//!     386,
//! );
//! assert_eq!(track.field_value(TrackField::Genre), "Rock");
//! ```

pub mod errors;
pub mod models;

// Re-export commonly used types at crate root
pub use errors::{Result, StoreError};
pub use models::{TrackField, TrackId, TrackRecord};
