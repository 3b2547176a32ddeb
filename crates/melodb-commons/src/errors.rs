//! Error types for melodb.
//!
//! Every failure a store operation can surface is a distinct, inspectable
//! variant of [`StoreError`]; nothing is swallowed inside the store and no
//! operation retries. The only condition recovered locally (in the codec,
//! not here) is an empty persisted payload, which decodes to an empty
//! sequence instead of an error.

use crate::models::TrackId;
use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the track store and its index engine.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The operation requires the backing database file and it is absent.
    #[error("Database file not found: {0}")]
    NotFound(String),

    /// An insert or id update would create two records sharing an id.
    #[error("Track with id {0} already exists")]
    DuplicateKey(TrackId),

    /// A field-based operation named a field outside the indexed set.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A field-based delete matched no records.
    #[error("No track matches {field} = {value:?}")]
    NoMatch { field: String, value: String },

    /// A field update was given a value the field cannot hold.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// Underlying file read/write/copy failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed persisted payload.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a not-found error for the given database path.
    pub fn not_found(path: impl Into<String>) -> Self {
        StoreError::NotFound(path.into())
    }

    /// Create a no-match error for a field-based delete.
    pub fn no_match(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::NoMatch {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-value error for a field update.
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}
