//! Type-safe wrapper for track primary keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a [`TrackRecord`](crate::TrackRecord).
///
/// Serializes transparently as its inner integer, so the persisted JSON form
/// stays `"id": 1` rather than a nested object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(i64);

impl TrackId {
    /// Creates a new TrackId.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TrackId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
