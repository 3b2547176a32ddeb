//! The persisted track record.

use crate::errors::{Result, StoreError};
use crate::models::{TrackField, TrackId};
use serde::{Deserialize, Serialize};

/// One track entry in the database.
///
/// Plain value type: records carry no identity beyond [`TrackId`], and index
/// buckets reference them by id rather than holding copies, so equality for
/// index-removal purposes is always id-based.
///
/// The serde field names match the persisted JSON layout
/// (`id`, `title`, `artist`, `album`, `genre`, `duration`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Track length in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u32,
}

impl TrackRecord {
    /// Creates a new track record.
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            genre: genre.into(),
            duration_secs,
        }
    }

    /// Returns the canonical string form of `field` — the exact key the
    /// field's secondary index is keyed by. Numeric fields stringify via
    /// `Display`, so one string-keyed bucket structure serves every field.
    pub fn field_value(&self, field: TrackField) -> String {
        match field {
            TrackField::Id => self.id.to_string(),
            TrackField::Title => self.title.clone(),
            TrackField::Artist => self.artist.clone(),
            TrackField::Album => self.album.clone(),
            TrackField::Genre => self.genre.clone(),
            TrackField::Duration => self.duration_secs.to_string(),
        }
    }

    /// Returns a copy of this record with `field` replaced by the parsed
    /// form of `value`.
    ///
    /// Numeric fields (`id`, `duration`) are parsed here so callers get a
    /// typed [`StoreError::InvalidValue`] instead of a stringly failure;
    /// string fields are taken verbatim.
    pub fn with_field(&self, field: TrackField, value: &str) -> Result<Self> {
        let mut updated = self.clone();
        match field {
            TrackField::Id => {
                let id: i64 = value
                    .parse()
                    .map_err(|_| StoreError::invalid_value(field.as_str(), value))?;
                updated.id = TrackId::new(id);
            }
            TrackField::Duration => {
                updated.duration_secs = value
                    .parse()
                    .map_err(|_| StoreError::invalid_value(field.as_str(), value))?;
            }
            TrackField::Title => updated.title = value.to_string(),
            TrackField::Artist => updated.artist = value.to_string(),
            TrackField::Album => updated.album = value.to_string(),
            TrackField::Genre => updated.genre = value.to_string(),
        }
        Ok(updated)
    }
}
