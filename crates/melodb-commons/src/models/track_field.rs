//! The closed set of indexable track fields.

use crate::errors::{Result, StoreError};
use std::fmt;

/// A field of [`TrackRecord`](crate::TrackRecord) that carries a secondary
/// index.
///
/// Every field is indexed, so this enum doubles as the whitelist for
/// field-based operations: parsing a name outside the set fails with
/// [`StoreError::UnknownField`] before any index is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackField {
    Id,
    Title,
    Artist,
    Album,
    Genre,
    Duration,
}

impl TrackField {
    /// All indexed fields, in the exporter's column order.
    pub const ALL: [TrackField; 6] = [
        TrackField::Id,
        TrackField::Title,
        TrackField::Artist,
        TrackField::Album,
        TrackField::Genre,
        TrackField::Duration,
    ];

    /// Returns the canonical lowercase field name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackField::Id => "id",
            TrackField::Title => "title",
            TrackField::Artist => "artist",
            TrackField::Album => "album",
            TrackField::Genre => "genre",
            TrackField::Duration => "duration",
        }
    }

    /// Parses a field name supplied by a caller (typically the UI).
    ///
    /// Field names match ASCII-case-insensitively; indexed *values* remain
    /// exact and case-sensitive.
    pub fn parse(name: &str) -> Result<Self> {
        TrackField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| StoreError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for TrackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
