//! Model types for melodb.
//!
//! [`TrackRecord`] is the persisted unit; [`TrackId`] and [`TrackField`] are
//! the type-safe wrappers the store API is expressed in, so raw integers and
//! arbitrary field-name strings cannot leak past the API boundary.

mod track;
mod track_field;
mod track_id;

pub use track::TrackRecord;
pub use track_field::TrackField;
pub use track_id::TrackId;
