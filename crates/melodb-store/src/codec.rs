//! Pluggable codec between record sequences and the persisted byte stream.
//!
//! The store only ever encodes or decodes the *whole* record sequence, so
//! the trait is two functions. [`JsonCodec`] is the shipped implementation
//! and matches the original file layout: a single JSON array of track
//! objects.

use melodb_commons::{Result, TrackRecord};

/// Serializes and deserializes an ordered sequence of records.
///
/// Implementations must be `Send + Sync` so a store can be handed across
/// threads even though each store instance is used from one thread at a
/// time.
pub trait TrackCodec: Send + Sync {
    /// Encodes `records` into the persisted byte form.
    fn encode(&self, records: &[TrackRecord]) -> Result<Vec<u8>>;

    /// Decodes a persisted payload into a record sequence.
    ///
    /// An empty, all-whitespace, or JSON-`null` payload decodes to an empty
    /// sequence — never an error and never a null-like value. Anything else
    /// that fails to parse surfaces as [`StoreError::Codec`].
    ///
    /// [`StoreError::Codec`]: melodb_commons::StoreError::Codec
    fn decode(&self, bytes: &[u8]) -> Result<Vec<TrackRecord>>;
}

/// JSON codec: one top-level array of track objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl TrackCodec for JsonCodec {
    fn encode(&self, records: &[TrackRecord]) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(records)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<TrackRecord>> {
        // A freshly created or truncated file holds no payload at all;
        // normalize that (and an explicit `null`) to an empty sequence.
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }
        let records: Option<Vec<TrackRecord>> = serde_json::from_slice(bytes)?;
        Ok(records.unwrap_or_default())
    }
}
