//! Test utilities for melodb-store.
//!
//! Record builders plus a deliberately failing codec for exercising the
//! rollback guarantee on persistence failure.

use crate::codec::TrackCodec;
use melodb_commons::{Result, TrackId, TrackRecord};

/// Builds a track record from plain literals.
pub fn track(
    id: i64,
    title: &str,
    artist: &str,
    album: &str,
    genre: &str,
    duration_secs: u32,
) -> TrackRecord {
    TrackRecord::new(TrackId::new(id), title, artist, album, genre, duration_secs)
}

/// A codec whose `encode` always fails.
///
/// Injecting this into a store makes every persistence attempt fail before
/// the backing file is touched, which is exactly the window the
/// rollback-on-save-failure guarantee covers.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingCodec;

impl TrackCodec for FailingCodec {
    fn encode(&self, _records: &[TrackRecord]) -> Result<Vec<u8>> {
        Err(std::io::Error::other("injected encode failure").into())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<TrackRecord>> {
        // Decode still works so a store with this codec can be opened.
        crate::codec::JsonCodec.decode(bytes)
    }
}
