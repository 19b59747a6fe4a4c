//! Compressed in-memory store for evicted chunk contents.
//!
//! The cache is the sole writer and reader of its own payloads: entries are
//! created by eviction notifications, overwritten on repeated eviction, and
//! read non-destructively any number of times. It is volatile — nothing here
//! touches durable storage.

use rustc_hash::FxHashMap;
use thiserror::Error;

use loam_voxel::{ChunkBuffer, CodecError, decode_chunk_into, encode_chunk};

use crate::request::ChunkId;

/// Errors surfaced by cache retrieval.
///
/// Both variants are contract violations: the caller either skipped the
/// membership check or handed the cache a buffer of the wrong shape. They are
/// fatal at the call site, never retried.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No entry exists for the identifier. Callers must check
    /// [`ChunkCache::has`] first.
    #[error("no cache entry for chunk {0}")]
    MissingEntry(ChunkId),
    /// The stored payload could not be decoded into the provided buffer.
    #[error("cache payload rejected: {0}")]
    Codec(#[from] CodecError),
}

/// Keyed compressed store of previously-seen chunk contents.
#[derive(Debug, Default)]
pub struct ChunkCache {
    entries: FxHashMap<ChunkId, Vec<u8>>,
}

impl ChunkCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Returns `true` if an entry exists for the identifier. Pure, no side
    /// effect.
    pub fn has(&self, id: &ChunkId) -> bool {
        self.entries.contains_key(id)
    }

    /// Compresses the buffer's current contents and records them under `id`,
    /// overwriting any prior entry (idempotent on repeated eviction).
    pub fn store(&mut self, id: &ChunkId, buffer: &ChunkBuffer) {
        let payload = encode_chunk(buffer);
        tracing::debug!(chunk = %id, bytes = payload.len(), "stored evicted chunk");
        self.entries.insert(id.clone(), payload);
    }

    /// Decompresses the stored payload for `id` directly into `buffer`.
    ///
    /// The entry is read, not removed; retrieval is repeatable.
    pub fn retrieve(&self, id: &ChunkId, buffer: &mut ChunkBuffer) -> Result<(), CacheError> {
        let payload = self
            .entries
            .get(id)
            .ok_or_else(|| CacheError::MissingEntry(id.clone()))?;
        decode_chunk_into(payload, buffer)?;
        Ok(())
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total compressed payload size in bytes, for diagnostics.
    pub fn payload_bytes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
