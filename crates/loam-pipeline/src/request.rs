//! Fill requests and the opaque chunk identifier.

use std::fmt;

use loam_voxel::ChunkBuffer;
use loam_worldgen::WorldProfile;

/// Opaque identifier for a chunk-sized region.
///
/// The collaborator composes it (typically from the chunk's grid coordinates
/// and the world it belongs to); the pipeline only ever compares and hashes
/// it. Because the world name is part of the identifier, cache entries never
/// leak between profiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkId(String);

impl ChunkId {
    /// Creates an identifier from the collaborator's key string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChunkId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A pending request to fill one region with voxel data.
///
/// Created when a "chunk needed" event arrives, queued, consumed exactly once
/// by a scheduler tick; the buffer's ownership then returns to the caller
/// through the sink. The profile is captured at enqueue time, so profile
/// toggles never affect requests already in the backlog.
#[derive(Debug)]
pub struct FillRequest {
    /// Identifier the resolved chunk is delivered under.
    pub id: ChunkId,
    /// Caller-owned destination buffer, pre-filled with air.
    pub buffer: ChunkBuffer,
    /// Absolute world coordinates of the buffer's minimum corner.
    pub origin: (i64, i64, i64),
    /// Generation profile captured when the request was enqueued.
    pub profile: WorldProfile,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_id_equality_and_display() {
        let a = ChunkId::new("0|1|2|verdant");
        let b = ChunkId::from("0|1|2|verdant");
        let c = ChunkId::new("0|1|2|barren");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "0|1|2|verdant");
        assert_eq!(a.as_str(), "0|1|2|verdant");
    }
}
