//! The fill scheduler: an ordered backlog of pending requests drained one per
//! tick.
//!
//! Each tick resolves the oldest request through a fixed cascade — cache hit,
//! altitude short-circuit, synthesis — and hands the filled buffer back to
//! the collaborator through the injected [`ChunkSink`]. The scheduler owns
//! the backlog and the cache outright; with ticks and event callbacks arriving
//! on one thread there is nothing to lock.

use std::collections::VecDeque;

use loam_voxel::{AIR, BlockId, ChunkBuffer, WorldBlocks};
use loam_worldgen::{GEN_CEILING_Y, GEN_FLOOR_Y, generate_chunk};

use crate::cache::{CacheError, ChunkCache};
use crate::request::{ChunkId, FillRequest};

/// Receiver for resolved chunks, implemented by the collaborator.
pub trait ChunkSink {
    /// Delivers a filled buffer, returning its ownership to the caller.
    ///
    /// `uniform` is `Some(fill)` when the whole buffer holds a single block
    /// (the altitude short-circuit), letting the collaborator skip further
    /// per-cell processing; `None` means fully computed contents.
    fn chunk_ready(&mut self, id: ChunkId, buffer: ChunkBuffer, uniform: Option<BlockId>);
}

/// The two collaborator-driven intake events.
///
/// The collaborator invokes these directly (message passing); there is no
/// event bus in between.
pub trait ChunkEvents {
    /// A region's data is needed: queue a fill request.
    fn chunk_needed(&mut self, request: FillRequest);
    /// A region was evicted from active memory: preserve its contents.
    fn chunk_evicted(&mut self, id: &ChunkId, buffer: &ChunkBuffer);
}

/// How a tick resolved its request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Contents came from the cache; synthesis was bypassed.
    FromCache,
    /// The region sat outside the altitude window and was filled uniformly.
    Uniform(BlockId),
    /// Contents were synthesized from coordinates.
    Synthesized,
}

/// Report for one non-empty tick.
#[derive(Clone, Debug)]
pub struct TickOutcome {
    /// Identifier of the resolved request.
    pub id: ChunkId,
    /// Which branch of the resolution cascade ran.
    pub resolution: Resolution,
}

/// Serializes and paces chunk-fill work.
///
/// Construct one per world, wire the collaborator's events to
/// [`ChunkEvents`], and drive [`tick`](Self::tick) from a fixed-rate timer.
/// The cadence is a tunable: short enough to feel responsive, long enough
/// that one synthesis call completes within it.
///
/// Hosts whose event callbacks can fire on a different thread than the tick
/// must wrap the scheduler in their own mutex or single-writer channel.
pub struct FillScheduler {
    backlog: VecDeque<FillRequest>,
    cache: ChunkCache,
    blocks: WorldBlocks,
    /// Requests with their base below this y are filled with stone.
    floor_y: i64,
    /// Requests with their base above this y are filled with air.
    ceiling_y: i64,
}

impl FillScheduler {
    /// Creates a scheduler with the default altitude window.
    pub fn new(blocks: WorldBlocks) -> Self {
        Self::with_altitude_window(blocks, GEN_FLOOR_Y, GEN_CEILING_Y)
    }

    /// Creates a scheduler with a custom altitude window.
    ///
    /// The window is a throughput knob, not a correctness rule: regions whose
    /// vertical origin falls outside it skip synthesis entirely and are
    /// filled uniformly (stone below, air above).
    pub fn with_altitude_window(blocks: WorldBlocks, floor_y: i64, ceiling_y: i64) -> Self {
        Self {
            backlog: VecDeque::new(),
            cache: ChunkCache::new(),
            blocks,
            floor_y,
            ceiling_y,
        }
    }

    /// Number of requests waiting in the backlog.
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    /// Read access to the cache, for diagnostics and tests.
    pub fn cache(&self) -> &ChunkCache {
        &self.cache
    }

    /// Resolves at most one pending request and delivers it through `sink`.
    ///
    /// Returns `Ok(None)` when the backlog is empty. An error is a contract
    /// violation (corrupt or mis-shaped cache payload) and must be treated as
    /// fatal by the host; the request is consumed, not retried, since a retry
    /// would deterministically reproduce the same outcome.
    pub fn tick(&mut self, sink: &mut dyn ChunkSink) -> Result<Option<TickOutcome>, CacheError> {
        let Some(mut req) = self.backlog.pop_front() else {
            return Ok(None);
        };

        let resolution = if self.cache.has(&req.id) {
            // Cached contents are authoritative: bypass synthesis entirely.
            self.cache.retrieve(&req.id, &mut req.buffer)?;
            Resolution::FromCache
        } else if req.origin.1 < self.floor_y || req.origin.1 > self.ceiling_y {
            // Outside the altitude window: trade fidelity for throughput.
            let fill = if req.origin.1 >= 0 { AIR } else { self.blocks.stone };
            req.buffer.fill(fill);
            Resolution::Uniform(fill)
        } else {
            generate_chunk(&mut req.buffer, req.origin, req.profile, &self.blocks);
            Resolution::Synthesized
        };

        tracing::trace!(chunk = %req.id, ?resolution, "resolved fill request");

        let uniform = match resolution {
            Resolution::Uniform(fill) => Some(fill),
            _ => None,
        };
        let outcome = TickOutcome {
            id: req.id.clone(),
            resolution,
        };
        sink.chunk_ready(req.id, req.buffer, uniform);
        Ok(Some(outcome))
    }
}

impl ChunkEvents for FillScheduler {
    /// Appends to the back of the backlog. Never rejects, never deduplicates:
    /// duplicate identifiers are legal and processed independently.
    fn chunk_needed(&mut self, request: FillRequest) {
        self.backlog.push_back(request);
    }

    fn chunk_evicted(&mut self, id: &ChunkId, buffer: &ChunkBuffer) {
        self.cache.store(id, buffer);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
