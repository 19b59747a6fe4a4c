//! End-to-end tests for the fill pipeline: scheduler, cache, and synthesis
//! working together across eviction/reload cycles.

use super::*;

use loam_voxel::{AIR, BlockId, BlockRegistry, ChunkBuffer, WorldBlocks};
use loam_worldgen::{ProfileSwitch, WorldProfile};

struct CollectingSink {
    delivered: Vec<(ChunkId, ChunkBuffer, Option<BlockId>)>,
}

impl CollectingSink {
    fn new() -> Self {
        Self {
            delivered: Vec::new(),
        }
    }

    fn take_last(&mut self) -> (ChunkId, ChunkBuffer, Option<BlockId>) {
        self.delivered.pop().expect("nothing delivered")
    }
}

impl ChunkSink for CollectingSink {
    fn chunk_ready(&mut self, id: ChunkId, buffer: ChunkBuffer, uniform: Option<BlockId>) {
        self.delivered.push((id, buffer, uniform));
    }
}

fn world_blocks() -> WorldBlocks {
    let mut registry = BlockRegistry::new();
    WorldBlocks::register(&mut registry).unwrap()
}

fn request(id: &str, origin: (i64, i64, i64), profile: WorldProfile) -> FillRequest {
    FillRequest {
        id: ChunkId::new(id),
        buffer: ChunkBuffer::chunk_sized(),
        origin,
        profile,
    }
}

#[test]
fn test_synthesize_evict_reload_cycle_is_lossless() {
    let blocks = world_blocks();
    let mut scheduler = FillScheduler::new(blocks);
    let mut sink = CollectingSink::new();
    let origin = (-96, -8, -112);

    // First pass: synthesized from coordinates.
    scheduler.chunk_needed(request("0|0|0|verdant", origin, WorldProfile::Verdant));
    let outcome = scheduler.tick(&mut sink).unwrap().unwrap();
    assert_eq!(outcome.resolution, Resolution::Synthesized);
    let (id, first, _) = sink.take_last();

    // The engine drops the region; its contents move into the cache.
    scheduler.chunk_evicted(&id, &first);
    assert!(scheduler.cache().has(&id));

    // Second pass: recalled, not regenerated, and cell-for-cell identical.
    scheduler.chunk_needed(request("0|0|0|verdant", origin, WorldProfile::Verdant));
    let outcome = scheduler.tick(&mut sink).unwrap().unwrap();
    assert_eq!(outcome.resolution, Resolution::FromCache);
    let (_, reloaded, uniform) = sink.take_last();
    assert!(uniform.is_none());
    assert_eq!(reloaded, first);
}

#[test]
fn test_cache_recall_preserves_engine_edits() {
    // The engine may mutate a chunk after delivery (feature placement,
    // player edits); the evicted snapshot, not fresh synthesis, is what a
    // reload must reproduce.
    let blocks = world_blocks();
    let mut scheduler = FillScheduler::new(blocks);
    let mut sink = CollectingSink::new();
    let origin = (0, 0, 0);

    scheduler.chunk_needed(request("edited", origin, WorldProfile::Verdant));
    scheduler.tick(&mut sink).unwrap();
    let (id, mut chunk, _) = sink.take_last();

    chunk.set(5, 5, 5, blocks.pole);
    scheduler.chunk_evicted(&id, &chunk);

    scheduler.chunk_needed(request("edited", origin, WorldProfile::Verdant));
    scheduler.tick(&mut sink).unwrap();
    let (_, reloaded, _) = sink.take_last();
    assert_eq!(reloaded.get(5, 5, 5), blocks.pole);
    assert_eq!(reloaded, chunk);
}

#[test]
fn test_fifo_holds_across_mixed_resolutions() {
    let blocks = world_blocks();
    let mut scheduler = FillScheduler::new(blocks);
    let mut sink = CollectingSink::new();

    // Seed the cache for "a" only.
    let mut seeded = ChunkBuffer::chunk_sized();
    seeded.fill(blocks.dirt);
    scheduler.chunk_evicted(&ChunkId::new("a"), &seeded);

    scheduler.chunk_needed(request("a", (0, 0, 0), WorldProfile::Verdant));
    scheduler.chunk_needed(request("b", (0, 0, 0), WorldProfile::Verdant));
    scheduler.chunk_needed(request("c", (0, 64, 0), WorldProfile::Verdant));

    let expected = [
        ("a", Resolution::FromCache),
        ("b", Resolution::Synthesized),
        ("c", Resolution::Uniform(AIR)),
    ];
    for (id, resolution) in expected {
        let outcome = scheduler.tick(&mut sink).unwrap().unwrap();
        assert_eq!(outcome.id.as_str(), id);
        assert_eq!(outcome.resolution, resolution);
    }
}

#[test]
fn test_profile_toggle_respects_queued_requests() {
    let blocks = world_blocks();
    let mut scheduler = FillScheduler::new(blocks);
    let mut sink = CollectingSink::new();
    let mut switch = ProfileSwitch::new(WorldProfile::Verdant);
    let origin = (-96, -8, -112);

    // Two requests for the same region, the second enqueued after a toggle.
    scheduler.chunk_needed(request("r|verdant", origin, switch.current()));
    switch.toggle();
    scheduler.chunk_needed(request("r|barren", origin, switch.current()));

    scheduler.tick(&mut sink).unwrap();
    scheduler.tick(&mut sink).unwrap();

    let (_, barren, _) = sink.take_last();
    let (_, verdant, _) = sink.take_last();

    // The first kept its captured profile: it has grass where the second,
    // generated under the toggled profile, has stone.
    assert!(verdant.cells().contains(&blocks.grass));
    assert!(!barren.cells().contains(&blocks.grass));
}

#[test]
fn test_uniform_fill_never_pollutes_the_cache() {
    let blocks = world_blocks();
    let mut scheduler = FillScheduler::new(blocks);
    let mut sink = CollectingSink::new();

    scheduler.chunk_needed(request("sky", (0, 96, 0), WorldProfile::Verdant));
    scheduler.tick(&mut sink).unwrap();

    // Cache entries come from eviction notifications only.
    assert!(scheduler.cache().is_empty());
}
