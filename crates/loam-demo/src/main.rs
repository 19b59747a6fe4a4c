//! Demo host driving the fill pipeline against a simulated engine.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. The simulated engine walks a viewer back and forth along the x
//! axis, requesting chunks around it and evicting the ones it leaves behind,
//! so the same regions cycle through synthesis, eviction, and cache reload.
//! Run with `cargo run -p loam-demo -- --ticks 600 --profile barren`.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use loam_config::{CliArgs, Config, default_config_dir};
use loam_pipeline::{
    CacheError, ChunkEvents, ChunkId, ChunkSink, FillRequest, FillScheduler, Resolution,
};
use loam_voxel::{BlockId, BlockRegistry, CHUNK_SIZE, ChunkBuffer, WorldBlocks};
use loam_worldgen::{BlockSetter, ProfileSwitch, WorldProfile, place_world_features};

/// Chunks within this many chunk units of the viewer (in x and z) are kept
/// loaded.
const VIEW_RADIUS: i64 = 1;

/// Vertical chunk range the engine keeps loaded. The bottom layer sits below
/// the generation floor, so it exercises the uniform-fill short-circuit.
const CHUNK_Y_RANGE: std::ops::RangeInclusive<i64> = -2..=1;

/// The viewer advances one chunk along x every this many ticks.
const TICKS_PER_STEP: u64 = 40;

/// The viewer walks x = 0..=3 and back, revisiting evicted chunks.
const WALK_SPAN: i64 = 3;

/// Default number of ticks to run when none is given on the CLI.
const DEFAULT_TICKS: u64 = 600;

/// The feature pass runs once this many ticks into the run, after the
/// initial ring of chunks around the origin has drained from the backlog.
const FEATURE_PASS_TICK: u64 = 38;

/// A stand-in for the engine collaborator: owns the loaded-chunk map, issues
/// needed/evicted events, and receives resolved chunks through [`ChunkSink`].
struct SimulatedEngine {
    /// Chunks currently held in engine memory, keyed by chunk coordinates.
    loaded: HashMap<(i64, i64, i64), (ChunkId, ChunkBuffer)>,
    /// Coordinates of chunks requested but not yet delivered.
    pending: HashMap<String, (i64, i64, i64)>,
    /// Number of chunks delivered with the uniform-fill hint.
    uniform_deliveries: u64,
    /// Number of single blocks placed by the feature pass.
    blocks_placed: u64,
}

impl SimulatedEngine {
    fn new() -> Self {
        Self {
            loaded: HashMap::new(),
            pending: HashMap::new(),
            uniform_deliveries: 0,
            blocks_placed: 0,
        }
    }

    /// Viewer x chunk coordinate at the given tick: a triangle wave over
    /// `0..=WALK_SPAN`, so the viewer retraces its steps.
    fn viewer_cx(tick: u64) -> i64 {
        let step = (tick / TICKS_PER_STEP) as i64 % (2 * WALK_SPAN);
        if step <= WALK_SPAN { step } else { 2 * WALK_SPAN - step }
    }

    /// Issues needed/evicted events for the viewer position at `tick`.
    ///
    /// Newly wanted chunks are requested under the currently active profile;
    /// chunks outside the view are evicted with their buffer snapshot.
    fn drive(&mut self, tick: u64, profile: WorldProfile, scheduler: &mut FillScheduler) {
        let cx = Self::viewer_cx(tick);

        let mut wanted = HashSet::new();
        for dx in -VIEW_RADIUS..=VIEW_RADIUS {
            for dz in -VIEW_RADIUS..=VIEW_RADIUS {
                for cy in CHUNK_Y_RANGE {
                    wanted.insert((cx + dx, cy, dz));
                }
            }
        }

        // Evict loaded chunks that fell out of view.
        let to_evict: Vec<_> = self
            .loaded
            .keys()
            .filter(|coords| !wanted.contains(*coords))
            .copied()
            .collect();
        for coords in to_evict {
            if let Some((id, buffer)) = self.loaded.remove(&coords) {
                scheduler.chunk_evicted(&id, &buffer);
            }
        }

        // Request chunks that are wanted but neither loaded nor in flight.
        for coords in wanted {
            if self.loaded.contains_key(&coords) {
                continue;
            }
            let (cx, cy, cz) = coords;
            let key = format!("{cx}|{cy}|{cz}|{profile}");
            if self.pending.contains_key(&key) {
                continue;
            }
            self.pending.insert(key.clone(), coords);
            scheduler.chunk_needed(FillRequest {
                id: ChunkId::new(key),
                buffer: ChunkBuffer::chunk_sized(),
                origin: (
                    cx * CHUNK_SIZE as i64,
                    cy * CHUNK_SIZE as i64,
                    cz * CHUNK_SIZE as i64,
                ),
                profile,
            });
        }
    }
}

impl ChunkSink for SimulatedEngine {
    fn chunk_ready(&mut self, id: ChunkId, buffer: ChunkBuffer, uniform: Option<BlockId>) {
        if uniform.is_some() {
            self.uniform_deliveries += 1;
        }
        if let Some(coords) = self.pending.remove(id.as_str()) {
            self.loaded.insert(coords, (id, buffer));
        }
    }
}

impl BlockSetter for SimulatedEngine {
    /// Mirrors the engine's single-block call: writes into the loaded chunk
    /// containing the coordinate, if any.
    fn set_block(&mut self, block: BlockId, x: i64, y: i64, z: i64) {
        let size = CHUNK_SIZE as i64;
        let coords = (x.div_euclid(size), y.div_euclid(size), z.div_euclid(size));
        if let Some((_, buffer)) = self.loaded.get_mut(&coords) {
            buffer.set(
                x.rem_euclid(size) as usize,
                y.rem_euclid(size) as usize,
                z.rem_euclid(size) as usize,
                block,
            );
            self.blocks_placed += 1;
        }
    }
}

fn run(args: &CliArgs) -> Result<(), CacheError> {
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("config unavailable ({e}), using defaults");
        Config::default()
    });
    config.apply_cli_overrides(args);

    loam_log::init_logging(Some(&config_dir), cfg!(debug_assertions), Some(&config));

    let start_profile = config
        .pipeline
        .start_profile
        .parse::<WorldProfile>()
        .unwrap_or_else(|e| {
            error!("{e}; falling back to the default profile");
            WorldProfile::default()
        });

    let mut registry = BlockRegistry::new();
    let blocks = WorldBlocks::register(&mut registry).expect("fresh registry cannot collide");

    let mut switch = ProfileSwitch::new(start_profile);
    let mut scheduler = FillScheduler::with_altitude_window(
        blocks,
        config.pipeline.gen_floor_y,
        config.pipeline.gen_ceiling_y,
    );
    let mut engine = SimulatedEngine::new();

    let total_ticks = args.ticks.unwrap_or(DEFAULT_TICKS);
    info!(
        profile = %switch.current(),
        tick_ms = config.pipeline.tick_interval_ms,
        ticks = total_ticks,
        "starting fill pipeline"
    );

    let mut synthesized = 0u64;
    let mut from_cache = 0u64;

    let ticker = crossbeam_channel::tick(Duration::from_millis(config.pipeline.tick_interval_ms));
    let mut tick_no = 0u64;
    while total_ticks == 0 || tick_no < total_ticks {
        if ticker.recv().is_err() {
            break;
        }

        // Halfway through, flip the active profile; chunks requested from now
        // on generate under the other rule set, queued ones are unaffected.
        if total_ticks > 0 && tick_no == total_ticks / 2 {
            let profile = switch.toggle();
            info!(%profile, "world profile toggled");
        }

        engine.drive(tick_no, switch.current(), &mut scheduler);

        if let Some(outcome) = scheduler.tick(&mut engine)? {
            match outcome.resolution {
                Resolution::Synthesized => synthesized += 1,
                Resolution::FromCache => from_cache += 1,
                Resolution::Uniform(_) => {}
            }
        }

        // One-shot decorative pass once the area around the origin is in.
        if tick_no == FEATURE_PASS_TICK {
            place_world_features(&blocks, &mut engine);
            info!(placed = engine.blocks_placed, "decorative features placed");
        }

        tick_no += 1;
    }

    info!(
        synthesized,
        from_cache,
        uniform = engine.uniform_deliveries,
        cached_chunks = scheduler.cache().len(),
        cached_bytes = scheduler.cache().payload_bytes(),
        backlog = scheduler.backlog_len(),
        "fill pipeline stopped"
    );
    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        error!("fatal pipeline error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_walk_is_a_triangle_wave() {
        let positions: Vec<i64> = (0..8)
            .map(|step| SimulatedEngine::viewer_cx(step * TICKS_PER_STEP))
            .collect();
        assert_eq!(positions, [0, 1, 2, 3, 2, 1, 0, 1]);
    }

    #[test]
    fn test_engine_requests_then_receives_chunks() {
        let mut registry = BlockRegistry::new();
        let blocks = WorldBlocks::register(&mut registry).unwrap();
        let mut scheduler = FillScheduler::new(blocks);
        let mut engine = SimulatedEngine::new();

        engine.drive(0, WorldProfile::Verdant, &mut scheduler);
        let requested = scheduler.backlog_len();
        assert!(requested > 0);

        for _ in 0..requested {
            scheduler.tick(&mut engine).expect("tick failed");
        }
        assert_eq!(engine.loaded.len(), requested);
        assert!(engine.pending.is_empty());
        // The bottom chunk layer sits below the generation floor.
        assert!(engine.uniform_deliveries > 0);
    }

    #[test]
    fn test_set_block_routes_to_containing_chunk() {
        let mut registry = BlockRegistry::new();
        let blocks = WorldBlocks::register(&mut registry).unwrap();
        let mut engine = SimulatedEngine::new();
        engine.loaded.insert(
            (-1, 0, 0),
            (ChunkId::new("-1|0|0|verdant"), ChunkBuffer::chunk_sized()),
        );

        engine.set_block(blocks.pole, -1, 3, 5);
        assert_eq!(engine.blocks_placed, 1);
        let (_, buffer) = &engine.loaded[&(-1, 0, 0)];
        assert_eq!(buffer.get(31, 3, 5), blocks.pole);

        // A write outside any loaded chunk is ignored.
        engine.set_block(blocks.pole, 500, 3, 5);
        assert_eq!(engine.blocks_placed, 1);
    }
}
