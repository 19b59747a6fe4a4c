//! Decorative post-init feature placement.
//!
//! After the world's initial load the host scatters a handful of fixed test
//! features near the origin: a few single showcase blocks, a line of poles
//! standing in the water, and crossing diagonal rows on the flat quadrant.
//! This pass goes through the collaborator's single-block call and is not
//! part of the fill pipeline.

use loam_voxel::{BlockId, WorldBlocks};

/// Receiver for single-block placements, implemented by the collaborator.
pub trait BlockSetter {
    /// Places one block at absolute world coordinates.
    fn set_block(&mut self, block: BlockId, x: i64, y: i64, z: i64);
}

/// Places the fixed decorative feature set through `setter`.
///
/// Idempotent: placing twice writes the same blocks at the same coordinates.
pub fn place_world_features(blocks: &WorldBlocks, setter: &mut dyn BlockSetter) {
    // Showcase singles west of the origin.
    setter.set_block(blocks.glass, -6, 4, 5);
    setter.set_block(blocks.shiny_dirt, -5, 4, 7);

    // Window and translucent stone on the lawn.
    setter.set_block(blocks.window, 12, 1, 6);
    setter.set_block(blocks.ghost_stone, 14, 1, 6);

    // Poles standing in the shallows.
    setter.set_block(blocks.water_pole, -18, -1, 15);
    setter.set_block(blocks.water_pole, -16, -1, 15);
    setter.set_block(blocks.water_pole, -14, -1, 15);

    // Crossing diagonal rows on the flat quadrant, first dirt then poles.
    let mut z = 5;
    place_rows(setter, 10, 5, z, blocks.shiny_dirt);
    place_rows(setter, 10, 5, z + 2, blocks.dirt);
    place_rows(setter, 10, 5, z + 5, blocks.dirt);
    place_rows(setter, 10, 5, z + 9, blocks.dirt);
    place_rows(setter, 10, 5, z + 14, blocks.dirt);
    z += 18;
    place_rows(setter, 10, 5, z, blocks.pole);
    place_rows(setter, 10, 5, z + 2, blocks.pole);
    place_rows(setter, 10, 5, z + 5, blocks.pole);
    place_rows(setter, 10, 5, z + 9, blocks.pole);
    place_rows(setter, 10, 5, z + 14, blocks.pole);
}

/// Places two rows of `length` blocks crossing in an X at height 1.
fn place_rows(setter: &mut dyn BlockSetter, length: i64, x: i64, z: i64, block: BlockId) {
    for i in 0..length {
        setter.set_block(block, x + i, 1, z + i);
        setter.set_block(block, length * 2 + x - i, 1, z + i);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use loam_voxel::BlockRegistry;

    #[derive(Default)]
    struct RecordingSetter {
        placed: Vec<(BlockId, i64, i64, i64)>,
    }

    impl BlockSetter for RecordingSetter {
        fn set_block(&mut self, block: BlockId, x: i64, y: i64, z: i64) {
            self.placed.push((block, x, y, z));
        }
    }

    fn world_blocks() -> WorldBlocks {
        let mut registry = BlockRegistry::new();
        WorldBlocks::register(&mut registry).unwrap()
    }

    #[test]
    fn test_feature_pass_places_expected_count() {
        let blocks = world_blocks();
        let mut setter = RecordingSetter::default();
        place_world_features(&blocks, &mut setter);

        // 7 singles + 10 crossing row pairs of 20 blocks each.
        assert_eq!(setter.placed.len(), 7 + 10 * 20);
    }

    #[test]
    fn test_water_poles_sit_below_sea_level() {
        let blocks = world_blocks();
        let mut setter = RecordingSetter::default();
        place_world_features(&blocks, &mut setter);

        let poles: Vec<_> = setter
            .placed
            .iter()
            .filter(|(b, _, _, _)| *b == blocks.water_pole)
            .collect();
        assert_eq!(poles.len(), 3);
        assert!(poles.iter().all(|(_, _, y, _)| *y == -1));
    }

    #[test]
    fn test_rows_cross_at_height_one() {
        let blocks = world_blocks();
        let mut setter = RecordingSetter::default();
        place_world_features(&blocks, &mut setter);

        let row_blocks: Vec<_> = setter
            .placed
            .iter()
            .filter(|(b, _, _, _)| *b == blocks.dirt || *b == blocks.pole)
            .collect();
        assert!(row_blocks.iter().all(|(_, _, y, _)| *y == 1));
        // Both arms of the first dirt X start at x=5 and meet mid-row.
        assert!(setter.placed.contains(&(blocks.dirt, 5, 1, 7)));
        assert!(setter.placed.contains(&(blocks.dirt, 25, 1, 7)));
    }

    #[test]
    fn test_feature_pass_is_idempotent() {
        let blocks = world_blocks();
        let mut first = RecordingSetter::default();
        let mut second = RecordingSetter::default();
        place_world_features(&blocks, &mut first);
        place_world_features(&blocks, &mut second);
        assert_eq!(first.placed, second.placed);
    }
}
