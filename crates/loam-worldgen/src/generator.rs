//! Chunk synthesis: fills a buffer with terrain for one of the two profiles.
//!
//! Synthesis is a pure function of absolute world coordinates and the
//! profile. Per column the terrain pass runs first, then (Verdant only) the
//! cloud pass overwrites cells inside the band, so clouds always win over
//! terrain and air. Only non-air results are written; untouched cells keep
//! the buffer's air default.

use loam_voxel::{AIR, BlockId, ChunkBuffer, WorldBlocks};

use crate::height::{cloud_band, cloud_ceiling, height_sample};
use crate::profile::WorldProfile;

/// Columns with their base below this y are filled uniformly with stone
/// instead of being synthesized.
pub const GEN_FLOOR_Y: i64 = -50;

/// Columns with their base above this y are filled uniformly with air
/// instead of being synthesized.
pub const GEN_CEILING_Y: i64 = 50;

/// Verdant primary height wavelengths.
const VERDANT_X_WAVE: f64 = 18.0;
const VERDANT_Z_WAVE: f64 = 22.0;

/// Verdant secondary (detail) height wavelengths, sampled at a z offset and
/// blended at half amplitude so the variation does not repeat the primary.
const VERDANT_DETAIL_X_WAVE: f64 = 9.0;
const VERDANT_DETAIL_Z_WAVE: f64 = 6.0;
const VERDANT_DETAIL_Z_OFFSET: f64 = 50.0;

/// Barren height wavelengths.
const BARREN_X_WAVE: f64 = 20.0;
const BARREN_Z_WAVE: f64 = 40.0;

/// Cloud sum wavelengths (Verdant only).
const CLOUD_X_WAVE: f64 = 20.0;
const CLOUD_Z_WAVE: f64 = 30.0;

/// Solid cells below this depth are stone rather than dirt.
const STONE_DEPTH: f64 = -2.2;

/// Sea level; open cells below it are water, solid cells grass-capped above.
const SEA_LEVEL: i64 = 0;

/// Ceiling of the flat quadrant (x>0, z>0).
const FLAT_CEILING: i64 = 1;

/// Raised ceiling along the quadrant's ridge lines.
const RIDGE_CEILING: i64 = 20;

/// The ridge runs along x == 63 and z == 63 inside the flat quadrant.
const RIDGE_LINE: i64 = 63;

/// Computes the terrain height for the column at absolute `(x, z)`.
pub fn column_height(x: i64, z: i64, profile: WorldProfile) -> f64 {
    let (xf, zf) = (x as f64, z as f64);
    match profile {
        WorldProfile::Verdant => {
            height_sample(xf, zf, VERDANT_X_WAVE, VERDANT_Z_WAVE)
                + height_sample(
                    xf,
                    zf + VERDANT_DETAIL_Z_OFFSET,
                    VERDANT_DETAIL_X_WAVE,
                    VERDANT_DETAIL_Z_WAVE,
                ) / 2.0
        }
        WorldProfile::Barren => height_sample(xf, zf, BARREN_X_WAVE, BARREN_Z_WAVE),
    }
}

/// Decides the block for the cell at absolute `(x, y, z)` given the column's
/// terrain height.
///
/// The decision is per cell, not per column: the height only fixes the
/// solid/open boundary, while the material of a solid cell still depends on
/// the cell's own depth.
pub fn decide_block(x: i64, y: i64, z: i64, height: f64, blocks: &WorldBlocks) -> BlockId {
    // Flat quadrant to the north-east: a plain lawn with a low ceiling,
    // raised to a ridge along two boundary lines. Overrides the height rule
    // entirely for these columns.
    if x > 0 && z > 0 {
        let ceiling = if x == RIDGE_LINE || z == RIDGE_LINE {
            RIDGE_CEILING
        } else {
            FLAT_CEILING
        };
        if y >= ceiling {
            return AIR;
        }
        if y < SEA_LEVEL {
            return blocks.stone;
        }
        return blocks.lawn;
    }

    if (y as f64) < height {
        return if (y as f64) < STONE_DEPTH {
            blocks.stone
        } else if y < SEA_LEVEL {
            blocks.dirt
        } else {
            blocks.grass
        };
    }
    if y >= SEA_LEVEL {
        return AIR;
    }
    blocks.water
}

/// Fills `buffer` with terrain for the chunk whose minimum corner sits at
/// absolute world coordinates `origin`.
pub fn generate_chunk(
    buffer: &mut ChunkBuffer,
    origin: (i64, i64, i64),
    profile: WorldProfile,
    blocks: &WorldBlocks,
) {
    match profile {
        WorldProfile::Verdant => generate_verdant(buffer, origin, blocks),
        WorldProfile::Barren => generate_barren(buffer, origin, blocks),
    }
}

fn generate_verdant(buffer: &mut ChunkBuffer, (cx, cy, cz): (i64, i64, i64), blocks: &WorldBlocks) {
    let (w, h, d) = buffer.shape();
    for i in 0..w {
        let x = cx + i as i64;
        for k in 0..d {
            let z = cz + k as i64;
            let height = column_height(x, z, WorldProfile::Verdant);

            for j in 0..h {
                let block = decide_block(x, cy + j as i64, z, height, blocks);
                if !block.is_air() {
                    buffer.set(i, j, k, block);
                }
            }

            // Cloud pass, strictly after the terrain pass for this column.
            let (xf, zf) = (x as f64, z as f64);
            if let Some(altitude) = cloud_ceiling(xf, zf, CLOUD_X_WAVE, CLOUD_Z_WAVE) {
                let (lo, hi) = cloud_band(altitude, xf, zf);
                for j in 0..h {
                    let y = (cy + j as i64) as f64;
                    if y < lo || y > hi {
                        continue;
                    }
                    buffer.set(i, j, k, blocks.cloud);
                }
            }
        }
    }
}

fn generate_barren(buffer: &mut ChunkBuffer, (cx, cy, cz): (i64, i64, i64), blocks: &WorldBlocks) {
    let (w, h, d) = buffer.shape();
    for i in 0..w {
        let x = cx + i as i64;
        for k in 0..d {
            let z = cz + k as i64;
            let height = column_height(x, z, WorldProfile::Barren);
            for j in 0..h {
                let mut block = decide_block(x, cy + j as i64, z, height, blocks);
                // Barren is the grassless rendition of the same landform.
                if block == blocks.grass {
                    block = blocks.stone;
                }
                if !block.is_air() {
                    buffer.set(i, j, k, block);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
