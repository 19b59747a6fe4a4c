//! Run-Length Encoding (RLE) over block IDs.
//!
//! RLE compresses runs of identical blocks into `(count, block)` pairs.
//! Terrain chunks are spatially coherent (long spans of air, stone, or a
//! uniform fill), which is what makes this the cache's payload encoding.

use crate::block::BlockId;

/// A single RLE run: `count` consecutive occurrences of `block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleRun {
    /// Number of consecutive identical blocks (1..=65535).
    pub count: u16,
    /// The block ID.
    pub block: BlockId,
}

/// Encodes a slice of block IDs into RLE runs.
///
/// Runs are capped at `u16::MAX` length. An empty input produces an empty
/// output.
pub fn rle_encode(cells: &[BlockId]) -> Vec<RleRun> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < cells.len() {
        let block = cells[i];
        let mut count: u16 = 1;
        loop {
            let idx = i + (count as usize);
            if idx >= cells.len() || cells[idx] != block || count == u16::MAX {
                break;
            }
            count += 1;
        }
        runs.push(RleRun { count, block });
        i += count as usize;
    }
    runs
}

/// Decodes RLE runs directly into a destination slice.
///
/// Returns the number of cells written, or `None` if the runs would overrun
/// the destination. A short decode (fewer cells than `dest.len()`) is left
/// to the caller to reject.
pub fn rle_decode_into(runs: &[RleRun], dest: &mut [BlockId]) -> Option<usize> {
    let mut written = 0;
    for run in runs {
        let end = written + run.count as usize;
        if end > dest.len() {
            return None;
        }
        dest[written..end].fill(run.block);
        written = end;
    }
    Some(written)
}

/// Encodes RLE runs to bytes: each run is `count: u16 LE` + `block: u16 LE`.
pub fn rle_to_bytes(runs: &[RleRun]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(runs.len() * 4);
    for run in runs {
        buf.extend_from_slice(&run.count.to_le_bytes());
        buf.extend_from_slice(&run.block.0.to_le_bytes());
    }
    buf
}

/// Decodes RLE runs from bytes. Each run is 4 bytes: `count: u16 LE` +
/// `block: u16 LE`. Trailing bytes past the last whole run are ignored.
pub fn rle_from_bytes(data: &[u8]) -> Vec<RleRun> {
    let mut runs = Vec::with_capacity(data.len() / 4);
    for chunk in data.chunks_exact(4) {
        runs.push(RleRun {
            count: u16::from_le_bytes([chunk[0], chunk[1]]),
            block: BlockId(u16::from_le_bytes([chunk[2], chunk[3]])),
        });
    }
    runs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
