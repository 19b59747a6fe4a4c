//! Dense voxel storage for a single chunk-sized region.
//!
//! A [`ChunkBuffer`] is the caller-owned scratch array the fill pipeline
//! writes into: a plain three-dimensional array of [`BlockId`] values with a
//! runtime shape. It carries no palette or bit packing — compression happens
//! only in the cache payload codec.

use crate::block::{AIR, BlockId};

/// Side length of a standard chunk in voxels.
pub const CHUNK_SIZE: usize = 32;

/// Total number of voxels in a standard chunk (32³).
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// A dense `width × height × depth` array of block IDs.
///
/// Freshly created buffers are filled with air, so a generator only has to
/// write non-air cells. Cells are stored x-fastest: `x + y·w + z·w·h`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkBuffer {
    cells: Vec<BlockId>,
    width: usize,
    height: usize,
    depth: usize,
}

impl ChunkBuffer {
    /// Creates an air-filled buffer with the given shape.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        assert!(
            width > 0 && height > 0 && depth > 0,
            "chunk buffer dimensions must be non-zero"
        );
        Self {
            cells: vec![AIR; width * height * depth],
            width,
            height,
            depth,
        }
    }

    /// Creates an air-filled buffer with the standard `32³` chunk shape.
    pub fn chunk_sized() -> Self {
        Self::new(CHUNK_SIZE, CHUNK_SIZE, CHUNK_SIZE)
    }

    /// Returns the buffer shape as `(width, height, depth)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// Returns the total number of cells.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Returns the block at position `(x, y, z)`.
    ///
    /// Each coordinate must be within the buffer shape.
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.cells[self.linear_index(x, y, z)]
    }

    /// Sets the block at position `(x, y, z)`.
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockId) {
        let index = self.linear_index(x, y, z);
        self.cells[index] = block;
    }

    /// Overwrites every cell with the given block.
    pub fn fill(&mut self, block: BlockId) {
        self.cells.fill(block);
    }

    /// Returns a flat view of the cells in storage order.
    pub fn cells(&self) -> &[BlockId] {
        &self.cells
    }

    /// Returns a mutable flat view of the cells in storage order.
    pub fn cells_mut(&mut self) -> &mut [BlockId] {
        &mut self.cells
    }

    /// Converts `(x, y, z)` to a linear index (x varies fastest).
    fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height && z < self.depth,
            "voxel coordinate ({x}, {y}, {z}) out of shape ({}, {}, {})",
            self.width,
            self.height,
            self.depth
        );
        x + y * self.width + z * self.width * self.height
    }
}

impl Default for ChunkBuffer {
    fn default() -> Self {
        Self::chunk_sized()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_all_air() {
        let buf = ChunkBuffer::new(4, 5, 6);
        assert_eq!(buf.shape(), (4, 5, 6));
        assert_eq!(buf.volume(), 120);
        assert!(buf.cells().iter().all(|b| b.is_air()));
    }

    #[test]
    fn test_chunk_sized_matches_constants() {
        let buf = ChunkBuffer::chunk_sized();
        assert_eq!(buf.shape(), (CHUNK_SIZE, CHUNK_SIZE, CHUNK_SIZE));
        assert_eq!(buf.volume(), CHUNK_VOLUME);
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let mut buf = ChunkBuffer::new(8, 8, 8);
        buf.set(1, 2, 3, BlockId(7));
        assert_eq!(buf.get(1, 2, 3), BlockId(7));
        // Neighbors are untouched.
        assert_eq!(buf.get(2, 2, 3), AIR);
        assert_eq!(buf.get(1, 3, 3), AIR);
    }

    #[test]
    fn test_linear_index_is_x_fastest() {
        let mut buf = ChunkBuffer::new(2, 3, 4);
        buf.set(1, 0, 0, BlockId(1));
        buf.set(0, 1, 0, BlockId(2));
        buf.set(0, 0, 1, BlockId(3));
        assert_eq!(buf.cells()[1], BlockId(1));
        assert_eq!(buf.cells()[2], BlockId(2));
        assert_eq!(buf.cells()[6], BlockId(3));
    }

    #[test]
    fn test_fill_overwrites_every_cell() {
        let mut buf = ChunkBuffer::new(3, 3, 3);
        buf.set(0, 0, 0, BlockId(9));
        buf.fill(BlockId(4));
        assert!(buf.cells().iter().all(|&b| b == BlockId(4)));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_dimension_rejected() {
        let _ = ChunkBuffer::new(0, 8, 8);
    }
}
