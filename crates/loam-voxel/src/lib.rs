//! Voxel data primitives: block-type registry, chunk buffers, and the
//! compressed chunk payload codec.

pub mod block;
pub mod buffer;
pub mod codec;
pub mod rle;

pub use block::{AIR, BlockDef, BlockId, BlockRegistry, RegistryError, Transparency, WorldBlocks};
pub use buffer::{CHUNK_SIZE, CHUNK_VOLUME, ChunkBuffer};
pub use codec::{CodecError, decode_chunk_into, encode_chunk};
