//! Binary serialization for [`ChunkBuffer`] contents.
//!
//! The LMCH (Loam Chunk) format is a compact, versioned binary format used as
//! the cache's compressed payload. It is an internal format with no external
//! compatibility requirement.
//!
//! ## Binary Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | Magic bytes `[0x4C, 0x4D, 0x43, 0x48]` ("LMCH") |
//! | 4 | 1 | Format version (`u8`, currently 1) |
//! | 5 | 2 | Buffer width (`u16`, little-endian) |
//! | 7 | 2 | Buffer height (`u16`, little-endian) |
//! | 9 | 2 | Buffer depth (`u16`, little-endian) |
//! | 11 | N×4 | RLE runs (`count: u16 LE` + `block: u16 LE` each) |
//!
//! The runs must decode to exactly `width × height × depth` cells.

use crate::buffer::ChunkBuffer;
use crate::rle::{rle_decode_into, rle_encode, rle_from_bytes, rle_to_bytes};

/// Magic bytes identifying the LMCH format.
const MAGIC: [u8; 4] = [0x4C, 0x4D, 0x43, 0x48];

/// Current format version.
const FORMAT_VERSION: u8 = 1;

/// Byte offset where RLE run data begins.
const HEADER_LEN: usize = 11;

/// Errors that can occur during chunk payload decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The data does not start with the expected magic bytes.
    #[error("invalid magic bytes")]
    InvalidMagic,
    /// The format version is not supported by this build.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u8),
    /// The data is shorter than expected.
    #[error("data truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum expected byte count.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
    /// The payload shape does not match the destination buffer shape.
    #[error("shape mismatch: payload is {payload:?}, buffer is {buffer:?}")]
    ShapeMismatch {
        /// Shape recorded in the payload header.
        payload: (usize, usize, usize),
        /// Shape of the destination buffer.
        buffer: (usize, usize, usize),
    },
    /// Decoded run lengths do not sum to the buffer volume.
    #[error("run length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Actual number of decoded cells (`usize::MAX` marks an overrun).
        actual: usize,
    },
}

/// Encodes a buffer's contents into an LMCH payload.
pub fn encode_chunk(buffer: &ChunkBuffer) -> Vec<u8> {
    let (w, h, d) = buffer.shape();
    let runs = rle_encode(buffer.cells());
    let mut buf = Vec::with_capacity(HEADER_LEN + runs.len() * 4);

    buf.extend_from_slice(&MAGIC);
    buf.push(FORMAT_VERSION);
    buf.extend_from_slice(&(w as u16).to_le_bytes());
    buf.extend_from_slice(&(h as u16).to_le_bytes());
    buf.extend_from_slice(&(d as u16).to_le_bytes());
    buf.extend_from_slice(&rle_to_bytes(&runs));

    buf
}

/// Decodes an LMCH payload directly into the provided buffer.
///
/// The payload's recorded shape must match the buffer's shape exactly, and
/// the runs must fill the buffer's volume exactly — the decode is lossless or
/// it is an error; there is no partial recovery.
pub fn decode_chunk_into(data: &[u8], buffer: &mut ChunkBuffer) -> Result<(), CodecError> {
    if data.len() < 4 {
        return Err(CodecError::InvalidMagic);
    }
    if data[0..4] != MAGIC {
        return Err(CodecError::InvalidMagic);
    }

    if data.len() < HEADER_LEN {
        return Err(CodecError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }

    let version = data[4];
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }

    let payload_shape = (
        u16::from_le_bytes([data[5], data[6]]) as usize,
        u16::from_le_bytes([data[7], data[8]]) as usize,
        u16::from_le_bytes([data[9], data[10]]) as usize,
    );
    if payload_shape != buffer.shape() {
        return Err(CodecError::ShapeMismatch {
            payload: payload_shape,
            buffer: buffer.shape(),
        });
    }

    let runs = rle_from_bytes(&data[HEADER_LEN..]);
    let expected = buffer.volume();
    match rle_decode_into(&runs, buffer.cells_mut()) {
        Some(written) if written == expected => Ok(()),
        Some(written) => Err(CodecError::LengthMismatch {
            expected,
            actual: written,
        }),
        None => Err(CodecError::LengthMismatch {
            expected,
            actual: usize::MAX,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
