//! PipLib - Rust implementation of the PIP file compression format
//!
//! This crate provides two independent lossless byte-stream codecs behind a
//! small pure-function API: a static-probability Huffman entropy coder and
//! an adaptive-dictionary LZW coder. Huffman persists its frequency table as
//! a textual blob next to the bit stream; LZW is self-describing and needs
//! only the agreed code width.
//!
//! # Features
//!
//! - Huffman: frequency counting, deterministic greedy prefix tree,
//!   prefix-free code tables, textual frequency-table serialization
//! - LZW: 256-entry seeded dictionary, lock-step adaptive growth, fixed
//!   configurable code width, graceful dictionary-overflow handling
//! - Bit-exact persistence: MSB-first byte packing with zero-padded tails
//!   trimmed on reload
//! - File orchestration layer and `pip-cli` binary
//!
//! The whole input is held in memory for the duration of a call; streaming
//! compression of unbounded input is out of scope.
//!
//! # Example - Huffman
//!
//! ```
//! use piplib::{huffman_decode, huffman_encode};
//!
//! let data = b"abracadabra";
//! let (bits, table) = huffman_encode(data)?;
//! let restored = huffman_decode(&bits, &table)?;
//! assert_eq!(restored, data);
//! # Ok::<(), piplib::PipError>(())
//! ```
//!
//! # Example - LZW
//!
//! ```
//! use piplib::{lzw_decode, lzw_encode, CodeWidth};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let width = CodeWidth::new(12)?;
//! let bits = lzw_encode(data, width)?;
//! let restored = lzw_decode(&bits, width)?;
//! assert_eq!(restored, data);
//! # Ok::<(), piplib::PipError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod archive;
pub mod bits;
pub mod common;
pub mod error;
pub mod huffman;
pub mod lzw;

// Re-export commonly used types
pub use bits::BitString;
pub use common::{CodeWidth, CompressionStats, PipError, Result, ALPHABET_SIZE};

// Convenience functions

/// Compress data with the Huffman codec
///
/// # Arguments
/// * `data` - The bytes to compress
///
/// # Returns
/// The encoded bit stream and the frequency-table blob required to decode it
pub fn huffman_encode(data: &[u8]) -> Result<(BitString, Vec<u8>)> {
    huffman::encode(data)
}

/// Decompress a Huffman bit stream
///
/// # Arguments
/// * `bits` - The encoded bit stream, possibly padded to a byte boundary
/// * `table` - The frequency-table blob produced alongside the stream
///
/// # Returns
/// The original bytes
pub fn huffman_decode(bits: &BitString, table: &[u8]) -> Result<Vec<u8>> {
    huffman::decode(bits, table)
}

/// Compress data with the LZW codec
///
/// # Arguments
/// * `data` - The bytes to compress
/// * `width` - Bits per emitted code; the decoder must use the same value
///
/// # Returns
/// The encoded bit stream
pub fn lzw_encode(data: &[u8], width: CodeWidth) -> Result<BitString> {
    lzw::encode(data, width).map(|(bits, _)| bits)
}

/// Decompress an LZW bit stream
///
/// # Arguments
/// * `bits` - The encoded bit stream, possibly padded to a byte boundary
/// * `width` - Bits per code, matching the value used to encode
///
/// # Returns
/// The original bytes
pub fn lzw_decode(bits: &BitString, width: CodeWidth) -> Result<Vec<u8>> {
    lzw::decode(bits, width)
}
