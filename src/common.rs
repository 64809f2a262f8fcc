//! Common types and constants for the PIP compression format
//!
//! This module defines the core types, constants, and the error type shared
//! by the Huffman and LZW codecs and the file orchestration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Bit width of a single LZW code
///
/// Bounds the dictionary to `2^width` entries. The width is never stored in
/// the compressed stream: encoder and decoder must be configured with the
/// same value or decoding produces garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWidth(u8);

impl CodeWidth {
    /// Smallest accepted width (exactly covers the 256 seed entries)
    pub const MIN: u8 = 8;

    /// Largest accepted width
    pub const MAX: u8 = 24;

    /// Create a CodeWidth from a raw bit count
    pub fn new(bits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(CodeWidth(bits))
        } else {
            Err(PipError::InvalidCodeWidth(bits))
        }
    }

    /// Number of bits per emitted code
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Maximum number of dictionary entries for this width
    pub fn capacity(&self) -> usize {
        1usize << self.0
    }
}

impl Default for CodeWidth {
    /// 18 bits, enough dictionary headroom for inputs around a megabyte
    fn default() -> Self {
        CodeWidth(18)
    }
}

/// Error type for PIP operations
#[derive(Debug, Error)]
pub enum PipError {
    /// Source artifact could not be read
    #[error("missing input '{}': {source}", path.display())]
    MissingInput {
        /// Path of the unreadable artifact
        path: PathBuf,
        /// Underlying I/O cause
        source: std::io::Error,
    },

    /// Compressed bit stream is inconsistent with its metadata
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// Frequency-table blob could not be parsed
    #[error("corrupt frequency table: {0}")]
    CorruptTable(String),

    /// Operation requires a non-empty symbol alphabet
    #[error("empty symbol alphabet")]
    EmptyInput,

    /// LZW code width outside the accepted range
    #[error("invalid code width: {0} (expected 8..=24)")]
    InvalidCodeWidth(u8),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PIP operations
pub type Result<T> = std::result::Result<T, PipError>;

/// Number of distinct byte values, the seed alphabet of both codecs
pub const ALPHABET_SIZE: usize = 256;

/// Statistics for a single compress/decompress operation
#[derive(Debug, Default, Clone, Copy)]
pub struct CompressionStats {
    /// Bytes read from the source
    pub input_bytes: usize,
    /// Bytes written to the destination
    pub output_bytes: usize,
}

impl CompressionStats {
    /// Output size as a fraction of input size (1.0 when input is empty)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            1.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}
