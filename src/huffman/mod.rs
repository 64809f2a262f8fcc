//! Static Huffman entropy codec
//!
//! Encoding computes a frequency table over the input bytes, builds a greedy
//! prefix tree from it and emits one variable-length codeword per byte.
//! The frequency table is serialized alongside the bit stream; decoding
//! rebuilds an identical tree from it, never from the tree itself.

mod coder;
mod freq;
mod tree;

pub use coder::{decode, encode};
pub use freq::{FrequencyEntry, FrequencyTable};
pub use tree::{CodeTable, PrefixTree};

/// Reserved byte terminating each serialized frequency entry
pub const ENTRY_SEPARATOR: u8 = b'|';

/// Reserved byte introducing the trailing total-bit-length field
pub const LENGTH_MARKER: u8 = b'~';

/// Escape byte shielding reserved bytes that occur as literal symbols
pub const ESCAPE: u8 = b'\\';
