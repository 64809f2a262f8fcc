//! Adaptive-dictionary LZW codec
//!
//! Encoder and decoder each rebuild the same dictionary from the fixed
//! 256-entry single-byte seed, in lock-step with the code stream, so no
//! side-channel metadata is needed. Codes are emitted at a fixed bit width
//! that both sides must agree on out of band.

mod coder;
mod dictionary;

pub use coder::{decode, encode, LzwStats};
pub use dictionary::{DecoderDictionary, EncoderDictionary};
