//! LZW encoding and decoding over fixed-width code streams

use super::{DecoderDictionary, EncoderDictionary};
use crate::{BitString, CodeWidth, PipError, Result};

/// Statistics for a single LZW encode call
#[derive(Debug, Default, Clone, Copy)]
pub struct LzwStats {
    /// Number of codes written to the stream
    pub codes_emitted: usize,
    /// Dictionary size when encoding finished
    pub dictionary_entries: usize,
    /// True if the dictionary filled up during this call
    pub overflowed: bool,
}

/// Encode `data` into a stream of fixed-width codes
///
/// The running match buffer grows while it stays in the dictionary; on the
/// first miss the buffer's code is emitted, buffer-plus-missed-byte becomes a
/// new entry if capacity remains, and the buffer restarts from the missed
/// byte. A full dictionary is non-fatal: coding continues against the frozen
/// table and a warning is logged once per call.
pub fn encode(data: &[u8], width: CodeWidth) -> Result<(BitString, LzwStats)> {
    let mut dict = EncoderDictionary::new(width);
    let mut bits = BitString::with_capacity(data.len() * 2);
    let mut stats = LzwStats::default();
    let mut buffer: Vec<u8> = Vec::new();

    for &byte in data {
        buffer.push(byte);
        if dict.contains(&buffer) {
            continue;
        }
        buffer.pop();

        emit(&mut bits, &dict, &buffer, width, &mut stats)?;

        buffer.push(byte);
        if !dict.try_insert(std::mem::take(&mut buffer)) && !stats.overflowed {
            stats.overflowed = true;
            log::warn!(
                "LZW dictionary full at {} entries, continuing with frozen table \
                 (a larger code width compresses further)",
                dict.len()
            );
        }
        buffer.push(byte);
    }

    if !buffer.is_empty() {
        emit(&mut bits, &dict, &buffer, width, &mut stats)?;
    }

    stats.dictionary_entries = dict.len();
    Ok((bits, stats))
}

/// Decode a stream of fixed-width codes back into bytes
///
/// A trailing fragment shorter than the code width is accepted and dropped
/// only when all its bits are zero: byte-packed storage appends at most 7
/// pad bits, always fewer than the width. Any other shortfall, and any code
/// beyond the next unassigned one, reports a corrupt stream.
pub fn decode(bits: &BitString, width: CodeWidth) -> Result<Vec<u8>> {
    let step = width.bits() as usize;
    let mut codes = Vec::with_capacity(bits.len() / step + 1);
    let mut pos = 0;
    while let Some(code) = bits.read_bits(pos, width.bits()) {
        codes.push(code);
        pos += step;
    }
    if pos < bits.len() {
        let tail = (bits.len() - pos) as u8;
        if bits.read_bits(pos, tail) != Some(0) {
            return Err(PipError::CorruptStream(format!(
                "{tail} trailing bits do not form a {step}-bit code"
            )));
        }
    }

    let Some((&first, rest)) = codes.split_first() else {
        return Ok(Vec::new());
    };

    let mut dict = DecoderDictionary::new(width);
    let mut previous = dict
        .fragment(first)
        .ok_or_else(|| {
            PipError::CorruptStream(format!("initial code {first} is not a seed code"))
        })?
        .to_vec();
    let mut output = previous.clone();

    for &code in rest {
        let fragment = match dict.fragment(code) {
            Some(known) => known.to_vec(),
            // The one-ahead case: the encoder used an entry it registered
            // while emitting the previous code.
            None if code == dict.next_code() => {
                let mut synthesized = previous.clone();
                synthesized.push(previous[0]);
                synthesized
            }
            None => {
                return Err(PipError::CorruptStream(format!(
                    "code {code} beyond dictionary size {}",
                    dict.len()
                )))
            }
        };

        output.extend_from_slice(&fragment);

        let mut grown = previous;
        grown.push(fragment[0]);
        dict.try_insert(grown);
        previous = fragment;
    }

    Ok(output)
}

fn emit(
    bits: &mut BitString,
    dict: &EncoderDictionary,
    fragment: &[u8],
    width: CodeWidth,
    stats: &mut LzwStats,
) -> Result<()> {
    match dict.code_of(fragment) {
        Some(code) => {
            bits.push_bits(code, width.bits());
            stats.codes_emitted += 1;
            Ok(())
        }
        None => Err(PipError::CorruptStream(
            "match buffer missing from dictionary".to_string(),
        )),
    }
}
