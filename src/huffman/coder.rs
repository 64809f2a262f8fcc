//! Bit-level Huffman encoding and decoding
//!
//! The decoder reconstructs the code table from the persisted frequency
//! table and matches a growing prefix buffer against it, emitting a byte and
//! clearing the buffer on every hit. Because the table is prefix-free the
//! match is always unambiguous.

use super::{CodeTable, FrequencyTable, PrefixTree};
use crate::{BitString, PipError, Result};
use std::collections::HashMap;

/// Encode `data` into a bit stream plus its frequency-table blob
///
/// Empty input is defined, not rejected: it yields an empty bit stream and a
/// blob with no entries and bit length 0.
pub fn encode(data: &[u8]) -> Result<(BitString, Vec<u8>)> {
    let table = FrequencyTable::count(data);
    if table.is_empty() {
        return Ok((BitString::new(), table.serialize(0)));
    }

    let codes = PrefixTree::build(&table)?.code_table();
    let bits = encode_with_table(data, &codes)?;
    let blob = table.serialize(bits.len() as u64);
    Ok((bits, blob))
}

/// Decode a bit stream against its frequency-table blob
///
/// The blob's recorded bit length trims any zero padding the byte-packed
/// storage appended; a stream shorter than the recorded length is corrupt.
pub fn decode(bits: &BitString, blob: &[u8]) -> Result<Vec<u8>> {
    let (table, total_bits) = FrequencyTable::parse(blob)?;
    if table.is_empty() {
        return if total_bits == 0 {
            Ok(Vec::new())
        } else {
            Err(PipError::CorruptTable(format!(
                "{total_bits} bits recorded for an empty table"
            )))
        };
    }

    let total_bits = total_bits as usize;
    if bits.len() < total_bits {
        return Err(PipError::CorruptStream(format!(
            "stream holds {} bits, table records {}",
            bits.len(),
            total_bits
        )));
    }

    let codes = PrefixTree::build(&table)?.code_table();
    let reversed: HashMap<&BitString, u8> =
        codes.iter().map(|(symbol, code)| (code, symbol)).collect();

    let mut output = Vec::with_capacity(table.total_count() as usize);
    let mut buffer = BitString::new();
    for bit in bits.iter().take(total_bits) {
        buffer.push(bit);
        if let Some(&symbol) = reversed.get(&buffer) {
            output.push(symbol);
            buffer.truncate(0);
        }
    }

    if !buffer.is_empty() {
        return Err(PipError::CorruptStream(format!(
            "{} unmatched bits at end of stream",
            buffer.len()
        )));
    }
    Ok(output)
}

/// Concatenate the codeword of every input byte
fn encode_with_table(data: &[u8], codes: &CodeTable) -> Result<BitString> {
    let mut bits = BitString::with_capacity(data.len() * 8);
    for &byte in data {
        match codes.get(byte) {
            Some(code) => bits.extend(code),
            None => {
                return Err(PipError::CorruptTable(format!(
                    "no codeword for symbol {byte:#04x}"
                )))
            }
        }
    }
    Ok(bits)
}
