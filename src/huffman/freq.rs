//! Frequency tables and their persisted form
//!
//! The table is serialized as `<symbol><count>|` per entry followed by
//! `~<totalBits>|`, where the symbol is the raw byte, the count is ASCII
//! decimal and the trailing field records the encoded bit length (needed to
//! trim zero padding after byte-packed storage). Literal `|`, `~` and `\`
//! symbols are escaped with `\` so the delimiters never collide with data.

use super::{ENTRY_SEPARATOR, ESCAPE, LENGTH_MARKER};
use crate::{PipError, Result, ALPHABET_SIZE};

/// One symbol of the alphabet and how often it occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// The byte value
    pub symbol: u8,
    /// Occurrence count, always at least 1
    pub count: u64,
}

/// Ordered sequence of frequency entries with unique symbols
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Tally the bytes of `data`, ordered by ascending (count, symbol)
    pub fn count(data: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        let mut entries: Vec<FrequencyEntry> = counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| FrequencyEntry {
                symbol: symbol as u8,
                count,
            })
            .collect();
        entries.sort_by_key(|e| (e.count, e.symbol));

        Self { entries }
    }

    /// The entries in table order
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbol occurs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of symbols counted
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Serialize the table plus the encoded bit length into a blob
    pub fn serialize(&self, total_bits: u64) -> Vec<u8> {
        let mut blob = Vec::with_capacity(self.entries.len() * 8 + 16);
        for entry in &self.entries {
            if matches!(entry.symbol, ENTRY_SEPARATOR | LENGTH_MARKER | ESCAPE) {
                blob.push(ESCAPE);
            }
            blob.push(entry.symbol);
            blob.extend_from_slice(entry.count.to_string().as_bytes());
            blob.push(ENTRY_SEPARATOR);
        }
        blob.push(LENGTH_MARKER);
        blob.extend_from_slice(total_bits.to_string().as_bytes());
        blob.push(ENTRY_SEPARATOR);
        blob
    }

    /// Parse a blob back into a table and the recorded bit length
    pub fn parse(blob: &[u8]) -> Result<(Self, u64)> {
        let mut entries = Vec::new();
        let mut seen = [false; ALPHABET_SIZE];
        let mut pos = 0;

        loop {
            match blob.get(pos) {
                None => {
                    return Err(PipError::CorruptTable(
                        "missing bit-length field".to_string(),
                    ))
                }
                Some(&LENGTH_MARKER) => {
                    let total_bits = read_decimal(blob, pos + 1, "bit length")?.0;
                    let end = pos + 1 + digits_len(blob, pos + 1);
                    if blob.get(end) != Some(&ENTRY_SEPARATOR) {
                        return Err(PipError::CorruptTable(
                            "unterminated bit-length field".to_string(),
                        ));
                    }
                    if end + 1 != blob.len() {
                        return Err(PipError::CorruptTable(
                            "trailing bytes after bit-length field".to_string(),
                        ));
                    }
                    return Ok((Self { entries }, total_bits));
                }
                Some(&byte) => {
                    let symbol = if byte == ESCAPE {
                        pos += 1;
                        *blob.get(pos).ok_or_else(|| {
                            PipError::CorruptTable("dangling escape byte".to_string())
                        })?
                    } else {
                        byte
                    };
                    pos += 1;

                    let (count, digits) = read_decimal(blob, pos, "count")?;
                    pos += digits;
                    if blob.get(pos) != Some(&ENTRY_SEPARATOR) {
                        return Err(PipError::CorruptTable(format!(
                            "unterminated entry for symbol {symbol:#04x}"
                        )));
                    }
                    pos += 1;

                    if count == 0 {
                        return Err(PipError::CorruptTable(format!(
                            "zero count for symbol {symbol:#04x}"
                        )));
                    }
                    if seen[symbol as usize] {
                        return Err(PipError::CorruptTable(format!(
                            "duplicate symbol {symbol:#04x}"
                        )));
                    }
                    seen[symbol as usize] = true;
                    entries.push(FrequencyEntry { symbol, count });
                }
            }
        }
    }
}

/// Parse an ASCII decimal run at `pos`, returning the value and digit count
fn read_decimal(blob: &[u8], pos: usize, what: &str) -> Result<(u64, usize)> {
    let digits = digits_len(blob, pos);
    if digits == 0 {
        return Err(PipError::CorruptTable(format!("missing {what}")));
    }
    let mut value: u64 = 0;
    for &d in &blob[pos..pos + digits] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((d - b'0') as u64))
            .ok_or_else(|| PipError::CorruptTable(format!("{what} out of range")))?;
    }
    Ok((value, digits))
}

fn digits_len(blob: &[u8], pos: usize) -> usize {
    blob[pos.min(blob.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}
