//! Adaptive dictionary state for LZW
//!
//! Both directions seed the 256 single-byte fragments at codes 0..=255 and
//! grow by the same deterministic rule. Growth stops strictly below
//! `2^codeWidth` entries so every assigned code fits the configured width;
//! a full dictionary is frozen, never evicted.

use crate::{CodeWidth, ALPHABET_SIZE};
use std::collections::HashMap;

/// Fragment-to-code dictionary used while encoding
#[derive(Debug, Clone)]
pub struct EncoderDictionary {
    map: HashMap<Vec<u8>, u32>,
    capacity: usize,
}

impl EncoderDictionary {
    /// Seed the single-byte fragments for the given code width
    pub fn new(width: CodeWidth) -> Self {
        let mut map = HashMap::with_capacity(ALPHABET_SIZE * 2);
        for byte in 0..ALPHABET_SIZE {
            map.insert(vec![byte as u8], byte as u32);
        }
        Self {
            map,
            capacity: width.capacity(),
        }
    }

    /// True if `fragment` has an assigned code
    pub fn contains(&self, fragment: &[u8]) -> bool {
        self.map.contains_key(fragment)
    }

    /// Code assigned to `fragment`
    pub fn code_of(&self, fragment: &[u8]) -> Option<u32> {
        self.map.get(fragment).copied()
    }

    /// Assign the next code to `fragment` if capacity remains
    ///
    /// Returns false (and changes nothing) once the dictionary is full.
    pub fn try_insert(&mut self, fragment: Vec<u8>) -> bool {
        if self.map.len() >= self.capacity {
            return false;
        }
        let next = self.map.len() as u32;
        self.map.insert(fragment, next);
        true
    }

    /// Number of assigned codes
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Seeded dictionaries are never empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// True once no further fragment can be assigned a code
    pub fn is_full(&self) -> bool {
        self.map.len() >= self.capacity
    }
}

/// Code-to-fragment dictionary used while decoding
#[derive(Debug, Clone)]
pub struct DecoderDictionary {
    entries: Vec<Vec<u8>>,
    capacity: usize,
}

impl DecoderDictionary {
    /// Seed the single-byte fragments for the given code width
    pub fn new(width: CodeWidth) -> Self {
        let mut entries = Vec::with_capacity(ALPHABET_SIZE * 2);
        for byte in 0..ALPHABET_SIZE {
            entries.push(vec![byte as u8]);
        }
        Self {
            entries,
            capacity: width.capacity(),
        }
    }

    /// Fragment assigned to `code`
    pub fn fragment(&self, code: u32) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// The code the next inserted fragment would receive
    pub fn next_code(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Append `fragment` if capacity remains, mirroring the encoder
    pub fn try_insert(&mut self, fragment: Vec<u8>) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.push(fragment);
        true
    }

    /// Number of assigned codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Seeded dictionaries are never empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once no further fragment can be assigned a code
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeWidth;

    #[test]
    fn test_seed_entries() {
        let width = CodeWidth::new(12).unwrap();
        let enc = EncoderDictionary::new(width);
        let dec = DecoderDictionary::new(width);
        assert_eq!(enc.len(), 256);
        assert_eq!(dec.len(), 256);
        assert_eq!(enc.code_of(&[0x41]), Some(0x41));
        assert_eq!(dec.fragment(0x41), Some(&[0x41u8][..]));
        assert_eq!(dec.next_code(), 256);
    }

    #[test]
    fn test_growth_stops_at_capacity() {
        // Width 8 has no room beyond the seed
        let width = CodeWidth::new(8).unwrap();
        let mut enc = EncoderDictionary::new(width);
        assert!(enc.is_full());
        assert!(!enc.try_insert(vec![1, 2]));
        assert_eq!(enc.len(), 256);

        let mut dec = DecoderDictionary::new(width);
        assert!(!dec.try_insert(vec![1, 2]));
        assert_eq!(dec.len(), 256);
    }

    #[test]
    fn test_lock_step_codes() {
        let width = CodeWidth::new(9).unwrap();
        let mut enc = EncoderDictionary::new(width);
        let mut dec = DecoderDictionary::new(width);
        assert!(enc.try_insert(vec![b'a', b'b']));
        assert!(dec.try_insert(vec![b'a', b'b']));
        assert_eq!(enc.code_of(b"ab"), Some(256));
        assert_eq!(dec.fragment(256), Some(&b"ab"[..]));
    }
}
