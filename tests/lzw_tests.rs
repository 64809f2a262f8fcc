//! Tests for the LZW codec
//!
//! These tests exercise the public encode/decode API, dictionary overflow
//! behavior, and the corrupt-stream error paths.

use piplib::lzw;
use piplib::{lzw_decode, lzw_encode, BitString, CodeWidth, PipError};

fn width(bits: u8) -> CodeWidth {
    CodeWidth::new(bits).expect("valid width")
}

/// Test round-trip across the canonical input family
#[test]
fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let all_bytes: Vec<u8> = (0..=255u8).collect();
    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),                          // empty
        vec![b'x'; 500],                     // single repeated byte
        all_bytes,                           // all 256 distinct values
        b"TOBEORNOTTOBEORTOBEORNOT".to_vec(),
        b"the rain in spain stays mainly in the plain".to_vec(),
    ];

    for w in [9, 12, 18] {
        for data in &cases {
            let bits = lzw_encode(data, width(w))?;
            let restored = lzw_decode(&bits, width(w))?;
            assert_eq!(
                data, &restored,
                "round-trip failed for {} bytes at width {}",
                data.len(),
                w
            );
        }
    }

    Ok(())
}

/// Test round-trip through packed byte storage with zero padding
#[test]
fn test_round_trip_through_packed_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let data = b"she sells seashells by the seashore";
    let bits = lzw_encode(data, width(12))?;

    let packed = bits.into_bytes();
    let reloaded = BitString::from_packed(&packed);
    let restored = lzw_decode(&reloaded, width(12))?;
    assert_eq!(&restored[..], data);

    Ok(())
}

/// Repetitive data compresses below its input size
#[test]
fn test_repetitive_data_compresses() -> Result<(), Box<dyn std::error::Error>> {
    let mut data = Vec::new();
    for _ in 0..200 {
        data.extend_from_slice(b"ABCDEFGH");
    }

    let bits = lzw_encode(&data, width(12))?;
    let packed_len = bits.len().div_ceil(8);
    assert!(
        packed_len < data.len(),
        "expected compression: {} -> {} bytes",
        data.len(),
        packed_len
    );
    assert_eq!(lzw_decode(&bits, width(12))?, data);

    Ok(())
}

/// A full dictionary signals overflow exactly once and stays correct
#[test]
fn test_dictionary_overflow_once() -> Result<(), Box<dyn std::error::Error>> {
    // Width 9 leaves 256 growth slots; pseudo-random data burns through them
    let data: Vec<u8> = (0..4096u32)
        .map(|i| (i.wrapping_mul(167).wrapping_add(13) % 256) as u8)
        .collect();

    let (bits, stats) = lzw::encode(&data, width(9))?;
    assert!(stats.overflowed);
    assert_eq!(stats.dictionary_entries, 512);
    assert_eq!(lzw_decode(&bits, width(9))?, data);

    // A roomier width does not overflow on the same input
    let (_, stats) = lzw::encode(&data, width(18))?;
    assert!(!stats.overflowed);

    Ok(())
}

/// Encoder and decoder dictionaries grow in lock step
#[test]
fn test_decoder_mirrors_encoder_growth() -> Result<(), Box<dyn std::error::Error>> {
    let data = b"abcabcabcabcabcabc";
    let (bits, stats) = lzw::encode(data, width(9))?;

    let mut dict = lzw::DecoderDictionary::new(width(9));
    let mut pos = 0;
    let mut previous: Option<Vec<u8>> = None;
    let mut codes = 0usize;
    while let Some(code) = bits.read_bits(pos, 9) {
        pos += 9;
        codes += 1;
        let fragment = match dict.fragment(code) {
            Some(f) => f.to_vec(),
            None => {
                let prev = previous.clone().expect("first code is a seed code");
                let mut f = prev.clone();
                f.push(prev[0]);
                f
            }
        };
        if let Some(prev) = previous {
            let mut grown = prev;
            grown.push(fragment[0]);
            dict.try_insert(grown);
        }
        previous = Some(fragment);
    }

    assert_eq!(codes, stats.codes_emitted);
    assert_eq!(dict.len(), stats.dictionary_entries);

    Ok(())
}

/// The classic one-ahead code decodes via the previous fragment
#[test]
fn test_one_ahead_special_case() -> Result<(), Box<dyn std::error::Error>> {
    // "aaaa...": the encoder emits a code in the same step it registers it
    let data = vec![b'a'; 64];
    let bits = lzw_encode(&data, width(12))?;
    assert_eq!(lzw_decode(&bits, width(12))?, data);

    Ok(())
}

/// A truncated stream reports corruption
#[test]
fn test_truncated_stream_detected() -> Result<(), Box<dyn std::error::Error>> {
    let bits = lzw_encode(b"mississippi", width(12))?;

    // Cut mid-code: the second code is 'i' (0b000001101001), so nine of its
    // bits form a non-zero fragment that cannot be padding
    let mut cut = bits.clone();
    cut.truncate(12 + 9);
    assert_ne!(cut.read_bits(12, 9), Some(0));
    assert!(matches!(
        lzw_decode(&cut, width(12)),
        Err(PipError::CorruptStream(_))
    ));

    Ok(())
}

/// Codes past the dictionary frontier report corruption
#[test]
fn test_invalid_codes_detected() {
    // First code outside the seed range
    let mut bits = BitString::new();
    bits.push_bits(400, 12);
    assert!(matches!(
        lzw_decode(&bits, width(12)),
        Err(PipError::CorruptStream(_))
    ));

    // Later code far beyond the next unassigned entry
    let mut bits = BitString::new();
    bits.push_bits(b'q' as u32, 12);
    bits.push_bits(1000, 12);
    assert!(matches!(
        lzw_decode(&bits, width(12)),
        Err(PipError::CorruptStream(_))
    ));
}

/// Encoding is deterministic across calls
#[test]
fn test_encoding_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let data = b"deterministic dictionaries build deterministic streams";
    let a = lzw_encode(data, width(12))?;
    let b = lzw_encode(data, width(12))?;
    assert_eq!(a, b);

    Ok(())
}
