//! File orchestration over the pure codecs
//!
//! Reads source files, packs bit streams to bytes on write and trims the
//! padding on reload, and derives companion paths by extension. A source
//! that cannot be read surfaces as `MissingInput`, distinct from the
//! corruption errors the codecs report.

use crate::{huffman, lzw, BitString, CodeWidth, CompressionStats, PipError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of a Huffman-compressed data file
pub const HUFF_DATA_EXT: &str = "piph";

/// Extension of the Huffman frequency-table companion file
pub const HUFF_TABLE_EXT: &str = "piphf";

/// Extension of an LZW-compressed data file
pub const LZW_DATA_EXT: &str = "pipl";

/// Default extension of decompressed output
pub const DECOMPRESSED_EXT: &str = "out";

/// Companion path with the given extension swapped in
pub fn with_extension(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext)
}

/// Read a source artifact, mapping failures to `MissingInput`
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| PipError::MissingInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Huffman-compress `input` into a data file and a table file
pub fn huffman_compress_file(
    input: &Path,
    data_out: &Path,
    table_out: &Path,
) -> Result<CompressionStats> {
    let data = read_input(input)?;
    let (bits, table) = huffman::encode(&data)?;

    let packed = bits.into_bytes();
    let output_bytes = packed.len() + table.len();
    fs::write(data_out, packed)?;
    fs::write(table_out, table)?;

    Ok(CompressionStats {
        input_bytes: data.len(),
        output_bytes,
    })
}

/// Decompress a Huffman data/table file pair into `output`
pub fn huffman_decompress_file(
    data_in: &Path,
    table_in: &Path,
    output: &Path,
) -> Result<CompressionStats> {
    let packed = read_input(data_in)?;
    let table = read_input(table_in)?;

    // The blob's recorded bit length trims the padding inside decode
    let bits = BitString::from_packed(&packed);
    let restored = huffman::decode(&bits, &table)?;
    fs::write(output, &restored)?;

    Ok(CompressionStats {
        input_bytes: packed.len() + table.len(),
        output_bytes: restored.len(),
    })
}

/// LZW-compress `input` into a data file
pub fn lzw_compress_file(input: &Path, output: &Path, width: CodeWidth) -> Result<CompressionStats> {
    let data = read_input(input)?;
    let (bits, _) = lzw::encode(&data, width)?;

    let packed = bits.into_bytes();
    let output_bytes = packed.len();
    fs::write(output, packed)?;

    Ok(CompressionStats {
        input_bytes: data.len(),
        output_bytes,
    })
}

/// Decompress an LZW data file into `output`
pub fn lzw_decompress_file(input: &Path, output: &Path, width: CodeWidth) -> Result<CompressionStats> {
    let packed = read_input(input)?;

    // No bit-length companion exists; the decoder drops the zero tail
    let bits = BitString::from_packed(&packed);
    let restored = lzw::decode(&bits, width)?;
    fs::write(output, &restored)?;

    Ok(CompressionStats {
        input_bytes: packed.len(),
        output_bytes: restored.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_huffman_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("input.txt");
        let data_out = with_extension(&input, HUFF_DATA_EXT);
        let table_out = with_extension(&input, HUFF_TABLE_EXT);
        let output = dir.path().join("restored.txt");

        let text = b"sing in me, muse, and through me tell the story";
        fs::write(&input, text)?;

        let stats = huffman_compress_file(&input, &data_out, &table_out)?;
        assert_eq!(stats.input_bytes, text.len());

        huffman_decompress_file(&data_out, &table_out, &output)?;
        assert_eq!(fs::read(&output)?, text);
        Ok(())
    }

    #[test]
    fn test_lzw_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("input.txt");
        let compressed = with_extension(&input, LZW_DATA_EXT);
        let output = dir.path().join("restored.txt");

        let text = b"the rain in spain stays mainly in the plain, the rain the rain";
        fs::write(&input, text)?;

        let width = CodeWidth::new(12)?;
        lzw_compress_file(&input, &compressed, width)?;
        lzw_decompress_file(&compressed, &output, width)?;
        assert_eq!(fs::read(&output)?, text);
        Ok(())
    }

    #[test]
    fn test_missing_input_is_distinct() {
        let err = read_input(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, PipError::MissingInput { .. }));
    }

    #[test]
    fn test_extension_derivation() {
        let path = Path::new("alice_in_wonderland.txt");
        assert_eq!(
            with_extension(path, HUFF_DATA_EXT),
            Path::new("alice_in_wonderland.piph")
        );
        assert_eq!(
            with_extension(path, HUFF_TABLE_EXT),
            Path::new("alice_in_wonderland.piphf")
        );
        assert_eq!(
            with_extension(path, LZW_DATA_EXT),
            Path::new("alice_in_wonderland.pipl")
        );
    }
}
