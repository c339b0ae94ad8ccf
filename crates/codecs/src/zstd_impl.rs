//! Zstandard compression implementation.

use crate::{Codec, CompressionError, Result};

/// Default zstd level (the library default).
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Compress data using Zstandard.
///
/// # Arguments
/// * `data` - Data to compress
/// * `level` - Compression level (1-22)
pub fn zstd_compress(data: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::encode_all(data, level.clamp(1, 22)).map_err(CompressionError::compression)
}

/// Decompress Zstandard data.
pub fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(CompressionError::decompression)
}

/// Zstandard codec with a fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zstd {
    /// Compression level (1-22)
    pub level: i32,
}

impl Zstd {
    /// Create a zstd codec with the given level.
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for Zstd {
    fn default() -> Self {
        Self::new(DEFAULT_ZSTD_LEVEL)
    }
}

impl Codec for Zstd {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        zstd_compress(data, self.level)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        zstd_decompress(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zstd_roundtrip() {
        let original = b"Hello, zstd!";
        let compressed = zstd_compress(original, DEFAULT_ZSTD_LEVEL).unwrap();
        let decompressed = zstd_decompress(&compressed).unwrap();
        assert_eq!(original.as_slice(), decompressed.as_slice());
    }

    #[test]
    fn test_out_of_range_levels() {
        let data = "zstd ".repeat(200);
        for level in [-5, 0, 99] {
            let compressed = zstd_compress(data.as_bytes(), level).unwrap();
            assert_eq!(zstd_decompress(&compressed).unwrap(), data.as_bytes());
        }
    }

    #[test]
    fn test_garbage_is_a_decompression_error() {
        let err = zstd_decompress(b"zstd frames start with a magic number").unwrap_err();
        assert!(matches!(err, CompressionError::DecompressionFailed(_)));
    }

    #[test]
    fn test_empty_input() {
        let compressed = zstd_compress(b"", DEFAULT_ZSTD_LEVEL).unwrap();
        assert!(zstd_decompress(&compressed).unwrap().is_empty());
    }
}
