//! Gzip compression implementation.

use crate::{Codec, CompressionError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Default gzip level (matches the zlib `compresslevel` default of 9).
pub const DEFAULT_GZIP_LEVEL: u32 = 9;

/// Compress data using Gzip.
///
/// # Arguments
/// * `data` - Data to compress
/// * `level` - Compression level (0-9)
///
/// # Returns
/// Compressed data
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let level = Compression::new(level.min(9));
    let mut encoder = GzEncoder::new(Vec::new(), level);
    encoder
        .write_all(data)
        .map_err(CompressionError::compression)?;
    encoder.finish().map_err(CompressionError::compression)
}

/// Decompress Gzip data.
///
/// # Arguments
/// * `data` - Compressed data
///
/// # Returns
/// Decompressed data
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(CompressionError::decompression)?;
    Ok(output)
}

/// Gzip codec with a fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gzip {
    /// Compression level (0-9)
    pub level: u32,
}

impl Gzip {
    /// Create a gzip codec with the given level.
    pub fn new(level: u32) -> Self {
        Self { level }
    }
}

impl Default for Gzip {
    fn default() -> Self {
        Self::new(DEFAULT_GZIP_LEVEL)
    }
}

impl Codec for Gzip {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        gzip_compress(data, self.level)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        gzip_decompress(data)
    }
}
