//! Bzip2 compression implementation.

use crate::{Codec, CompressionError, Result};
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;
use std::io::{Read, Write};

/// Default bz2 block size level.
pub const DEFAULT_BZIP2_LEVEL: u32 = 9;

/// Compress data using bzip2.
///
/// # Arguments
/// * `data` - Data to compress
/// * `level` - Block size level (1-9)
pub fn bzip2_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let level = Compression::new(level.clamp(1, 9));
    let mut encoder = BzEncoder::new(Vec::new(), level);
    encoder
        .write_all(data)
        .map_err(CompressionError::compression)?;
    encoder.finish().map_err(CompressionError::compression)
}

/// Decompress bzip2 data.
pub fn bzip2_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = BzDecoder::new(data);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(CompressionError::decompression)?;
    Ok(output)
}

/// Bzip2 codec with a fixed block size level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bzip2 {
    /// Block size level (1-9)
    pub level: u32,
}

impl Bzip2 {
    /// Create a bzip2 codec with the given level.
    pub fn new(level: u32) -> Self {
        Self { level }
    }
}

impl Default for Bzip2 {
    fn default() -> Self {
        Self::new(DEFAULT_BZIP2_LEVEL)
    }
}

impl Codec for Bzip2 {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        bzip2_compress(data, self.level)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        bzip2_decompress(data)
    }
}
