//! Brotli compression implementation.

use crate::{Codec, CompressionError, Result};
use std::io::{Read, Write};

/// Default Brotli quality (the library maximum, as the reference bindings use).
pub const DEFAULT_BROTLI_QUALITY: u32 = 11;

const BUFFER_SIZE: usize = 4096;
const LG_WINDOW_SIZE: u32 = 22;

/// Compress data using Brotli.
///
/// # Arguments
/// * `data` - Data to compress
/// * `quality` - Compression quality (0-11)
///
/// # Returns
/// Compressed data
pub fn brotli_compress(data: &[u8], quality: u32) -> Result<Vec<u8>> {
    let quality = quality.min(11);
    let mut output = Vec::new();

    {
        let mut encoder =
            brotli::CompressorWriter::new(&mut output, BUFFER_SIZE, quality, LG_WINDOW_SIZE);
        encoder
            .write_all(data)
            .map_err(CompressionError::compression)?;
        encoder.flush().map_err(CompressionError::compression)?;
    }

    Ok(output)
}

/// Decompress Brotli data.
///
/// # Arguments
/// * `data` - Compressed data
///
/// # Returns
/// Decompressed data
pub fn brotli_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut decoder = brotli::Decompressor::new(data, BUFFER_SIZE);
    decoder
        .read_to_end(&mut output)
        .map_err(CompressionError::decompression)?;
    Ok(output)
}

/// Brotli codec with a fixed quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brotli {
    /// Compression quality (0-11)
    pub quality: u32,
}

impl Brotli {
    /// Create a Brotli codec with the given quality.
    pub fn new(quality: u32) -> Self {
        Self { quality }
    }
}

impl Default for Brotli {
    fn default() -> Self {
        Self::new(DEFAULT_BROTLI_QUALITY)
    }
}

impl Codec for Brotli {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        brotli_compress(data, self.quality)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        brotli_decompress(data)
    }
}
