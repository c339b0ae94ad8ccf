//! Codec failures, split by direction.
//!
//! The underlying libraries report everything as `std::io::Error`; the codec
//! adapters fold those into the variant for the direction that failed.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CompressionError>;

/// A compressor or decompressor refused its input.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// The encoder could not produce output
    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    /// The decoder rejected the stream
    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),
}

impl CompressionError {
    /// Wrap an encoder error.
    pub fn compression(err: impl std::fmt::Display) -> Self {
        Self::CompressionFailed(err.to_string())
    }

    /// Wrap a decoder error.
    pub fn decompression(err: impl std::fmt::Display) -> Self {
        Self::DecompressionFailed(err.to_string())
    }
}
