//! Compression codecs benchmarked by packbench.
//!
//! This crate provides:
//! - A [`Codec`] trait: one `compress` and one `decompress` over byte buffers
//! - Gzip, bz2, Brotli and Zstd implementations of it
//! - [`FnCodec`] for plugging in any pair of closures

mod brotli_impl;
mod bzip2_impl;
mod error;
mod gzip;
mod zstd_impl;

pub use brotli_impl::{brotli_compress, brotli_decompress, Brotli, DEFAULT_BROTLI_QUALITY};
pub use bzip2_impl::{bzip2_compress, bzip2_decompress, Bzip2, DEFAULT_BZIP2_LEVEL};
pub use error::{CompressionError, Result};
pub use gzip::{gzip_compress, gzip_decompress, Gzip, DEFAULT_GZIP_LEVEL};
pub use zstd_impl::{zstd_compress, zstd_decompress, Zstd, DEFAULT_ZSTD_LEVEL};

/// A compress/decompress capability pair.
///
/// Implementations must round-trip: `decompress(compress(x)) == x` for every
/// input, and must not keep state between calls.
pub trait Codec: Send + Sync {
    /// Compress `data`.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress bytes previously produced by [`Codec::compress`].
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(data)
    }
}

/// Codec built from two closures.
pub struct FnCodec<C, D> {
    compressor: C,
    decompressor: D,
}

impl<C, D> FnCodec<C, D>
where
    C: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
    D: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    /// Pair a compressor with its decompressor.
    pub fn new(compressor: C, decompressor: D) -> Self {
        Self {
            compressor,
            decompressor,
        }
    }
}

impl<C, D> Codec for FnCodec<C, D>
where
    C: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
    D: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        (self.compressor)(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        (self.decompressor)(data)
    }
}

/// Built-in compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Gzip (DEFLATE in a gzip container)
    Gzip,
    /// bz2 (Burrows-Wheeler)
    Bzip2,
    /// Brotli (Google)
    Brotli,
    /// Zstandard (Facebook)
    Zstd,
}

impl Algorithm {
    /// All built-in algorithms, in default registry order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Gzip,
        Algorithm::Bzip2,
        Algorithm::Brotli,
        Algorithm::Zstd,
    ];

    /// Name shown in reports.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bz2",
            Self::Brotli => "brotli (google)",
            Self::Zstd => "zstd (facebook)",
        }
    }

    /// Build a codec for this algorithm using the given levels.
    pub fn codec(self, levels: &Levels) -> Box<dyn Codec> {
        match self {
            Self::Gzip => Box::new(Gzip::new(levels.gzip)),
            Self::Bzip2 => Box::new(Bzip2::new(levels.bzip2)),
            Self::Brotli => Box::new(Brotli::new(levels.brotli)),
            Self::Zstd => Box::new(Zstd::new(levels.zstd)),
        }
    }
}

/// Per-algorithm compression levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    /// Gzip level (0-9)
    pub gzip: u32,
    /// bz2 block size level (1-9)
    pub bzip2: u32,
    /// Brotli quality (0-11)
    pub brotli: u32,
    /// Zstd level (1-22)
    pub zstd: i32,
}

impl Default for Levels {
    fn default() -> Self {
        Self {
            gzip: DEFAULT_GZIP_LEVEL,
            bzip2: DEFAULT_BZIP2_LEVEL,
            brotli: DEFAULT_BROTLI_QUALITY,
            zstd: DEFAULT_ZSTD_LEVEL,
        }
    }
}

/// Compress data using the specified algorithm at its default level.
pub fn compress(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    algorithm.codec(&Levels::default()).compress(data)
}

/// Decompress data using the specified algorithm.
pub fn decompress(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Gzip => gzip_decompress(data),
        Algorithm::Bzip2 => bzip2_decompress(data),
        Algorithm::Brotli => brotli_decompress(data),
        Algorithm::Zstd => zstd_decompress(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
        for algorithm in Algorithm::ALL {
            let compressed = compress(&data, algorithm).unwrap();
            assert!(compressed.len() < data.len(), "{:?} did not shrink", algorithm);
            assert_eq!(decompress(&compressed, algorithm).unwrap(), data);
        }
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = Algorithm::ALL.iter().map(|a| a.display_name()).collect();
        assert_eq!(names, ["gzip", "bz2", "brotli (google)", "zstd (facebook)"]);
    }

    #[test]
    fn test_fn_codec() {
        let codec = FnCodec::new(
            |data: &[u8]| Ok(data.iter().rev().copied().collect()),
            |data: &[u8]| Ok(data.iter().rev().copied().collect()),
        );
        let compressed = codec.compress(b"abc").unwrap();
        assert_eq!(compressed, b"cba");
        assert_eq!(codec.decompress(&compressed).unwrap(), b"abc");
    }

    #[test]
    fn test_wrong_algorithm_fails() {
        let compressed = compress(b"hello", Algorithm::Gzip).unwrap();
        assert!(decompress(&compressed, Algorithm::Zstd).is_err());
    }

    #[test]
    fn test_boxed_codec_delegates() {
        let codec: Box<dyn Codec> = Algorithm::Zstd.codec(&Levels::default());
        let compressed = codec.compress(b"boxed").unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), b"boxed");
    }
}
