//! Codec registry
//!
//! A [`CompressionStandard`] pairs a display name with a [`Codec`]. The default
//! registry is rebuilt on every call, so nothing here is global or mutable.

use packbench_codecs::{Algorithm, Codec, FnCodec, Levels, Result as CodecResult};
use std::fmt;

/// One named codec under test
pub struct CompressionStandard {
    name: String,
    codec: Box<dyn Codec>,
}

impl CompressionStandard {
    /// Create a standard from any codec
    pub fn new(name: impl Into<String>, codec: impl Codec + 'static) -> Self {
        Self {
            name: name.into(),
            codec: Box::new(codec),
        }
    }

    /// Create a standard from a compressor and decompressor closure
    pub fn from_fns<C, D>(name: impl Into<String>, compressor: C, decompressor: D) -> Self
    where
        C: Fn(&[u8]) -> CodecResult<Vec<u8>> + Send + Sync + 'static,
        D: Fn(&[u8]) -> CodecResult<Vec<u8>> + Send + Sync + 'static,
    {
        Self::new(name, FnCodec::new(compressor, decompressor))
    }

    /// Create the built-in standard for `algorithm`
    pub fn builtin(algorithm: Algorithm, levels: &Levels) -> Self {
        Self {
            name: algorithm.display_name().to_string(),
            codec: algorithm.codec(levels),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the compressor
    pub fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        self.codec.compress(data)
    }

    /// Run the decompressor
    pub fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        self.codec.decompress(data)
    }
}

impl fmt::Debug for CompressionStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressionStandard")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Fresh default registry: gzip, bz2, brotli, zstd at their default levels
pub fn default_standards() -> Vec<CompressionStandard> {
    standards_for(&Algorithm::ALL, &Levels::default())
}

/// Built-in standards for `algorithms`, in the order given
pub fn standards_for(algorithms: &[Algorithm], levels: &Levels) -> Vec<CompressionStandard> {
    algorithms
        .iter()
        .map(|algorithm| CompressionStandard::builtin(*algorithm, levels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let names: Vec<_> = default_standards()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, ["gzip", "bz2", "brotli (google)", "zstd (facebook)"]);
    }

    #[test]
    fn test_standards_for_keeps_caller_order() {
        let standards = standards_for(
            &[Algorithm::Zstd, Algorithm::Gzip],
            &Levels::default(),
        );
        let names: Vec<_> = standards.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["zstd (facebook)", "gzip"]);
    }

    #[test]
    fn test_from_fns() {
        let identity = CompressionStandard::from_fns(
            "identity",
            |data: &[u8]| Ok(data.to_vec()),
            |data: &[u8]| Ok(data.to_vec()),
        );
        assert_eq!(identity.name(), "identity");
        assert_eq!(identity.compress(b"xyz").unwrap(), b"xyz");
        assert_eq!(identity.decompress(b"xyz").unwrap(), b"xyz");
    }

    #[test]
    fn test_debug_shows_name() {
        let standard = CompressionStandard::builtin(Algorithm::Brotli, &Levels::default());
        assert!(format!("{:?}", standard).contains("brotli (google)"));
    }
}
