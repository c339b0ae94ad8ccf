//! Benchmark orchestration
//!
//! For each standard, in registry order: time the compressor, time the
//! decompressor, then check the round trip byte-for-byte. The first failure
//! aborts the whole comparison.

use crate::error::{BenchError, Phase, Result};
use crate::input;
use crate::report::Report;
use crate::standard::{default_standards, CompressionStandard};
use crate::stopwatch::measure;
use std::path::Path;

/// One row of a comparison
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Name of the standard
    pub name: String,
    /// Byte length of the compressed output
    pub compressed_size: usize,
    /// Wall-clock compression time in milliseconds
    pub compression_time_ms: f64,
    /// Wall-clock decompression time in milliseconds
    pub decompression_time_ms: f64,
}

impl BenchmarkResult {
    /// Compressed size as a fraction of `input_len` (`None` for empty input)
    pub fn ratio(&self, input_len: usize) -> Option<f64> {
        (input_len > 0).then(|| self.compressed_size as f64 / input_len as f64)
    }
}

/// Benchmark every standard against `data`, preserving registry order
pub fn compare(data: &[u8], standards: &[CompressionStandard]) -> Result<Vec<BenchmarkResult>> {
    tracing::info!(
        input_len = data.len(),
        standards = standards.len(),
        "Starting comparison"
    );

    standards
        .iter()
        .map(|standard| benchmark(data, standard))
        .collect()
}

fn benchmark(data: &[u8], standard: &CompressionStandard) -> Result<BenchmarkResult> {
    let name = standard.name();

    let (compressed, compression_time_ms) = measure(|| standard.compress(data));
    let compressed = compressed.map_err(|source| BenchError::Codec {
        standard: name.to_string(),
        phase: Phase::Compress,
        source,
    })?;

    let (decompressed, decompression_time_ms) = measure(|| standard.decompress(&compressed));
    let decompressed = decompressed.map_err(|source| BenchError::Codec {
        standard: name.to_string(),
        phase: Phase::Decompress,
        source,
    })?;

    verify_round_trip(name, data, &decompressed)?;

    let result = BenchmarkResult {
        name: name.to_string(),
        compressed_size: compressed.len(),
        compression_time_ms,
        decompression_time_ms,
    };

    tracing::debug!(
        standard = name,
        compressed_size = result.compressed_size,
        ratio = ?result.ratio(data.len()),
        compression_time_ms,
        decompression_time_ms,
        "Standard benchmarked"
    );

    Ok(result)
}

fn verify_round_trip(name: &str, original: &[u8], decompressed: &[u8]) -> Result<()> {
    if original == decompressed {
        return Ok(());
    }

    let first_difference = original
        .iter()
        .zip(decompressed)
        .position(|(a, b)| a != b);

    tracing::error!(standard = name, ?first_difference, "Round-trip mismatch");

    Err(BenchError::RoundTripMismatch {
        standard: name.to_string(),
        expected_len: original.len(),
        actual_len: decompressed.len(),
        first_difference,
    })
}

/// Runs comparisons against a registry of standards
///
/// [`Comparator::new`] uses the default registry. A non-empty caller-supplied
/// registry replaces the defaults entirely; an empty one falls back to them.
#[derive(Debug)]
pub struct Comparator {
    standards: Vec<CompressionStandard>,
}

impl Comparator {
    /// Comparator over the default registry
    pub fn new() -> Self {
        Self {
            standards: default_standards(),
        }
    }

    /// Comparator over a caller-supplied registry
    pub fn with_standards(standards: Vec<CompressionStandard>) -> Self {
        if standards.is_empty() {
            return Self::new();
        }
        Self { standards }
    }

    /// The registry this comparator benchmarks
    pub fn standards(&self) -> &[CompressionStandard] {
        &self.standards
    }

    /// Benchmark `data` and build a report
    pub fn compare(&self, data: &[u8]) -> Result<Report> {
        let results = compare(data, &self.standards)?;
        Ok(Report::new(data.len(), results))
    }

    /// Benchmark `length` copies of `byte`
    pub fn compare_unified(&self, length: usize, byte: u8) -> Result<Report> {
        self.compare(&input::uniform(length, byte))
    }

    /// Benchmark `length` random alphanumeric bytes
    pub fn compare_random(&self, length: usize, seed: Option<u64>) -> Result<Report> {
        self.compare(&input::random_alphanumeric_seeded(length, seed))
    }

    /// Benchmark the contents of the file at `path`
    pub fn compare_file(&self, path: impl AsRef<Path>) -> Result<Report> {
        let data = input::read_file(path)?;
        self.compare(&data)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}
