//! Benchmark failures
//!
//! Every failure aborts the run. There is no partial-results mode, so each
//! variant carries enough context to tell the user which stage broke.

use packbench_codecs::CompressionError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of a codec pair was running when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The compressor
    Compress,
    /// The decompressor
    Decompress,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Compress => write!(f, "compression"),
            Phase::Decompress => write!(f, "decompression"),
        }
    }
}

/// Errors raised while preparing input or running a comparison
#[derive(Debug, Error)]
pub enum BenchError {
    /// Decompressing a codec's own output did not reproduce the input
    #[error(
        "Round-trip mismatch for '{standard}': decompressed {actual_len} bytes, expected {expected_len}{}",
        difference_note(.first_difference)
    )]
    RoundTripMismatch {
        /// Standard that produced the mismatch
        standard: String,
        /// Length of the original input
        expected_len: usize,
        /// Length of what the decompressor returned
        actual_len: usize,
        /// Offset of the first differing byte within the common prefix
        first_difference: Option<usize>,
    },

    /// A compressor or decompressor returned an error
    #[error("{phase} failed for '{standard}': {source}")]
    Codec {
        /// Standard whose codec failed
        standard: String,
        /// Phase that failed
        phase: Phase,
        /// Underlying codec error
        #[source]
        source: CompressionError,
    },

    /// The input file could not be read
    #[error("Failed to read input file {}: {source}", .path.display())]
    Input {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Standard involved in the failure, if any
    pub fn standard(&self) -> Option<&str> {
        match self {
            BenchError::RoundTripMismatch { standard, .. } | BenchError::Codec { standard, .. } => {
                Some(standard)
            }
            BenchError::Input { .. } => None,
        }
    }

    /// Recovery hint shown under the diagnostic
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            BenchError::RoundTripMismatch { .. } => {
                Some("The compressor and decompressor of this standard are not a matching pair")
            }
            BenchError::Codec { .. } => None,
            BenchError::Input { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file exists"),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check that you have read permissions for the file")
                }
                _ => None,
            },
        }
    }
}

fn difference_note(first_difference: &Option<usize>) -> String {
    match first_difference {
        Some(offset) => format!(" (first difference at byte {offset})"),
        None => String::new(),
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BenchError>;
