//! Compression benchmark core for packbench
//!
//! Runs a set of compression standards over the same payload and reports
//! compressed size, compression time and decompression time for each:
//!
//! - **Registry**: named compress/decompress pairs, default gzip, bz2, brotli, zstd
//! - **Stopwatch**: monotonic millisecond timing around a closure
//! - **Comparator**: timed compress, timed decompress, mandatory round-trip check
//! - **Report**: the results as a table, in registry order
//! - **Input**: uniform, random alphanumeric, or file payloads
//!
//! # Example
//!
//! ```rust,no_run
//! use packbench_core::Comparator;
//!
//! let report = Comparator::new().compare_unified(1_000_000, b'a')?;
//! println!("{report}");
//! # Ok::<(), packbench_core::BenchError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod comparator;
pub mod error;
pub mod input;
pub mod report;
pub mod standard;
pub mod stopwatch;

pub use comparator::{compare, BenchmarkResult, Comparator};
pub use error::{BenchError, Phase, Result};
pub use report::Report;
pub use standard::{default_standards, standards_for, CompressionStandard};
pub use stopwatch::{measure, Stopwatch};

pub use packbench_codecs::{
    Algorithm, Codec, CompressionError, Levels, DEFAULT_BROTLI_QUALITY, DEFAULT_BZIP2_LEVEL,
    DEFAULT_GZIP_LEVEL, DEFAULT_ZSTD_LEVEL,
};
