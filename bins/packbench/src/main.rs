//! packbench: compare compression standards on one payload.

use clap::{Args, Parser, Subcommand, ValueEnum};
use packbench_core::{
    input, standards_for, Algorithm, BenchError, Comparator, CompressionStandard, Levels,
    DEFAULT_BROTLI_QUALITY, DEFAULT_BZIP2_LEVEL, DEFAULT_GZIP_LEVEL, DEFAULT_ZSTD_LEVEL,
};
use packbench_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod output;

use output::Status;

/// Compare compression ratio and speed of gzip, bz2, brotli and zstd
#[derive(Parser)]
#[command(name = "packbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    registry: RegistryArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark a buffer of one repeated byte
    CompareUnified {
        /// Number of bytes
        length: usize,

        /// Byte to repeat (a single ASCII character)
        #[arg(short, long, default_value = "a", value_parser = parse_ascii_byte)]
        byte: u8,
    },

    /// Benchmark a buffer of random uppercase letters and digits
    CompareRandom {
        /// Number of bytes
        length: usize,

        /// Seed for a reproducible payload
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Benchmark the contents of a file
    CompareFile {
        /// Path to the file
        path: PathBuf,
    },
}

/// Which standards to run, and how hard each one compresses
#[derive(Args)]
struct RegistryArgs {
    /// Standard to benchmark; repeat to pick several, in order (default: all)
    #[arg(short, long = "standard", value_enum, global = true)]
    standards: Vec<StandardArg>,

    /// Gzip compression level
    #[arg(long, global = true, default_value_t = DEFAULT_GZIP_LEVEL,
          value_parser = clap::value_parser!(u32).range(0..=9))]
    gzip_level: u32,

    /// bz2 block size level
    #[arg(long, global = true, default_value_t = DEFAULT_BZIP2_LEVEL,
          value_parser = clap::value_parser!(u32).range(1..=9))]
    bzip2_level: u32,

    /// Brotli quality
    #[arg(long, global = true, default_value_t = DEFAULT_BROTLI_QUALITY,
          value_parser = clap::value_parser!(u32).range(0..=11))]
    brotli_quality: u32,

    /// Zstd compression level
    #[arg(long, global = true, default_value_t = DEFAULT_ZSTD_LEVEL,
          value_parser = clap::value_parser!(i32).range(1..=22))]
    zstd_level: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StandardArg {
    Gzip,
    Bz2,
    Brotli,
    Zstd,
}

impl From<StandardArg> for Algorithm {
    fn from(arg: StandardArg) -> Self {
        match arg {
            StandardArg::Gzip => Algorithm::Gzip,
            StandardArg::Bz2 => Algorithm::Bzip2,
            StandardArg::Brotli => Algorithm::Brotli,
            StandardArg::Zstd => Algorithm::Zstd,
        }
    }
}

impl RegistryArgs {
    fn levels(&self) -> Levels {
        Levels {
            gzip: self.gzip_level,
            bzip2: self.bzip2_level,
            brotli: self.brotli_quality,
            zstd: self.zstd_level,
        }
    }

    fn algorithms(&self) -> Vec<Algorithm> {
        if self.standards.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.standards.iter().copied().map(Algorithm::from).collect()
        }
    }

    fn standards(&self) -> Vec<CompressionStandard> {
        standards_for(&self.algorithms(), &self.levels())
    }
}

fn parse_ascii_byte(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got {:?}", value)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&e);
            if let Some(suggestion) = e.downcast_ref::<BenchError>().and_then(BenchError::suggestion) {
                Status::suggestion(suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    packbench_telemetry::init_with_config(TelemetryConfig::from_verbosity(cli.verbose))?;

    let comparator = Comparator::with_standards(cli.registry.standards());
    tracing::debug!(
        standards = ?comparator.standards().iter().map(|s| s.name()).collect::<Vec<_>>(),
        "Registry ready"
    );

    let data = match cli.command {
        Commands::CompareUnified { length, byte } => input::uniform(length, byte),
        Commands::CompareRandom { length, seed } => input::random_alphanumeric_seeded(length, seed),
        Commands::CompareFile { path } => input::read_file(&path)?,
    };

    if data.is_empty() {
        Status::warning("Input is empty; sizes show container overhead only");
    }

    let report = comparator.compare(&data)?;
    println!("{report}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_registry() {
        let cli = Cli::try_parse_from(["packbench", "compare-unified", "10"]).unwrap();
        assert_eq!(cli.registry.algorithms(), Algorithm::ALL.to_vec());
        assert_eq!(cli.registry.levels(), Levels::default());
    }

    #[test]
    fn test_standard_selection_keeps_order() {
        let cli = Cli::try_parse_from([
            "packbench", "compare-random", "100", "-s", "zstd", "-s", "gzip",
        ])
        .unwrap();
        assert_eq!(cli.registry.algorithms(), vec![Algorithm::Zstd, Algorithm::Gzip]);
    }

    #[test]
    fn test_levels() {
        let cli = Cli::try_parse_from([
            "packbench", "--gzip-level", "1", "--zstd-level", "19", "compare-unified", "10",
        ])
        .unwrap();
        let levels = cli.registry.levels();
        assert_eq!(levels.gzip, 1);
        assert_eq!(levels.zstd, 19);
        assert_eq!(levels.brotli, DEFAULT_BROTLI_QUALITY);
    }

    #[test]
    fn test_level_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["packbench", "--gzip-level", "10", "compare-unified", "1"]).is_err());
    }

    #[test]
    fn test_parse_ascii_byte() {
        assert_eq!(parse_ascii_byte("z"), Ok(b'z'));
        assert!(parse_ascii_byte("zz").is_err());
        assert!(parse_ascii_byte("").is_err());
        assert!(parse_ascii_byte("é").is_err());
    }

    #[test]
    fn test_unified_byte_option() {
        let cli = Cli::try_parse_from(["packbench", "compare-unified", "3", "--byte", "x"]).unwrap();
        match cli.command {
            Commands::CompareUnified { length, byte } => {
                assert_eq!(length, 3);
                assert_eq!(byte, b'x');
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
