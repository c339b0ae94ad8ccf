//! Properties of the comparison loop over the built-in codecs.

use packbench_core::{
    compare, default_standards, input, BenchError, Comparator, CompressionStandard,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_default_codec_round_trips(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        for standard in default_standards() {
            let compressed = standard.compress(&data).unwrap();
            let decompressed = standard.decompress(&compressed).unwrap();
            prop_assert_eq!(&decompressed, &data, "{} failed to round-trip", standard.name());
        }
    }

    #[test]
    fn results_follow_registry_order(
        names in proptest::collection::vec("[a-z]{1,12}", 0..8),
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let standards: Vec<_> = names
            .iter()
            .map(|name| {
                CompressionStandard::from_fns(
                    name.clone(),
                    |d: &[u8]| Ok(d.to_vec()),
                    |d: &[u8]| Ok(d.to_vec()),
                )
            })
            .collect();

        let results = compare(&data, &standards).unwrap();
        let got: Vec<_> = results.iter().map(|r| r.name.clone()).collect();
        prop_assert_eq!(got, names);
        for result in &results {
            prop_assert!(result.compression_time_ms >= 0.0);
            prop_assert!(result.decompression_time_ms >= 0.0);
        }
    }
}

#[test]
fn single_byte_input() {
    let results = compare(b"x", &default_standards()).unwrap();
    assert_eq!(results.len(), 4);
}

#[test]
fn empty_input_succeeds_for_every_default() {
    let report = Comparator::new().compare(b"").unwrap();
    assert_eq!(report.input_len, 0);
    assert_eq!(report.results.len(), 4);
}

#[test]
fn uniform_megabyte_always_shrinks() {
    let report = Comparator::new()
        .compare_unified(1_000_000, input::DEFAULT_UNIFORM_BYTE)
        .unwrap();

    for result in &report.results {
        assert!(
            result.compressed_size < 1_000_000,
            "{} produced {} bytes",
            result.name,
            result.compressed_size
        );
    }
}

#[test]
fn random_alphanumeric_stays_above_entropy_floor() {
    // log2(36) / 8 * 100_000 is about 64_624 bytes
    let report = Comparator::new().compare_random(100_000, Some(2024)).unwrap();

    for result in &report.results {
        assert!(
            result.compressed_size > 64_000,
            "{} produced {} bytes",
            result.name,
            result.compressed_size
        );
    }
}

#[test]
fn broken_pair_never_yields_a_row() {
    let standards = vec![CompressionStandard::from_fns(
        "broken",
        |d: &[u8]| Ok(d.to_vec()),
        |_: &[u8]| Ok(b"something else".to_vec()),
    )];

    let err = Comparator::with_standards(standards)
        .compare(b"original payload")
        .unwrap_err();
    assert!(matches!(err, BenchError::RoundTripMismatch { .. }));
    assert_eq!(err.standard(), Some("broken"));
}

#[test]
fn file_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, b"hello world!!").unwrap();

    let report = Comparator::new().compare_file(&path).unwrap();
    assert_eq!(report.input_len, 13);
    assert_eq!(report.results.len(), 4);
    assert!(report.to_string().contains("Data of length 13"));
}
