//! Payload constructors
//!
//! - Uniform: one byte repeated, the best case for any codec
//! - Random: uniform draws from `A-Z0-9`, close to incompressible
//! - File: the verbatim contents of a path

use crate::error::{BenchError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Byte repeated by the uniform payload unless the caller picks another
pub const DEFAULT_UNIFORM_BYTE: u8 = b'a';

/// Symbols drawn by the random payload
pub const ALPHANUMERIC: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// `length` copies of `byte`
pub fn uniform(length: usize, byte: u8) -> Vec<u8> {
    vec![byte; length]
}

/// `length` bytes drawn uniformly from [`ALPHANUMERIC`]
pub fn random_alphanumeric<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<u8> {
    (0..length)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())])
        .collect()
}

/// Random payload from a seeded generator, or from entropy when `seed` is `None`
pub fn random_alphanumeric_seeded(length: usize, seed: Option<u64>) -> Vec<u8> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    random_alphanumeric(length, &mut rng)
}

/// Read the whole file at `path` into memory
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| BenchError::Input {
        path: path.to_path_buf(),
        source,
    })
}
