//! Deterministic input generators for tests and benchmarks.
//!
//! All generators draw from one seed per process. It is random unless the `OVERRIDE_SEED`
//! environment variable holds a `u64`, which makes failing runs reproducible.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// The seed every generator in this module starts from.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed over the whole `i32` range, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed in `range`. Small ranges give many duplicates.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Values in `1..=len` following a zipfian distribution with the given exponent.
///
/// # Panics
///
/// If `exponent` is not positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("zipf exponent must be positive, got {exponent}"),
    };

    let mut rng = rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending runs of `saw_len` elements, each run restarting at a lower value.
pub fn saw_ascending(len: usize, saw_len: usize) -> Vec<i32> {
    let saw_len = saw_len.max(1);
    (0..len)
        .map(|i| ((i % saw_len) as i32) - (i / saw_len) as i32)
        .collect()
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    (0..len)
        .map(|i| (if i < half { i } else { len - i }) as i32)
        .collect()
}
