//! Benchmark data profiles for the strake workspace.
//!
//! Provides the three input shapes the sort benches run over (ascending,
//! descending, and seeded-shuffled) so every bench sees identical data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Values `0..n` in ascending order.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Values `0..n` in descending order.
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// `n` values drawn uniformly from `0..n`, deterministic per seed.
pub fn shuffled(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..n as i64)).collect()
}
