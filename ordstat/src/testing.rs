//! Testing utilities for ordstat.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Initialize tracing subscriber for tests.
/// Safe to call multiple times - will only initialize once.
/// Respects RUST_LOG env var, defaults to "info".
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fully sorted copy, the reference every selection result is checked against.
pub fn sorted(values: &[f32]) -> Vec<f32> {
    let mut copy = values.to_vec();
    copy.sort_by(f32::total_cmp);
    copy
}

/// Median by full sort: middle element, or the mean of the two middle elements.
/// Empty input gives 0.0.
pub fn reference_median(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let s = sorted(values);
    let n = s.len();
    if n % 2 == 1 {
        s[n / 2]
    } else {
        ((s[n / 2 - 1] as f64 + s[n / 2] as f64) * 0.5) as f32
    }
}

/// Shuffled `0..n` as floats.
pub fn shuffled_range(rng: &mut StdRng, n: usize) -> Vec<f32> {
    let mut values: Vec<f32> = (0..n).map(|i| i as f32).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
    values
}

pub fn uniform(rng: &mut StdRng, n: usize, low: f32, high: f32) -> Vec<f32> {
    (0..n).map(|_| rng.random_range(low..high)).collect()
}

/// Small integer values so that duplicates are frequent.
pub fn with_duplicates(rng: &mut StdRng, n: usize) -> Vec<f32> {
    (0..n).map(|_| rng.random_range(0..8) as f32).collect()
}

/// Two well separated uniform clumps, concatenated.
pub fn bimodal(rng: &mut StdRng, n1: usize, n2: usize) -> Vec<f32> {
    let mut values = uniform(rng, n1, -1000.0, -900.0);
    values.extend(uniform(rng, n2, 5000.0, 5100.0));
    values
}

/// Assert `buffer` is partitioned around index `k`.
pub fn assert_partitioned(buffer: &[f32], k: usize) {
    let pivot = buffer[k];
    for (i, &v) in buffer.iter().enumerate() {
        if i < k {
            assert!(v <= pivot, "buffer[{i}] = {v} > pivot {pivot} at {k}");
        } else if i > k {
            assert!(v >= pivot, "buffer[{i}] = {v} < pivot {pivot} at {k}");
        }
    }
}
