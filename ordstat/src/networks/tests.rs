//! Tests for fixed-size median networks.

use super::*;
use crate::select::select;
use crate::testing::{reference_median, seeded_rng, uniform, with_duplicates};

/// Every 0/1 input of length N; a comparator network selects the median of all
/// inputs iff it does so for these.
fn check_zero_one<const N: usize>(network: fn(&mut [f32; N]) -> f32) {
    for bits in 0u32..(1 << N) {
        let mut p = [0.0f32; N];
        for (i, v) in p.iter_mut().enumerate() {
            *v = ((bits >> i) & 1) as f32;
        }
        let expected = reference_median(&p);
        assert_eq!(network(&mut p), expected, "bits = {bits:0width$b}", width = N);
    }
}

#[test]
fn test_zero_one_principle_small_networks() {
    check_zero_one::<3>(opt_med3);
    check_zero_one::<5>(opt_med5);
    check_zero_one::<7>(opt_med7);
    check_zero_one::<9>(opt_med9);
}

#[test]
fn test_opt_med3_values() {
    assert_eq!(opt_med3(&mut [3.0, 1.0, 2.0]), 2.0);
    assert_eq!(opt_med3(&mut [1.0, 1.0, 0.0]), 1.0);
    assert_eq!(opt_med3(&mut [-5.0, f32::INFINITY, 4.0]), 4.0);
}

#[test]
fn test_opt_med9_leaves_median_in_middle() {
    let mut p = [9.0f32, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    assert_eq!(opt_med9(&mut p), 5.0);
    assert_eq!(p[4], 5.0);
}

#[test]
fn test_opt_med25_leaves_median_in_middle() {
    let mut p = [0.0f32; 25];
    for (i, v) in p.iter_mut().enumerate() {
        *v = (24 - i) as f32;
    }
    assert_eq!(opt_med25(&mut p), 12.0);
    assert_eq!(p[12], 12.0);
}

fn agrees_with_selection(values: &[f32]) {
    let mut network_buf = values.to_vec();
    let mut select_buf = values.to_vec();
    let from_network = median_fixed(&mut network_buf).expect("fixed size");
    let from_select = select(&mut select_buf, (values.len() - 1) / 2);
    assert_eq!(from_network, from_select, "input {values:?}");
}

#[test]
fn test_networks_agree_with_selection_random() {
    let mut rng = seeded_rng(21);
    for &n in &FIXED_SIZES {
        for _ in 0..2000 {
            agrees_with_selection(&uniform(&mut rng, n, -100.0, 100.0));
            agrees_with_selection(&with_duplicates(&mut rng, n));
        }
    }
}

#[test]
fn test_networks_are_repeatable_on_copies() {
    let mut rng = seeded_rng(22);
    for &n in &FIXED_SIZES {
        let original = uniform(&mut rng, n, 0.0, 1.0);
        let mut a = original.clone();
        let mut b = original.clone();
        assert_eq!(median_fixed(&mut a), median_fixed(&mut b));
    }
}

#[test]
fn test_median_fixed_other_sizes() {
    for n in [0usize, 1, 2, 4, 6, 8, 10, 24, 26] {
        let mut v = vec![1.0f32; n];
        assert_eq!(median_fixed(&mut v), None, "n = {n}");
    }
}
