//! Median of an arbitrary-length sample.

use crate::networks;
use crate::select::select;


/// Median of `sample`, reordering it in place.
///
/// Sizes with a dedicated comparator network go through it; everything else
/// uses partition selection at `(n - 1) / 2`, plus a second selection at the
/// next index for even `n`, returning the mean of the two. An empty sample
/// has median `0.0`.
///
/// The caller owns `sample` on every path and must copy first if the original
/// order matters.
#[inline]
pub fn median1d(sample: &mut [f32]) -> f32 {
    let n = sample.len();
    if n == 0 {
        return 0.0;
    }
    if let Some(median) = networks::median_fixed(sample) {
        return median;
    }

    let k = (n - 1) / 2;
    let lower = select(sample, k);
    if n % 2 == 1 {
        return lower;
    }
    let upper = select(sample, k + 1);
    midpoint(lower, upper)
}

/// Mean of two values without overflowing near `f32::MAX`.
#[inline]
fn midpoint(a: f32, b: f32) -> f32 {
    ((a as f64 + b as f64) * 0.5) as f32
}
