//! Median-selecting comparator networks for 3, 5, 7, 9 and 25 samples.
//!
//! Each network is a fixed sequence of compare-and-swap steps that only
//! guarantees the median lands at the middle index; other positions are left
//! partially ordered. The 9 and 25 networks follow the classic XCELL and
//! Graphics Gems layouts.

#[cfg(test)]
mod tests;

/// Sample sizes with a dedicated network.
pub const FIXED_SIZES: [usize; 5] = [3, 5, 7, 9, 25];

#[inline(always)]
fn sort2<const N: usize>(p: &mut [f32; N], a: usize, b: usize) {
    if p[a] > p[b] {
        p.swap(a, b);
    }
}

/// Median of 3 samples.
#[inline]
pub fn opt_med3(p: &mut [f32; 3]) -> f32 {
    sort2(p, 0, 1);
    sort2(p, 1, 2);
    sort2(p, 0, 1);
    p[1]
}

/// Median of 5 samples.
#[inline]
pub fn opt_med5(p: &mut [f32; 5]) -> f32 {
    sort2(p, 0, 1);
    sort2(p, 3, 4);
    sort2(p, 0, 3);
    sort2(p, 1, 4);
    sort2(p, 1, 2);
    sort2(p, 2, 3);
    sort2(p, 1, 2);
    p[2]
}

/// Median of 7 samples.
#[inline]
pub fn opt_med7(p: &mut [f32; 7]) -> f32 {
    sort2(p, 0, 5);
    sort2(p, 0, 3);
    sort2(p, 1, 6);
    sort2(p, 2, 4);
    sort2(p, 0, 1);
    sort2(p, 3, 5);
    sort2(p, 2, 6);
    sort2(p, 2, 3);
    sort2(p, 3, 6);
    sort2(p, 4, 5);
    sort2(p, 1, 4);
    sort2(p, 1, 3);
    sort2(p, 3, 4);
    p[3]
}

/// Median of 9 samples.
///
/// Only `p[4]` is guaranteed on return; the rest is in no particular order.
#[inline]
pub fn opt_med9(p: &mut [f32; 9]) -> f32 {
    // Sort the three columns of a 3x3 arrangement.
    sort2(p, 1, 2);
    sort2(p, 4, 5);
    sort2(p, 7, 8);
    sort2(p, 0, 1);
    sort2(p, 3, 4);
    sort2(p, 6, 7);
    sort2(p, 1, 2);
    sort2(p, 4, 5);
    sort2(p, 7, 8);

    // Max of the mins, min of the maxes, median of the medians.
    sort2(p, 0, 3);
    sort2(p, 5, 8);
    sort2(p, 4, 7);
    sort2(p, 3, 6);
    sort2(p, 1, 4);
    sort2(p, 2, 5);
    sort2(p, 4, 7);
    sort2(p, 4, 2);
    sort2(p, 6, 4);
    sort2(p, 4, 2);
    p[4]
}

/// Comparator pairs of the 25-sample median network, applied in order.
const MED25_PAIRS: [(usize, usize); 99] = [
    (0, 1), (3, 4), (2, 4), (2, 3), (6, 7), (5, 7), (5, 6), (9, 10),
    (8, 10), (8, 9), (12, 13), (11, 13), (11, 12), (15, 16), (14, 16), (14, 15),
    (18, 19), (17, 19), (17, 18), (21, 22), (20, 22), (20, 21), (23, 24), (2, 5),
    (3, 6), (0, 6), (0, 3), (4, 7), (1, 7), (1, 4), (11, 14), (8, 14),
    (8, 11), (12, 15), (9, 15), (9, 12), (13, 16), (10, 16), (10, 13), (20, 23),
    (17, 23), (17, 20), (21, 24), (18, 24), (18, 21), (19, 22), (8, 17), (9, 18),
    (0, 18), (0, 9), (10, 19), (1, 19), (1, 10), (11, 20), (2, 20), (2, 11),
    (12, 21), (3, 21), (3, 12), (13, 22), (4, 22), (4, 13), (14, 23), (5, 23),
    (5, 14), (15, 24), (6, 24), (6, 15), (7, 16), (7, 19), (13, 21), (15, 23),
    (7, 13), (7, 15), (1, 9), (3, 11), (5, 17), (11, 17), (9, 17), (4, 10),
    (6, 12), (7, 14), (4, 6), (4, 7), (12, 14), (10, 14), (6, 7), (10, 12),
    (6, 10), (6, 17), (12, 17), (7, 17), (7, 10), (12, 18), (7, 12), (10, 18),
    (12, 20), (10, 20), (10, 12),
];

/// Median of 25 samples (a 5x5 window).
///
/// Only `p[12]` is guaranteed on return.
#[inline]
pub fn opt_med25(p: &mut [f32; 25]) -> f32 {
    for &(a, b) in &MED25_PAIRS {
        sort2(p, a, b);
    }
    p[12]
}

/// Median through a dedicated network when `sample.len()` is one of
/// [`FIXED_SIZES`], `None` otherwise.
#[inline]
pub fn median_fixed(sample: &mut [f32]) -> Option<f32> {
    let median = match sample.len() {
        3 => opt_med3(sample.try_into().ok()?),
        5 => opt_med5(sample.try_into().ok()?),
        7 => opt_med7(sample.try_into().ok()?),
        9 => opt_med9(sample.try_into().ok()?),
        25 => opt_med25(sample.try_into().ok()?),
        _ => return None,
    };
    Some(median)
}
