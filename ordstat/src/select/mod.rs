//! k-th order statistic by in-place partition selection.
//!
//! Iterative Hoare partitioning with a median-of-three pivot, narrowed to the
//! side that contains `k` after every pass. Expected O(n), worst case O(n²) on
//! adversarial input. The pivot choice is deterministic.

use crate::error::{Error, Result};


/// Return the value that would sit at index `k` if `buffer` were sorted ascending.
///
/// `buffer` is left partitioned around that value: every element before `k` is
/// `<=` it and every element after `k` is `>=` it. Nothing more about the order
/// is guaranteed.
///
/// NaN compares false against everything, so buffers containing NaN give an
/// unspecified result. Indexing stays in bounds regardless.
///
/// # Panics
///
/// Panics if `k >= buffer.len()`. Use [`try_select`] when `k` comes from
/// outside the crate.
pub fn select(buffer: &mut [f32], k: usize) -> f32 {
    let len = buffer.len();
    assert!(k < len, "select index {k} out of range for length {len}");

    let mut low = 0;
    let mut high = len - 1;

    loop {
        // One or two elements left.
        if high <= low + 1 {
            if high == low + 1 && buffer[low] > buffer[high] {
                buffer.swap(low, high);
            }
            return buffer[k];
        }

        // Median of low, middle and high ends up at `low`, the smallest of the
        // three at `middle` and the largest at `high`.
        let middle = low + (high - low) / 2;
        if buffer[middle] > buffer[high] {
            buffer.swap(middle, high);
        }
        if buffer[low] > buffer[high] {
            buffer.swap(low, high);
        }
        if buffer[middle] > buffer[low] {
            buffer.swap(middle, low);
        }

        // buffer[low + 1] <= pivot <= buffer[high] bounds both scans below.
        buffer.swap(middle, low + 1);

        let pivot = buffer[low];
        let mut ll = low + 1;
        let mut hh = high;
        loop {
            ll += 1;
            while pivot > buffer[ll] {
                ll += 1;
            }
            hh -= 1;
            while buffer[hh] > pivot {
                hh -= 1;
            }
            if hh < ll {
                break;
            }
            buffer.swap(ll, hh);
        }

        buffer.swap(low, hh);

        if hh <= k {
            low = ll;
        }
        if hh >= k {
            high = hh - 1;
        }
    }
}

/// Checked variant of [`select`] for indices that have not been validated.
pub fn try_select(buffer: &mut [f32], k: usize) -> Result<f32> {
    if buffer.is_empty() {
        return Err(Error::EmptySample);
    }
    if k >= buffer.len() {
        return Err(Error::IndexOutOfRange {
            k,
            len: buffer.len(),
        });
    }
    Ok(select(buffer, k))
}
