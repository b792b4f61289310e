//! Robust statistics over masked samples: median, MAD, sigma-clipped mean.
//!
//! All functions leave `data` untouched and work on a private copy. Entries
//! with a nonzero mask byte and NaN entries are left out of every statistic.

use crate::error::{Error, Result};
use crate::median::median1d;
use crate::reduce::reserve_scratch;


/// MAD (Median Absolute Deviation) to standard deviation conversion factor
/// for normally distributed data.
pub const MAD_TO_SIGMA: f32 = 1.4826;

fn check_mask(data: &[f32], mask: Option<&[u8]>) -> Result<()> {
    match mask {
        Some(mask) if mask.len() != data.len() => Err(Error::DimensionMismatch {
            what: "mask",
            expected: data.len(),
            actual: mask.len(),
        }),
        _ => Ok(()),
    }
}

#[inline]
fn is_usable(value: f32, mask: Option<&[u8]>, i: usize) -> bool {
    !value.is_nan() && mask.is_none_or(|m| m[i] == 0)
}

/// Copy of the usable entries of `data`, transformed by `f`.
fn usable_values(data: &[f32], mask: Option<&[u8]>, f: impl Fn(f32) -> f32) -> Result<Vec<f32>> {
    check_mask(data, mask)?;
    let mut values = reserve_scratch(data.len()).map_err(|source| Error::ScratchAllocation {
        len: data.len(),
        source,
    })?;
    values.extend(
        data.iter()
            .enumerate()
            .filter(|&(i, &v)| is_usable(v, mask, i))
            .map(|(_, &v)| f(v)),
    );
    Ok(values)
}

/// Median of the usable entries; `0.0` when none are usable.
pub fn masked_median(data: &[f32], mask: Option<&[u8]>) -> Result<f32> {
    let mut values = usable_values(data, mask, |v| v)?;
    Ok(median1d(&mut values))
}

/// `|x - median|` for every entry of `data`, masked ones included, with the
/// median taken over the usable entries.
pub fn absolute_deviation(data: &[f32], mask: Option<&[u8]>) -> Result<Vec<f32>> {
    let median = masked_median(data, mask)?;
    Ok(data.iter().map(|&v| (v - median).abs()).collect())
}

/// Median of the absolute deviations of the usable entries.
pub fn median_absolute_deviation(data: &[f32], mask: Option<&[u8]>) -> Result<f32> {
    let median = masked_median(data, mask)?;
    let mut deviations = usable_values(data, mask, |v| (v - median).abs())?;
    Ok(median1d(&mut deviations))
}

/// `MAD_TO_SIGMA × MAD`, a standard deviation estimate insensitive to outliers.
pub fn robust_standard_deviation(data: &[f32], mask: Option<&[u8]>) -> Result<f32> {
    Ok(MAD_TO_SIGMA * median_absolute_deviation(data, mask)?)
}

/// Mean of the usable entries within `sigma` robust standard deviations of
/// their median.
///
/// Single pass, no iteration: the median and robust sigma are computed once
/// over all usable entries, outliers are rejected, and the survivors averaged.
/// Returns `fill_value` when nothing survives.
pub fn sigma_clipped_mean(
    data: &[f32],
    mask: Option<&[u8]>,
    sigma: f32,
    fill_value: f32,
) -> Result<f32> {
    let median = masked_median(data, mask)?;
    let mut deviations = usable_values(data, mask, |v| (v - median).abs())?;
    let threshold = sigma * MAD_TO_SIGMA * median1d(&mut deviations);

    let (sum, count) = data
        .iter()
        .enumerate()
        .filter(|&(i, &v)| is_usable(v, mask, i) && (v - median).abs() <= threshold)
        .fold((0.0f64, 0usize), |(sum, count), (_, &v)| {
            (sum + v as f64, count + 1)
        });

    if count == 0 {
        tracing::debug!(
            "Sigma clipping rejected all {} samples, using fill value {}",
            data.len(),
            fill_value
        );
        return Ok(fill_value);
    }
    Ok((sum / count as f64) as f32)
}
