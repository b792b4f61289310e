//! Ordstat - order statistics and median reductions for f32 images.
//!
//! The core is an in-place selector (median-of-3 Hoare quickselect) and
//! fixed-size median networks. On top of them sit parallel reductions:
//! - Row and column medians of a 2D image with an optional pixel mask
//! - Per-pixel median across an interleaved image stack
//! - Masked robust statistics (MAD, robust sigma, sigma-clipped mean)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ordstat::{ReduceConfig, Reducer};
//!
//! let reducer = Reducer::new(ReduceConfig::default())?;
//! let mut row_medians = vec![0.0; ny];
//! reducer.row_median(&pixels, Some(&mask), nx, ny, &mut row_medians)?;
//! ```

mod config;
mod error;
mod median;
mod networks;
mod reduce;
mod select;
mod statistics;
mod view;

#[cfg(test)]
mod testing;

// ============================================================================
// Selection and medians
// ============================================================================

pub use median::median1d;
pub use networks::{
    FIXED_SIZES, median_fixed, opt_med3, opt_med5, opt_med7, opt_med9, opt_med25,
};
pub use select::{select, try_select};

// ============================================================================
// Reductions
// ============================================================================

pub use config::{NanPolicy, ReduceConfig};
pub use reduce::{Axis, Reducer, column_median, row_median, stack_median_combine};
pub use view::{ImageView, PixelMask, StackView};

// ============================================================================
// Robust statistics
// ============================================================================

pub use statistics::{
    MAD_TO_SIGMA, absolute_deviation, masked_median, median_absolute_deviation,
    robust_standard_deviation, sigma_clipped_mean,
};

// ============================================================================
// Errors
// ============================================================================

pub use error::{Error, Result};
