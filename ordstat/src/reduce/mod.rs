//! Parallel median reductions over images and image stacks.
//!
//! Every output cell is one independent unit of work: a row, a column, or a
//! stack pixel. Units are grouped into chunks by [`common::par_units_mut`] and
//! each rayon task reserves its own scratch buffer once, reusing it for all
//! units of its chunks. Scratch buffers are never shared between tasks since
//! selection reorders them in place.
//!
//! A task that cannot reserve its scratch buffer fails the whole reduction;
//! the output buffer contents are unspecified in that case.

use std::collections::TryReserveError;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::{NanPolicy, ReduceConfig};
use crate::error::{Error, Result};
use crate::median::median1d;
use crate::view::{ImageView, PixelMask, StackView, check_output};


/// Axis of a 2D image to take the median along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along x: one output per row.
    X,
    /// Along y: one output per column.
    Y,
}

/// Runs median reductions with a fixed configuration.
///
/// Owns a dedicated thread pool when [`ReduceConfig::threads`] is set,
/// otherwise work runs on rayon's global pool.
#[derive(Debug)]
pub struct Reducer {
    config: ReduceConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self {
            config: ReduceConfig::default(),
            pool: None,
        }
    }
}

impl Reducer {
    pub fn new(config: ReduceConfig) -> Result<Self> {
        let pool = match config.threads {
            Some(0) => {
                tracing::warn!("threads = 0 requested, using the global rayon pool");
                None
            }
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("ordstat-{i}"))
                    .build()?;
                tracing::info!("Built reduction thread pool with {} workers", threads);
                Some(pool)
            }
            None => None,
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Median of the unmasked pixels of each row.
    ///
    /// `data` is `nx * ny` pixels with `(x, y)` at `x + nx * y`. `mask` is either
    /// per pixel or a single row (see [`PixelMask::new`]). `output[y]` receives
    /// the median of row `y`, or `0.0` when every pixel of the row is excluded.
    pub fn row_median(
        &self,
        data: &[f32],
        mask: Option<&[u8]>,
        nx: usize,
        ny: usize,
        output: &mut [f32],
    ) -> Result<()> {
        let image = ImageView::new(data, nx, ny)?;
        let mask = PixelMask::new(mask, nx, ny)?;
        check_output(ny, output)?;

        let start = Instant::now();
        self.install(|| self.reduce_rows(image, mask, output))?;
        tracing::debug!(
            "Row median: {}x{} pixels, nan_policy={:?}, {:.3} ms",
            nx,
            ny,
            self.config.nan_policy,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    /// Median of the unmasked pixels of each column; `output[x]` per column.
    pub fn column_median(
        &self,
        data: &[f32],
        mask: Option<&[u8]>,
        nx: usize,
        ny: usize,
        output: &mut [f32],
    ) -> Result<()> {
        let image = ImageView::new(data, nx, ny)?;
        let mask = PixelMask::new(mask, nx, ny)?;
        check_output(nx, output)?;

        let start = Instant::now();
        self.install(|| self.reduce_columns(image, mask, output))?;
        tracing::debug!(
            "Column median: {}x{} pixels, nan_policy={:?}, {:.3} ms",
            nx,
            ny,
            self.config.nan_policy,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    /// Median along `axis`: [`Axis::X`] is [`Self::row_median`], [`Axis::Y`] is
    /// [`Self::column_median`].
    pub fn median_along(
        &self,
        data: &[f32],
        mask: Option<&[u8]>,
        nx: usize,
        ny: usize,
        axis: Axis,
        output: &mut [f32],
    ) -> Result<()> {
        match axis {
            Axis::X => self.row_median(data, mask, nx, ny, output),
            Axis::Y => self.column_median(data, mask, nx, ny, output),
        }
    }

    /// Per-pixel median across a stack of `nimages` frames.
    ///
    /// Frame `i` of pixel `(x, y)` is `data[i + nimages * x + nimages * nx * y]`;
    /// `output[x + nx * y]` receives the median over all frames. A stack with no
    /// frames yields `0.0` everywhere.
    pub fn stack_median_combine(
        &self,
        data: &[f32],
        nx: usize,
        ny: usize,
        nimages: usize,
        output: &mut [f32],
    ) -> Result<()> {
        let stack = StackView::new(data, nx, ny, nimages)?;
        check_output(nx.saturating_mul(ny), output)?;

        let start = Instant::now();
        self.install(|| self.reduce_stack(stack, output))?;
        tracing::debug!(
            "Stack median combine: {} frames of {}x{}, nan_policy={:?}, {:.3} ms",
            nimages,
            nx,
            ny,
            self.config.nan_policy,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    fn reduce_rows(&self, image: ImageView, mask: PixelMask, output: &mut [f32]) -> Result<()> {
        let nx = image.width();
        let policy = self.config.nan_policy;

        common::par_units_mut(output, 1, self.config.chunks_per_thread).try_for_each_init(
            || reserve_scratch(nx),
            |scratch, (first_row, out)| {
                let scratch = scratch_or_err(scratch, nx)?;
                for (i, cell) in out.iter_mut().enumerate() {
                    let y = first_row + i;
                    let row = image.row(y);
                    *cell = match mask.row(y) {
                        Some(mask_row) => unit_median(
                            row.iter().zip(mask_row).map(|(&v, &m)| (v, m != 0)),
                            policy,
                            scratch,
                        ),
                        None => unit_median(row.iter().map(|&v| (v, false)), policy, scratch),
                    };
                }
                Ok(())
            },
        )
    }

    fn reduce_columns(&self, image: ImageView, mask: PixelMask, output: &mut [f32]) -> Result<()> {
        let ny = image.height();
        let policy = self.config.nan_policy;

        common::par_units_mut(output, 1, self.config.chunks_per_thread).try_for_each_init(
            || reserve_scratch(ny),
            |scratch, (first_col, out)| {
                let scratch = scratch_or_err(scratch, ny)?;
                for (i, cell) in out.iter_mut().enumerate() {
                    let x = first_col + i;
                    let column = (0..ny).map(|y| (image.get(x, y), mask.is_masked(x, y)));
                    *cell = unit_median(column, policy, scratch);
                }
                Ok(())
            },
        )
    }

    fn reduce_stack(&self, stack: StackView, output: &mut [f32]) -> Result<()> {
        let nx = stack.width();
        let depth = stack.depth();
        let policy = self.config.nan_policy;

        // Chunks are whole image rows so pixel coordinates follow from the row index.
        common::par_units_mut(output, nx, self.config.chunks_per_thread).try_for_each_init(
            || reserve_scratch(depth),
            |scratch, (first_row, out)| {
                let scratch = scratch_or_err(scratch, depth)?;
                for (local_y, out_row) in out.chunks_exact_mut(nx).enumerate() {
                    let y = first_row + local_y;
                    for (x, cell) in out_row.iter_mut().enumerate() {
                        let values = stack.pixel(x, y).iter().map(|&v| (v, false));
                        *cell = unit_median(values, policy, scratch);
                    }
                }
                Ok(())
            },
        )
    }
}

/// Reserve a private scratch buffer able to hold `len` samples without
/// reallocating.
pub(crate) fn reserve_scratch(len: usize) -> std::result::Result<Vec<f32>, TryReserveError> {
    let mut scratch = Vec::new();
    scratch.try_reserve_exact(len)?;
    Ok(scratch)
}

fn scratch_or_err(
    scratch: &mut std::result::Result<Vec<f32>, TryReserveError>,
    len: usize,
) -> Result<&mut Vec<f32>> {
    scratch
        .as_mut()
        .map_err(|source| Error::ScratchAllocation {
            len,
            source: source.clone(),
        })
}

/// Gather one unit's usable values into `scratch` and return their median.
///
/// `values` yields `(value, masked)` pairs. Masked values are skipped, NaN is
/// handled per `policy`. `scratch` must have capacity for every value.
#[inline]
fn unit_median(
    values: impl Iterator<Item = (f32, bool)>,
    policy: NanPolicy,
    scratch: &mut Vec<f32>,
) -> f32 {
    scratch.clear();
    for (value, masked) in values {
        if masked {
            continue;
        }
        if value.is_nan() {
            match policy {
                NanPolicy::Exclude => continue,
                NanPolicy::Propagate => return f32::NAN,
            }
        }
        scratch.push(value);
    }
    median1d(scratch)
}

/// [`Reducer::row_median`] on the global pool with the default configuration.
pub fn row_median(
    data: &[f32],
    mask: Option<&[u8]>,
    nx: usize,
    ny: usize,
    output: &mut [f32],
) -> Result<()> {
    Reducer::default().row_median(data, mask, nx, ny, output)
}

/// [`Reducer::column_median`] on the global pool with the default configuration.
pub fn column_median(
    data: &[f32],
    mask: Option<&[u8]>,
    nx: usize,
    ny: usize,
    output: &mut [f32],
) -> Result<()> {
    Reducer::default().column_median(data, mask, nx, ny, output)
}

/// [`Reducer::stack_median_combine`] on the global pool with the default
/// configuration.
pub fn stack_median_combine(
    data: &[f32],
    nx: usize,
    ny: usize,
    nimages: usize,
    output: &mut [f32],
) -> Result<()> {
    Reducer::default().stack_median_combine(data, nx, ny, nimages, output)
}
