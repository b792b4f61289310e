//! Read-only views over flat pixel buffers.
//!
//! Images are row-major with pixel `(x, y)` at `x + width * y`. Stacks keep the
//! image index fastest, so the values of every frame at one pixel are
//! contiguous: frame `i` of pixel `(x, y)` sits at `i + depth * (x + width * y)`.

use crate::error::{Error, Result};

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    pixels: &'a [f32],
    width: usize,
    height: usize,
}

impl<'a> ImageView<'a> {
    pub fn new(pixels: &'a [f32], width: usize, height: usize) -> Result<Self> {
        check_len("image data", width.saturating_mul(height), pixels.len())?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [f32] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}

/// A stack of co-registered frames.
#[derive(Debug, Clone, Copy)]
pub struct StackView<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
    depth: usize,
}

impl<'a> StackView<'a> {
    pub fn new(data: &'a [f32], width: usize, height: usize, depth: usize) -> Result<Self> {
        let expected = depth.saturating_mul(width).saturating_mul(height);
        check_len("stack data", expected, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            depth,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// All frame values at pixel `(x, y)`, in frame order.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &'a [f32] {
        debug_assert!(x < self.width && y < self.height);
        let start = self.depth * (x + self.width * y);
        &self.data[start..start + self.depth]
    }
}

/// Validity mask for an image: 0 means usable, anything else excludes the pixel.
#[derive(Debug, Clone, Copy)]
pub struct PixelMask<'a> {
    layout: MaskLayout<'a>,
    width: usize,
}

#[derive(Debug, Clone, Copy)]
enum MaskLayout<'a> {
    Unmasked,
    /// One byte per column, shared by every row.
    Row(&'a [u8]),
    /// One byte per pixel, same layout as the image.
    Pixel(&'a [u8]),
}

impl<'a> PixelMask<'a> {
    /// Mask for a `width` x `height` image.
    ///
    /// Accepts `width * height` bytes (per pixel) or `width` bytes (one row
    /// applied to every row). `None` leaves every pixel usable.
    pub fn new(mask: Option<&'a [u8]>, width: usize, height: usize) -> Result<Self> {
        let layout = match mask {
            None => MaskLayout::Unmasked,
            Some(values) if values.len() == width.saturating_mul(height) => {
                MaskLayout::Pixel(values)
            }
            Some(values) if values.len() == width => MaskLayout::Row(values),
            Some(values) => {
                return Err(Error::DimensionMismatch {
                    what: "mask",
                    expected: width.saturating_mul(height),
                    actual: values.len(),
                });
            }
        };
        Ok(Self { layout, width })
    }

    /// Mask bytes of row `y`, or `None` when nothing is masked.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        match self.layout {
            MaskLayout::Unmasked => None,
            MaskLayout::Row(values) => Some(values),
            MaskLayout::Pixel(values) => {
                let start = y * self.width;
                Some(&values[start..start + self.width])
            }
        }
    }

    #[inline]
    pub fn is_masked(&self, x: usize, y: usize) -> bool {
        self.row(y).is_some_and(|row| row[x] != 0)
    }
}

/// Validate a caller-provided output buffer length.
pub(crate) fn check_output(expected: usize, output: &[f32]) -> Result<()> {
    check_len("output", expected, output.len())
}
