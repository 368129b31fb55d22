//! PixelBuffer - Read-only view over a strided sample array
//!
//! Samples are 32-bit values laid out row-major with `stride` samples per
//! row. A sample is either a packed `0xAARRGGBB` pixel or a single luma
//! value, depending on the [`PixelFormat`] the caller scores it with.

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Interpretation of the samples in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// Packed `0xAARRGGBB` pixels; alpha is ignored
    #[default]
    Rgb,
    /// One intensity value per sample
    Luma,
}

/// Borrowed, read-only view over a row-major sample buffer
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u32],
    stride: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap a sample slice with the given row pitch
    ///
    /// # Errors
    ///
    /// Returns an error if `stride` is zero.
    pub fn new(data: &'a [u32], stride: u32) -> Result<Self> {
        if stride == 0 {
            return Err(Error::InvalidParameter(
                "stride must be at least 1".to_string(),
            ));
        }
        Ok(Self { data, stride })
    }

    /// Row pitch in samples
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of samples in the underlying slice
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the underlying slice is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of samples needed to address every sample of `rect`
    pub fn required_len(&self, rect: &Rect) -> usize {
        if rect.is_empty() {
            return 0;
        }
        (rect.bottom() as usize - 1) * self.stride as usize + rect.right() as usize
    }

    /// Check that `rect` lies within a row and inside the slice
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rectangle runs past the end
    /// of a row, or [`Error::BufferTooSmall`] if the slice is too short.
    pub fn check_covers(&self, rect: &Rect) -> Result<()> {
        if rect.right() > self.stride {
            return Err(Error::InvalidParameter(format!(
                "rectangle right edge {} exceeds stride {}",
                rect.right(),
                self.stride
            )));
        }
        let required = self.required_len(rect);
        if required > self.data.len() {
            return Err(Error::BufferTooSmall {
                required,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Get the `w` samples of row `y` starting at column `x`
    ///
    /// The span must have been validated with [`check_covers`](Self::check_covers).
    #[inline]
    pub(crate) fn row_span(&self, y: u32, x: u32, w: u32) -> &'a [u32] {
        let start = y as usize * self.stride as usize + x as usize;
        &self.data[start..start + w as usize]
    }

    /// Iterate over the rows of `rect`, each yielded as a sample slice
    pub(crate) fn rows(&self, rect: Rect) -> impl Iterator<Item = &'a [u32]> + 'a {
        let view = *self;
        (rect.y..rect.bottom()).map(move |y| view.row_span(y, rect.x, rect.w))
    }
}
