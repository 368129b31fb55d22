//! Rectangle statistics
//!
//! Integer variance scoring over a rectangle of a [`PixelBuffer`]. The score
//! is meant for ranking regions against each other and against a threshold,
//! so it keeps the integer semantics of the accumulation:
//!
//! ```text
//! spread(c)  = sum(x^2) - sum(x)^2 / n          (integer division)
//! luma score = spread / n
//! rgb score  = (spread(r) + spread(g) + spread(b)) / (3 * n)
//! ```

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::color;
use crate::error::Result;
use crate::rect::Rect;

/// Running first and second moments of one channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelMoments {
    sum: u64,
    sum_sq: u128,
    count: u64,
}

impl ChannelMoments {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample
    #[inline]
    pub fn push(&mut self, value: u32) {
        let v = value as u64;
        self.sum += v;
        self.sum_sq += (v * v) as u128;
        self.count += 1;
    }

    /// Number of samples accumulated
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the samples
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Unnormalized spread `sum(x^2) - sum(x)^2 / n`
    ///
    /// Returns 0 for an empty accumulator.
    pub fn spread(&self) -> u128 {
        if self.count == 0 {
            return 0;
        }
        let sum = self.sum as u128;
        self.sum_sq - (sum * sum) / self.count as u128
    }

    /// Population variance with integer division, `spread / n`
    pub fn variance(&self) -> u128 {
        if self.count == 0 {
            return 0;
        }
        self.spread() / self.count as u128
    }
}

/// Compute the variance score of `rect` in `buffer`
///
/// In [`PixelFormat::Rgb`] mode each sample is unpacked into red, green and
/// blue and the score is the channel spreads averaged and divided by the
/// pixel count. In [`PixelFormat::Luma`] mode the sample itself is the
/// intensity. Scores above `i32::MAX` saturate.
///
/// # Errors
///
/// Returns an error if `rect` is not fully addressable in `buffer`.
pub fn region_variance(buffer: &PixelBuffer<'_>, rect: Rect, format: PixelFormat) -> Result<i32> {
    buffer.check_covers(&rect)?;
    if rect.is_empty() {
        return Ok(0);
    }

    let score = match format {
        PixelFormat::Rgb => {
            let mut r = ChannelMoments::new();
            let mut g = ChannelMoments::new();
            let mut b = ChannelMoments::new();
            for row in buffer.rows(rect) {
                for &pixel in row {
                    let (pr, pg, pb) = color::extract_rgb(pixel);
                    r.push(pr as u32);
                    g.push(pg as u32);
                    b.push(pb as u32);
                }
            }
            (r.spread() + g.spread() + b.spread()) / (3 * r.count() as u128)
        }
        PixelFormat::Luma => {
            let mut y = ChannelMoments::new();
            for row in buffer.rows(rect) {
                for &sample in row {
                    y.push(sample);
                }
            }
            y.variance()
        }
    };

    Ok(narrow(score))
}

fn narrow(score: u128) -> i32 {
    i32::try_from(score).unwrap_or(i32::MAX)
}
