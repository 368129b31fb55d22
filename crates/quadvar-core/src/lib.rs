//! quadvar-core - Basic data structures for variance-driven decomposition
//!
//! This crate provides the building blocks shared by the quadvar crates:
//!
//! - [`Rect`] - Axis-aligned rectangle in buffer coordinates
//! - [`PixelBuffer`] / [`PixelFormat`] - Read-only strided sample view
//! - [`ChannelMoments`] / [`region_variance`] - Rectangle variance scoring
//! - [`find_tiling_defect`] - Exact-tiling check for rectangle sets
//! - [`color`] - Packed `0xAARRGGBB` pixel helpers

pub mod buffer;
pub mod error;
pub mod rect;
pub mod stats;
pub mod tiling;

pub use buffer::{PixelBuffer, PixelFormat};
pub use error::{Error, Result};
pub use rect::Rect;
pub use stats::{ChannelMoments, region_variance};
pub use tiling::{TilingDefect, find_tiling_defect};

/// Channel helpers for packed 32-bit pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose a 32-bit pixel with explicit alpha.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

}
