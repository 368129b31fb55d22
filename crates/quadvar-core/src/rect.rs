//! Rect - Axis-aligned rectangular regions
//!
//! A `Rect` addresses a block of samples in a row-major buffer by its
//! top-left corner and its size. Coordinates are absolute buffer
//! coordinates (column, row), not relative to any image window.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A small `Copy` type; nodes, tiling checks and statistics pass it around
/// by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area in samples
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if this rectangle contains another one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rectangle overlaps with another
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Split the rectangle into four quadrants
    ///
    /// Returned in the order top-left, top-right, bottom-left, bottom-right.
    /// The far column and row of children take the larger half
    /// (`(w + 1) / 2`, `(h + 1) / 2`), so the four quadrants tile `self`
    /// exactly for odd sizes as well. A side of length 1 yields empty
    /// near quadrants; callers only split rectangles wider and taller
    /// than one sample.
    pub fn quarter(&self) -> [Rect; 4] {
        let far_w = (self.w + 1) / 2;
        let far_h = (self.h + 1) / 2;
        let near_w = self.w - far_w;
        let near_h = self.h - far_h;
        let mid_x = self.x + near_w;
        let mid_y = self.y + near_h;

        [
            Rect::new_unchecked(self.x, self.y, near_w, near_h),
            Rect::new_unchecked(mid_x, self.y, far_w, near_h),
            Rect::new_unchecked(self.x, mid_y, near_w, far_h),
            Rect::new_unchecked(mid_x, mid_y, far_w, far_h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(Rect::new(0, 0, 0, 4).is_err());
        assert!(Rect::new(0, 0, 4, 0).is_err());
        assert!(Rect::new(3, 5, 1, 1).is_ok());
    }

    #[test]
    fn test_edges_and_area() {
        let r = Rect::new_unchecked(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert_eq!(r.area(), 40);
        assert!(r.contains_rect(&Rect::new_unchecked(2, 3, 10, 1)));
        assert!(!r.contains_rect(&Rect::new_unchecked(3, 3, 10, 1)));
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new_unchecked(0, 0, 8, 8);
        let b = Rect::new_unchecked(8, 0, 8, 8);
        let c = Rect::new_unchecked(4, 4, 8, 8);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_quarter_even() {
        let q = Rect::new_unchecked(0, 0, 16, 16).quarter();
        assert_eq!(q[0], Rect::new_unchecked(0, 0, 8, 8));
        assert_eq!(q[1], Rect::new_unchecked(8, 0, 8, 8));
        assert_eq!(q[2], Rect::new_unchecked(0, 8, 8, 8));
        assert_eq!(q[3], Rect::new_unchecked(8, 8, 8, 8));
    }

    #[test]
    fn test_quarter_odd_tiles_exactly() {
        let parent = Rect::new_unchecked(3, 1, 5, 7);
        let q = parent.quarter();
        assert_eq!(q[0], Rect::new_unchecked(3, 1, 2, 3));
        assert_eq!(q[3], Rect::new_unchecked(5, 4, 3, 4));

        let total: u64 = q.iter().map(Rect::area).sum();
        assert_eq!(total, parent.area());
        for i in 0..4 {
            assert!(parent.contains_rect(&q[i]));
            for j in (i + 1)..4 {
                assert!(!q[i].overlaps(&q[j]), "{:?} overlaps {:?}", q[i], q[j]);
            }
        }
    }
}
