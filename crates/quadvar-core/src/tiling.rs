//! Tiling checks for rectangle sets
//!
//! A set of rectangles tiles `bounds` when every rectangle lies inside
//! `bounds`, no two rectangles share a sample, and together they cover all
//! of `bounds`. Given the first two conditions the third reduces to an
//! area comparison.

use crate::rect::Rect;

/// First violation found by [`find_tiling_defect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingDefect {
    /// A rectangle extends outside the bounds
    OutOfBounds(Rect),
    /// Two rectangles share at least one sample
    Overlap(Rect, Rect),
    /// The rectangles cover less than the bounds
    Gap { covered: u64, expected: u64 },
}

/// Check whether `rects` tile `bounds` exactly
///
/// Returns `None` for an exact tiling, otherwise the first defect found.
/// Overlaps are found with a sweep over the rectangles sorted by left edge.
pub fn find_tiling_defect(rects: &[Rect], bounds: Rect) -> Option<TilingDefect> {
    if let Some(r) = rects.iter().find(|r| !bounds.contains_rect(r)) {
        return Some(TilingDefect::OutOfBounds(*r));
    }

    let mut sorted = rects.to_vec();
    sorted.sort_by_key(|r| (r.x, r.y));
    for (i, a) in sorted.iter().enumerate() {
        for b in sorted[i + 1..].iter().take_while(|b| b.x < a.right()) {
            if a.overlaps(b) {
                return Some(TilingDefect::Overlap(*a, *b));
            }
        }
    }

    let covered: u64 = rects.iter().map(Rect::area).sum();
    let expected = bounds.area();
    if covered != expected {
        return Some(TilingDefect::Gap { covered, expected });
    }
    None
}
