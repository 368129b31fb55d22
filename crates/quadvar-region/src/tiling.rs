//! Tiling verification for decomposition results

use quadvar_core::{Rect, TilingDefect, find_tiling_defect};

use crate::error::{RegionError, RegionResult};
use crate::node::NodeList;

/// Check that the terminal nodes of `nodes` tile `bounds` exactly
///
/// # Errors
///
/// Returns the first violation found: [`RegionError::NodeOutOfBounds`],
/// [`RegionError::NodeOverlap`] or [`RegionError::CoverageGap`].
pub fn verify_tiling(nodes: &NodeList, bounds: Rect) -> RegionResult<()> {
    match find_tiling_defect(&nodes.rects(), bounds) {
        None => Ok(()),
        Some(TilingDefect::OutOfBounds(rect)) => Err(RegionError::NodeOutOfBounds(rect)),
        Some(TilingDefect::Overlap(first, second)) => {
            Err(RegionError::NodeOverlap { first, second })
        }
        Some(TilingDefect::Gap { covered, expected }) => {
            Err(RegionError::CoverageGap { covered, expected })
        }
    }
}
