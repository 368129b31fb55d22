//! Error types for quadvar-region

use quadvar_core::Rect;
use thiserror::Error;

/// Errors that can occur during decomposition and tiling checks
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadvar_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Two terminal nodes cover the same samples
    #[error("nodes overlap: {first:?} and {second:?}")]
    NodeOverlap { first: Rect, second: Rect },

    /// A terminal node lies partly outside the decomposed rectangle
    #[error("node out of bounds: {0:?}")]
    NodeOutOfBounds(Rect),

    /// Terminal nodes leave part of the rectangle uncovered
    #[error("coverage gap: nodes cover {covered} of {expected} samples")]
    CoverageGap { covered: u64, expected: u64 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
