//! Error types for quadvar-core
//!
//! Provides a unified error type for the geometry, buffer and statistics
//! helpers. Each variant captures enough context for diagnostics.

use thiserror::Error;

/// quadvar-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid rectangle or image dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sample buffer shorter than the layout requires
    #[error("buffer too small: {required} samples required, {actual} available")]
    BufferTooSmall { required: usize, actual: usize },
}

/// Result type alias for quadvar-core operations
pub type Result<T> = std::result::Result<T, Error>;
