//! quadvar - Variance-driven quad-tree decomposition for Rust
//!
//! Splits a window of a row-major pixel buffer into rectangles: flat
//! regions end up in a few large nodes, detailed regions in many small
//! ones. Intended as a preprocessing stage for image and video coders or
//! region-of-interest analysis.
//!
//! # Example
//!
//! ```
//! use quadvar::region::{NodeList, QuadTreeDecomposer};
//!
//! let buffer = vec![0xff80_8080u32; 64 * 64];
//! let decomposer = QuadTreeDecomposer::new(64, 64).unwrap();
//!
//! let mut nodes = NodeList::new();
//! decomposer.decompose_by_variance(&mut nodes, &buffer, 0).unwrap();
//! assert_eq!(nodes.len(), 4);
//! ```

// Re-export core types (geometry, buffer view, statistics)
pub use quadvar_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadvar_region as region;
