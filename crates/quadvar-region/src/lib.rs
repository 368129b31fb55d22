//! quadvar-region - Variance-driven quad-tree decomposition
//!
//! This crate splits a window of a row-major sample buffer into rectangles,
//! spending small nodes on detailed regions and large nodes on flat ones:
//!
//! - **Decomposition** - [`QuadTreeDecomposer`] with a node-count or a
//!   variance stopping rule
//! - **Nodes** - [`Node`] and the [`NodeList`] arena that keeps parent links
//! - **Verification** - [`verify_tiling`] checks that a result covers its
//!   window exactly once
//!
//! # Examples
//!
//! ## Decomposing to a node budget
//!
//! ```
//! use quadvar_region::{NodeList, QuadTreeDecomposer, verify_tiling};
//! use quadvar_core::color::compose_rgb;
//!
//! let (w, h) = (64u32, 64u32);
//! let buffer: Vec<u32> = (0..w * h)
//!     .map(|i| compose_rgb((i % w) as u8 * 4, (i / w) as u8 * 4, 0))
//!     .collect();
//!
//! let decomposer = QuadTreeDecomposer::new(w, h).unwrap();
//! let mut nodes = NodeList::new();
//! decomposer.decompose_by_count(&mut nodes, &buffer, 16).unwrap();
//!
//! assert!(nodes.len() >= 16);
//! verify_tiling(&nodes, decomposer.bounds()).unwrap();
//! ```

pub mod decompose;
pub mod error;
pub mod node;
mod queue;
pub mod tiling;

// Re-export core types
pub use quadvar_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export decomposition types and functions
pub use decompose::{
    DEFAULT_MIN_NODE_DIM, DecomposerOptions, DecompositionStats, MIN_TARGET_COUNT,
    MIN_WINDOW_DIM, QuadTreeDecomposer,
};

// Re-export node types
pub use node::{Ancestors, Node, NodeId, NodeList};

// Re-export tiling verification
pub use tiling::verify_tiling;
