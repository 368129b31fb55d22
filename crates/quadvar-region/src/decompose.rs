//! Variance-driven quad-tree decomposition
//!
//! [`QuadTreeDecomposer`] splits an image window into rectangles so that
//! detailed regions end up covered by many small nodes and flat regions by
//! a few large ones. Starting from the four quadrants of the window, the
//! candidate with the highest variance is repeatedly replaced by its four
//! quadrants until the stopping rule holds:
//!
//! - [`decompose_by_count`](QuadTreeDecomposer::decompose_by_count) stops
//!   once finalized plus pending nodes reach a node budget.
//! - [`decompose_by_variance`](QuadTreeDecomposer::decompose_by_variance)
//!   stops splitting nodes whose variance is at or below a threshold.
//!
//! Nodes whose width or height is at or below the minimum node dimension
//! are never split.
//!
//! # Example
//!
//! ```
//! use quadvar_region::{DecomposerOptions, NodeList, QuadTreeDecomposer};
//! use quadvar_core::PixelFormat;
//!
//! let (w, h) = (32u32, 32u32);
//! let buffer: Vec<u32> = (0..w * h).map(|i| if i % w < 16 { 0 } else { i % 251 }).collect();
//!
//! let options = DecomposerOptions::new().with_format(PixelFormat::Luma);
//! let decomposer = QuadTreeDecomposer::with_options(w, h, &options).unwrap();
//!
//! let mut nodes = NodeList::new();
//! let stats = decomposer.decompose_by_variance(&mut nodes, &buffer, 0).unwrap();
//! assert!(stats.seeded);
//! assert_eq!(nodes.total_area(), (w * h) as u64);
//! ```

use quadvar_core::{PixelBuffer, PixelFormat, Rect, region_variance};
use tracing::{debug, trace};

use crate::error::{RegionError, RegionResult};
use crate::node::{Node, NodeId, NodeList};
use crate::queue::CandidateQueue;
use crate::tiling::verify_tiling;

/// Smallest accepted window width and height
pub const MIN_WINDOW_DIM: u32 = 8;

/// Default minimum node dimension
pub const DEFAULT_MIN_NODE_DIM: u32 = 8;

/// Smallest accepted node budget for count-limited decomposition
pub const MIN_TARGET_COUNT: usize = 4;

/// Options for quad-tree decomposition
#[derive(Debug, Clone)]
pub struct DecomposerOptions {
    /// Linear index of the window's top-left sample in the buffer
    pub offset: usize,
    /// Row pitch in samples; `None` means the window width
    pub stride: Option<u32>,
    /// Nodes with width or height at or below this are never split
    pub min_node_dim: u32,
    /// How samples are scored
    pub format: PixelFormat,
}

impl Default for DecomposerOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            stride: None,
            min_node_dim: DEFAULT_MIN_NODE_DIM,
            format: PixelFormat::Rgb,
        }
    }
}

impl DecomposerOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start index of the window
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the row pitch
    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Set the minimum node dimension
    pub fn with_min_node_dim(mut self, min_node_dim: u32) -> Self {
        self.min_node_dim = min_node_dim;
        self
    }

    /// Set the sample format
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
}

/// Summary of one decomposition call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecompositionStats {
    /// Nodes split during the call
    pub splits: usize,
    /// Terminal nodes in the list after the call
    pub leaves: usize,
    /// Whether the four root quadrants were created by the call
    pub seeded: bool,
}

#[derive(Debug, Clone, Copy)]
enum StopRule {
    NodeCount(usize),
    Variance(i32),
}

impl StopRule {
    fn budget_reached(self, nodes: usize) -> bool {
        match self {
            StopRule::NodeCount(target) => nodes >= target,
            StopRule::Variance(_) => false,
        }
    }

    fn accepts(self, variance: i32) -> bool {
        match self {
            StopRule::NodeCount(_) => false,
            StopRule::Variance(threshold) => variance <= threshold,
        }
    }
}

/// Quad-tree decomposer for a fixed image window
#[derive(Debug, Clone)]
pub struct QuadTreeDecomposer {
    width: u32,
    height: u32,
    offset: usize,
    stride: u32,
    origin: (u32, u32),
    min_node_dim: u32,
    format: PixelFormat,
}

impl QuadTreeDecomposer {
    /// Create a decomposer for a `width` x `height` buffer with default options
    ///
    /// # Errors
    ///
    /// See [`with_options`](Self::with_options).
    pub fn new(width: u32, height: u32) -> RegionResult<Self> {
        Self::with_options(width, height, &DecomposerOptions::default())
    }

    /// Create a decomposer for a `width` x `height` window
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if width or height is below
    /// 8 or odd, if the minimum node dimension is 0, if the stride is smaller
    /// than the width, or if the window starting at `offset` runs past the
    /// end of a row.
    pub fn with_options(
        width: u32,
        height: u32,
        options: &DecomposerOptions,
    ) -> RegionResult<Self> {
        if height < MIN_WINDOW_DIM {
            return Err(RegionError::InvalidParameters(format!(
                "height must be at least {MIN_WINDOW_DIM}, got {height}"
            )));
        }
        if width < MIN_WINDOW_DIM {
            return Err(RegionError::InvalidParameters(format!(
                "width must be at least {MIN_WINDOW_DIM}, got {width}"
            )));
        }
        if height % 2 != 0 {
            return Err(RegionError::InvalidParameters(format!(
                "height must be a multiple of 2, got {height}"
            )));
        }
        if width % 2 != 0 {
            return Err(RegionError::InvalidParameters(format!(
                "width must be a multiple of 2, got {width}"
            )));
        }
        if options.min_node_dim == 0 {
            return Err(RegionError::InvalidParameters(
                "minimum node dimension must be at least 1".to_string(),
            ));
        }

        let stride = options.stride.unwrap_or(width);
        if stride < width {
            return Err(RegionError::InvalidParameters(format!(
                "stride {stride} is smaller than width {width}"
            )));
        }

        let x0 = (options.offset % stride as usize) as u32;
        let y0 = u32::try_from(options.offset / stride as usize).map_err(|_| {
            RegionError::InvalidParameters(format!("offset {} is too large", options.offset))
        })?;
        if x0 as u64 + width as u64 > stride as u64 {
            return Err(RegionError::InvalidParameters(format!(
                "window at column {x0} with width {width} exceeds stride {stride}"
            )));
        }
        if y0.checked_add(height).is_none() {
            return Err(RegionError::InvalidParameters(format!(
                "window at row {y0} with height {height} overflows"
            )));
        }

        Ok(Self {
            width,
            height,
            offset: options.offset,
            stride,
            origin: (x0, y0),
            min_node_dim: options.min_node_dim,
            format: options.format,
        })
    }

    /// Window width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Window height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Linear start index of the window
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Row pitch in samples
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Minimum node dimension
    pub fn min_node_dim(&self) -> u32 {
        self.min_node_dim
    }

    /// Sample format
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The decomposed window in buffer coordinates
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(self.origin.0, self.origin.1, self.width, self.height)
    }

    /// Decompose until the node count reaches `target_count`
    ///
    /// Nodes already in `nodes` are reused: nodes at or below the minimum
    /// dimension stay final, the others are candidates again. A non-empty
    /// `nodes` must tile the window exactly. When `nodes` is empty the four
    /// root quadrants of the window are created first.
    ///
    /// The loop checks the budget before each split and a split adds three
    /// nodes, so the result holds between `target_count` and
    /// `target_count + 2` nodes unless every candidate became final first.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `target_count` is below
    /// 4, a core error if `buffer` does not hold the whole window, or a
    /// tiling error if a reused `nodes` does not cover the window exactly.
    pub fn decompose_by_count(
        &self,
        nodes: &mut NodeList,
        buffer: &[u32],
        target_count: usize,
    ) -> RegionResult<DecompositionStats> {
        if target_count < MIN_TARGET_COUNT {
            return Err(RegionError::InvalidParameters(format!(
                "target node count must be at least {MIN_TARGET_COUNT}, got {target_count}"
            )));
        }
        self.decompose(nodes, buffer, StopRule::NodeCount(target_count))
    }

    /// Decompose until no node above the minimum dimension has a variance
    /// greater than `target_variance`
    ///
    /// Reuses the contents of `nodes` the same way as
    /// [`decompose_by_count`](Self::decompose_by_count).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `target_variance` is
    /// negative, a core error if `buffer` does not hold the whole window, or a
    /// tiling error if a reused `nodes` does not cover the window exactly.
    pub fn decompose_by_variance(
        &self,
        nodes: &mut NodeList,
        buffer: &[u32],
        target_variance: i32,
    ) -> RegionResult<DecompositionStats> {
        if target_variance < 0 {
            return Err(RegionError::InvalidParameters(format!(
                "target variance must be at least 0, got {target_variance}"
            )));
        }
        self.decompose(nodes, buffer, StopRule::Variance(target_variance))
    }

    fn decompose(
        &self,
        nodes: &mut NodeList,
        buffer: &[u32],
        rule: StopRule,
    ) -> RegionResult<DecompositionStats> {
        let bounds = self.bounds();
        let view = PixelBuffer::new(buffer, self.stride)?;
        view.check_covers(&bounds)?;

        if !nodes.is_empty() {
            verify_tiling(nodes, bounds)?;
        }

        let mut finalized: Vec<NodeId> = Vec::new();
        let mut active = CandidateQueue::new();
        for &id in nodes.ids() {
            let node = nodes.node(id);
            if self.is_final_size(&node) {
                finalized.push(id);
            } else {
                active.push(id, node.variance());
            }
        }

        let seeded = nodes.is_empty();
        if seeded {
            for rect in bounds.quarter() {
                let variance = region_variance(&view, rect, self.format)?;
                let id = nodes.insert(Node::new(rect, variance, None));
                active.push(id, variance);
            }
        }

        debug!(
            ?rule,
            seeded,
            finalized = finalized.len(),
            active = active.len(),
            "starting quad-tree decomposition"
        );

        let mut splits = 0;
        while !active.is_empty() && !rule.budget_reached(finalized.len() + active.len()) {
            let Some(id) = active.pop() else {
                break;
            };
            let parent = nodes.node(id);

            if self.is_final_size(&parent) || rule.accepts(parent.variance()) {
                finalized.push(id);
                continue;
            }

            trace!(node = %parent, "splitting node");
            for rect in parent.rect().quarter() {
                let variance = region_variance(&view, rect, self.format)?;
                let child = nodes.insert(Node::new(rect, variance, Some(id)));
                active.push(child, variance);
            }
            splits += 1;
        }

        finalized.extend(active.into_ids());
        let leaves = finalized.len();
        nodes.set_leaves(finalized);

        debug!(splits, leaves, "finished quad-tree decomposition");

        Ok(DecompositionStats {
            splits,
            leaves,
            seeded,
        })
    }

    fn is_final_size(&self, node: &Node) -> bool {
        node.w() <= self.min_node_dim || node.h() <= self.min_node_dim
    }
}
