//! Quad-tree nodes and the node collection
//!
//! A [`Node`] is one rectangle of the decomposition together with its
//! variance score. Nodes live in the arena of a [`NodeList`] and refer to
//! the node they were split from by [`NodeId`], so lineage can be walked
//! upwards without any node owning another.
//!
//! The terminal set of a `NodeList` (the nodes returned by [`NodeList::iter`])
//! holds the nodes that have not been split. After a decomposition it tiles
//! the decomposed rectangle exactly.

use std::fmt;
use std::hash::{Hash, Hasher};

use quadvar_core::Rect;

/// Index of a node in the arena of a [`NodeList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One rectangular region of the decomposition
///
/// Geometry and variance are fixed when the node is created. Two nodes are
/// equal when their rectangles are equal; the variance and the parent link
/// do not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    rect: Rect,
    variance: i32,
    parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(rect: Rect, variance: i32, parent: Option<NodeId>) -> Self {
        Self {
            rect,
            variance,
            parent,
        }
    }

    /// The node's rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Left x coordinate
    #[inline]
    pub fn x(&self) -> u32 {
        self.rect.x
    }

    /// Top y coordinate
    #[inline]
    pub fn y(&self) -> u32 {
        self.rect.y
    }

    /// Width
    #[inline]
    pub fn w(&self) -> u32 {
        self.rect.w
    }

    /// Height
    #[inline]
    pub fn h(&self) -> u32 {
        self.rect.h
    }

    /// Area in samples
    #[inline]
    pub fn area(&self) -> u64 {
        self.rect.area()
    }

    /// Variance score computed when the node was created
    #[inline]
    pub fn variance(&self) -> i32 {
        self.variance
    }

    /// The node this one was split from, `None` for root quadrants
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Check whether this node is a root quadrant
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.rect == other.rect
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rect.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, w={}, h={}, variance={}]",
            self.rect.x, self.rect.y, self.rect.w, self.rect.h, self.variance
        )
    }
}

/// Node collection passed into and returned from a decomposition
///
/// The list owns every node created for it, including nodes that were
/// later split, so parent links stay valid for the lifetime of the list.
/// Only unsplit nodes are part of the terminal set.
#[derive(Debug, Clone, Default)]
pub struct NodeList {
    arena: Vec<Node>,
    leaves: Vec<NodeId>,
}

impl NodeList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of terminal nodes
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Check if the list has no terminal nodes
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Number of nodes ever created in this list, split ones included
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Iterate over the terminal nodes
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.leaves.iter().map(move |id| &self.arena[id.0])
    }

    /// Ids of the terminal nodes
    pub fn ids(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Get any node of this list by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id.0)
    }

    /// Get the node `node` was split from
    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent.and_then(|id| self.get(id))
    }

    /// Walk from `id`'s parent up to its root quadrant
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            list: self,
            next: self.get(id).and_then(Node::parent),
        }
    }

    /// Number of splits between `id` and its root quadrant
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Rectangles of the terminal nodes
    pub fn rects(&self) -> Vec<Rect> {
        self.iter().map(Node::rect).collect()
    }

    /// Total area covered by the terminal nodes
    pub fn total_area(&self) -> u64 {
        self.iter().map(Node::area).sum()
    }

    /// Remove every node
    pub fn clear(&mut self) {
        self.arena.clear();
        self.leaves.clear();
    }

    pub(crate) fn node(&self, id: NodeId) -> Node {
        self.arena[id.0]
    }

    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.arena.len());
        self.arena.push(node);
        id
    }

    pub(crate) fn set_leaves(&mut self, leaves: Vec<NodeId>) {
        self.leaves = leaves;
    }
}

/// Iterator over the ancestors of a node, nearest first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    list: &'a NodeList,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
