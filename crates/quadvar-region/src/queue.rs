//! Priority ordering of split candidates

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    variance: i32,
    seq: u64,
    id: NodeId,
}

impl Ord for Candidate {
    // Highest variance first; among equal variances the earliest queued wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.variance
            .cmp(&other.variance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-first queue of nodes still eligible for splitting
#[derive(Debug, Default)]
pub(crate) struct CandidateQueue {
    heap: BinaryHeap<Candidate>,
    next_seq: u64,
}

impl CandidateQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, id: NodeId, variance: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Candidate { variance, seq, id });
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|c| c.id)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remaining candidates in priority order
    pub(crate) fn into_ids(self) -> Vec<NodeId> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted.into_iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeList};
    use quadvar_core::Rect;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut list = NodeList::new();
        (0..n)
            .map(|i| list.insert(Node::new(Rect::new_unchecked(i as u32, 0, 1, 1), 0, None)))
            .collect()
    }

    #[test]
    fn test_pops_highest_variance_first() {
        let id = ids(4);
        let mut q = CandidateQueue::new();
        q.push(id[0], 5);
        q.push(id[1], 50);
        q.push(id[2], 0);
        q.push(id[3], 17);
        assert_eq!(q.len(), 4);
        assert_eq!(q.pop(), Some(id[1]));
        assert_eq!(q.pop(), Some(id[3]));
        assert_eq!(q.pop(), Some(id[0]));
        assert_eq!(q.pop(), Some(id[2]));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_ties_follow_queue_order() {
        let id = ids(3);
        let mut q = CandidateQueue::new();
        q.push(id[2], 9);
        q.push(id[0], 9);
        q.push(id[1], 9);
        assert_eq!(q.into_ids(), vec![id[2], id[0], id[1]]);
    }
}
