use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeIndex;

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Queue entry pairing a tentative cost with the node it was pushed for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeElement {
    pub cost: f64,
    pub node: NodeIndex,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    cost: FloatOrd,
    sequence: u64,
    node: NodeIndex,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with the
        // earliest push winning ties.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of nodes keyed by tentative cost.
///
/// The same node may be pushed several times; callers discard stale entries
/// when they pop them. Entries with equal cost pop in insertion order.
#[derive(Debug, Default)]
pub struct NodeQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl NodeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cost: f64, node: NodeIndex) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            cost: FloatOrd(cost),
            sequence,
            node,
        });
    }

    /// Remove and return the entry with the lowest cost.
    pub fn pop(&mut self) -> Option<NodeElement> {
        self.heap.pop().map(|entry| NodeElement {
            cost: entry.cost.0,
            node: entry.node,
        })
    }

    /// Drop every entry and restart the insertion sequence.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
