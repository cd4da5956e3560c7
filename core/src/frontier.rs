//! Open/closed bookkeeping for a single search run.
//!
//! Status is a per-node tag for O(1) membership checks. The open set is a
//! binary heap keyed by `(f, seq)`, where `seq` is the order in which the node
//! first entered the open set. Among equal `f`, the node discovered earliest
//! wins, which is the same answer a linear "first strictly smaller" scan over
//! an insertion-ordered open list gives.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;

/// Search status of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Unseen,
    /// Discovered, not yet expanded. `seq` is its open-insertion order.
    Open { seq: u64 },
    /// Expanded and final. Never re-opened.
    Closed,
}

/// Heap entry. A node may have several entries after re-prioritization;
/// only the first one popped while the node is open counts.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed on both keys: BinaryHeap is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Open/closed sets for one run.
pub(crate) struct Frontier {
    status: Vec<NodeStatus>,
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    open_count: usize,
}

impl Frontier {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            status: vec![NodeStatus::Unseen; node_count],
            heap: BinaryHeap::new(),
            next_seq: 0,
            open_count: 0,
        }
    }

    pub(crate) fn status(&self, node: NodeId) -> NodeStatus {
        self.status[node as usize]
    }

    pub(crate) fn is_closed(&self, node: NodeId) -> bool {
        self.status[node as usize] == NodeStatus::Closed
    }

    /// Number of nodes currently open (not heap entries).
    pub(crate) fn open_len(&self) -> usize {
        self.open_count
    }

    /// Unseen → open with priority `f`. No-op for nodes already seen.
    pub(crate) fn discover(&mut self, node: NodeId, f: f64) {
        if self.status[node as usize] != NodeStatus::Unseen {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.status[node as usize] = NodeStatus::Open { seq };
        self.open_count += 1;
        self.heap.push(FrontierEntry { f, seq, node });
    }

    /// Lower the priority of an open node, keeping its original sequence number.
    pub(crate) fn reprioritize(&mut self, node: NodeId, f: f64) {
        if let NodeStatus::Open { seq } = self.status[node as usize] {
            self.heap.push(FrontierEntry { f, seq, node });
        }
    }

    /// Remove the open node with least `(f, seq)` and close it.
    ///
    /// Since `g` only ever decreases, a node's newest entry is also its
    /// smallest, so the first entry popped for an open node is current.
    /// Entries for nodes that are already closed are discarded.
    pub(crate) fn pop_min(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            if let NodeStatus::Open { .. } = self.status[entry.node as usize] {
                self.status[entry.node as usize] = NodeStatus::Closed;
                self.open_count -= 1;
                return Some(entry.node);
            }
        }
        None
    }
}
