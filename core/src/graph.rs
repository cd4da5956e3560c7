use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};

/// Dense node index into the graph's arena. Assigned in insertion order.
pub type NodeId = u32;

/// Metadata about a node. Immutable once the node is added.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    pub label: String,
    /// Estimated remaining cost to the goal. Not validated.
    pub heuristic: f64,
}

/// A directed, weighted edge owned by its source node's adjacency list.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// A single edge record for bulk loading by label.
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// In-memory graph: node arena + outgoing adjacency lists + label index.
///
/// Topology only. Search state (`g`, predecessor, open/closed status) lives in
/// a per-run arena so the graph can be shared by any number of searches.
///
/// Parallel edges between the same ordered pair are kept as-is; the search
/// relaxes each of them.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<NodeInfo>,
    outgoing: Vec<Vec<Edge>>,
    label_index: HashMap<String, NodeId>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            outgoing: Vec::new(),
            label_index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            outgoing: Vec::with_capacity(node_count),
            label_index: HashMap::with_capacity(node_count),
            edge_count: 0,
        }
    }

    /// Register a node. Fails with `DuplicateLabel` if the label is taken.
    pub fn add_node(&mut self, label: impl Into<String>, heuristic: f64) -> GraphResult<NodeId> {
        let label = label.into();
        if self.label_index.contains_key(&label) {
            return Err(GraphError::DuplicateLabel(label));
        }
        let id = self.nodes.len() as NodeId;
        self.label_index.insert(label.clone(), id);
        self.nodes.push(NodeInfo { label, heuristic });
        self.outgoing.push(Vec::new());
        Ok(id)
    }

    /// Add a directed edge between two labelled nodes.
    ///
    /// Fails with `UnknownLabel` naming the first endpoint that is missing.
    /// The weight is expected to be non-negative but is not checked.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> GraphResult<()> {
        let from_id = self
            .resolve(from)
            .ok_or_else(|| GraphError::UnknownLabel(from.to_string()))?;
        let to_id = self
            .resolve(to)
            .ok_or_else(|| GraphError::UnknownLabel(to.to_string()))?;
        self.push_edge(from_id, to_id, weight);
        Ok(())
    }

    /// Add a directed edge between two node ids (the fast path for generators).
    pub fn add_edge_between(&mut self, from: NodeId, to: NodeId, weight: f64) -> GraphResult<()> {
        if self.node_by_id(from).is_none() {
            return Err(GraphError::UnknownNodeId(from));
        }
        if self.node_by_id(to).is_none() {
            return Err(GraphError::UnknownNodeId(to));
        }
        self.push_edge(from, to, weight);
        Ok(())
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.outgoing[from as usize].push(Edge { target: to, weight });
        self.edge_count += 1;
    }

    /// Bulk load edges by label. Stops at the first invalid record; edges
    /// loaded before it are kept. Returns the number of edges added.
    pub fn load_edges<I>(&mut self, edges: I) -> GraphResult<usize>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut added = 0;
        for rec in edges {
            self.add_edge(&rec.from, &rec.to, rec.weight)?;
            added += 1;
        }
        Ok(added)
    }

    /// Look up a node id by label. Absence is a normal outcome.
    pub fn resolve(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(label).copied()
    }

    /// Get node metadata by label.
    pub fn node(&self, label: &str) -> Option<&NodeInfo> {
        self.resolve(label).and_then(|id| self.node_by_id(id))
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&NodeInfo> {
        self.nodes.get(id as usize)
    }

    /// Outgoing edges in declaration order. Empty for unknown ids.
    pub fn neighbors_out(&self, id: NodeId) -> &[Edge] {
        self.outgoing
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Labels in node insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let nodes_mem: usize = self
            .nodes
            .iter()
            .map(|n| size_of::<NodeInfo>() + n.label.capacity())
            .sum();
        let edges_mem: usize = self
            .outgoing
            .iter()
            .map(|v| size_of::<Vec<Edge>>() + v.capacity() * size_of::<Edge>())
            .sum();
        // HashMap entry: key String + NodeId + control bytes, roughly.
        let index_mem = self.label_index.len() * (size_of::<String>() + size_of::<NodeId>() + 8);

        nodes_mem + edges_mem + index_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_assigns_dense_ids() {
        let mut g = Graph::new();
        assert_eq!(g.add_node("A", 2.0).unwrap(), 0);
        assert_eq!(g.add_node("B", 1.0).unwrap(), 1);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.resolve("B"), Some(1));
        assert_eq!(g.node("A").unwrap().heuristic, 2.0);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        let err = g.add_node("A", 5.0).unwrap_err();
        assert_eq!(err, GraphError::DuplicateLabel("A".into()));
        // Original node untouched
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node("A").unwrap().heuristic, 0.0);
    }

    #[test]
    fn test_add_edge_unknown_source() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        let err = g.add_edge("X", "A", 1.0).unwrap_err();
        assert_eq!(err, GraphError::UnknownLabel("X".into()));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_unknown_target() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        let err = g.add_edge("A", "Z", 1.0).unwrap_err();
        assert_eq!(err, GraphError::UnknownLabel("Z".into()));
    }

    #[test]
    fn test_add_edge_between_unknown_id() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        assert_eq!(
            g.add_edge_between(0, 7, 1.0).unwrap_err(),
            GraphError::UnknownNodeId(7)
        );
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        g.add_node("B", 0.0).unwrap();
        g.add_edge("A", "B", 3.0).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        assert_eq!(g.edge_count(), 2);
        let weights: Vec<f64> = g.neighbors_out(0).iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![3.0, 1.0]);
    }

    #[test]
    fn test_edges_are_directed() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        g.add_node("B", 0.0).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        assert_eq!(g.neighbors_out(0).len(), 1);
        assert!(g.neighbors_out(1).is_empty());
    }

    #[test]
    fn test_neighbors_out_unknown_id_is_empty() {
        let g = Graph::new();
        assert!(g.neighbors_out(42).is_empty());
    }

    #[test]
    fn test_load_edges_stops_at_first_bad_record() {
        let mut g = Graph::new();
        for label in ["A", "B", "C"] {
            g.add_node(label, 0.0).unwrap();
        }
        let err = g
            .load_edges(vec![
                EdgeRecord::new("A", "B", 1.0),
                EdgeRecord::new("B", "Q", 1.0),
                EdgeRecord::new("B", "C", 1.0),
            ])
            .unwrap_err();
        assert_eq!(err, GraphError::UnknownLabel("Q".into()));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_load_edges_counts() {
        let mut g = Graph::new();
        g.add_node("A", 0.0).unwrap();
        g.add_node("B", 0.0).unwrap();
        let added = g
            .load_edges(vec![EdgeRecord::new("A", "B", 1.0), EdgeRecord::new("B", "A", 2.0)])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_labels_in_insertion_order() {
        let mut g = Graph::new();
        for label in ["C", "A", "B"] {
            g.add_node(label, 0.0).unwrap();
        }
        assert_eq!(g.labels().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_debug_shows_labels() {
        let mut g = Graph::new();
        g.add_node("Alpha", 1.0).unwrap();
        assert!(format!("{:?}", g).contains("Alpha"));
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let mut g = Graph::with_capacity(2);
        g.add_node("A", 0.0).unwrap();
        g.add_node("B", 0.0).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        assert!(g.memory_usage() > 0);
    }
}
