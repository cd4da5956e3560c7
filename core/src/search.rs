use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::frontier::{Frontier, NodeStatus};
use crate::graph::{Graph, NodeId};

/// Outcome of a search. An unreachable goal is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchResult {
    /// Goal expanded; total cost of the recorded path.
    Found(f64),
    /// Open set emptied without expanding the goal.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
}

/// Per-run working set, indexed by `NodeId`.
pub(crate) struct SearchState {
    pub(crate) frontier: Frontier,
    /// Best known cost from the start. `INFINITY` until discovered.
    pub(crate) g: Vec<f64>,
    /// Node and edge weight that produced the current `g`. `None` for the
    /// start node and for unseen nodes.
    pub(crate) predecessor: Vec<Option<(NodeId, f64)>>,
    /// Nodes in the order they were closed.
    pub(crate) expanded: Vec<NodeId>,
}

impl SearchState {
    fn new(node_count: usize) -> Self {
        Self {
            frontier: Frontier::new(node_count),
            g: vec![f64::INFINITY; node_count],
            predecessor: vec![None; node_count],
            expanded: Vec::new(),
        }
    }
}

/// A finished search: its result plus the state needed to rebuild the path.
///
/// Borrows the graph, so the topology cannot change while the run is alive.
/// Each run owns its state; later searches on the same graph leave it intact.
pub struct SearchRun<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) start: NodeId,
    pub(crate) goal: NodeId,
    pub(crate) result: SearchResult,
    pub(crate) state: SearchState,
}

impl<'g> SearchRun<'g> {
    pub fn result(&self) -> SearchResult {
        self.result
    }

    /// Total path cost, or `None` if the goal was not reached.
    pub fn cost(&self) -> Option<f64> {
        match self.result {
            SearchResult::Found(cost) => Some(cost),
            SearchResult::NotFound => None,
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn nodes_expanded(&self) -> usize {
        self.state.expanded.len()
    }

    /// Labels of expanded nodes, in expansion order.
    pub fn expansion_order(&self) -> Vec<&'g str> {
        let graph = self.graph;
        self.state
            .expanded
            .iter()
            .filter_map(|&id| graph.node_by_id(id).map(|n| n.label.as_str()))
            .collect()
    }

    /// Final open/closed status of a node, or `None` for unknown labels.
    pub fn status(&self, label: &str) -> Option<NodeStatus> {
        self.graph
            .resolve(label)
            .map(|id| self.state.frontier.status(id))
    }

    /// Best known cost from start to `label` at the end of the run.
    /// `None` for unknown labels and for nodes never discovered.
    pub fn g_score(&self, label: &str) -> Option<f64> {
        let id = self.graph.resolve(label)?;
        let g = self.state.g[id as usize];
        match self.state.frontier.status(id) {
            NodeStatus::Unseen => None,
            _ => Some(g),
        }
    }
}

/// A* from `start` to `goal`, both given by label.
///
/// Fails only if a label is unknown; an unreachable goal yields a run whose
/// result is `NotFound`.
pub fn search<'g>(graph: &'g Graph, start: &str, goal: &str) -> GraphResult<SearchRun<'g>> {
    let start_id = graph
        .resolve(start)
        .ok_or_else(|| GraphError::UnknownLabel(start.to_string()))?;
    let goal_id = graph
        .resolve(goal)
        .ok_or_else(|| GraphError::UnknownLabel(goal.to_string()))?;
    search_ids(graph, start_id, goal_id)
}

/// A* from `start` to `goal` by node id.
///
/// Closed nodes are final: an edge into a closed node is never relaxed, even
/// if it offers a cheaper `g`. With an inconsistent heuristic the returned
/// cost may therefore exceed the true shortest distance.
pub fn search_ids(graph: &Graph, start: NodeId, goal: NodeId) -> GraphResult<SearchRun<'_>> {
    for id in [start, goal] {
        if graph.node_by_id(id).is_none() {
            return Err(GraphError::UnknownNodeId(id));
        }
    }

    let mut state = SearchState::new(graph.node_count());
    let heuristic = |id: NodeId| graph.node_by_id(id).map(|n| n.heuristic).unwrap_or(0.0);

    state.g[start as usize] = 0.0;
    state.frontier.discover(start, heuristic(start));

    debug!(start, goal, nodes = graph.node_count(), "astar: search started");

    let mut result = SearchResult::NotFound;

    while let Some(current) = state.frontier.pop_min() {
        state.expanded.push(current);
        let current_g = state.g[current as usize];
        trace!(node = current, g = current_g, "astar: expand");

        if current == goal {
            result = SearchResult::Found(current_g);
            break;
        }

        for edge in graph.neighbors_out(current) {
            let neighbor = edge.target;
            if state.frontier.is_closed(neighbor) {
                continue;
            }

            let tentative = current_g + edge.weight;
            let idx = neighbor as usize;
            match state.frontier.status(neighbor) {
                NodeStatus::Unseen => {
                    state.g[idx] = tentative;
                    state.predecessor[idx] = Some((current, edge.weight));
                    state.frontier.discover(neighbor, tentative + heuristic(neighbor));
                    trace!(node = neighbor, g = tentative, "astar: discover");
                }
                NodeStatus::Open { .. } if tentative < state.g[idx] => {
                    state.g[idx] = tentative;
                    state.predecessor[idx] = Some((current, edge.weight));
                    state.frontier.reprioritize(neighbor, tentative + heuristic(neighbor));
                    trace!(node = neighbor, g = tentative, "astar: relax");
                }
                _ => {}
            }
        }
    }

    debug!(
        expanded = state.expanded.len(),
        open_remaining = state.frontier.open_len(),
        found = result.is_found(),
        "astar: search finished"
    );

    Ok(SearchRun {
        graph,
        start,
        goal,
        result,
        state,
    })
}
