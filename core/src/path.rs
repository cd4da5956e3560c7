use crate::error::{GraphError, GraphResult};
use crate::graph::NodeId;
use crate::search::{SearchResult, SearchRun};

/// A single step in a reconstructed path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub node_id: NodeId,
    pub label: String,
    /// Cost from the start to this node along the path.
    pub g: f64,
    /// Weight of the edge used to reach this node. None for the start node.
    pub weight: Option<f64>,
}

impl<'g> SearchRun<'g> {
    /// Rebuild the start→goal route by walking predecessor links back from
    /// the goal.
    ///
    /// Only the goal of a successful run has a recorded path. Anything else,
    /// including a predecessor chain that does not end at this run's start,
    /// is `NoRecordedPath`.
    pub fn reconstruct_path(&self, goal: &str) -> GraphResult<Vec<PathStep>> {
        let goal_id = self
            .graph
            .resolve(goal)
            .ok_or_else(|| GraphError::UnknownLabel(goal.to_string()))?;
        let no_path = || GraphError::NoRecordedPath {
            goal: goal.to_string(),
        };

        if self.result == SearchResult::NotFound || goal_id != self.goal {
            return Err(no_path());
        }

        let mut path = Vec::new();
        let mut current = goal_id;

        loop {
            // A chain longer than the node count has a cycle in it.
            if path.len() >= self.graph.node_count() {
                return Err(no_path());
            }
            let info = self.graph.node_by_id(current).ok_or_else(no_path)?;
            let via = self.state.predecessor[current as usize];

            path.push(PathStep {
                node_id: current,
                label: info.label.clone(),
                g: self.state.g[current as usize],
                weight: via.map(|(_, w)| w),
            });

            match via {
                Some((parent, _)) => current = parent,
                None => break,
            }
        }

        if current != self.start {
            return Err(no_path());
        }

        path.reverse();
        Ok(path)
    }
}
