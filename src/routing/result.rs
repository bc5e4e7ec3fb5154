//! Search outcome record and derived step reporting

use std::time::Duration;

use crate::model::Graph;
use crate::{NodeId, Weight};

/// Sentinel cost reported when no route exists
pub const UNREACHABLE: Weight = -1.0;

/// Immutable record of a single search outcome
///
/// Holds node ids only, no graph data: a result is stale once the graph it
/// was computed against is mutated or reloaded.
#[derive(Debug, Clone)]
pub struct PathResult {
    path: Vec<NodeId>,
    cost: Weight,
    nodes_visited: usize,
    elapsed: Duration,
    algorithm: String,
}

/// One hop of a step-by-step path report
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub node: NodeId,
    /// Base weight of the edge to the next step, 0 at the destination
    pub hop_distance: Weight,
    pub cumulative_distance: Weight,
}

impl PathResult {
    pub(crate) fn new(
        path: Vec<NodeId>,
        cost: Weight,
        nodes_visited: usize,
        elapsed: Duration,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            path,
            cost,
            nodes_visited,
            elapsed,
            algorithm: algorithm.into(),
        }
    }

    /// Node ids from source to destination inclusive; empty if unreachable
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Total accumulated cost, [`UNREACHABLE`] when no route was found
    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of nodes dequeued during the search
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Derive per-hop and running-total distances against the graph the
    /// search ran on
    ///
    /// Hop distances use base edge weights. Computed on demand, never
    /// cached.
    pub fn path_steps(&self, graph: &Graph) -> Vec<PathStep> {
        let mut steps = Vec::with_capacity(self.path.len());
        let mut cumulative = 0.0;

        for (index, node) in self.path.iter().enumerate() {
            let hop_distance = self
                .path
                .get(index + 1)
                .and_then(|next| graph.neighbors(node).find(|edge| &edge.to == next))
                .map_or(0.0, |edge| edge.weight);

            steps.push(PathStep {
                node: node.clone(),
                hop_distance,
                cumulative_distance: cumulative,
            });
            cumulative += hop_distance;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::{NodeMetadata, RoadClass};

    fn line_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("a", "A", 0.0, 0.0, NodeMetadata::default());
        graph.add_node("b", "B", 1.0, 0.0, NodeMetadata::default());
        graph.add_node("c", "C", 2.0, 0.0, NodeMetadata::default());
        graph
            .add_edge("a", "b", 3.0, true, RoadClass::Highway)
            .unwrap();
        graph
            .add_edge("b", "c", 4.0, true, RoadClass::Highway)
            .unwrap();
        graph
    }

    #[test]
    fn steps_report_hop_and_running_totals() {
        let graph = line_graph();
        let result = PathResult::new(
            vec!["a".into(), "b".into(), "c".into()],
            7.0,
            3,
            Duration::ZERO,
            "Dijkstra",
        );

        let steps = result.path_steps(&graph);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].hop_distance, 3.0);
        assert_eq!(steps[0].cumulative_distance, 0.0);
        assert_eq!(steps[1].hop_distance, 4.0);
        assert_eq!(steps[1].cumulative_distance, 3.0);
        assert_eq!(steps[2].hop_distance, 0.0);
        assert_eq!(steps[2].cumulative_distance, 7.0);
    }

    #[test]
    fn empty_path_yields_no_steps() {
        let graph = line_graph();
        let result = PathResult::new(Vec::new(), UNREACHABLE, 3, Duration::ZERO, "BFS");
        assert!(!result.is_found());
        assert!(result.path_steps(&graph).is_empty());
    }
}
