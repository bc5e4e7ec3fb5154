//! Depth-first search with an explicit stack

use std::time::Instant;

use hashbrown::{HashMap, HashSet};

use crate::model::Graph;
use crate::routing::result::{PathResult, UNREACHABLE};
use crate::routing::{PathSearch, reconstruct_path};
use crate::{NodeId, Weight};

/// Depth-first search: first found wins along adjacency order
///
/// Guarantees neither shortest distance nor fewest hops. Uses an explicit
/// stack of (node, neighbor cursor) frames instead of call-stack recursion
/// so large graphs cannot overflow, while preserving recursive descent
/// order and backtracking on dead ends. Blocked edges are skipped via
/// their flag and cost accumulates base weights, as in breadth-first.
pub struct DepthFirst<'g> {
    graph: &'g Graph,
    visited: Vec<NodeId>,
}

impl<'g> DepthFirst<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: Vec::new(),
        }
    }
}

impl PathSearch for DepthFirst<'_> {
    fn find_path(&mut self, source: &str, destination: &str) -> PathResult {
        let started = Instant::now();
        self.visited.clear();

        if !self.graph.contains_node(source) || !self.graph.contains_node(destination) {
            return PathResult::new(Vec::new(), UNREACHABLE, 0, started.elapsed(), "DFS");
        }

        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        // Frames: node, index of the next neighbor to try, cost so far
        let mut stack: Vec<(NodeId, usize, Weight)> = Vec::new();

        seen.insert(source.to_string());
        self.visited.push(source.to_string());

        let mut found = source == destination;
        let mut total: Weight = 0.0;
        if !found {
            stack.push((source.to_string(), 0, 0.0));
        }

        while let Some((current, cursor, cost)) = stack.pop() {
            let next = self
                .graph
                .neighbors(&current)
                .enumerate()
                .skip(cursor)
                .find(|(_, edge)| !edge.blocked && !seen.contains(edge.to.as_str()));

            // Dead end: backtrack by dropping the frame
            let Some((index, edge)) = next else { continue };

            let next_cost = cost + edge.weight;
            let neighbor = edge.to.clone();

            seen.insert(neighbor.clone());
            previous.insert(neighbor.clone(), current.clone());
            self.visited.push(neighbor.clone());

            if neighbor == destination {
                found = true;
                total = next_cost;
                break;
            }

            // Resume after this neighbor once the descent unwinds
            stack.push((current, index + 1, cost));
            stack.push((neighbor, 0, next_cost));
        }

        let path = if found {
            reconstruct_path(&previous, source, destination)
        } else {
            Vec::new()
        };
        let cost = if found { total } else { UNREACHABLE };

        PathResult::new(path, cost, self.visited.len(), started.elapsed(), "DFS")
    }

    fn visited_nodes(&self) -> &[NodeId] {
        &self.visited
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::model::{NodeMetadata, RoadClass};

    fn square() -> Graph {
        let mut graph = Graph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_node(id, id, 0.0, 0.0, NodeMetadata::default());
        }
        graph
            .add_edge("a", "b", 1.0, true, RoadClass::Highway)
            .unwrap();
        graph
            .add_edge("b", "c", 1.0, true, RoadClass::Highway)
            .unwrap();
        graph
            .add_edge("c", "d", 1.0, true, RoadClass::Highway)
            .unwrap();
        graph
            .add_edge("d", "a", 1.0, true, RoadClass::Highway)
            .unwrap();
        graph
    }

    #[test]
    fn follows_adjacency_order() {
        let graph = square();
        let mut search = DepthFirst::new(&graph);
        let result = search.find_path("a", "d");
        // First neighbor of a is b, so the long way around wins
        assert_eq!(result.path(), ["a", "b", "c", "d"]);
        assert_eq!(result.cost(), 3.0);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut graph = Graph::new();
        for id in ["a", "b", "spur", "c"] {
            graph.add_node(id, id, 0.0, 0.0, NodeMetadata::default());
        }
        graph
            .add_edge("a", "b", 1.0, true, RoadClass::Highway)
            .unwrap();
        // Dead end sits before c in b's adjacency, forcing a backtrack
        graph
            .add_edge("b", "spur", 1.0, true, RoadClass::Highway)
            .unwrap();
        graph
            .add_edge("b", "c", 1.0, true, RoadClass::Highway)
            .unwrap();

        let mut search = DepthFirst::new(&graph);
        let result = search.find_path("a", "c");
        assert_eq!(result.path(), ["a", "b", "c"]);
        assert_eq!(result.cost(), 2.0);
        // The spur was entered and abandoned
        assert!(search.visited_nodes().contains(&"spur".to_string()));
    }

    #[test]
    fn path_edges_exist_in_adjacency() {
        let graph = square();
        let mut search = DepthFirst::new(&graph);
        let result = search.find_path("a", "c");
        assert!(result.is_found());
        for (from, to) in result.path().iter().tuple_windows() {
            assert!(graph.neighbors(from).any(|edge| &edge.to == to));
        }
    }

    #[test]
    fn blocked_ring_is_unreachable() {
        let mut graph = square();
        for edge in graph.edges_mut() {
            edge.blocked = true;
        }
        let mut search = DepthFirst::new(&graph);
        let result = search.find_path("a", "c");
        assert!(result.path().is_empty());
        assert_eq!(result.cost(), UNREACHABLE);
    }

    #[test]
    fn source_equals_destination() {
        let graph = square();
        let mut search = DepthFirst::new(&graph);
        let result = search.find_path("a", "a");
        assert_eq!(result.path(), ["a"]);
        assert_eq!(result.cost(), 0.0);
        assert_eq!(result.nodes_visited(), 1);
    }
}
