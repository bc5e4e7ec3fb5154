//! Unweighted breadth-first search

use std::collections::VecDeque;
use std::time::Instant;

use hashbrown::{HashMap, HashSet};

use crate::model::Graph;
use crate::routing::result::{PathResult, UNREACHABLE};
use crate::routing::{PathSearch, reconstruct_path};
use crate::{NodeId, Weight};

/// Breadth-first search: fewest hops, not minimum distance
///
/// Traversal ignores weights entirely; blocked edges are skipped via their
/// flag. The reported cost is the sum of *base* weights along the hop-
/// minimal path, so it is a real distance but not necessarily the shortest
/// one.
pub struct BreadthFirst<'g> {
    graph: &'g Graph,
    visited: Vec<NodeId>,
}

impl<'g> BreadthFirst<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: Vec::new(),
        }
    }
}

impl PathSearch for BreadthFirst<'_> {
    fn find_path(&mut self, source: &str, destination: &str) -> PathResult {
        let started = Instant::now();
        self.visited.clear();

        if !self.graph.contains_node(source) || !self.graph.contains_node(destination) {
            return PathResult::new(Vec::new(), UNREACHABLE, 0, started.elapsed(), "BFS");
        }

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        let mut distances: HashMap<NodeId, Weight> = HashMap::new();

        queue.push_back(source.to_string());
        seen.insert(source.to_string());
        distances.insert(source.to_string(), 0.0);

        while let Some(current) = queue.pop_front() {
            self.visited.push(current.clone());

            if current == destination {
                break;
            }

            let Some(&current_distance) = distances.get(&current) else {
                continue;
            };

            for edge in self.graph.neighbors(&current) {
                // Nodes are marked at enqueue time to avoid duplicates
                if edge.blocked || seen.contains(&edge.to) {
                    continue;
                }
                seen.insert(edge.to.clone());
                previous.insert(edge.to.clone(), current.clone());
                distances.insert(edge.to.clone(), current_distance + edge.weight);
                queue.push_back(edge.to.clone());
            }
        }

        let path = reconstruct_path(&previous, source, destination);
        let cost = if path.is_empty() {
            UNREACHABLE
        } else {
            distances.get(destination).copied().unwrap_or(UNREACHABLE)
        };

        PathResult::new(path, cost, self.visited.len(), started.elapsed(), "BFS")
    }

    fn visited_nodes(&self) -> &[NodeId] {
        &self.visited
    }
}
