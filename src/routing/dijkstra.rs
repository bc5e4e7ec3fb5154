//! Uniform-cost search over effective edge weights

use std::time::Instant;

use hashbrown::{HashMap, HashSet, hash_map::Entry};

use crate::model::Graph;
use crate::routing::queue::MinPriorityQueue;
use crate::routing::result::{PathResult, UNREACHABLE};
use crate::routing::{PathSearch, reconstruct_path};
use crate::{NodeId, Weight};

/// Dijkstra's algorithm over the graph's effective edge weights
///
/// Blocked edges carry infinite effective weight and are never relaxed.
/// Terminates as soon as the destination is dequeued.
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    visited: Vec<NodeId>,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: Vec::new(),
        }
    }
}

impl PathSearch for Dijkstra<'_> {
    fn find_path(&mut self, source: &str, destination: &str) -> PathResult {
        let started = Instant::now();
        self.visited.clear();

        if !self.graph.contains_node(source) || !self.graph.contains_node(destination) {
            return PathResult::new(Vec::new(), UNREACHABLE, 0, started.elapsed(), "Dijkstra");
        }

        // Absent entries stand for an infinite cost-so-far
        let mut distances: HashMap<NodeId, Weight> = HashMap::new();
        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut queue = MinPriorityQueue::new();

        distances.insert(source.to_string(), 0.0);
        queue.enqueue(source.to_string(), 0.0);

        while let Some(current) = queue.dequeue() {
            // Stale duplicate left behind by re-insertion on improvement
            if !settled.insert(current.clone()) {
                continue;
            }
            self.visited.push(current.clone());

            if current == destination {
                break;
            }

            let Some(&current_cost) = distances.get(&current) else {
                continue;
            };

            for edge in self.graph.neighbors(&current) {
                let weight = edge.effective_weight();
                // Blocked edges are never relaxed
                if !weight.is_finite() {
                    continue;
                }

                let next_cost = current_cost + weight;
                match distances.entry(edge.to.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(next_cost);
                        previous.insert(edge.to.clone(), current.clone());
                        queue.enqueue(edge.to.clone(), next_cost);
                    }
                    Entry::Occupied(mut entry) => {
                        if next_cost < *entry.get() {
                            *entry.get_mut() = next_cost;
                            previous.insert(edge.to.clone(), current.clone());
                            queue.enqueue(edge.to.clone(), next_cost);
                        }
                    }
                }
            }
        }

        let path = reconstruct_path(&previous, source, destination);
        let cost = distances
            .get(destination)
            .copied()
            .unwrap_or(UNREACHABLE);

        PathResult::new(path, cost, self.visited.len(), started.elapsed(), "Dijkstra")
    }

    fn visited_nodes(&self) -> &[NodeId] {
        &self.visited
    }
}
