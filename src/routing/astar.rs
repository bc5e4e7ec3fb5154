//! Heuristic-guided search (A*)

use std::str::FromStr;
use std::time::Instant;

use hashbrown::{HashMap, HashSet, hash_map::Entry};

use crate::model::{Graph, Node};
use crate::routing::queue::MinPriorityQueue;
use crate::routing::result::{PathResult, UNREACHABLE};
use crate::routing::{PathSearch, reconstruct_path};
use crate::{Error, NodeId, Weight};

/// Distance estimate between a node and the destination
///
/// All three are symmetric over node planar coordinates. Only `Euclidean`
/// is admissible for euclidean-plane edge costs; `Manhattan` and
/// `Chebyshev` can overestimate and may therefore yield non-shortest
/// paths. They only ever change exploration order and count, never whether
/// a path is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl Heuristic {
    pub fn estimate(self, node: &Node, goal: &Node) -> f64 {
        match self {
            Self::Euclidean => node.euclidean_distance(goal),
            Self::Manhattan => node.manhattan_distance(goal),
            Self::Chebyshev => node.chebyshev_distance(goal),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Error> {
        match tag {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            other => Err(Error::UnknownHeuristic(other.to_string())),
        }
    }
}

/// A* search ordered by cost-so-far plus heuristic estimate
///
/// Shares the relaxation loop of [`super::Dijkstra`] but keeps a closed
/// set: entries popped for an already-finalized node are discarded, which
/// tolerates the queue's duplicate-entry strategy.
pub struct AStar<'g> {
    graph: &'g Graph,
    heuristic: Heuristic,
    visited: Vec<NodeId>,
}

impl<'g> AStar<'g> {
    pub fn new(graph: &'g Graph, heuristic: Heuristic) -> Self {
        Self {
            graph,
            heuristic,
            visited: Vec::new(),
        }
    }

    fn estimate(&self, node: &str, goal: &Node) -> f64 {
        self.graph
            .node(node)
            .map_or(0.0, |n| self.heuristic.estimate(n, goal))
    }
}

impl PathSearch for AStar<'_> {
    fn find_path(&mut self, source: &str, destination: &str) -> PathResult {
        let started = Instant::now();
        self.visited.clear();
        let name = format!("A* ({})", self.heuristic.label());

        let (Some(_), Some(goal)) = (self.graph.node(source), self.graph.node(destination))
        else {
            return PathResult::new(Vec::new(), UNREACHABLE, 0, started.elapsed(), name);
        };

        // g-scores; absent entries stand for infinity
        let mut g_score: HashMap<NodeId, Weight> = HashMap::new();
        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        let mut closed: HashSet<NodeId> = HashSet::new();
        let mut open = MinPriorityQueue::new();

        g_score.insert(source.to_string(), 0.0);
        open.enqueue(source.to_string(), self.estimate(source, goal));

        while let Some(current) = open.dequeue() {
            // Already finalized via a cheaper entry
            if !closed.insert(current.clone()) {
                continue;
            }
            self.visited.push(current.clone());

            if current == destination {
                break;
            }

            let Some(&current_g) = g_score.get(&current) else {
                continue;
            };

            for edge in self.graph.neighbors(&current) {
                let weight = edge.effective_weight();
                if !weight.is_finite() || closed.contains(&edge.to) {
                    continue;
                }

                let tentative_g = current_g + weight;
                let improved = match g_score.entry(edge.to.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(tentative_g);
                        true
                    }
                    Entry::Occupied(mut entry) => {
                        if tentative_g < *entry.get() {
                            *entry.get_mut() = tentative_g;
                            true
                        } else {
                            false
                        }
                    }
                };

                if improved {
                    previous.insert(edge.to.clone(), current.clone());
                    let f = tentative_g + self.estimate(&edge.to, goal);
                    open.enqueue(edge.to.clone(), f);
                }
            }
        }

        let path = reconstruct_path(&previous, source, destination);
        let cost = g_score.get(destination).copied().unwrap_or(UNREACHABLE);

        PathResult::new(path, cost, self.visited.len(), started.elapsed(), name)
    }

    fn visited_nodes(&self) -> &[NodeId] {
        &self.visited
    }
}
