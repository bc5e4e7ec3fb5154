//! Adjacency-list network with mutable per-edge dynamic conditions

use hashbrown::HashMap;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Edge, Node, NodeMetadata, RoadClass};
use crate::{Error, NodeId, Result, Weight};

/// Aggregate counts for display and diagnostics
///
/// `edge_count` is the number of undirected connections, half the stored
/// directed-record count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub avg_degree: f64,
}

/// Node/edge network with O(1) adjacency lookups
///
/// Edges live in a flat arena; per-node adjacency lists hold indices into
/// it in insertion order. The graph is a single-owner mutable resource:
/// searches borrow it immutably, simulation operations and routing-mode
/// transforms are caller-serialized against them.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<usize>>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; idempotent, an existing id is left unchanged
    pub fn add_node(
        &mut self,
        id: &str,
        name: &str,
        x: f64,
        y: f64,
        metadata: NodeMetadata,
    ) -> &Node {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(
                id.to_string(),
                Node {
                    id: id.to_string(),
                    name: name.to_string(),
                    x,
                    y,
                    metadata,
                },
            );
            self.adjacency.insert(id.to_string(), Vec::new());
        }
        &self.nodes[id]
    }

    /// Add a directed edge, plus the mirrored reverse record when
    /// `bidirectional` is set
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEndpoint`] if either endpoint has not been
    /// added to the graph.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: Weight,
        bidirectional: bool,
        road_class: RoadClass,
    ) -> Result<()> {
        if !self.nodes.contains_key(from) {
            return Err(Error::MissingEndpoint(from.to_string()));
        }
        if !self.nodes.contains_key(to) {
            return Err(Error::MissingEndpoint(to.to_string()));
        }

        self.push_edge(Edge::new(from.to_string(), to.to_string(), weight, road_class));
        if bidirectional {
            self.push_edge(Edge::new(to.to_string(), from.to_string(), weight, road_class));
        }
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge) {
        let index = self.edges.len();
        self.adjacency.entry(edge.from.clone()).or_default().push(index);
        self.edges.push(edge);
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Outgoing edges of a node in insertion order; empty for unknown ids
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(|&index| &self.edges[index])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All directed edge records, bulk-operation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Mutable access to all directed edge records
    ///
    /// For targeted dynamic-state changes (closing one direction of a
    /// road, hand-set congestion). Callers must keep multipliers >= 1.0
    /// and must not mutate while a search is running.
    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.iter_mut()
    }

    /// Remove all nodes and edges
    ///
    /// Any previously produced search result is meaningless afterwards.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
        self.edges.clear();
    }

    pub fn stats(&self) -> GraphStats {
        let node_count = self.nodes.len();
        GraphStats {
            node_count,
            // Bidirectional edges are stored as two directed records
            edge_count: self.edges.len() / 2,
            avg_degree: if node_count == 0 {
                0.0
            } else {
                self.edges.len() as f64 / node_count as f64
            },
        }
    }

    /// Overwrite every edge's congestion state
    ///
    /// With probability `intensity` an edge receives a random multiplier in
    /// `[1.0, 3.0]`, otherwise it is reset to free flow. Every call touches
    /// every edge.
    pub fn simulate_traffic(&mut self, intensity: f64, rng: &mut impl Rng) {
        for edge in &mut self.edges {
            if rng.gen_range(0.0..1.0) < intensity {
                edge.set_traffic(rng.gen_range(0.0..1.0));
            } else {
                edge.set_traffic(0.0);
            }
        }
        debug!(
            "Simulated traffic at intensity {intensity} across {} edge records",
            self.edges.len()
        );
    }

    /// Block up to `count` distinct, currently-unblocked edges chosen
    /// uniformly at random without replacement
    ///
    /// If fewer unblocked edges remain than `count`, all of them are
    /// blocked.
    pub fn simulate_roadblocks(&mut self, count: usize, rng: &mut impl Rng) {
        let unblocked: Vec<usize> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| !edge.blocked)
            .map(|(index, _)| index)
            .collect();

        let mut blocked = 0;
        for &index in unblocked.choose_multiple(rng, count) {
            self.edges[index].blocked = true;
            blocked += 1;
        }
        debug!("Blocked {blocked} edge records");
    }

    /// Reset every edge to free flow and unblocked
    pub fn clear_dynamic_conditions(&mut self) {
        for edge in &mut self.edges {
            edge.traffic_multiplier = 1.0;
            edge.blocked = false;
        }
    }
}
