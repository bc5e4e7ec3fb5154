//! Network components - nodes, edges, and dynamic edge state

use serde::{Deserialize, Serialize};

use crate::{NodeId, Weight};

/// Network node with planar coordinates
///
/// Coordinates are used only for heuristic distance estimates, never for
/// traversal costs.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique, stable identifier
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Additional data (population weight etc.)
    pub metadata: NodeMetadata,
}

/// Opaque node metadata consumed by routing-mode edge scaling
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NodeMetadata {
    pub population: u64,
}

impl Node {
    /// Straight-line distance to another node
    pub fn euclidean_distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Sum of absolute coordinate differences
    pub fn manhattan_distance(&self, other: &Node) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Maximum absolute coordinate difference
    pub fn chebyshev_distance(&self, other: &Node) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Road classification carried as edge metadata
///
/// The `fastest` routing mode scales highway edges only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadClass {
    Highway,
    #[default]
    Unclassified,
}

/// Directed edge with mutable dynamic state
///
/// Undirected connectivity is stored as two `Edge` records sharing a base
/// weight but with independent traffic and closure state, so congestion can
/// be asymmetric.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Base weight (distance), non-negative
    pub weight: Weight,
    /// Congestion factor, always >= 1.0 (1.0 = free flow)
    pub traffic_multiplier: f64,
    /// Roadblock status
    pub blocked: bool,
    pub road_class: RoadClass,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight, road_class: RoadClass) -> Self {
        Self {
            from,
            to,
            weight,
            traffic_multiplier: 1.0,
            blocked: false,
            road_class,
        }
    }

    /// Traversal cost after traffic and closures; infinite when blocked
    pub fn effective_weight(&self) -> Weight {
        if self.blocked {
            return Weight::INFINITY;
        }
        self.weight * self.traffic_multiplier
    }

    /// Set congestion from a level in `[0, 1]`, mapped onto a multiplier
    /// in `[1.0, 3.0]`
    pub fn set_traffic(&mut self, level: f64) {
        self.traffic_multiplier = 1.0 + level * 2.0;
    }
}
