//! Data model for the routed network
//!
//! Contains the node/edge components and the adjacency-list graph with
//! mutable per-edge dynamic conditions (traffic, closures).

pub mod components;
pub mod graph;

pub use components::{Edge, Node, NodeMetadata, RoadClass};
pub use graph::{Graph, GraphStats};
