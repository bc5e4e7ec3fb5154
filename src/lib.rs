//! Weighted-graph path-search engine with interchangeable strategies
//!
//! A [`model::Graph`] stores a node/edge network whose per-edge state
//! (traffic multipliers, closures) can change at runtime. Four search
//! strategies - Dijkstra, A*, breadth-first and depth-first - consume the
//! same graph through one contract and produce a uniform
//! [`routing::PathResult`].
//!
//! Typical flow: build a graph (usually via [`loading::load_dataset`] or
//! the map generator), optionally mutate dynamic edge state, then call
//! [`routing::find_path`] with a strategy tag.
//!
//! ```
//! use wayfinder::model::{Graph, NodeMetadata, RoadClass};
//! use wayfinder::routing::{find_path, SearchOptions};
//!
//! let mut graph = Graph::new();
//! graph.add_node("a", "A", 0.0, 0.0, NodeMetadata::default());
//! graph.add_node("b", "B", 3.0, 4.0, NodeMetadata::default());
//! graph.add_edge("a", "b", 5.0, true, RoadClass::Highway)?;
//!
//! let result = find_path(&graph, "dijkstra", "a", "b", SearchOptions::default())?;
//! assert_eq!(result.cost(), 5.0);
//! # Ok::<(), wayfinder::Error>(())
//! ```

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::{Error, Result};

/// Stable node identifier
pub type NodeId = String;
/// Edge weight (distance units)
pub type Weight = f64;
