//! Dataset records and graph construction

pub mod generator;

use std::str::FromStr;

use hashbrown::HashMap;
use log::info;
use serde::{Deserialize, Serialize};

pub use generator::generate_custom_map;

use crate::model::{Graph, NodeMetadata, RoadClass};
use crate::{Error, NodeId, Result, Weight};

/// Node record as supplied by dataset producers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetNode {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub population: u64,
}

/// Undirected connection record; loaded bidirectionally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEdge {
    pub from: String,
    pub to: String,
    pub distance: Weight,
}

/// A complete dataset: nodes first, then the connections between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<DatasetNode>,
    pub edges: Vec<DatasetEdge>,
}

impl Dataset {
    /// Parse a dataset from its JSON wire form
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for malformed JSON or records.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidData(e.to_string()))
    }
}

/// Rebuild a graph from a dataset
///
/// Clears any existing content first; there is no incremental diffing. All
/// edges are added bidirectionally as highways with `weight = distance`.
///
/// # Errors
///
/// Returns an error if an edge references a node id the dataset does not
/// define.
pub fn load_dataset(dataset: &Dataset, graph: &mut Graph) -> Result<()> {
    graph.clear();

    for node in &dataset.nodes {
        graph.add_node(
            &node.id,
            &node.name,
            node.x,
            node.y,
            NodeMetadata {
                population: node.population,
            },
        );
    }

    for edge in &dataset.edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance, true, RoadClass::Highway)?;
    }

    let stats = graph.stats();
    info!(
        "Loaded dataset: {} nodes, {} connections",
        stats.node_count, stats.edge_count
    );
    Ok(())
}

/// One-shot global edge-weight transform applied after dataset load
///
/// Not a per-search parameter: weights stay scaled until the graph is
/// rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingMode {
    /// Raw distances
    #[default]
    Shortest,
    /// Highway edges scaled by 0.7
    Fastest,
    /// Edges between low-population endpoints scaled by 0.8
    Scenic,
}

impl FromStr for RoutingMode {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "shortest" => Ok(Self::Shortest),
            "fastest" => Ok(Self::Fastest),
            "scenic" => Ok(Self::Scenic),
            other => Err(Error::UnknownRoutingMode(other.to_string())),
        }
    }
}

/// Population below which an endpoint counts as scenic
const SCENIC_POPULATION_CUTOFF: f64 = 1_000_000.0;

/// Apply a routing mode's base-weight scaling to every matching edge
pub fn apply_routing_mode(graph: &mut Graph, mode: RoutingMode) {
    match mode {
        RoutingMode::Shortest => {}
        RoutingMode::Fastest => {
            for edge in graph.edges_mut() {
                if edge.road_class == RoadClass::Highway {
                    edge.weight *= 0.7;
                }
            }
        }
        RoutingMode::Scenic => {
            let populations: HashMap<NodeId, u64> = graph
                .nodes()
                .map(|node| (node.id.clone(), node.metadata.population))
                .collect();

            for edge in graph.edges_mut() {
                let (Some(&from), Some(&to)) =
                    (populations.get(&edge.from), populations.get(&edge.to))
                else {
                    continue;
                };
                let avg_population = (from as f64 + to as f64) / 2.0;
                if avg_population < SCENIC_POPULATION_CUTOFF {
                    edge.weight *= 0.8;
                }
            }
        }
    }
    info!("Applied routing mode {mode:?}");
}
