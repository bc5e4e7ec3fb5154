// Re-export key components
pub use crate::loading::{
    Dataset, DatasetEdge, DatasetNode, RoutingMode, apply_routing_mode, generate_custom_map,
    load_dataset,
};
pub use crate::model::{Edge, Graph, GraphStats, Node, NodeMetadata, RoadClass};
pub use crate::routing::{
    AStar, Algorithm, BreadthFirst, DepthFirst, Dijkstra, Heuristic, MinPriorityQueue, PathResult,
    PathSearch, PathStep, SearchOptions, UNREACHABLE, create_algorithm, find_path,
};

// Core aliases
pub use crate::{Error, NodeId, Result, Weight};
