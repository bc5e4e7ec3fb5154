//! Strategy tags and algorithm construction

use std::str::FromStr;

use crate::Error;
use crate::model::Graph;
use crate::routing::{AStar, BreadthFirst, DepthFirst, Dijkstra, Heuristic, PathSearch};

/// Search strategy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    AStar,
    BreadthFirst,
    DepthFirst,
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parse a strategy tag; unknown tags are a hard failure, never a
    /// silent default
    fn from_str(tag: &str) -> Result<Self, Error> {
        match tag {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::AStar),
            "bfs" => Ok(Self::BreadthFirst),
            "dfs" => Ok(Self::DepthFirst),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Options forwarded to algorithm construction
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Heuristic used by [`Algorithm::AStar`]; ignored by the others
    pub heuristic: Heuristic,
}

/// Construct an algorithm instance bound to a graph
pub fn create_algorithm<'g>(
    algorithm: Algorithm,
    graph: &'g Graph,
    options: SearchOptions,
) -> Box<dyn PathSearch + 'g> {
    match algorithm {
        Algorithm::Dijkstra => Box::new(Dijkstra::new(graph)),
        Algorithm::AStar => Box::new(AStar::new(graph, options.heuristic)),
        Algorithm::BreadthFirst => Box::new(BreadthFirst::new(graph)),
        Algorithm::DepthFirst => Box::new(DepthFirst::new(graph)),
    }
}
