//! Search algorithms and the query facade
//!
//! All four algorithms consume the same immutable [`Graph`] view and
//! produce a [`PathResult`]; none of them ever mutates graph state. A
//! not-found outcome is an ordinary result (empty path, sentinel cost) at
//! the algorithm level; [`find_path`] converts it into an error for
//! callers that treat it as one.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod queue;
pub mod result;
pub mod selector;

use hashbrown::HashMap;
use log::debug;

pub use astar::{AStar, Heuristic};
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use queue::MinPriorityQueue;
pub use result::{PathResult, PathStep, UNREACHABLE};
pub use selector::{Algorithm, SearchOptions, create_algorithm};

use crate::model::Graph;
use crate::{Error, NodeId, Result};

/// Common contract of the four search strategies
pub trait PathSearch {
    /// Run a search between two node ids
    ///
    /// Missing endpoints and unreachable destinations are ordinary
    /// outcomes: an empty path with cost [`UNREACHABLE`], never an error.
    /// A search with `source == destination` returns a single-element path
    /// of cost 0 without traversing any edge.
    fn find_path(&mut self, source: &str, destination: &str) -> PathResult;

    /// Dequeue/visit order of the most recent search, for replay consumers
    fn visited_nodes(&self) -> &[NodeId];
}

/// Walk a predecessor map backward from destination to source
///
/// Returns an empty path unless the chain actually terminates at the
/// source, guarding against partially explored predecessor data.
pub(crate) fn reconstruct_path(
    previous: &HashMap<NodeId, NodeId>,
    source: &str,
    destination: &str,
) -> Vec<NodeId> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while let Some(prev) = previous.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();

    if path.first().is_some_and(|first| first == source) {
        path
    } else {
        Vec::new()
    }
}

/// Resolve an algorithm tag, run a search and surface failures as errors
///
/// # Errors
///
/// [`Error::SameSourceAndDestination`] before any search runs,
/// [`Error::UnknownAlgorithm`] for an unrecognized tag and
/// [`Error::NoPath`] when the search comes back empty.
pub fn find_path(
    graph: &Graph,
    algorithm: &str,
    source: &str,
    destination: &str,
    options: SearchOptions,
) -> Result<PathResult> {
    if source == destination {
        return Err(Error::SameSourceAndDestination(source.to_string()));
    }

    let algorithm: Algorithm = algorithm.parse()?;
    let mut search = create_algorithm(algorithm, graph, options);
    let result = search.find_path(source, destination);

    if !result.is_found() {
        return Err(Error::NoPath {
            source: source.to_string(),
            destination: destination.to_string(),
        });
    }

    debug!(
        "{} found {}-node path from '{source}' to '{destination}', cost {:.2}, {} visited in {:?}",
        result.algorithm(),
        result.path().len(),
        result.cost(),
        result.nodes_visited(),
        result.elapsed()
    );
    Ok(result)
}
