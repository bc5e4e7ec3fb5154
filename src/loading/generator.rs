//! Random connected map generation

use hashbrown::HashSet;
use itertools::Itertools;
use log::debug;
use rand::Rng;

use crate::loading::{Dataset, DatasetEdge, DatasetNode};
use crate::{Error, Result};

/// Generate a random connected dataset
///
/// Parameters are validated first: at least two nodes, at least
/// `node_count - 1` edges (otherwise the graph cannot be connected) and at
/// most `n(n-1)/2` (no duplicate unordered pairs). Construction connects
/// all nodes through a nearest-neighbor spanning structure before topping
/// up with random unique edges, so every generated map is connected.
///
/// Randomness comes from the injected `rng`, keeping generation
/// reproducible under a seeded source.
pub fn generate_custom_map(
    node_count: usize,
    edge_count: usize,
    rng: &mut impl Rng,
) -> Result<Dataset> {
    validate_parameters(node_count, edge_count)?;

    let nodes: Vec<DatasetNode> = (0..node_count)
        .map(|i| DatasetNode {
            id: format!("node_{i}"),
            name: format!("City {}", i + 1),
            x: rng.gen_range(0.0..900.0) + 50.0,
            y: rng.gen_range(0.0..600.0) + 50.0,
            population: rng.gen_range(100_000..5_100_000),
        })
        .collect();

    let mut edges: Vec<DatasetEdge> = Vec::with_capacity(edge_count);
    let mut used_pairs: HashSet<(usize, usize)> = HashSet::new();

    // Spanning structure: repeatedly attach the unconnected node closest
    // to the connected component
    let mut connected: Vec<usize> = vec![0];
    let mut unconnected: Vec<usize> = (1..node_count).collect();

    while !unconnected.is_empty() && edges.len() < edge_count {
        let best = connected
            .iter()
            .cartesian_product(unconnected.iter())
            .map(|(&from, &to)| (distance_between(&nodes[from], &nodes[to]), from, to))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let Some((dist, from, to)) = best else { break };
        edges.push(DatasetEdge {
            from: nodes[from].id.clone(),
            to: nodes[to].id.clone(),
            distance: (dist * 2.0).round(),
        });
        used_pairs.insert(unordered(from, to));
        connected.push(to);
        unconnected.retain(|&i| i != to);
    }

    // Top up with random unique edges; bounded attempts in case the
    // remaining pair space is sparse
    let max_attempts = edge_count * 10;
    let mut attempts = 0;
    while edges.len() < edge_count && attempts < max_attempts {
        attempts += 1;

        let from = rng.gen_range(0..node_count);
        let mut to = rng.gen_range(0..node_count);
        while to == from {
            to = rng.gen_range(0..node_count);
        }

        if !used_pairs.insert(unordered(from, to)) {
            continue;
        }

        let dist = distance_between(&nodes[from], &nodes[to]);
        edges.push(DatasetEdge {
            from: nodes[from].id.clone(),
            to: nodes[to].id.clone(),
            distance: (dist * 2.0).round(),
        });
    }

    debug!(
        "Generated custom map: {} nodes, {} edges ({attempts} top-up attempts)",
        nodes.len(),
        edges.len()
    );
    Ok(Dataset { nodes, edges })
}

fn validate_parameters(node_count: usize, edge_count: usize) -> Result<()> {
    if node_count < 2 {
        return Err(Error::InvalidMapParameters(format!(
            "need at least 2 nodes, got {node_count}"
        )));
    }
    if edge_count < node_count - 1 {
        return Err(Error::InvalidMapParameters(format!(
            "not enough edges to connect all nodes, minimum {}",
            node_count - 1
        )));
    }
    let max_edges = node_count * (node_count - 1) / 2;
    if edge_count > max_edges {
        return Err(Error::InvalidMapParameters(format!(
            "too many edges, maximum {max_edges}"
        )));
    }
    Ok(())
}

fn distance_between(a: &DatasetNode, b: &DatasetNode) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

fn unordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::loading::load_dataset;
    use crate::model::Graph;
    use crate::routing::{BreadthFirst, PathSearch};

    #[test]
    fn rejects_too_few_nodes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_custom_map(1, 5, &mut rng),
            Err(Error::InvalidMapParameters(_))
        ));
    }

    #[test]
    fn rejects_edge_counts_outside_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        // Below n-1
        assert!(generate_custom_map(10, 8, &mut rng).is_err());
        // Above n(n-1)/2
        assert!(generate_custom_map(5, 11, &mut rng).is_err());
    }

    #[test]
    fn generated_map_is_connected() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = generate_custom_map(20, 40, &mut rng).unwrap();
        assert_eq!(dataset.nodes.len(), 20);

        let mut graph = Graph::new();
        load_dataset(&dataset, &mut graph).unwrap();

        let mut search = BreadthFirst::new(&graph);
        for node in &dataset.nodes[1..] {
            let result = search.find_path("node_0", &node.id);
            assert!(result.is_found(), "{} unreachable", node.id);
        }
    }

    #[test]
    fn generated_edges_are_unique_pairs() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = generate_custom_map(10, 30, &mut rng).unwrap();

        let mut pairs = HashSet::new();
        for edge in &dataset.edges {
            let key = if edge.from <= edge.to {
                (edge.from.clone(), edge.to.clone())
            } else {
                (edge.to.clone(), edge.from.clone())
            };
            assert!(pairs.insert(key), "duplicate edge {}-{}", edge.from, edge.to);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = generate_custom_map(8, 12, &mut a).unwrap();
        let second = generate_custom_map(8, 12, &mut b).unwrap();
        assert_eq!(first.nodes.len(), second.nodes.len());
        for (x, y) in first.edges.iter().zip(&second.edges) {
            assert_eq!(x.from, y.from);
            assert_eq!(x.to, y.to);
            assert_eq!(x.distance, y.distance);
        }
    }
}
