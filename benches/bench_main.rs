use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wayfinder::prelude::*;

fn bench_find_path(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let dataset = generate_custom_map(200, 600, &mut rng).expect("valid parameters");
    let mut graph = Graph::new();
    load_dataset(&dataset, &mut graph).expect("generated dataset loads");

    let mut group = c.benchmark_group("find_path");
    for tag in ["dijkstra", "astar", "bfs", "dfs"] {
        group.bench_function(tag, |b| {
            b.iter(|| {
                black_box(find_path(
                    &graph,
                    tag,
                    "node_0",
                    "node_199",
                    SearchOptions::default(),
                ))
            });
        });
    }
    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let dataset = generate_custom_map(200, 600, &mut rng).expect("valid parameters");
    let mut graph = Graph::new();
    load_dataset(&dataset, &mut graph).expect("generated dataset loads");

    c.bench_function("simulate_traffic", |b| {
        b.iter(|| graph.simulate_traffic(0.3, &mut rng));
    });
}

criterion_group!(benches, bench_find_path, bench_simulation);
criterion_main!(benches);
