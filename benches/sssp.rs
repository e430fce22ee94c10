use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_sssp::graph::{random_graph, DirectedGraph, RandomGraphConfig};
use radix_sssp::{Dijkstra, RadixDijkstra, ShortestPathAlgorithm};

const SIZES: [usize; 3] = [2_000, 20_000, 100_000];
const EDGE_FACTOR: usize = 6;

fn bench_sssp(c: &mut Criterion) {
    let mut group = c.benchmark_group("sssp");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(200));
    group.measurement_time(Duration::from_secs(2));

    let dijkstra = Dijkstra::new();
    let radix = RadixDijkstra::new();
    let algorithms: [(&str, &dyn ShortestPathAlgorithm<DirectedGraph>); 2] =
        [("dijkstra_binary", &dijkstra), ("radix_heap", &radix)];

    for &nodes in &SIZES {
        let config = RandomGraphConfig {
            nodes,
            edges: nodes * EDGE_FACTOR,
            max_weight: 1_000,
            seed: 0x5EED ^ nodes as u64,
        };
        let graph = match random_graph(&config) {
            Ok(graph) => graph,
            Err(err) => panic!("cannot generate benchmark graph: {}", err),
        };

        for (name, algorithm) in algorithms {
            group.bench_function(BenchmarkId::new(name, nodes), |bencher| {
                bencher.iter(|| {
                    let result = algorithm.compute_shortest_paths(&graph, 0);
                    black_box(result)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sssp);
criterion_main!(benches);
