use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkit::{
    algorithm::*,
    graph::{directed::*, undirected::*},
};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, traversals, weighted);
criterion_main!(benches);

fn random_edges(vertex_size: usize, edge_size: usize) -> Vec<(usize, usize, u32)> {
    let mut rng = rand::thread_rng();
    (0..edge_size)
        .map(|_| {
            let v0 = rng.gen::<usize>() % vertex_size;
            let v1 = rng.gen::<usize>() % vertex_size;
            (v0, v1, rng.gen::<u32>() % 1024)
        })
        .collect()
}

fn traversals(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    let edges = random_edges(vertex_size, edge_size);
    c.bench_function("graph/add_edge", |b| {
        b.iter(|| {
            let g: Graph<usize> = edges.iter().map(|(u, v, _)| (*u, *v)).collect();
            black_box(g)
        })
    });

    let g: Graph<usize> = edges.iter().map(|(u, v, _)| (*u, *v)).collect();
    let start = edges[0].0;
    c.bench_function("graph/bfs", |b| b.iter(|| black_box(g.bfs(&start))));
    c.bench_function("graph/dfs", |b| b.iter(|| black_box(g.dfs(&start))));
    c.bench_function("graph/classify_edges", |b| {
        b.iter(|| black_box(g.classify_edges()))
    });
    c.bench_function("graph/find_sccs", |b| b.iter(|| black_box(g.find_sccs())));
}

fn weighted(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    let edge_size = *EDGE_SIZE;
    let edges = random_edges(vertex_size, edge_size);
    let start = edges[0].0;

    let g: DirectedWeightedGraph<usize, u32> = edges.iter().copied().collect();
    c.bench_function("directed_weighted/dijkstra", |b| {
        b.iter(|| black_box(g.dijkstra(&start)))
    });

    let g: WeightedGraph<usize, u32> = edges.iter().copied().collect();
    c.bench_function("weighted/kruskal_mst", |b| {
        b.iter(|| black_box(g.kruskal_mst().total_weight()))
    });
}
