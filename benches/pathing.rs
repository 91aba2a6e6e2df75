use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use graphmaze::cells::Cartesian2DCoordinate;
use graphmaze::generators;
use graphmaze::pathing;
use graphmaze::units::{Height, Width};

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = generators::generate_maze_seeded(Width(150), Height(150), 11);
        let start_coord = Cartesian2DCoordinate::new(100, 100);
        b.iter(|| pathing::Distances::for_graph(&g, start_coord))
    });
}

fn bench_path_to(c: &mut Criterion) {
    c.bench_function("path_to", |b| {
        let g = generators::generate_maze_seeded(Width(150), Height(150), 11);
        let start_coord = Cartesian2DCoordinate::new(100, 100);
        let end_coord = Cartesian2DCoordinate::new(0, 0);
        b.iter(|| pathing::path_to(&g, &start_coord, &end_coord))
    });
}

fn bench_longest_path(c: &mut Criterion) {
    c.bench_function("longest_path", |b| {
        let g = generators::generate_maze_seeded(Width(150), Height(150), 11);
        let start_coord = Cartesian2DCoordinate::new(0, 0);
        b.iter(|| pathing::longest_path(&g, &start_coord))
    });
}

criterion_group!(benches,
    bench_distances,
    bench_path_to,
    bench_longest_path
);
criterion_main!(benches);
