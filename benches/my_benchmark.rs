extern crate maze_pathfinding;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use maze_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};

fn random_grid(size: usize, seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    let rows = (0..size)
        .map(|_| (0..size).map(|_| rng.generate_range(1_usize..10)).collect())
        .collect();
    Grid::new(rows, size, size).unwrap()
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to log every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve");
    group.sample_size(10);

    // Log to stdout
    init();

    let map_sizes = [32, 128, 512];

    for map_size in map_sizes {
        let uniform = Grid::uniform(map_size, map_size, 1).unwrap();
        let random = random_grid(map_size, 4);

        for (name, grid) in [("Uniform map", &uniform), ("Random map", &random)] {
            let solver = Solver::default();
            group.bench_with_input(BenchmarkId::new(name, map_size), grid, |b, grid| {
                b.iter(|| solver.solve(grid))
            });
        }

        let exhaustive = Solver::new(SolverConfig::EXHAUSTIVE);
        group.bench_with_input(
            BenchmarkId::new("Random map, exhaustive", map_size),
            &random,
            |b, grid| b.iter(|| exhaustive.solve(grid)),
        );

        let (path, stats) = Solver::default().solve_with_stats(&random);
        log::info!(
            "{0}x{0}: cost {1}, {2} steps, {3:?}",
            map_size,
            path.cost(),
            path.len(),
            stats
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve batch");
    group.sample_size(10);

    let grids: Vec<Grid> = (0..16).map(|seed| random_grid(128, seed)).collect();
    let solver = Solver::default();

    group.bench_function("16 random maps, 128x128", |b| {
        b.iter(|| solver.solve_batch(&grids))
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_batch);
criterion_main!(benches);
