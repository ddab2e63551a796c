use maze_pathfinding::{search::SearchStats, Cost, Grid, Solver, SolverConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SIZE: usize = 1024;
const RUNS: u64 = 10;

fn random_grid(rng: &mut impl Rng, max_cost: Cost) -> Grid {
    let rows = (0..SIZE)
        .map(|_| (0..SIZE).map(|_| rng.gen_range(0..=max_cost)).collect())
        .collect();
    Grid::new(rows, SIZE, SIZE).unwrap()
}

fn main() {
    let configs: HashMap<&str, SolverConfig> = [
        ("early_exit", SolverConfig::default()),
        ("exhaustive", SolverConfig::EXHAUSTIVE),
        (
            "reserved",
            SolverConfig {
                frontier_capacity: SIZE * SIZE,
                ..Default::default()
            },
        ),
    ]
    .into_iter()
    .collect();

    let grids: Vec<Grid> = (0..RUNS)
        .into_par_iter()
        .map(|seed| random_grid(&mut StdRng::seed_from_u64(seed), 9))
        .collect();
    println!("finished Grid gen");

    let mut results: HashMap<&str, Vec<(u128, Cost, SearchStats)>> = HashMap::new();

    for (&name, &config) in &configs {
        let solver = Solver::new(config);
        let runs = grids
            .iter()
            .map(|grid| {
                let start_time = Instant::now();
                let (path, stats) = solver.solve_with_stats(grid);
                let dt = duration_as_nanos(Instant::now() - start_time);
                (dt, path.cost(), stats)
            })
            .collect::<Vec<_>>();
        println!("{}: {:?}", name, runs.iter().map(|r| r.0).collect::<Vec<_>>());
        results.insert(name, runs);
    }

    let best = results["early_exit"]
        .iter()
        .map(|(_, cost, _)| *cost)
        .collect::<Vec<_>>();

    for (name, results) in &results {
        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.1 == *b));

        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap() as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap() as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;

        let expanded = results.iter().map(|r| r.2.expanded).sum::<usize>() / results.len();
        let stale = results.iter().map(|r| r.2.stale).sum::<usize>() / results.len();

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {} expanded, {} stale",
            name, min_time, max_time, avg_time, expanded, stale,
        );
    }

    let start_time = Instant::now();
    let batch = Solver::default().solve_batch(&grids);
    let dt = duration_as_nanos(Instant::now() - start_time) as f64 / 1_000_000.0;
    assert!(batch.iter().zip(best.iter()).all(|(p, b)| p.cost() == *b));
    println!("batch of {} | {:.3}ms", batch.len(), dt);
}

fn duration_as_nanos(d: Duration) -> u128 {
    d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
