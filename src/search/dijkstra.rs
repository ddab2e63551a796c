use super::{Candidate, CostTable, Frontier, PathArena, SearchStats};
use crate::{grid::Grid, neighbors::ManhattanNeighborhood, path::Path, Point, SolverConfig};

/// Searches the cheapest Path from the top-left to the bottom-right corner of `grid` using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Every Tile is a Node and every pair of cardinal neighbors is an Edge, weighted with the Cost
/// of the Tile it leads onto. The start Tile is paid for once when the Path begins.
///
/// Since all Costs are non-negative, the first time the goal is taken from the Frontier its
/// Path is optimal. With [`SolverConfig::early_exit`] unset the search keeps going until the
/// Frontier is empty, but only ever replaces the result with a strictly cheaper one.
///
/// ## Panics
/// if the Frontier runs empty without ever reaching the goal. A valid [`Grid`] is always fully
/// connected, so this cannot happen for any input.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{search::dijkstra_search, Grid, SolverConfig};
///
/// let grid = Grid::from_rows(vec![vec![1, 3], vec![1, 1]]).unwrap();
/// let (path, stats) = dijkstra_search(&grid, &SolverConfig::default());
///
/// assert_eq!(path, vec![(0, 0), (1, 0), (1, 1)]);
/// assert_eq!(path.cost(), 3);
/// assert!(stats.expanded > 0);
/// ```
pub fn dijkstra_search(grid: &Grid, config: &SolverConfig) -> (Path<Point>, SearchStats) {
    let neighborhood = ManhattanNeighborhood::new(grid.height(), grid.width());
    let start = grid.start();
    let goal = grid.goal();

    let mut stats = SearchStats::default();
    let mut costs = CostTable::new(grid.height(), grid.width());
    let mut arena = PathArena::with_capacity(config.frontier_capacity_for(grid));
    let mut next = Frontier::with_capacity(config.frontier_capacity_for(grid));

    let start_cost = grid[start];
    costs.try_update(start, start_cost);
    next.push(Candidate {
        pos: start,
        cost: start_cost,
        tail: arena.root(start),
    });
    stats.pushed += 1;

    let mut best: Option<Candidate> = None;

    while let Some(current) = next.pop() {
        if costs.is_stale(current.pos, current.cost) {
            stats.stale += 1;
            continue;
        }
        debug_assert_eq!(arena.pos(current.tail), current.pos);

        if current.pos == goal {
            #[cfg(feature = "log")]
            log::trace!(
                "reached {:?} at cost {} after {} expansions",
                goal,
                current.cost,
                stats.expanded
            );
            if best.map_or(true, |best| current.cost < best.cost) {
                best = Some(current);
            }
            if config.early_exit {
                break;
            }
            continue;
        }

        stats.expanded += 1;
        for other in neighborhood.get_all_neighbors(current.pos) {
            // bounded by the total Cost of the Grid, since every Candidate is a simple Path
            let other_cost = current.cost + grid[other];
            if costs.try_update(other, other_cost) {
                next.push(Candidate {
                    pos: other,
                    cost: other_cost,
                    tail: arena.extend(current.tail, other),
                });
                stats.pushed += 1;
            }
        }
    }

    stats.arena_nodes = arena.node_count();

    let best = match best {
        Some(best) => best,
        None => panic!(
            "Frontier exhausted without reaching {:?} on a {}x{} Grid",
            goal,
            grid.height(),
            grid.width()
        ),
    };

    (Path::new(arena.reconstruct(best.tail), best.cost), stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let grid = Grid::from_rows(vec![
            vec![1, 9, 1, 1, 1],
            vec![1, 9, 1, 9, 1],
            vec![1, 1, 1, 9, 1],
            vec![9, 9, 9, 9, 1],
        ])
        .unwrap();

        let (path, _) = dijkstra_search(&grid, &SolverConfig::default());

        #[rustfmt::skip]
        assert_eq!(
            path,
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4)],
        );
        assert_eq!(path.cost(), 12);
    }

    #[test]
    fn single_tile() {
        let grid = Grid::uniform(1, 1, 7).unwrap();
        let (path, stats) = dijkstra_search(&grid, &SolverConfig::default());

        assert_eq!(path, vec![(0, 0)]);
        assert_eq!(path.cost(), 7);
        assert_eq!(stats.expanded, 0);
        assert_eq!(stats.pushed, 1);
    }

    #[test]
    fn zero_cost_tiles() {
        let grid = Grid::uniform(3, 4, 0).unwrap();
        let (path, _) = dijkstra_search(&grid, &SolverConfig::default());

        assert_eq!(path.cost(), 0);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(2, 3)));
        assert!(path.is_contiguous());
    }

    #[test]
    fn draining_gives_same_cost() {
        let grid = Grid::from_rows(vec![
            vec![3, 1, 4, 1],
            vec![5, 9, 2, 6],
            vec![5, 3, 5, 8],
            vec![9, 7, 9, 3],
        ])
        .unwrap();

        let (early, early_stats) = dijkstra_search(&grid, &SolverConfig::default());
        let (drained, drained_stats) = dijkstra_search(&grid, &SolverConfig::EXHAUSTIVE);

        assert_eq!(early.cost(), drained.cost());
        assert!(drained_stats.expanded >= early_stats.expanded);
        // every Candidate is popped once: expanded, dropped as stale, or the goal
        assert_eq!(
            drained_stats.pushed,
            drained_stats.expanded + drained_stats.stale + 1
        );
    }

    #[test]
    fn costs_near_the_limit() {
        let huge = usize::MAX / 2 + 1;
        let grid = Grid::from_rows(vec![vec![huge, 0], vec![0, huge - 2]]).unwrap();
        let (path, _) = dijkstra_search(&grid, &SolverConfig::EXHAUSTIVE);

        assert_eq!(path.len(), 3);
        assert_eq!(path.cost(), usize::MAX - 1);
        assert_eq!(path.annotate(&grid).total_cost(), usize::MAX - 1);
    }

    #[test]
    fn large_costs_keep_cheapest_route() {
        let huge = usize::MAX / 8;
        let grid = Grid::from_rows(vec![
            vec![huge, huge, huge],
            vec![1, 1, huge],
            vec![huge, 1, 1],
        ])
        .unwrap();
        let (path, _) = dijkstra_search(&grid, &SolverConfig::default());

        assert_eq!(path, vec![(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]);
        assert_eq!(path.cost(), huge + 4);
    }
}
