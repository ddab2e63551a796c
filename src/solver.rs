use crate::{
	error::Result,
	grid::Grid,
	path::Path,
	search::{self, SearchStats},
	Cost, Point,
};

mod solver_config;
pub use self::solver_config::SolverConfig;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Finds the cheapest Path from the top-left to the bottom-right corner of a [`Grid`].
///
/// A Solver holds no state besides its [`SolverConfig`], so it can be reused for any number of
/// Grids and shared between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solver {
	config: SolverConfig,
}

impl Solver {
	/// Creates a new Solver
	///
	/// ## Examples
	/// ```
	/// use maze_pathfinding::{Grid, Solver, SolverConfig};
	///
	/// let grid = Grid::from_rows(vec![
	///     vec![1, 3, 1],
	///     vec![1, 5, 1],
	///     vec![4, 2, 1],
	/// ]).unwrap();
	///
	/// let solver = Solver::new(SolverConfig::default());
	/// let path = solver.solve(&grid);
	///
	/// assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
	/// assert_eq!(path.cost(), 7);
	/// ```
	pub fn new(config: SolverConfig) -> Solver {
		Solver { config }
	}

	/// Returns the config used to create this Solver
	pub fn get_config(&self) -> &SolverConfig {
		&self.config
	}

	/// Finds the cheapest Path across `grid`.
	///
	/// The Path starts at `(0, 0)`, ends at `(height - 1, width - 1)` and only moves along the 4
	/// cardinal directions. Its Cost is the sum of all Tiles on it, including the start. If
	/// several Paths share the lowest Cost, any one of them is returned.
	pub fn solve(&self, grid: &Grid) -> Path<Point> {
		self.solve_with_stats(grid).0
	}

	/// Same as [`solve`](Solver::solve), but also returns the counters of the search
	pub fn solve_with_stats(&self, grid: &Grid) -> (Path<Point>, SearchStats) {
		#[cfg(feature = "log")]
		let timer = std::time::Instant::now();

		let (path, stats) = search::dijkstra_search(grid, &self.config);

		#[cfg(feature = "log")]
		log::debug!(
			"solved {}x{} Grid: cost {}, {} steps, {} pushed, {} expanded, {} stale in {:?}",
			grid.height(),
			grid.width(),
			path.cost(),
			path.len(),
			stats.pushed,
			stats.expanded,
			stats.stale,
			timer.elapsed()
		);

		(path, stats)
	}

	/// Solves several independent Grids.
	///
	/// With the `parallel` feature the Grids are solved on the rayon thread pool. The results are
	/// in the same order as `grids` either way.
	pub fn solve_batch(&self, grids: &[Grid]) -> Vec<Path<Point>> {
		#[cfg(feature = "log")]
		let timer = std::time::Instant::now();

		#[cfg(feature = "parallel")]
		let paths: Vec<_> = grids.par_iter().map(|grid| self.solve(grid)).collect();

		#[cfg(not(feature = "parallel"))]
		let paths: Vec<_> = grids.iter().map(|grid| self.solve(grid)).collect();

		#[cfg(feature = "log")]
		log::debug!("solved {} Grids in {:?}", grids.len(), timer.elapsed());

		paths
	}
}

/// Finds the cheapest Path across a Grid given as rows and explicit dimensions.
///
/// This validates the input with [`Grid::new`] and runs a default [`Solver`].
///
/// ## Errors
/// - [`SolveError::InvalidDimensions`](crate::SolveError::InvalidDimensions) if `height` or
///   `width` is zero. No search work is done in that case.
/// - [`SolveError::HeightMismatch`](crate::SolveError::HeightMismatch) or
///   [`SolveError::RowLength`](crate::SolveError::RowLength) if `rows` does not have the given
///   shape
/// - [`SolveError::CostOverflow`](crate::SolveError::CostOverflow) if the Costs of all Tiles
///   added up do not fit into a [`Cost`]
///
/// ## Examples
/// ```
/// use maze_pathfinding::{solve, SolveError};
///
/// let path = solve(&[vec![1, 3], vec![1, 1]], 2, 2).unwrap();
/// assert_eq!(path, vec![(0, 0), (1, 0), (1, 1)]);
/// assert_eq!(path.cost(), 3);
///
/// assert_eq!(
///     solve(&[], 0, 0),
///     Err(SolveError::InvalidDimensions { height: 0, width: 0 }),
/// );
/// ```
pub fn solve(rows: &[Vec<Cost>], height: usize, width: usize) -> Result<Path<Point>> {
	let grid = Grid::new(rows.to_vec(), height, width)?;
	Ok(Solver::default().solve(&grid))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::SolveError;

	#[test]
	fn rejects_before_searching() {
		assert_eq!(
			solve(&[vec![1, 2]], 1, 0),
			Err(SolveError::InvalidDimensions {
				height: 1,
				width: 0
			})
		);
		assert_eq!(
			solve(&[vec![1, 2]], 2, 2),
			Err(SolveError::HeightMismatch {
				expected: 2,
				found: 1
			})
		);
	}

	#[test]
	fn batch_keeps_order() {
		let grids = vec![
			Grid::uniform(1, 1, 5).unwrap(),
			Grid::uniform(3, 3, 1).unwrap(),
			Grid::from_rows(vec![vec![1, 3], vec![1, 1]]).unwrap(),
		];
		let solver = Solver::default();
		let costs: Vec<_> = solver
			.solve_batch(&grids)
			.iter()
			.map(Path::cost)
			.collect();
		assert_eq!(costs, vec![5, 5, 3]);
	}

	#[test]
	fn config() {
		let solver = Solver::new(SolverConfig::EXHAUSTIVE);
		assert!(!solver.get_config().early_exit);
	}
}
