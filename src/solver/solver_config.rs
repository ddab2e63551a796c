use crate::grid::Grid;

/// Options for configuring the [`Solver`](crate::Solver)
///
/// Default options:
/// ```
/// # use maze_pathfinding::SolverConfig;
/// assert_eq!(
/// 	SolverConfig {
/// 		early_exit: true,
/// 		frontier_capacity: 0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
	/// `true` (default): stop the search as soon as the goal is taken from the Frontier.
	///
	/// `false`: keep searching until the Frontier is empty.
	///
	/// Both settings produce a Path with the same Cost, since the first time the goal is reached
	/// is always the cheapest. Turning this off only adds work, which is visible in the
	/// [`SearchStats`](crate::search::SearchStats).
	pub early_exit: bool,
	/// The number of Candidates to reserve room for up front.
	///
	/// `0` (default): derive a value from the size of the Grid.
	pub frontier_capacity: usize,
}

impl SolverConfig {
	/// a SolverConfig that searches the entire Grid before returning
	///
	/// Values:
	/// ```
	/// # use maze_pathfinding::SolverConfig;
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		early_exit: false,
	/// 		frontier_capacity: 0,
	/// 	},
	/// 	SolverConfig::EXHAUSTIVE
	/// );
	/// ```
	pub const EXHAUSTIVE: SolverConfig = SolverConfig {
		early_exit: false,
		frontier_capacity: 0,
	};

	/// Returns a copy of the default config with `early_exit` set
	pub fn with_early_exit(early_exit: bool) -> SolverConfig {
		SolverConfig {
			early_exit,
			..Default::default()
		}
	}

	/// The capacity to reserve when searching `grid`
	pub fn frontier_capacity_for(&self, grid: &Grid) -> usize {
		if self.frontier_capacity == 0 {
			grid.height() + grid.width()
		} else {
			self.frontier_capacity
		}
	}
}

impl Default for SolverConfig {
	fn default() -> SolverConfig {
		SolverConfig {
			early_exit: true,
			frontier_capacity: 0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn capacity() {
		let grid = Grid::uniform(4, 6, 1).unwrap();
		assert_eq!(SolverConfig::default().frontier_capacity_for(&grid), 10);

		let config = SolverConfig {
			frontier_capacity: 64,
			..SolverConfig::EXHAUSTIVE
		};
		assert_eq!(config.frontier_capacity_for(&grid), 64);
	}

	#[test]
	fn with_early_exit() {
		assert_eq!(SolverConfig::with_early_exit(false), SolverConfig::EXHAUSTIVE);
		assert_eq!(SolverConfig::with_early_exit(true), SolverConfig::default());
	}
}
