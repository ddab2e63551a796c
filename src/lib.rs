#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Path across a weighted Grid.
//!
//! ## Introduction
//! Every Tile of the Grid has a non-negative Cost that has to be paid when stepping onto it.
//! A Path always starts in the top-left corner and ends in the bottom-right corner, moving only
//! up, down, left or right. The Cost of a Path is the sum of all Tiles on it, including the
//! Tile it starts on.
//!
//! The cheapest Path is found with [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! treating every Tile as a Node and every pair of neighboring Tiles as an Edge that costs as
//! much as the Tile it leads onto. Partial Paths share their common prefixes, so extending a
//! Path never copies the steps taken so far.
//!
//! ## Examples
//! Solving a Grid:
//! ```
//! use maze_pathfinding::{Grid, Solver};
//!
//! // the Cost of stepping onto each Tile
//! let grid = Grid::new(
//!     vec![
//!         vec![1, 3],
//!         vec![1, 1],
//!     ],
//!     2, // height
//!     2, // width
//! )
//! .unwrap();
//!
//! let path = Solver::default().solve(&grid);
//!
//! assert_eq!(path, vec![(0, 0), (1, 0), (1, 1)]);
//! assert_eq!(path.cost(), 3);
//! ```
//! Points are `(row, col)`.
//!
//! ### Annotated Paths
//! Consumers that replay a Path step by step usually need the Cost paid so far at every step:
//! ```
//! # use maze_pathfinding::{Grid, Solver};
//! # let grid = Grid::from_rows(vec![vec![1, 3], vec![1, 1]]).unwrap();
//! let path = Solver::default().solve(&grid);
//! let annotated = path.annotate(&grid);
//!
//! assert_eq!(annotated.cumulative_costs().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! ### Invalid Grids
//! A Grid needs at least one row and one column. Anything else is rejected before searching:
//! ```
//! use maze_pathfinding::{solve, SolveError};
//!
//! assert_eq!(
//!     solve(&[], 0, 3),
//!     Err(SolveError::InvalidDimensions { height: 0, width: 3 }),
//! );
//! ```
//!
//! ### Configuration
//! [`Solver::new`] takes a [`SolverConfig`] with options that change how much work the search
//! does, never which Cost it finds:
//! ```
//! use maze_pathfinding::{Grid, Solver, SolverConfig};
//!
//! let grid = Grid::uniform(4, 4, 1).unwrap();
//!
//! let fast = Solver::default().solve_with_stats(&grid);
//! let thorough = Solver::new(SolverConfig::EXHAUSTIVE).solve_with_stats(&grid);
//!
//! assert_eq!(fast.0.cost(), thorough.0.cost());
//! assert!(fast.1.expanded <= thorough.1.expanded);
//! ```
//!
//! ## Features
//! - `parallel` (default): [`Solver::solve_batch`] solves Grids on the rayon thread pool.
//! - `io`: reading Grids from and writing solutions to JSON files (see the `io` module).
//! - `log`: debug output and timings of every search through the `log` crate.

/// The Type used for the Cost of Tiles and Paths
pub type Cost = usize;

/// A shorthand for Points on the Grid, as `(row, col)`
pub type Point = (usize, usize);

mod error;
pub use self::error::{Result, SolveError};

pub mod grid;
pub use self::grid::Grid;

pub mod neighbors;

pub mod path;
pub use self::path::{AnnotatedPath, Path, Step};

pub mod search;

mod solver;
pub use self::solver::{solve, Solver, SolverConfig};

#[cfg(feature = "io")]
pub mod io;

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::{
		grid::Grid,
		neighbors::{Dir, ManhattanNeighborhood},
		path::{AnnotatedPath, Path, Step},
		solve, Cost, Point, SolveError, Solver, SolverConfig,
	};
}
