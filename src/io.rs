//! Reading Grids from and writing solutions to JSON files.
//!
//! A Grid is stored as
//! ```json
//! { "maze": [[1, 3], [1, 1]], "height": 2, "width": 2 }
//! ```
//! and a solution repeats the Grid next to the steps of the Path and the Cost paid up to each
//! step:
//! ```json
//! {
//!   "maze": [[1, 3], [1, 1]], "height": 2, "width": 2,
//!   "solution": [[0, 0], [1, 0], [1, 1]],
//!   "cumulative_costs": [1, 2, 3]
//! }
//! ```

use crate::{
	error::SolveError, grid::Grid, neighbors::Dir, path::AnnotatedPath, Cost, Point, Solver,
	SolverConfig,
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors while loading, solving or storing a Grid
#[derive(Debug, Error)]
pub enum IoError {
	/// the file could not be read or written
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
	/// the file is not valid JSON or does not have the expected fields
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
	/// the Grid inside of the file is malformed
	#[error("invalid grid: {0}")]
	Solve(#[from] SolveError),
	/// two consecutive steps of a stored solution are not cardinal neighbors
	#[error("solution jumps from {from:?} to {to:?} at step {index}")]
	Discontinuous {
		/// index of the step that was jumped to
		index: usize,
		/// the step before the jump
		from: Point,
		/// the step after the jump
		to: Point,
	},
}

/// A Grid as it is stored on disk
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeFile {
	/// the Cost of every Tile, row by row
	pub maze: Vec<Vec<Cost>>,
	/// the number of rows
	pub height: usize,
	/// the number of columns
	pub width: usize,
}

impl MazeFile {
	/// Validates the stored dimensions and converts into a [`Grid`]
	pub fn into_grid(self) -> Result<Grid, SolveError> {
		Grid::new(self.maze, self.height, self.width)
	}
}

impl From<&Grid> for MazeFile {
	fn from(grid: &Grid) -> MazeFile {
		MazeFile {
			maze: grid.to_rows(),
			height: grid.height(),
			width: grid.width(),
		}
	}
}

/// A Grid together with its cheapest Path, as it is stored on disk
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedMaze {
	/// the Cost of every Tile, row by row
	pub maze: Vec<Vec<Cost>>,
	/// the number of rows
	pub height: usize,
	/// the number of columns
	pub width: usize,
	/// the steps of the Path, as `[row, col]`
	pub solution: Vec<Point>,
	/// the Cost paid up to and including each step of `solution`
	pub cumulative_costs: Vec<Cost>,
}

impl SolvedMaze {
	/// Combines a Grid with an annotated Path across it
	pub fn new(grid: &Grid, path: &AnnotatedPath) -> SolvedMaze {
		SolvedMaze {
			maze: grid.to_rows(),
			height: grid.height(),
			width: grid.width(),
			solution: path.points().collect(),
			cumulative_costs: path.cumulative_costs().collect(),
		}
	}

	/// The Cost of the whole Path
	pub fn total_cost(&self) -> Cost {
		self.cumulative_costs.last().copied().unwrap_or(0)
	}

	/// The direction of every move along the solution, one fewer than there are steps.
	///
	/// ## Errors
	/// [`IoError::Discontinuous`] if two consecutive steps are not cardinal neighbors
	pub fn moves(&self) -> Result<Vec<Dir>, IoError> {
		self.solution
			.windows(2)
			.enumerate()
			.map(|(i, pair)| {
				Dir::between(pair[0], pair[1]).ok_or(IoError::Discontinuous {
					index: i + 1,
					from: pair[0],
					to: pair[1],
				})
			})
			.collect()
	}
}

/// Serializes `value` as pretty-printed JSON
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, IoError> {
	Ok(serde_json::to_string_pretty(value)?)
}

fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
	let reader = BufReader::new(File::open(path)?);
	Ok(serde_json::from_reader(reader)?)
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
	let mut writer = BufWriter::new(File::create(path)?);
	serde_json::to_writer(&mut writer, value)?;
	writer.flush()?;
	Ok(())
}

/// Parses a [`MazeFile`] from a JSON string
pub fn parse_maze(s: &str) -> Result<MazeFile, IoError> {
	Ok(serde_json::from_str(s)?)
}

/// Reads a [`MazeFile`] from a JSON file
pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<MazeFile, IoError> {
	read_json(path)
}

/// Reads a [`SolvedMaze`] from a JSON file
pub fn read_solution<P: AsRef<Path>>(path: P) -> Result<SolvedMaze, IoError> {
	read_json(path)
}

/// Writes a [`SolvedMaze`] to a JSON file, replacing any existing file
pub fn write_solution<P: AsRef<Path>>(path: P, solution: &SolvedMaze) -> Result<(), IoError> {
	write_json(path, solution)
}

/// Reads the Grid at `input`, solves it and writes the solution to `output`.
///
/// Returns the written solution.
pub fn solve_file<I, O>(input: I, output: O, config: SolverConfig) -> Result<SolvedMaze, IoError>
where
	I: AsRef<Path>,
	O: AsRef<Path>,
{
	let grid = read_maze(input)?.into_grid()?;
	let path = Solver::new(config).solve(&grid);
	let solved = SolvedMaze::new(&grid, &path.annotate(&grid));

	write_solution(output.as_ref(), &solved)?;

	#[cfg(feature = "log")]
	log::info!(
		"solution with cost {} written to {}",
		solved.total_cost(),
		output.as_ref().display()
	);

	Ok(solved)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse() {
		let maze = parse_maze(r#"{ "maze": [[1, 3], [1, 1]], "height": 2, "width": 2 }"#).unwrap();
		assert_eq!(maze.height, 2);
		let grid = maze.into_grid().unwrap();
		assert_eq!(grid[(0, 1)], 3);
	}

	#[test]
	fn parse_zero_width() {
		let maze = parse_maze(r#"{ "maze": [[]], "height": 1, "width": 0 }"#).unwrap();
		assert_eq!(
			maze.into_grid(),
			Err(SolveError::InvalidDimensions {
				height: 1,
				width: 0
			})
		);
	}

	#[test]
	fn parse_huge_width() {
		let maze =
			parse_maze(r#"{ "maze": [[1]], "height": 1, "width": 1099511627776 }"#).unwrap();
		assert_eq!(
			maze.into_grid(),
			Err(SolveError::RowLength {
				row: 0,
				expected: 1 << 40,
				found: 1
			})
		);
	}

	#[test]
	fn parse_missing_field() {
		let err = parse_maze(r#"{ "maze": [[1]], "height": 1 }"#).unwrap_err();
		assert!(matches!(err, IoError::Json(_)));
	}

	#[test]
	fn solution_format() {
		let grid = Grid::from_rows(vec![vec![1, 3], vec![1, 1]]).unwrap();
		let path = Solver::default().solve(&grid);
		let solved = SolvedMaze::new(&grid, &path.annotate(&grid));

		let value: serde_json::Value =
			serde_json::from_str(&to_json_string(&solved).unwrap()).unwrap();
		assert_eq!(
			value,
			serde_json::json!({
				"maze": [[1, 3], [1, 1]],
				"height": 2,
				"width": 2,
				"solution": [[0, 0], [1, 0], [1, 1]],
				"cumulative_costs": [1, 2, 3],
			})
		);
		assert_eq!(solved.total_cost(), 3);
		assert_eq!(solved.moves().unwrap(), vec![Dir::Down, Dir::Right]);
	}

	#[test]
	fn discontinuous() {
		let solved = SolvedMaze {
			maze: vec![vec![1, 1], vec![1, 1]],
			height: 2,
			width: 2,
			solution: vec![(0, 0), (1, 1)],
			cumulative_costs: vec![1, 2],
		};
		assert!(matches!(
			solved.moves(),
			Err(IoError::Discontinuous { index: 1, .. })
		));
	}
}
