//! The weighted Grid that is searched.

use crate::{
	error::{Result, SolveError},
	Cost, Point,
};
use std::fmt;
use std::ops::Index;

/// An immutable Grid of non-negative walking Costs.
///
/// The Cost of a Tile is what a Path pays for stepping onto it. The start Tile is paid for once,
/// when the Path begins.
///
/// Cells are stored row-major in a single buffer. Points are `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	cells: Vec<Cost>,
	height: usize,
	width: usize,
}

impl Grid {
	/// Creates a new Grid from its rows and the expected dimensions.
	///
	/// ## Errors
	/// - [`SolveError::InvalidDimensions`] if `height` or `width` is zero. This is checked first.
	/// - [`SolveError::HeightMismatch`] if `rows.len() != height`
	/// - [`SolveError::RowLength`] if any row does not have exactly `width` cells
	/// - [`SolveError::CostOverflow`] if the Costs of all Tiles added up do not fit into a
	///   [`Cost`]. This bounds the Cost of every Path that visits each Tile at most once.
	///
	/// ## Examples
	/// ```
	/// use maze_pathfinding::{Grid, SolveError};
	///
	/// let grid = Grid::new(vec![vec![1, 3], vec![1, 1]], 2, 2).unwrap();
	/// assert_eq!(grid[(0, 1)], 3);
	///
	/// assert_eq!(
	///     Grid::new(vec![], 0, 4),
	///     Err(SolveError::InvalidDimensions { height: 0, width: 4 }),
	/// );
	/// ```
	pub fn new(rows: Vec<Vec<Cost>>, height: usize, width: usize) -> Result<Grid> {
		if height == 0 || width == 0 {
			return Err(SolveError::InvalidDimensions { height, width });
		}
		if rows.len() != height {
			return Err(SolveError::HeightMismatch {
				expected: height,
				found: rows.len(),
			});
		}

		for (row, values) in rows.iter().enumerate() {
			if values.len() != width {
				return Err(SolveError::RowLength {
					row,
					expected: width,
					found: values.len(),
				});
			}
		}

		rows.iter()
			.flatten()
			.try_fold(0, |total: Cost, &cost| total.checked_add(cost))
			.ok_or(SolveError::CostOverflow)?;

		let cells = rows.concat();

		Ok(Grid {
			cells,
			height,
			width,
		})
	}

	/// Creates a new Grid, taking the dimensions from the rows themselves.
	///
	/// The width is the length of the first row. Empty input is rejected with
	/// [`SolveError::InvalidDimensions`].
	pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Grid> {
		let height = rows.len();
		let width = rows.first().map_or(0, Vec::len);
		Grid::new(rows, height, width)
	}

	/// Creates a `height`x`width` Grid where every Tile costs `cost`.
	pub fn uniform(height: usize, width: usize, cost: Cost) -> Result<Grid> {
		Grid::new(vec![vec![cost; width]; height], height, width)
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The total number of Tiles
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Always `false`, since a Grid cannot be constructed without Tiles.
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// The top-left corner, where every Path starts
	pub fn start(&self) -> Point {
		(0, 0)
	}

	/// The bottom-right corner, where every Path ends
	pub fn goal(&self) -> Point {
		(self.height - 1, self.width - 1)
	}

	/// Returns `true` if `pos` lies inside of the Grid
	pub fn in_bounds(&self, pos: Point) -> bool {
		pos.0 < self.height && pos.1 < self.width
	}

	/// The Cost of stepping onto `pos`, or `None` if it is out of bounds
	pub fn get(&self, pos: Point) -> Option<Cost> {
		if self.in_bounds(pos) {
			Some(self.cells[self.index_of(pos)])
		} else {
			None
		}
	}

	/// Iterates over the rows of the Grid
	pub fn rows(&self) -> std::slice::Chunks<'_, Cost> {
		self.cells.chunks(self.width)
	}

	/// Copies the Grid back into nested rows
	pub fn to_rows(&self) -> Vec<Vec<Cost>> {
		self.rows().map(<[Cost]>::to_vec).collect()
	}

	/// The position of `pos` in the flat, row-major cell buffer.
	///
	/// `pos` must be in bounds.
	pub(crate) fn index_of(&self, pos: Point) -> usize {
		debug_assert!(self.in_bounds(pos), "{:?} is outside of the Grid", pos);
		pos.0 * self.width + pos.1
	}
}

impl Index<Point> for Grid {
	type Output = Cost;

	#[track_caller]
	fn index(&self, pos: Point) -> &Cost {
		assert!(
			self.in_bounds(pos),
			"{:?} is outside of the {}x{} Grid",
			pos,
			self.height,
			self.width
		);
		&self.cells[self.index_of(pos)]
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		writeln!(fmt, "Grid[{}x{}]", self.height, self.width)?;
		for row in self.rows() {
			let mut iter = row.iter();
			if let Some(first) = iter.next() {
				write!(fmt, "{}", first)?;
			}
			for cost in iter {
				write!(fmt, " {}", cost)?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}
