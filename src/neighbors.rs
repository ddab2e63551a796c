//! Movement along the Grid.
//!
//! Paths move along the 4 cardinal directions only.

use crate::Point;

/// One of the 4 cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
	/// towards row 0
	Up = 0,
	/// towards the last column
	Right = 1,
	/// towards the last row
	Down = 2,
	/// towards column 0
	Left = 3,
}

const UNIT_CIRCLE: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl Dir {
	/// All 4 directions in clockwise order, starting with [`Dir::Up`]
	pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

	/// The `(d_row, d_col)` offset of a single step in this direction
	pub fn delta(self) -> (isize, isize) {
		UNIT_CIRCLE[self as usize]
	}

	/// The direction pointing the other way
	pub fn opposite(self) -> Dir {
		Dir::ALL[(self as usize + 2) % 4]
	}

	/// Returns the direction of a single step from `from` to `to`,
	/// or `None` if the two Points are not cardinal neighbors.
	pub fn between(from: Point, to: Point) -> Option<Dir> {
		let delta = (
			to.0 as isize - from.0 as isize,
			to.1 as isize - from.1 as isize,
		);
		UNIT_CIRCLE
			.iter()
			.position(|&d| d == delta)
			.map(|i| Dir::ALL[i])
	}
}

/// The Neighborhood of Agents moving along the 4 cardinal directions on a bounded Grid.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	height: usize,
	width: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `height` and `width` are the size of the Grid to move on.
	pub fn new(height: usize, width: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { height, width }
	}

	/// The Point one step from `point` in direction `dir`, if it is still on the Grid
	pub fn step(&self, point: Point, dir: Dir) -> Option<Point> {
		let (d_row, d_col) = dir.delta();
		let row = point.0.checked_add_signed(d_row)?;
		let col = point.1.checked_add_signed(d_col)?;
		if row < self.height && col < self.width {
			Some((row, col))
		} else {
			None
		}
	}

	/// Iterates over all in-bounds neighbors of `point`, clockwise starting with Up.
	pub fn get_all_neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
		Dir::ALL
			.into_iter()
			.filter_map(move |dir| self.step(point, dir))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_all_neighbors() {
		let neighborhood = ManhattanNeighborhood::new(5, 5);
		assert_eq!(
			neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
			vec![(0, 3), (1, 2), (0, 1)],
		);
		assert_eq!(
			neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
			vec![(3, 4), (4, 3)],
		);
	}

	#[test]
	fn single_tile_has_no_neighbors() {
		let neighborhood = ManhattanNeighborhood::new(1, 1);
		assert_eq!(neighborhood.get_all_neighbors((0, 0)).count(), 0);
	}

	#[test]
	fn between() {
		assert_eq!(Dir::between((1, 1), (0, 1)), Some(Dir::Up));
		assert_eq!(Dir::between((1, 1), (1, 2)), Some(Dir::Right));
		assert_eq!(Dir::between((1, 1), (2, 2)), None);
		assert_eq!(Dir::between((1, 1), (1, 1)), None);
		for dir in Dir::ALL {
			assert_eq!(dir.opposite().opposite(), dir);
		}
	}
}
