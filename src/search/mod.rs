//! The Dijkstra search over the Grid and the structures it is built from.

mod cost_table;
pub use cost_table::{CostTable, INFINITE};

mod frontier;
pub use frontier::Frontier;

mod path_arena;
pub use path_arena::{PathArena, PathKey};

mod dijkstra;
pub use dijkstra::dijkstra_search;

use crate::{Cost, Point};
use std::cmp::Ordering;

/// A partial Path waiting in the [`Frontier`].
///
/// The steps of the Path are not stored here: `tail` refers to the last step inside of a
/// [`PathArena`], which links back to all previous steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// the Tile the Path currently ends on
    pub pos: Point,
    /// the Cost of all Tiles on the Path, including `pos`
    pub cost: Cost,
    /// the last step of the Path inside of the [`PathArena`]
    pub tail: PathKey,
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Candidate {
    /// Reversed, so that the cheapest Candidate is the greatest one. Ties go to the older
    /// Candidate.
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.cost
            .cmp(&self.cost)
            .then_with(|| rhs.tail.cmp(&self.tail))
    }
}

/// Counters collected during a single search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates pushed onto the Frontier, including the start
    pub pushed: usize,
    /// Candidates whose neighbors were inspected
    pub expanded: usize,
    /// Candidates dropped because a cheaper one had already reached their Tile
    pub stale: usize,
    /// Path nodes allocated in the arena
    pub arena_nodes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheapest_is_greatest() {
        let cheap = Candidate {
            pos: (0, 0),
            cost: 1,
            tail: 7,
        };
        let expensive = Candidate {
            pos: (0, 0),
            cost: 9,
            tail: 0,
        };
        assert!(cheap > expensive);

        let older = Candidate { tail: 3, ..cheap };
        assert!(older > cheap);
    }
}
