use crate::{Cost, Point};

use std::cmp::Ordering;

/// What [`CostTable::get`] reports for a Tile that has not been reached yet
pub const INFINITE: Cost = Cost::MAX;

/// The lowest known Cost of reaching every Tile of the Grid.
///
/// Entries start out unreached and only ever decrease. An unreached Tile accepts any Cost,
/// even [`INFINITE`] itself, which a Path can reach exactly.
#[derive(Clone, Debug)]
pub struct CostTable {
    costs: Vec<Option<Cost>>,
    width: usize,
}

impl CostTable {
    /// Creates a table for a `height`x`width` Grid where no Tile has been reached
    pub fn new(height: usize, width: usize) -> CostTable {
        CostTable {
            costs: vec![None; height * width],
            width,
        }
    }

    fn index(&self, pos: Point) -> usize {
        pos.0 * self.width + pos.1
    }

    /// The lowest known Cost for `pos`, or [`INFINITE`] if it has not been reached
    pub fn get(&self, pos: Point) -> Cost {
        self.costs[self.index(pos)].unwrap_or(INFINITE)
    }

    /// Stores `cost` for `pos` if it is strictly cheaper than the known Cost.
    ///
    /// Returns `true` if the table changed.
    pub fn try_update(&mut self, pos: Point, cost: Cost) -> bool {
        let index = self.index(pos);
        let known = &mut self.costs[index];
        if known.map_or(true, |known| cost < known) {
            *known = Some(cost);
            true
        } else {
            false
        }
    }

    /// Returns `true` if a Candidate for `pos` with `cost` has been superseded by a cheaper one.
    ///
    /// ## Panics
    /// if `cost` is lower than the known Cost, or `pos` was never reached. Every Candidate
    /// updates the table when it is created, so this means that the Frontier returned
    /// Candidates out of order.
    #[track_caller]
    pub fn is_stale(&self, pos: Point, cost: Cost) -> bool {
        let known = match self.costs[self.index(pos)] {
            Some(known) => known,
            None => panic!("Candidate for unreached Tile {:?}", pos),
        };
        match cost.cmp(&known) {
            Ordering::Greater => true,
            Ordering::Equal => false,
            Ordering::Less => panic!("Binary Heap failed"),
        }
    }
}
