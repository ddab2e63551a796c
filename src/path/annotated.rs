use super::Path;
use crate::{grid::Grid, neighbors::Dir, Cost, Point};

/// A single step of an [`AnnotatedPath`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// the Tile this step stands on
    pub pos: Point,
    /// the Cost of the Path up to and including this step
    pub cumulative_cost: Cost,
}

/// A Path where every step carries the running total of the Costs paid so far.
///
/// The first step's `cumulative_cost` is the Cost of the start Tile. Every following step adds
/// the Cost of its own Tile, so the last step's `cumulative_cost` is the Cost of the whole Path.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AnnotatedPath {
    steps: Vec<Step>,
}

impl AnnotatedPath {
    /// The annotated steps
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The Cost of the whole Path, `0` if it is empty
    pub fn total_cost(&self) -> Cost {
        self.steps.last().map_or(0, |step| step.cumulative_cost)
    }

    /// Iterates over the annotated steps
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The Points without their annotation
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|step| step.pos)
    }

    /// The running totals without the Points
    pub fn cumulative_costs(&self) -> impl Iterator<Item = Cost> + '_ {
        self.steps.iter().map(|step| step.cumulative_cost)
    }
}

impl IntoIterator for AnnotatedPath {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Path<Point> {
    /// Attaches the running total of Tile Costs to every step.
    ///
    /// ## Panics
    /// if a step lies outside of `grid`, or if the running total overflows. The latter cannot
    /// happen for a Path that visits each Tile of `grid` at most once.
    ///
    /// ## Examples
    /// ```
    /// use maze_pathfinding::{Grid, Solver};
    ///
    /// let grid = Grid::from_rows(vec![vec![1, 3], vec![2, 1]]).unwrap();
    /// let path = Solver::default().solve(&grid);
    /// let annotated = path.annotate(&grid);
    ///
    /// assert_eq!(annotated.cumulative_costs().collect::<Vec<_>>(), vec![1, 3, 4]);
    /// assert_eq!(annotated.total_cost(), path.cost());
    /// ```
    pub fn annotate(&self, grid: &Grid) -> AnnotatedPath {
        let mut total: Cost = 0;
        let steps = self
            .iter()
            .map(|&pos| {
                total += grid[pos];
                Step {
                    pos,
                    cumulative_cost: total,
                }
            })
            .collect();
        AnnotatedPath { steps }
    }

    /// Returns `true` if every pair of consecutive steps is exactly one cardinal step apart
    pub fn is_contiguous(&self) -> bool {
        self.steps()
            .windows(2)
            .all(|pair| Dir::between(pair[0], pair[1]).is_some())
    }
}
