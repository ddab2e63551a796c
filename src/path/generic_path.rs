use crate::Cost;

use std::sync::Arc;

/// A finished Path and its total Cost.
///
/// The first element is the start of the Path and the last element is the goal. The Cost
/// includes the Cost of every Tile on the Path, including the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
}

impl<P> Path<P> {
    /// Creates a Path from its steps and total Cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
        }
    }

    /// Creates a Path by copying the steps from a slice
    pub fn from_slice(path: &[P], cost: Cost) -> Path<P>
    where
        P: Clone,
    {
        Path {
            path: path.into(),
            cost,
        }
    }

    /// The total Cost of walking the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the Path has no steps
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The steps of the Path as a slice
    pub fn steps(&self) -> &[P] {
        &self.path
    }

    /// The first step, if any
    pub fn first(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last step, if any
    pub fn last(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path[..] == rhs[..]
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        &self.path[..] == *rhs
    }
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}
