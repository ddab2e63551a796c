use super::Candidate;

use std::collections::BinaryHeap;

/// The open Candidates of a search, cheapest first.
///
/// Superseded Candidates are not removed when a cheaper one is pushed. They are filtered out
/// by the caller when popped (see [`CostTable::is_stale`](super::CostTable::is_stale)).
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Candidate>,
}

impl Frontier {
    /// Creates an empty Frontier with room for `capacity` Candidates
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds a Candidate
    pub fn push(&mut self, candidate: Candidate) {
        self.heap.push(candidate);
    }

    /// Removes and returns the cheapest Candidate
    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(cost: usize, tail: usize) -> Candidate {
        Candidate {
            pos: (0, 0),
            cost,
            tail,
        }
    }

    #[test]
    fn pops_cheapest_first() {
        let mut frontier = Frontier::default();
        for (tail, cost) in [7, 3, 9, 0, 3, 5].into_iter().enumerate() {
            frontier.push(candidate(cost, tail));
        }

        let mut costs = vec![];
        while let Some(next) = frontier.pop() {
            costs.push(next.cost);
        }
        assert_eq!(costs, vec![0, 3, 3, 5, 7, 9]);
    }

    #[test]
    fn ties_in_insertion_order() {
        let mut frontier = Frontier::with_capacity(2);
        frontier.push(candidate(4, 1));
        frontier.push(candidate(4, 0));
        assert_eq!(frontier.pop().map(|c| c.tail), Some(0));
        assert_eq!(frontier.pop().map(|c| c.tail), Some(1));
        assert_eq!(frontier.pop(), None);
    }
}
