use std::cmp::Ordering;

use crate::{Minutes, StationIdx};

/// Priority queue entry.
///
/// Ordered by accumulated cost, then by station id, so that expansion order
/// never depends on how `BinaryHeap` breaks ties internally.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct State<'a> {
    pub(crate) cost: Minutes,
    pub(crate) node: StationIdx,
    pub(crate) id: &'a str,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost, then id (reversed from standard Rust BinaryHeap)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.id.cmp(self.id))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
