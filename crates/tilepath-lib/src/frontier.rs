//! Open list for the A* search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::coord::Coord;

/// Min-priority queue of `(priority, coord)` entries.
///
/// Entries pop in ascending priority, ties broken by ascending coordinate.
/// The same coordinate may be queued several times with different priorities;
/// the tile itself holds the authoritative cost and the search driver skips
/// entries whose tile is already closed.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, priority: f64, coord: Coord) {
        self.heap.push(FrontierEntry {
            priority: FloatOrd(priority),
            coord,
        });
    }

    /// Remove the smallest `(priority, coord)` pair, or `None` when empty.
    pub fn pop_min(&mut self) -> Option<(f64, Coord)> {
        self.heap
            .pop()
            .map(|entry| (entry.priority.0, entry.coord))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    priority: FloatOrd,
    coord: Coord,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
