//! Per-cell search state.

use crate::coord::Coord;

/// Impassable terrain.
pub const OBSTACLE: char = 'o';
/// Unique start cell.
pub const START: char = 'S';
/// Unique finish cell.
pub const FINISH: char = 'F';
/// Written over every cell on the reconstructed path.
pub const PATH: char = '*';

/// One grid cell: its terrain symbol plus the search bookkeeping for it.
///
/// Costs start out unknown (`None`). An unknown `fval` compares as larger than
/// any real cost, so the first relaxation of a tile always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    parent: Option<Coord>,
    closed: bool,
    gval: Option<f64>,
    hval: Option<f64>,
    symbol: char,
}

impl Tile {
    pub fn new(symbol: char) -> Self {
        Self {
            parent: None,
            closed: false,
            gval: None,
            hval: None,
            symbol,
        }
    }

    pub fn parent(&self) -> Option<Coord> {
        self.parent
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Cost of the best-known path from the start to this tile.
    pub fn gval(&self) -> Option<f64> {
        self.gval
    }

    /// Heuristic estimate of the remaining cost to the finish.
    pub fn hval(&self) -> Option<f64> {
        self.hval
    }

    /// `gval + hval`, or `None` while either half is unknown.
    pub fn fval(&self) -> Option<f64> {
        Some(self.gval? + self.hval?)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_obstacle(&self) -> bool {
        self.symbol == OBSTACLE
    }

    /// Whether a candidate total estimate should replace the current one.
    pub fn improves(&self, candidate_f: f64) -> bool {
        match self.fval() {
            Some(current) => candidate_f < current,
            None => true,
        }
    }

    pub(crate) fn relax(&mut self, gval: f64, hval: f64, parent: Coord) {
        self.gval = Some(gval);
        self.hval = Some(hval);
        self.parent = Some(parent);
    }

    /// Seed the start tile: zero cost, zero estimate, no parent.
    pub(crate) fn seed(&mut self) {
        self.gval = Some(0.0);
        self.hval = Some(0.0);
    }

    /// Closing is monotonic; closing twice is a no-op.
    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    pub(crate) fn mark(&mut self, symbol: char) {
        self.symbol = symbol;
    }
}
