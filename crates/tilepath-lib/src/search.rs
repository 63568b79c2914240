//! A* expansion step, search driver and path reconstruction.

use tracing::{debug, trace};

use crate::coord::Coord;
use crate::cost::{heuristic, Direction};
use crate::error::Result;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::tile::{Tile, PATH};

/// Progress of a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier still has entries and the finish has not been reached.
    Running,
    /// The finish was reached; carries its coordinate.
    Found(Coord),
    /// The frontier emptied without reaching the finish.
    Exhausted,
}

impl SearchState {
    pub fn is_running(self) -> bool {
        self == SearchState::Running
    }
}

/// Relax the eight neighbours of `origin` and queue the ones that improved.
///
/// Returns `Some(finish)` as soon as the finish tile is relaxed; neighbours
/// later in [`Direction::ALL`] are not examined on that call.
pub fn expand(
    grid: &mut Grid,
    frontier: &mut Frontier,
    origin: Coord,
    finish: Coord,
) -> Option<Coord> {
    let origin_g = grid.get(origin).and_then(Tile::gval)?;

    for direction in Direction::ALL {
        let Some(neighbour) = direction.step(origin) else {
            continue;
        };
        if !grid.is_valid_tile(neighbour) {
            continue;
        }

        let new_h = heuristic(neighbour, finish);
        let new_g = origin_g + direction.cost();
        let tile = &mut grid[neighbour];
        if !tile.improves(new_h + new_g) {
            continue;
        }

        tile.relax(new_g, new_h, origin);
        if neighbour == finish {
            return Some(finish);
        }
        frontier.insert(new_h + new_g, neighbour);
    }

    None
}

/// Walk parent links back from `finish`, overwriting each visited tile with
/// the path marker.
///
/// Returns the visited coordinates ordered from start to finish. The walk is
/// capped at the number of cells in the grid.
pub fn reconstruct(grid: &mut Grid, finish: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = Some(finish);
    while let Some(coord) = current {
        if path.len() == grid.len() {
            break;
        }
        let Some(tile) = grid.get_mut(coord) else {
            break;
        };
        tile.mark(PATH);
        path.push(coord);
        current = tile.parent();
    }
    path.reverse();
    path
}

/// Driver that owns the frontier and steps the search over a borrowed grid.
#[derive(Debug)]
pub struct Search<'g> {
    grid: &'g mut Grid,
    frontier: Frontier,
    start: Coord,
    finish: Coord,
    state: SearchState,
    expanded: usize,
    stale_pops: usize,
}

impl<'g> Search<'g> {
    /// Seed the start tile with zero cost and zero estimate and queue it.
    ///
    /// When `start == finish` the search is already [`SearchState::Found`].
    pub fn new(grid: &'g mut Grid, start: Coord, finish: Coord) -> Self {
        let mut frontier = Frontier::new();
        let mut state = SearchState::Running;

        match grid.get_mut(start) {
            Some(tile) => {
                tile.seed();
                if start == finish {
                    state = SearchState::Found(finish);
                } else {
                    frontier.insert(0.0, start);
                }
            }
            None => state = SearchState::Exhausted,
        }

        Self {
            grid,
            frontier,
            start,
            finish,
            state,
            expanded: 0,
            stale_pops: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Number of cells closed and expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of popped entries skipped because their tile was already closed.
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Pop one frontier entry and expand it.
    pub fn step(&mut self) -> SearchState {
        if !self.state.is_running() {
            return self.state;
        }

        let Some((priority, coord)) = self.frontier.pop_min() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let tile = &mut self.grid[coord];
        if tile.is_closed() {
            self.stale_pops += 1;
            return self.state;
        }
        tile.close();
        self.expanded += 1;
        trace!(%coord, priority, "expanding");

        if let Some(found) = expand(self.grid, &mut self.frontier, coord, self.finish) {
            self.state = SearchState::Found(found);
        }
        self.state
    }

    /// Step until the search is found or exhausted.
    pub fn run(&mut self) -> SearchState {
        while self.state.is_running() {
            self.step();
        }
        debug!(
            state = ?self.state,
            expanded = self.expanded,
            stale_pops = self.stale_pops,
            "search finished"
        );
        self.state
    }
}

/// Result of [`find_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub start: Coord,
    pub finish: Coord,
    pub state: SearchState,
    /// Coordinates from start to finish; empty when no path exists.
    pub path: Vec<Coord>,
    /// Final `gval` of the finish tile when found.
    pub cost: Option<f64>,
    pub expanded: usize,
    pub stale_pops: usize,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self.state, SearchState::Found(_))
    }

    /// Number of moves along the path.
    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Locate the markers, run the search, and mark the path on success.
pub fn find_path(grid: &mut Grid) -> Result<SearchOutcome> {
    let start = grid.find_start()?;
    let finish = grid.find_finish()?;

    let mut search = Search::new(grid, start, finish);
    let state = search.run();
    let expanded = search.expanded();
    let stale_pops = search.stale_pops();

    let (path, cost) = match state {
        SearchState::Found(found) => {
            let cost = grid.get(found).and_then(Tile::gval);
            (reconstruct(grid, found), cost)
        }
        SearchState::Running | SearchState::Exhausted => (Vec::new(), None),
    };

    Ok(SearchOutcome {
        start,
        finish,
        state,
        path,
        cost,
        expanded,
        stale_pops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(source: &str) -> Grid {
        Grid::parse(source).expect("valid grid")
    }

    #[test]
    fn expand_queues_open_neighbours() {
        let mut grid = grid("...\n.S.\n...\n");
        let origin = Coord::new(1, 1);
        grid[origin].seed();
        grid[origin].close();
        let mut frontier = Frontier::new();

        let result = expand(&mut grid, &mut frontier, origin, Coord::new(9, 9));

        assert_eq!(result, None);
        assert_eq!(frontier.len(), 8);
        assert_eq!(grid[Coord::new(0, 0)].gval(), Some(1.4));
        assert_eq!(grid[Coord::new(0, 1)].gval(), Some(1.0));
        assert_eq!(grid[Coord::new(2, 2)].parent(), Some(origin));
    }

    #[test]
    fn expand_returns_early_on_finish() {
        // North-west is examined first, so everything after it stays untouched.
        let mut grid = grid("F..\n.S.\n...\n");
        let origin = Coord::new(1, 1);
        grid[origin].seed();
        let mut frontier = Frontier::new();

        let result = expand(&mut grid, &mut frontier, origin, Coord::new(0, 0));

        assert_eq!(result, Some(Coord::new(0, 0)));
        assert!(frontier.is_empty());
        assert_eq!(grid[Coord::new(0, 1)].gval(), None);
    }

    #[test]
    fn expand_skips_worse_estimates() {
        let mut grid = grid("S..\n...\n");
        let origin = Coord::new(0, 0);
        grid[origin].seed();
        grid[Coord::new(0, 1)].relax(0.5, 1.0, Coord::new(1, 1));
        let mut frontier = Frontier::new();

        expand(&mut grid, &mut frontier, origin, Coord::new(0, 2));

        assert_eq!(grid[Coord::new(0, 1)].parent(), Some(Coord::new(1, 1)));
        assert_eq!(grid[Coord::new(0, 1)].gval(), Some(0.5));
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut grid = grid("S.F\n");
        let mut search = Search::new(&mut grid, Coord::new(0, 0), Coord::new(0, 2));
        search.frontier.insert(0.0, Coord::new(0, 0));

        assert_eq!(search.step(), SearchState::Running);
        assert_eq!(search.step(), SearchState::Running);
        assert_eq!(search.stale_pops(), 1);
        assert_eq!(search.expanded(), 1);
    }

    #[test]
    fn same_start_and_finish_is_found_immediately() {
        let mut grid = grid("S.\n..\n");
        let at = Coord::new(0, 0);
        let mut search = Search::new(&mut grid, at, at);
        assert_eq!(search.run(), SearchState::Found(at));
        assert_eq!(search.expanded(), 0);

        let path = reconstruct(&mut grid, at);
        assert_eq!(path, vec![at]);
        assert_eq!(grid[at].gval(), Some(0.0));
    }

    #[test]
    fn reconstruct_marks_chain() {
        let mut grid = grid("S.F\n");
        grid[Coord::new(0, 1)].relax(1.0, 1.0, Coord::new(0, 0));
        grid[Coord::new(0, 2)].relax(2.0, 0.0, Coord::new(0, 1));

        let path = reconstruct(&mut grid, Coord::new(0, 2));

        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert_eq!(grid.to_string(), "***\n");
    }
}
