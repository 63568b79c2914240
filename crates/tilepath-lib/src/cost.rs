//! Heuristic estimate and fixed step costs for 8-directional movement.

use crate::coord::Coord;

/// Cost of a north/south/east/west step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step. Deliberately 1.4 rather than `SQRT_2` so path
/// costs stay reproducible across implementations.
pub const DIAGONAL_COST: f64 = 1.4;

/// One of the eight neighbour directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Fixed enumeration order used by the expansion step.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// `(d_row, d_col)` for this direction; rows grow southwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_col != 0
    }

    pub fn cost(self) -> f64 {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    /// Neighbour of `origin` in this direction, if it is not left of or above
    /// the grid. The caller still checks the far edges.
    pub fn step(self, origin: Coord) -> Option<Coord> {
        let (d_row, d_col) = self.delta();
        origin.offset(d_row, d_col)
    }

    /// Direction that moves `from` onto the adjacent cell `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.step(from) == Some(to))
    }
}

/// Straight-line distance between `coord` and `finish`.
pub fn heuristic(coord: Coord, finish: Coord) -> f64 {
    let d_row = coord.row.abs_diff(finish.row) as f64;
    let d_col = coord.col.abs_diff(finish.col) as f64;
    (d_row * d_row + d_col * d_col).sqrt()
}
