//! Dense row-major terrain grid and map loading.

use std::fmt;
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::coord::Coord;
use crate::error::{Error, Marker, Result};
use crate::tile::Tile;

/// Rectangular collection of tiles addressed by [`Coord`].
///
/// Built once from source text and never resized; the search mutates tiles in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Parse a grid where each line is one row of single-character symbols.
    ///
    /// A trailing `\r` on each line is ignored so CRLF files load the same as
    /// LF files. Every row must have the length of the first one.
    pub fn parse(source: &str) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (index, line) in source.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let row: Vec<Tile> = line.chars().map(Tile::new).collect();
            if index == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(Error::InvalidMap {
                    line: index + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            tiles.extend(row);
            rows += 1;
        }

        if tiles.is_empty() {
            return Err(Error::EmptyMap);
        }

        Ok(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells; also the upper bound on any path length.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.contains(coord)
            .then(|| &self.tiles[coord.row * self.cols + coord.col])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        if self.contains(coord) {
            Some(&mut self.tiles[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    /// Whether the search may step onto `coord`: in bounds, not an obstacle,
    /// and not yet closed.
    ///
    /// The rightmost column is passable like any other.
    pub fn is_valid_tile(&self, coord: Coord) -> bool {
        self.get(coord)
            .is_some_and(|tile| !tile.is_obstacle() && !tile.is_closed())
    }

    /// First start marker in row-major scan order.
    pub fn find_start(&self) -> Result<Coord> {
        self.find_marker(Marker::Start)
    }

    /// First finish marker in row-major scan order.
    pub fn find_finish(&self) -> Result<Coord> {
        self.find_marker(Marker::Finish)
    }

    fn find_marker(&self, marker: Marker) -> Result<Coord> {
        let symbol = marker.symbol();
        self.tiles
            .iter()
            .position(|tile| tile.symbol() == symbol)
            .map(|index| Coord::new(index / self.cols, index % self.cols))
            .ok_or(Error::MissingMarker { marker })
    }

    /// Iterate over `(coord, tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, tile)| (Coord::new(index / cols, index % cols), tile))
    }

    /// Current display symbols, one string per row.
    pub fn row_strings(&self) -> Vec<String> {
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(Tile::symbol).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::parse(s)
    }
}

impl Index<Coord> for Grid {
    type Output = Tile;

    fn index(&self, coord: Coord) -> &Tile {
        assert!(self.contains(coord), "coordinate {coord} outside grid");
        &self.tiles[coord.row * self.cols + coord.col]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Tile {
        assert!(self.contains(coord), "coordinate {coord} outside grid");
        &mut self.tiles[coord.row * self.cols + coord.col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols) {
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read and parse a map file.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let source = fs::read_to_string(path)?;
    let grid = Grid::parse(&source)?;
    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "loaded map"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_ragged_line() {
        let err = Grid::parse("...\n..\n").unwrap_err();
        match err {
            Error::InvalidMap {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_accepts_crlf() {
        let grid = Grid::parse("S.\r\n.F\r\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid.to_string(), "S.\n.F\n");
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(Grid::parse(""), Err(Error::EmptyMap)));
    }

    #[test]
    fn rightmost_column_is_valid() {
        let grid = Grid::parse("S..\n..F\n").unwrap();
        assert!(grid.is_valid_tile(Coord::new(0, 2)));
        assert!(grid.is_valid_tile(Coord::new(1, 2)));
        assert!(!grid.is_valid_tile(Coord::new(0, 3)));
        assert!(!grid.is_valid_tile(Coord::new(2, 0)));
    }

    #[test]
    fn obstacles_and_closed_tiles_are_invalid() {
        let mut grid = Grid::parse("So\n.F\n").unwrap();
        assert!(!grid.is_valid_tile(Coord::new(0, 1)));
        grid[Coord::new(1, 0)].close();
        assert!(!grid.is_valid_tile(Coord::new(1, 0)));
    }

    #[test]
    fn markers_use_first_match_in_scan_order() {
        let grid = Grid::parse(".S.S\nF..F\n").unwrap();
        assert_eq!(grid.find_start().unwrap(), Coord::new(0, 1));
        assert_eq!(grid.find_finish().unwrap(), Coord::new(1, 0));
    }

    #[test]
    fn missing_finish_is_reported() {
        let grid = Grid::parse("S..\n...\n").unwrap();
        assert!(matches!(
            grid.find_finish(),
            Err(Error::MissingMarker {
                marker: Marker::Finish
            })
        ));
    }
}
