//! Tilepath library entry points.
//!
//! This crate loads rectangular terrain grids, locates the start and finish
//! markers, and runs an A* search over 8-directional movement. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod coord;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod output;
pub mod search;
pub mod tile;

pub use coord::Coord;
pub use cost::{heuristic, Direction, DIAGONAL_COST, ORTHOGONAL_COST};
pub use error::{Error, Marker, Result};
pub use frontier::Frontier;
pub use grid::{load_grid, Grid};
pub use output::{RouteRenderMode, RouteStatus, RouteSummary, NOT_FOUND_MESSAGE};
pub use search::{expand, find_path, reconstruct, Search, SearchOutcome, SearchState};
pub use tile::{Tile, FINISH, OBSTACLE, PATH, START};
