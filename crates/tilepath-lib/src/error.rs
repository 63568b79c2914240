use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Convenient result alias for the tilepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Grid markers that must be present before a search can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Start,
    Finish,
}

impl Marker {
    /// Grid symbol that denotes this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::Start => crate::tile::START,
            Marker::Finish => crate::tile::FINISH,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Marker::Start => "start",
            Marker::Finish => "finish",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a row's length differs from the rows before it.
    #[error("invalid map: line {line} has {found} cells, expected {expected}")]
    InvalidMap {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when the map source contains no rows at all.
    #[error("invalid map: no rows found")]
    EmptyMap,

    /// Raised when the start or finish marker is absent from the grid.
    #[error("unable to find {marker} marker '{}'", .marker.symbol())]
    MissingMarker { marker: Marker },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
