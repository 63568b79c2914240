//! Shared fixture helpers for integration tests.

use std::collections::HashSet;
use std::path::PathBuf;

use tilepath_lib::{load_grid, Coord, Direction, Grid};

/// Path to the fixtures directory shared by the library and CLI tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load a fixture map by file name.
#[allow(dead_code)]
pub fn fixture_grid(name: &str) -> Grid {
    let path = fixtures_dir().join(name);
    load_grid(&path).unwrap_or_else(|err| panic!("load fixture {}: {err}", path.display()))
}

/// Sum the step costs along `path`, asserting every move is to an adjacent cell.
#[allow(dead_code)]
pub fn path_cost(path: &[Coord]) -> f64 {
    path.windows(2)
        .map(|pair| {
            Direction::between(pair[0], pair[1])
                .unwrap_or_else(|| panic!("{} and {} are not adjacent", pair[0], pair[1]))
                .cost()
        })
        .sum()
}

/// Assert that no coordinate appears twice in `path`.
#[allow(dead_code)]
pub fn assert_no_repeats(path: &[Coord]) {
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a cell: {path:?}");
}

#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
