//! Map path resolution.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no map path is given on the command line.
pub const MAP_ENV_VAR: &str = "TILEPATH_MAP";

/// Map file read when neither the argument nor the environment variable is set.
pub const DEFAULT_MAP_FILE: &str = "map.txt";

/// Resolve which map file to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `TILEPATH_MAP` environment variable.
/// 3. `map.txt` in the current working directory.
pub fn resolve_map_path(target: Option<&Path>) -> PathBuf {
    if let Some(explicit) = target {
        return explicit.to_path_buf();
    }

    if let Some(env_path) = env::var_os(MAP_ENV_VAR).filter(|value| !value.is_empty()) {
        return PathBuf::from(env_path);
    }

    PathBuf::from(DEFAULT_MAP_FILE)
}
