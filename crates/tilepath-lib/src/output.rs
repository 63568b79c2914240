use std::fmt::Write;

use serde::Serialize;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::search::SearchOutcome;

/// Message printed when the finish cannot be reached.
pub const NOT_FOUND_MESSAGE: &str = "Not found!";

/// Terminal outcome of a search as reported to users.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Found,
    NotFound,
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// The marked grid, or the not-found message.
    Grid,
    /// A one-line header with endpoints, cost and search effort, then the grid.
    Report,
}

/// Structured representation of a search result that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub status: RouteStatus,
    pub start: Coord,
    pub finish: Coord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub steps: usize,
    pub path: Vec<Coord>,
    pub expanded: usize,
    pub stale_pops: usize,
    pub grid: Vec<String>,
}

impl RouteSummary {
    /// Build a summary from an outcome and the grid it was computed on.
    pub fn from_outcome(outcome: &SearchOutcome, grid: &Grid) -> Self {
        let status = if outcome.is_found() {
            RouteStatus::Found
        } else {
            RouteStatus::NotFound
        };

        Self {
            status,
            start: outcome.start,
            finish: outcome.finish,
            cost: outcome.cost,
            steps: outcome.step_count(),
            path: outcome.path.clone(),
            expanded: outcome.expanded,
            stale_pops: outcome.stale_pops,
            grid: grid.row_strings(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == RouteStatus::Found
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::Grid => self.render_grid(),
            RouteRenderMode::Report => self.render_report(),
        }
    }

    fn render_grid(&self) -> String {
        if !self.is_found() {
            return format!("{NOT_FOUND_MESSAGE}\n");
        }

        let mut buffer = String::new();
        for row in &self.grid {
            let _ = writeln!(buffer, "{row}");
        }
        buffer
    }

    fn render_report(&self) -> String {
        let mut buffer = String::new();
        match self.cost {
            Some(cost) if self.is_found() => {
                let _ = writeln!(
                    buffer,
                    "Path: {} -> {} ({} steps, cost {:.1}, expanded {})",
                    self.start, self.finish, self.steps, cost, self.expanded
                );
            }
            _ => {
                let _ = writeln!(
                    buffer,
                    "Path: {} -> {} (no path, expanded {})",
                    self.start, self.finish, self.expanded
                );
            }
        }
        buffer.push_str(&self.render_grid());
        buffer
    }
}
