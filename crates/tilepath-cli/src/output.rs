//! Output formatting for search results.
//!
//! This module renders a [`RouteSummary`] in the format selected on the
//! command line.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;

use tilepath_lib::{Coord, RouteRenderMode, RouteSummary, NOT_FOUND_MESSAGE, OBSTACLE, PATH};

use crate::terminal::ColorPalette;

/// Output format for the search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The marked grid exactly as text, or `Not found!`.
    #[default]
    Text,
    /// A summary header followed by the grid.
    Report,
    /// The grid with path, obstacle and endpoint highlighting.
    Color,
    /// The full summary as JSON.
    Json,
}

/// Render `summary` in the requested format.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => summary.render(RouteRenderMode::Grid),
        OutputFormat::Report => summary.render(RouteRenderMode::Report),
        OutputFormat::Color => render_colored(summary, ColorPalette::detect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(summary)
                .context("failed to serialise search summary")?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Write `summary` to stdout in the requested format.
pub fn print_summary(summary: &RouteSummary, format: OutputFormat) -> Result<()> {
    let rendered = render_summary(summary, format)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}

/// Render the grid with each cell wrapped in the palette's color for its role.
pub fn render_colored(summary: &RouteSummary, palette: ColorPalette) -> String {
    if !summary.is_found() {
        return format!("{}{NOT_FOUND_MESSAGE}{}\n", palette.red, palette.reset);
    }

    let mut buffer = String::new();
    for (row, line) in summary.grid.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            let coord = Coord::new(row, col);
            let color = if coord == summary.start {
                palette.tag_start
            } else if coord == summary.finish {
                palette.tag_finish
            } else if symbol == PATH {
                palette.path
            } else if symbol == OBSTACLE {
                palette.obstacle
            } else {
                ""
            };

            if color.is_empty() {
                buffer.push(symbol);
            } else {
                buffer.push_str(color);
                buffer.push(symbol);
                buffer.push_str(palette.reset);
            }
        }
        buffer.push('\n');
    }
    buffer
}
