use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tilepath_cli::config::resolve_map_path;
use tilepath_cli::output::{print_summary, OutputFormat};
use tilepath_lib::{find_path, load_grid, RouteSummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a lowest-cost path across a terrain map with A*")]
struct Cli {
    /// Map file to search. Falls back to $TILEPATH_MAP, then ./map.txt.
    map: Option<PathBuf>,

    /// How to print the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map_path = resolve_map_path(cli.map.as_deref());
    let mut grid = load_grid(&map_path)
        .with_context(|| format!("failed to load map from {}", map_path.display()))?;
    let outcome = find_path(&mut grid)
        .with_context(|| format!("cannot search map {}", map_path.display()))?;

    tracing::info!(
        found = outcome.is_found(),
        cost = ?outcome.cost,
        expanded = outcome.expanded,
        "search complete"
    );

    let summary = RouteSummary::from_outcome(&outcome, &grid);
    print_summary(&summary, cli.format)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
