//! Print the maximal gift value of a board.
//!
//! Run with:
//! `cargo run --bin max_gift -- board.txt`
//! `printf '1 2 3\n1 4 1\n' | cargo run --bin max_gift`

use std::fs::File;
use std::io::{self, BufReader};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gift_path::{read_grid, Grid, SolverConfig, Strategy};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "max_gift")]
#[command(about = "Maximal value of gifts on a right/down path through a grid")]
struct Cli {
    /// Board file, one row per line; reads stdin when omitted or '-'
    file: Option<PathBuf>,

    /// Accumulation strategy (table or wavefront)
    #[arg(long, default_value_t = Strategy::Table)]
    strategy: Strategy,

    /// Layers per engine block; defaults to the square root of the layer count
    #[arg(long)]
    block_size: Option<NonZeroUsize>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let grid = load(cli.file.as_deref())?;
    info!(rows = grid.rows(), cols = grid.cols(), "loaded board");

    let mut config = SolverConfig::new().with_strategy(cli.strategy);
    if let Some(b) = cli.block_size {
        config = config.with_block_size(b.get());
    }

    println!("{}", config.solve(&grid));
    Ok(())
}

fn load(path: Option<&std::path::Path>) -> Result<Grid> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let file = File::open(p).with_context(|| format!("cannot open {}", p.display()))?;
            read_grid(BufReader::new(file))
                .with_context(|| format!("invalid board in {}", p.display()))
        }
        _ => read_grid(io::stdin().lock()).context("invalid board on stdin"),
    }
}

/// Reads `RUST_LOG`, defaulting to `warn`; output goes to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}
