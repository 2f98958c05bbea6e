//! GBCE CLI - Super Simple Stocks analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Sample universe, trades, VWPs and the All Share Index
//! gbce demo
//!
//! # Same report as JSON with a five minute window
//! gbce demo --format json --window-secs 300
//!
//! # Dividend yield and P/E of one stock
//! gbce quote --symbol GIN --price 16
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;
mod sample;
mod settings;

use cli::{Cli, Commands};

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format;
    let config = settings::resolve(&cli.market)?;

    // Execute command
    match cli.command {
        Commands::Demo(args) => commands::demo::execute(args, config, format, cli.quiet)?,
        Commands::Quote(args) => commands::quote::execute(args, format, cli.quiet)?,
    }

    Ok(())
}
