//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::{DemoArgs, QuoteArgs};

/// GBCE - Super Simple Stocks analytics for the Global Beverage Corporation Exchange
#[derive(Parser)]
#[command(name = "gbce")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress section headers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub market: MarketArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Market settings shared by every command.
#[derive(Args, Debug, Default)]
pub struct MarketArgs {
    /// TOML file with `vwap_window_secs` and `index_scale`
    #[arg(long, global = true, env = "GBCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Trailing trade window in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub window_secs: Option<i64>,

    /// Decimal places kept in the All Share Index (overrides the config file)
    #[arg(long, global = true)]
    pub index_scale: Option<u32>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the sample stocks, record sample trades and print analytics
    Demo(DemoArgs),

    /// Dividend yield and P/E ratio of one sample stock at a given price
    Quote(QuoteArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
