//! CLI error types.

use std::path::PathBuf;

use gbce_core::MarketError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a market config.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Error raised by the analytics.
    #[error(transparent)]
    Market(#[from] MarketError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
