//! Resolves the market configuration from file and flags.

use std::fs;

use gbce_market::MarketConfig;
use tracing::debug;

use crate::cli::MarketArgs;
use crate::error::{CliError, CliResult};

/// Builds the effective config: defaults, then the TOML file, then flags.
pub fn resolve(args: &MarketArgs) -> CliResult<MarketConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&text).map_err(|source| CliError::ConfigParse {
                path: path.clone(),
                source,
            })?
        }
        None => MarketConfig::default(),
    };

    if let Some(secs) = args.window_secs {
        config = config.with_vwap_window_secs(secs);
    }
    if let Some(scale) = args.index_scale {
        config = config.with_index_scale(scale);
    }

    config.validate()?;
    debug!(?config, "resolved market config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = resolve(&MarketArgs::default()).unwrap();
        assert_eq!(config, MarketConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vwap_window_secs = 300\nindex_scale = 4").unwrap();

        let args = MarketArgs {
            config: Some(file.path().to_path_buf()),
            window_secs: None,
            index_scale: Some(6),
        };
        let config = resolve(&args).unwrap();
        assert_eq!(config.vwap_window_secs, 300);
        assert_eq!(config.index_scale, 6);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "index_scale = 3").unwrap();

        let args = MarketArgs {
            config: Some(file.path().to_path_buf()),
            ..MarketArgs::default()
        };
        let config = resolve(&args).unwrap();
        assert_eq!(config.vwap_window_secs, 900);
        assert_eq!(config.index_scale, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = MarketArgs {
            window_secs: Some(0),
            ..MarketArgs::default()
        };
        assert!(matches!(resolve(&args), Err(CliError::Market(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "index_scale = \"twelve\"").unwrap();
        let args = MarketArgs {
            config: Some(file.path().to_path_buf()),
            ..MarketArgs::default()
        };
        assert!(matches!(resolve(&args), Err(CliError::ConfigParse { .. })));
    }

    #[test]
    fn test_missing_file_reported() {
        let args = MarketArgs {
            config: Some("/nonexistent/gbce.toml".into()),
            ..MarketArgs::default()
        };
        assert!(matches!(resolve(&args), Err(CliError::ConfigRead { .. })));
    }
}
