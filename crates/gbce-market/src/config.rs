//! Configuration for market analytics.

use chrono::Duration;
use gbce_core::{MarketError, MarketResult};
use serde::{Deserialize, Serialize};

/// Default trailing window for the volume weighted price: 15 minutes.
pub const DEFAULT_VWAP_WINDOW_SECS: i64 = 900;

/// Default number of decimal places kept in the All Share Index.
pub const DEFAULT_INDEX_SCALE: u32 = 12;

/// Largest scale a `Decimal` can carry.
pub const MAX_INDEX_SCALE: u32 = 28;

/// Configuration for market analytics.
///
/// Controls the trailing window used for volume weighted prices and the
/// precision at which the All Share Index root is rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Length of the trailing trade window, in seconds. The window is
    /// inclusive: a trade exactly this old still counts.
    pub vwap_window_secs: i64,

    /// Decimal places kept after extracting the index root.
    pub index_scale: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            vwap_window_secs: DEFAULT_VWAP_WINDOW_SECS,
            index_scale: DEFAULT_INDEX_SCALE,
        }
    }
}

impl MarketConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trailing window length in seconds.
    #[must_use]
    pub fn with_vwap_window_secs(mut self, secs: i64) -> Self {
        self.vwap_window_secs = secs;
        self
    }

    /// Sets the index rounding scale.
    #[must_use]
    pub fn with_index_scale(mut self, scale: u32) -> Self {
        self.index_scale = scale;
        self
    }

    /// Returns the trailing window as a duration.
    #[must_use]
    pub fn vwap_window(&self) -> Duration {
        Duration::seconds(self.vwap_window_secs)
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidArgument` for a non-positive window or a
    /// scale above 28.
    pub fn validate(&self) -> MarketResult<()> {
        if self.vwap_window_secs <= 0 {
            return Err(MarketError::invalid_argument(format!(
                "vwap_window_secs must be positive, got {}",
                self.vwap_window_secs
            )));
        }
        if self.index_scale > MAX_INDEX_SCALE {
            return Err(MarketError::invalid_argument(format!(
                "index_scale must be at most {MAX_INDEX_SCALE}, got {}",
                self.index_scale
            )));
        }
        Ok(())
    }
}
