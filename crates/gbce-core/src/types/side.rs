//! Trade side indicator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;

/// Whether a trade bought or sold shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Shares were bought.
    Buy,
    /// Shares were sold.
    Sell,
}

impl Side {
    /// Returns the wire token for this side (`BUY` or `SELL`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = MarketError;

    /// Parses a side token. Matching is exact: `buy` or ` BUY` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(MarketError::invalid_argument(format!(
                "trade side must be BUY or SELL, got {other:?}"
            ))),
        }
    }
}
