//! # GBCE Market
//!
//! Per-stock and market-wide analytics for the Global Beverage Corporation
//! Exchange.
//!
//! ## Design Philosophy
//!
//! - **Exact arithmetic**: Every price, dividend and ratio is a `Decimal`
//! - **Capability over inheritance**: [`Equity`] is implemented by
//!   [`CommonStock`] and [`PreferredStock`], which share a [`TradeLedger`]
//! - **Injected time**: Windowed prices read "now" from a [`gbce_core::Clock`]
//! - **Misuse vs. emptiness**: Bad arguments are errors, missing trades are zero
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use gbce_core::{FixedClock, Trade};
//! use gbce_market::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let now = Utc::now();
//! let clock = FixedClock::new(now);
//!
//! let mut pop = CommonStock::new("POP", dec!(8), dec!(100));
//! let mut gin = PreferredStock::new("GIN", dec!(8), dec!(100), dec!(0.02));
//!
//! pop.record_trade(Trade::new(now, 10, "BUY", dec!(2)).unwrap());
//! gin.record_trade(Trade::new(now, 10, "SELL", dec!(8)).unwrap());
//!
//! assert_eq!(pop.pe_ratio(dec!(16)).unwrap(), dec!(32));
//! assert_eq!(gin.dividend_yield(dec!(16)).unwrap(), dec!(0.125));
//!
//! let stocks: Vec<&dyn Equity> = vec![&pop, &gin];
//! assert_eq!(all_shares_index(stocks, &clock), dec!(4));
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Window length and index precision
//! - [`ledger`] - Append-only trade storage and window totals
//! - [`stock`] - The [`Equity`] capability and its two variants
//! - [`index`] - GBCE All Share Index
//! - [`exchange`] - Registry of listed stocks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod exchange;
pub mod index;
pub mod ledger;
pub mod stock;

pub use config::MarketConfig;
pub use exchange::Exchange;
pub use index::{all_shares_index, all_shares_index_at};
pub use ledger::{TradeLedger, WindowTotals};
pub use stock::{CommonStock, Equity, PreferredStock, StockKind};

// Re-export the shared error types
pub use gbce_core::{MarketError, MarketResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::MarketConfig;
    pub use crate::exchange::Exchange;
    pub use crate::index::{all_shares_index, all_shares_index_at};
    pub use crate::ledger::TradeLedger;
    pub use crate::stock::{CommonStock, Equity, PreferredStock, StockKind};
    pub use gbce_core::{MarketError, MarketResult};
}
