//! # GBCE Core
//!
//! Core types, errors, and decimal utilities for the GBCE stock analytics library.
//!
//! This crate provides the foundational building blocks used throughout GBCE:
//!
//! - **Types**: [`Trade`] and its [`Side`]
//! - **Errors**: [`MarketError`], separating caller misuse from degenerate state
//! - **Clock**: An injectable time source for windowed calculations
//! - **Math**: Checked decimal division and n-th roots at a documented precision
//!
//! ## Example
//!
//! ```rust
//! use gbce_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let clock = SystemClock;
//! let trade = Trade::new(clock.now(), 10, "SELL", dec!(98.50)).unwrap();
//! assert_eq!(trade.side(), Side::Sell);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod clock;
pub mod error;
pub mod math;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{MarketError, MarketResult};
    pub use crate::types::{Side, Trade};
}

// Re-export commonly used types at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{MarketError, MarketResult};
pub use types::{Side, Trade};
