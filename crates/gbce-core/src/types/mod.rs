//! Domain types for stock trading.
//!
//! - [`Side`]: Buy/sell indicator
//! - [`Trade`]: One executed trade

mod side;
mod trade;

pub use side::Side;
pub use trade::Trade;
