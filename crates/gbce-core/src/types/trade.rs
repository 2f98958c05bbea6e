//! Executed trade record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::error::MarketResult;

/// One executed trade.
///
/// Trades are immutable once built. Only the side is validated; quantity is
/// non-negative by type and a zero or negative price is accepted here and
/// rejected, where it matters, by the calculations that consume it.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use gbce_core::types::{Side, Trade};
/// use rust_decimal_macros::dec;
///
/// let trade = Trade::new(Utc::now(), 100, "BUY", dec!(16.25)).unwrap();
/// assert_eq!(trade.side(), Side::Buy);
/// assert_eq!(trade.notional(), Some(dec!(1625)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    timestamp: DateTime<Utc>,
    quantity: u64,
    side: Side,
    price: Decimal,
}

impl Trade {
    /// Creates a trade from a side token.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidArgument` unless `side` is exactly
    /// `"BUY"` or `"SELL"`.
    pub fn new(
        timestamp: DateTime<Utc>,
        quantity: u64,
        side: &str,
        price: Decimal,
    ) -> MarketResult<Self> {
        Ok(Self::with_side(timestamp, quantity, side.parse()?, price))
    }

    /// Creates a trade from an already typed side.
    #[must_use]
    pub fn with_side(timestamp: DateTime<Utc>, quantity: u64, side: Side, price: Decimal) -> Self {
        Self {
            timestamp,
            quantity,
            side,
            price,
        }
    }

    /// Returns when the trade executed.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the number of shares traded.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the trade side.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the price per share.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns `price * quantity`, or `None` when the product is outside the
    /// `Decimal` range.
    #[must_use]
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 2, 26, 16, 33, 2).unwrap()
            + chrono::Duration::microseconds(392_218)
    }

    #[test]
    fn test_new_preserves_fields() {
        let ts = sample_time();
        let trade = Trade::new(ts, 4, "SELL", dec!(47.37)).unwrap();

        assert_eq!(trade.timestamp(), ts);
        assert_eq!(trade.quantity(), 4);
        assert_eq!(trade.side(), Side::Sell);
        assert_eq!(trade.price(), dec!(47.37));
    }

    #[test]
    fn test_new_rejects_unknown_side() {
        let err = Trade::new(sample_time(), 4, "GIVE", dec!(47.37)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("GIVE"));
    }

    #[test]
    fn test_zero_price_and_quantity_accepted() {
        let trade = Trade::new(sample_time(), 0, "BUY", Decimal::ZERO).unwrap();
        assert_eq!(trade.quantity(), 0);
        assert!(trade.price().is_zero());
        assert_eq!(trade.notional(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_notional() {
        let trade = Trade::with_side(sample_time(), 3, Side::Buy, dec!(18.10));
        assert_eq!(trade.notional(), Some(dec!(54.30)));
    }

    #[test]
    fn test_notional_out_of_range() {
        let trade = Trade::with_side(sample_time(), u64::MAX, Side::Sell, dec!(10_000_000_000));
        assert_eq!(trade.notional(), None);
    }

    #[test]
    fn test_serde_roundtrip_keeps_subsecond_timestamp() {
        let trade = Trade::with_side(sample_time(), 18, Side::Buy, dec!(1.35));
        let json = serde_json::to_string(&trade).unwrap();
        let parsed: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trade);
    }
}
