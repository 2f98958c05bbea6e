//! Stock variants and the capability they share.
//!
//! [`Equity`] is the interface every listed stock implements. Both
//! [`CommonStock`] and [`PreferredStock`] own a [`TradeLedger`]; they differ
//! only in how dividend yield is computed. P/E ratio, trade recording and the
//! volume weighted price are provided once on the trait and dispatch to
//! whichever yield the variant supplies.

mod common;
mod preferred;

pub use common::CommonStock;
pub use preferred::PreferredStock;

use chrono::{DateTime, Duration, Utc};
use gbce_core::math::checked_quotient;
use gbce_core::{Clock, MarketError, MarketResult, Trade};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::DEFAULT_VWAP_WINDOW_SECS;
use crate::ledger::TradeLedger;

/// The two kinds of stock traded on the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockKind {
    /// Common stock: yield from the last dividend.
    Common,
    /// Preferred stock: yield from a fixed dividend rate on par value.
    Preferred,
}

impl fmt::Display for StockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StockKind::Common => "Common",
            StockKind::Preferred => "Preferred",
        };
        write!(f, "{name}")
    }
}

/// Capabilities of a listed stock.
pub trait Equity: fmt::Debug + Send + Sync {
    /// Returns the ticker symbol.
    fn symbol(&self) -> &str;

    /// Returns which variant this is.
    fn kind(&self) -> StockKind;

    /// Returns the last dividend paid, in currency per share.
    fn last_dividend(&self) -> Decimal;

    /// Returns the par value, in currency per share.
    fn par_value(&self) -> Decimal;

    /// Returns the fixed dividend rate, for variants that have one.
    fn fixed_dividend(&self) -> Option<Decimal> {
        None
    }

    /// Returns the recorded trades.
    fn ledger(&self) -> &TradeLedger;

    /// Returns the recorded trades for appending.
    fn ledger_mut(&mut self) -> &mut TradeLedger;

    /// Dividend yield at `market_price`.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidArgument` when `market_price <= 0`.
    fn dividend_yield(&self, market_price: Decimal) -> MarketResult<Decimal>;

    /// Price/earnings ratio: `market_price / dividend_yield(market_price)`.
    ///
    /// A stock whose yield is exactly zero has a P/E of zero by convention.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidArgument` when `market_price <= 0`, and
    /// `MarketError::Overflow` when the ratio does not fit in a `Decimal`.
    fn pe_ratio(&self, market_price: Decimal) -> MarketResult<Decimal> {
        ensure_positive_price(market_price)?;
        let dividend_yield = self.dividend_yield(market_price)?;
        if dividend_yield.is_zero() {
            return Ok(Decimal::ZERO);
        }
        checked_quotient(market_price, dividend_yield, "pe_ratio")
    }

    /// Appends a trade to this stock's ledger.
    fn record_trade(&mut self, trade: Trade) {
        debug!(
            symbol = self.symbol(),
            side = %trade.side(),
            quantity = trade.quantity(),
            price = %trade.price(),
            "recording trade"
        );
        self.ledger_mut().record(trade);
    }

    /// Volume weighted price over the 15 minutes ending at `clock.now()`.
    ///
    /// The clock is read exactly once. Zero when no trade falls inside the
    /// window.
    fn volume_weighted_price(&self, clock: &dyn Clock) -> Decimal {
        self.volume_weighted_price_at(clock.now(), Duration::seconds(DEFAULT_VWAP_WINDOW_SECS))
    }

    /// Volume weighted price over `window` ending at `now`.
    fn volume_weighted_price_at(&self, now: DateTime<Utc>, window: Duration) -> Decimal {
        self.ledger().volume_weighted_price_at(now, window)
    }
}

/// Rejects a market price that is zero or negative.
pub(crate) fn ensure_positive_price(market_price: Decimal) -> MarketResult<()> {
    if market_price <= Decimal::ZERO {
        return Err(MarketError::invalid_argument(format!(
            "market price must be positive, got {market_price}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gbce_core::{FixedClock, Side};
    use rust_decimal_macros::dec;

    #[test]
    fn test_ensure_positive_price() {
        assert!(ensure_positive_price(dec!(0.01)).is_ok());
        assert!(ensure_positive_price(Decimal::ZERO)
            .unwrap_err()
            .is_invalid_argument());
        assert!(ensure_positive_price(dec!(-2)).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StockKind::Common.to_string(), "Common");
        assert_eq!(StockKind::Preferred.to_string(), "Preferred");
    }

    #[test]
    fn test_trait_objects_dispatch_to_variant_yield() {
        let pop = CommonStock::new("POP", dec!(8), dec!(100));
        let gin = PreferredStock::new("GIN", dec!(8), dec!(100), dec!(0.02));
        let stocks: Vec<&dyn Equity> = vec![&pop, &gin];

        let yields: Vec<Decimal> = stocks
            .iter()
            .map(|s| s.dividend_yield(dec!(16)).unwrap())
            .collect();
        assert_eq!(yields, vec![dec!(0.5), dec!(0.125)]);

        let ratios: Vec<Decimal> = stocks
            .iter()
            .map(|s| s.pe_ratio(dec!(16)).unwrap())
            .collect();
        assert_eq!(ratios, vec![dec!(32), dec!(128)]);
    }

    #[test]
    fn test_volume_weighted_price_reads_clock() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap();
        let mut clock = FixedClock::new(now);
        let mut stock = CommonStock::new("ALE", dec!(23), dec!(60));
        stock.record_trade(Trade::with_side(now, 10, Side::Buy, dec!(60)));

        assert_eq!(stock.volume_weighted_price(&clock), dec!(60));

        clock.advance(Duration::minutes(15));
        assert_eq!(stock.volume_weighted_price(&clock), dec!(60));

        clock.advance(Duration::seconds(1));
        assert_eq!(stock.volume_weighted_price(&clock), Decimal::ZERO);
        assert_eq!(stock.ledger().len(), 1);
    }
}
