//! Preferred stock.

use gbce_core::math::checked_quotient;
use gbce_core::{MarketError, MarketResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ensure_positive_price, CommonStock, Equity, StockKind};
use crate::ledger::TradeLedger;

/// A preferred stock, paying a fixed dividend rate on par value.
///
/// Everything except the dividend yield behaves as for [`CommonStock`], whose
/// state this type wraps.
///
/// # Example
///
/// ```rust
/// use gbce_market::{Equity, PreferredStock};
/// use rust_decimal_macros::dec;
///
/// let gin = PreferredStock::new("GIN", dec!(8), dec!(100), dec!(0.02));
/// assert_eq!(gin.dividend_yield(dec!(16)).unwrap(), dec!(0.125));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredStock {
    base: CommonStock,
    fixed_dividend: Decimal,
}

impl PreferredStock {
    /// Creates a preferred stock with no recorded trades.
    ///
    /// `fixed_dividend` is a rate (0.02 for 2%), applied to `par_value`.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        last_dividend: Decimal,
        par_value: Decimal,
        fixed_dividend: Decimal,
    ) -> Self {
        Self {
            base: CommonStock::new(symbol, last_dividend, par_value),
            fixed_dividend,
        }
    }
}

impl Equity for PreferredStock {
    fn symbol(&self) -> &str {
        self.base.symbol()
    }

    fn kind(&self) -> StockKind {
        StockKind::Preferred
    }

    fn last_dividend(&self) -> Decimal {
        self.base.last_dividend()
    }

    fn par_value(&self) -> Decimal {
        self.base.par_value()
    }

    fn fixed_dividend(&self) -> Option<Decimal> {
        Some(self.fixed_dividend)
    }

    fn ledger(&self) -> &TradeLedger {
        self.base.ledger()
    }

    fn ledger_mut(&mut self) -> &mut TradeLedger {
        self.base.ledger_mut()
    }

    fn dividend_yield(&self, market_price: Decimal) -> MarketResult<Decimal> {
        ensure_positive_price(market_price)?;
        let dividend = self
            .fixed_dividend
            .checked_mul(self.base.par_value())
            .ok_or_else(|| MarketError::overflow("dividend_yield"))?;
        checked_quotient(dividend, market_price, "dividend_yield")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gbce_core::{Side, Trade};
    use rust_decimal_macros::dec;

    fn gin() -> PreferredStock {
        PreferredStock::new("GIN", dec!(8), dec!(100), dec!(0.02))
    }

    #[test]
    fn test_accessors() {
        let stock = gin();
        assert_eq!(stock.symbol(), "GIN");
        assert_eq!(stock.kind(), StockKind::Preferred);
        assert_eq!(stock.last_dividend(), dec!(8));
        assert_eq!(stock.par_value(), dec!(100));
        assert_eq!(stock.fixed_dividend(), Some(dec!(0.02)));
    }

    #[test]
    fn test_dividend_yield_uses_fixed_rate_on_par() {
        assert_eq!(gin().dividend_yield(dec!(16)).unwrap(), dec!(0.125));
    }

    #[test]
    fn test_dividend_yield_rejects_non_positive_price() {
        assert!(gin().dividend_yield(Decimal::ZERO).unwrap_err().is_invalid_argument());
        assert!(gin().dividend_yield(dec!(-2)).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_pe_ratio_inherits_through_trait() {
        // 16 / 0.125
        assert_eq!(gin().pe_ratio(dec!(16)).unwrap(), dec!(128));
        assert!(gin().pe_ratio(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_zero_fixed_rate_gives_zero_pe() {
        let stock = PreferredStock::new("ZRO", dec!(8), dec!(100), Decimal::ZERO);
        assert_eq!(stock.dividend_yield(dec!(16)).unwrap(), Decimal::ZERO);
        assert_eq!(stock.pe_ratio(dec!(16)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_trades_go_to_wrapped_ledger() {
        let mut stock = gin();
        stock.record_trade(Trade::with_side(Utc::now(), 7, Side::Sell, dec!(101)));
        assert_eq!(stock.ledger().len(), 1);
        assert_eq!(stock.ledger().trades()[0].quantity(), 7);
    }
}
