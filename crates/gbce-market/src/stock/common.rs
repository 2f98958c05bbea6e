//! Common stock.

use gbce_core::math::checked_quotient;
use gbce_core::MarketResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ensure_positive_price, Equity, StockKind};
use crate::ledger::TradeLedger;

/// A common stock, whose yield is its last dividend over the market price.
///
/// # Example
///
/// ```rust
/// use gbce_market::{CommonStock, Equity};
/// use rust_decimal_macros::dec;
///
/// let pop = CommonStock::new("POP", dec!(8), dec!(100));
/// assert_eq!(pop.dividend_yield(dec!(16)).unwrap(), dec!(0.5));
/// assert_eq!(pop.pe_ratio(dec!(16)).unwrap(), dec!(32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonStock {
    symbol: String,
    last_dividend: Decimal,
    par_value: Decimal,
    ledger: TradeLedger,
}

impl CommonStock {
    /// Creates a stock with no recorded trades.
    #[must_use]
    pub fn new(symbol: impl Into<String>, last_dividend: Decimal, par_value: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            last_dividend,
            par_value,
            ledger: TradeLedger::new(),
        }
    }
}

impl Equity for CommonStock {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn kind(&self) -> StockKind {
        StockKind::Common
    }

    fn last_dividend(&self) -> Decimal {
        self.last_dividend
    }

    fn par_value(&self) -> Decimal {
        self.par_value
    }

    fn ledger(&self) -> &TradeLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut TradeLedger {
        &mut self.ledger
    }

    fn dividend_yield(&self, market_price: Decimal) -> MarketResult<Decimal> {
        ensure_positive_price(market_price)?;
        checked_quotient(self.last_dividend, market_price, "dividend_yield")
    }
}
