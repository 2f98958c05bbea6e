//! In-memory exchange holding the listed stocks.

use chrono::{DateTime, Utc};
use gbce_core::{Clock, MarketError, MarketResult, SystemClock, Trade};
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

use crate::config::MarketConfig;
use crate::index::all_shares_index_at;
use crate::stock::Equity;

/// Listed stocks together with the clock and settings used to evaluate them.
///
/// Stocks keep their listing order. Symbols are unique.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use gbce_core::{FixedClock, Trade};
/// use gbce_market::{CommonStock, Exchange, MarketConfig};
/// use rust_decimal_macros::dec;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap();
/// let mut exchange = Exchange::new(MarketConfig::default())
///     .unwrap()
///     .with_clock(FixedClock::new(now));
///
/// exchange.list(CommonStock::new("POP", dec!(8), dec!(100))).unwrap();
/// exchange
///     .record_trade("POP", Trade::new(now, 10, "BUY", dec!(16)).unwrap())
///     .unwrap();
///
/// assert_eq!(exchange.volume_weighted_price("POP").unwrap(), dec!(16));
/// assert_eq!(exchange.all_shares_index(), dec!(16));
/// ```
pub struct Exchange {
    config: MarketConfig,
    clock: Box<dyn Clock>,
    stocks: Vec<Box<dyn Equity>>,
}

impl Exchange {
    /// Creates an empty exchange reading wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidArgument` if `config` does not validate.
    pub fn new(config: MarketConfig) -> MarketResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock: Box::new(SystemClock),
            stocks: Vec::new(),
        })
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the active settings.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Returns the current instant according to the exchange clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Lists a stock.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::DuplicateSymbol` if the symbol is already listed.
    pub fn list(&mut self, stock: impl Equity + 'static) -> MarketResult<()> {
        self.list_boxed(Box::new(stock))
    }

    /// Lists a stock that is already boxed.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::DuplicateSymbol` if the symbol is already listed.
    pub fn list_boxed(&mut self, stock: Box<dyn Equity>) -> MarketResult<()> {
        if self.position(stock.symbol()).is_some() {
            return Err(MarketError::duplicate_symbol(stock.symbol()));
        }
        debug!(symbol = stock.symbol(), kind = %stock.kind(), "listing stock");
        self.stocks.push(stock);
        Ok(())
    }

    /// Looks up a listed stock.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::UnknownSymbol` if nothing is listed under `symbol`.
    pub fn stock(&self, symbol: &str) -> MarketResult<&dyn Equity> {
        self.position(symbol)
            .map(|i| self.stocks[i].as_ref())
            .ok_or_else(|| MarketError::unknown_symbol(symbol))
    }

    /// Looks up a listed stock for mutation.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::UnknownSymbol` if nothing is listed under `symbol`.
    pub fn stock_mut(&mut self, symbol: &str) -> MarketResult<&mut dyn Equity> {
        let i = self
            .position(symbol)
            .ok_or_else(|| MarketError::unknown_symbol(symbol))?;
        let stock: &mut dyn Equity = self.stocks[i].as_mut();
        Ok(stock)
    }

    /// Records a trade against a listed stock.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::UnknownSymbol` if nothing is listed under `symbol`.
    pub fn record_trade(&mut self, symbol: &str, trade: Trade) -> MarketResult<()> {
        self.stock_mut(symbol)?.record_trade(trade);
        Ok(())
    }

    /// Volume weighted price of one stock over the configured window.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::UnknownSymbol` if nothing is listed under `symbol`.
    pub fn volume_weighted_price(&self, symbol: &str) -> MarketResult<Decimal> {
        let stock = self.stock(symbol)?;
        Ok(stock.volume_weighted_price_at(self.clock.now(), self.config.vwap_window()))
    }

    /// All Share Index over every listed stock.
    ///
    /// The clock is read once; every stock is evaluated at that instant.
    #[must_use]
    pub fn all_shares_index(&self) -> Decimal {
        let now = self.clock.now();
        all_shares_index_at(self.stocks(), now, &self.config)
    }

    /// Iterates over the listed stocks in listing order.
    pub fn stocks(&self) -> impl Iterator<Item = &dyn Equity> + '_ {
        self.stocks.iter().map(|s| s.as_ref() as &dyn Equity)
    }

    /// Returns the listed symbols in listing order.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        self.stocks.iter().map(|s| s.symbol()).collect()
    }

    /// Returns the number of listed stocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Returns true if nothing is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.stocks.iter().position(|s| s.symbol() == symbol)
    }
}

impl fmt::Debug for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exchange")
            .field("config", &self.config)
            .field("stocks", &self.stocks)
            .finish()
    }
}
