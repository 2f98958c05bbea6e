//! Append-only trade ledger shared by every stock variant.

use chrono::{DateTime, Duration, Utc};
use gbce_core::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Sums over the trades that fall inside a window.
///
/// The exact notional is kept while it fits in a `Decimal`. A running volume
/// weighted mean is carried alongside and answers once the notional has left
/// the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTotals {
    /// Σ(price × quantity) over included trades, `None` once out of range.
    pub notional: Option<Decimal>,
    /// Σ(quantity) over included trades.
    pub quantity: Decimal,
    /// Number of included trades.
    pub trades: usize,
    running_mean: Decimal,
}

impl WindowTotals {
    /// Folds one trade into the totals.
    pub fn add(&mut self, trade: &Trade) {
        let quantity = Decimal::from(trade.quantity());
        self.notional = self
            .notional
            .zip(trade.notional())
            .and_then(|(sum, notional)| sum.checked_add(notional));
        self.quantity = self.quantity.saturating_add(quantity);
        self.trades += 1;

        // mean' = mean * (1 - w) + price * w, with w = q / Q in [0, 1]
        if !quantity.is_zero() {
            if let Some(weight) = quantity.checked_div(self.quantity) {
                let kept = self.running_mean * (Decimal::ONE - weight);
                let added = trade.price() * weight;
                self.running_mean = kept.checked_add(added).unwrap_or(self.running_mean);
            }
        }
    }

    /// Returns `notional / quantity`, or zero when no quantity traded.
    #[must_use]
    pub fn volume_weighted_price(&self) -> Decimal {
        if self.quantity.is_zero() {
            return Decimal::ZERO;
        }
        self.notional
            .and_then(|notional| notional.checked_div(self.quantity))
            .unwrap_or(self.running_mean)
    }
}

impl Default for WindowTotals {
    fn default() -> Self {
        Self {
            notional: Some(Decimal::ZERO),
            quantity: Decimal::ZERO,
            trades: 0,
            running_mean: Decimal::ZERO,
        }
    }
}

/// Trades recorded against one stock, in insertion order.
///
/// Recording is the only mutation; trades are never removed or reordered.
/// Windowed reads filter, they do not evict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLedger {
    trades: Vec<Trade>,
}

impl TradeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trade.
    pub fn record(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Returns every recorded trade, oldest recording first.
    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Returns the number of recorded trades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns true if no trade was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Iterates over the recorded trades.
    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }

    /// Accumulates the trades with `now - timestamp <= window`.
    #[must_use]
    pub fn window_totals(&self, now: DateTime<Utc>, window: Duration) -> WindowTotals {
        let totals = self
            .trades
            .iter()
            .filter(|t| now - t.timestamp() <= window)
            .fold(WindowTotals::default(), |mut acc, t| {
                acc.add(t);
                acc
            });
        trace!(
            included = totals.trades,
            recorded = self.trades.len(),
            "evaluated trade window"
        );
        totals
    }

    /// Volume weighted price of the trades inside the window ending at `now`.
    ///
    /// Zero when the window holds no traded quantity.
    #[must_use]
    pub fn volume_weighted_price_at(&self, now: DateTime<Utc>, window: Duration) -> Decimal {
        self.window_totals(now, window).volume_weighted_price()
    }
}

impl<'a> IntoIterator for &'a TradeLedger {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.iter()
    }
}
