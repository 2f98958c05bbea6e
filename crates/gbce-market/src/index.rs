//! GBCE All Share Index.
//!
//! ## Formula
//!
//! ```text
//! Index = (P_1 × P_2 × … × P_n)^(1/n)
//! ```
//!
//! Where `P_i` is the volume weighted price of stock i over the trailing
//! window. Stocks with no qualifying trades have a price of zero and are left
//! out of both the product and `n`. A negative price, only reachable through
//! negative trade prices, is left out the same way so the root stays real.
//!
//! The root is extracted with [`gbce_core::math::geometric_mean`]: Newton's
//! method at full `Decimal` precision, rounded to the configured scale with
//! banker's rounding.

use chrono::{DateTime, Utc};
use gbce_core::math::geometric_mean;
use gbce_core::Clock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::MarketConfig;
use crate::stock::Equity;

/// Computes the All Share Index at `clock.now()` with default settings.
///
/// Never fails: an empty collection, or one where no stock traded within the
/// window, gives zero.
///
/// # Example
///
/// ```rust
/// use gbce_core::SystemClock;
/// use gbce_market::{all_shares_index, CommonStock};
/// use rust_decimal::Decimal;
///
/// let stocks: Vec<CommonStock> = Vec::new();
/// assert_eq!(all_shares_index(&stocks, &SystemClock), Decimal::ZERO);
/// ```
pub fn all_shares_index<'a, I, E>(stocks: I, clock: &dyn Clock) -> Decimal
where
    I: IntoIterator<Item = &'a E>,
    E: Equity + ?Sized + 'a,
{
    all_shares_index_at(stocks, clock.now(), &MarketConfig::default())
}

/// Computes the All Share Index with every stock evaluated at `now`.
pub fn all_shares_index_at<'a, I, E>(
    stocks: I,
    now: DateTime<Utc>,
    config: &MarketConfig,
) -> Decimal
where
    I: IntoIterator<Item = &'a E>,
    E: Equity + ?Sized + 'a,
{
    let window = config.vwap_window();
    let mut considered = 0usize;
    let prices: Vec<Decimal> = stocks
        .into_iter()
        .inspect(|_| considered += 1)
        .map(|stock| stock.volume_weighted_price_at(now, window))
        .filter(|price| *price > Decimal::ZERO)
        .collect();

    if prices.is_empty() {
        debug!(considered, "no stock traded inside the window, index is zero");
        return Decimal::ZERO;
    }

    match geometric_mean(&prices, config.index_scale) {
        Some(index) => {
            debug!(
                considered,
                contributing = prices.len(),
                index = %index,
                "computed all share index"
            );
            index
        }
        None => {
            warn!(
                contributing = prices.len(),
                "geometric mean out of decimal range, index is zero"
            );
            Decimal::ZERO
        }
    }
}
