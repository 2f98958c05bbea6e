//! Property-based tests for market invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Non-positive market prices are always rejected
//! - A volume weighted price lies within the range of included trade prices
//! - The index lies within the range of contributing prices
//! - Recording trades never changes a stock's yield or P/E

use chrono::{DateTime, Duration, TimeZone, Utc};
use gbce_core::{FixedClock, Side, Trade};
use gbce_market::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap()
}

/// Prices from 0.01 to 10,000.00 in cents.
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// (seconds ago, quantity, price)
fn trade_params() -> impl Strategy<Value = (i64, u64, Decimal)> {
    (0i64..1800, 1u64..10_000, price())
}

proptest! {
    #[test]
    fn non_positive_price_always_rejected(
        cents in -1_000_000i64..=0,
        dividend in 0i64..10_000,
        fixed in 0i64..100,
    ) {
        let market_price = Decimal::new(cents, 2);
        let common = CommonStock::new("POP", Decimal::new(dividend, 2), Decimal::ONE_HUNDRED);
        let preferred = PreferredStock::new(
            "GIN",
            Decimal::new(dividend, 2),
            Decimal::ONE_HUNDRED,
            Decimal::new(fixed, 2),
        );

        prop_assert!(common.dividend_yield(market_price).unwrap_err().is_invalid_argument());
        prop_assert!(common.pe_ratio(market_price).unwrap_err().is_invalid_argument());
        prop_assert!(preferred.dividend_yield(market_price).unwrap_err().is_invalid_argument());
        prop_assert!(preferred.pe_ratio(market_price).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn vwap_is_bounded_by_included_prices(trades in prop::collection::vec(trade_params(), 1..40)) {
        let mut stock = CommonStock::new("ALE", Decimal::new(23, 0), Decimal::new(60, 0));
        for (secs, qty, px) in &trades {
            stock.record_trade(Trade::with_side(now() - Duration::seconds(*secs), *qty, Side::Buy, *px));
        }

        let included: Vec<Decimal> = trades
            .iter()
            .filter(|(secs, _, _)| *secs <= 900)
            .map(|(_, _, px)| *px)
            .collect();
        let vwap = stock.volume_weighted_price(&FixedClock::new(now()));

        if included.is_empty() {
            prop_assert_eq!(vwap, Decimal::ZERO);
        } else {
            let lo = included.iter().min().copied().unwrap();
            let hi = included.iter().max().copied().unwrap();
            prop_assert!(vwap >= lo && vwap <= hi, "{} not in [{}, {}]", vwap, lo, hi);
        }
        prop_assert_eq!(stock.ledger().len(), trades.len());
    }

    #[test]
    fn index_is_bounded_by_contributing_prices(prices in prop::collection::vec(price(), 1..12)) {
        let stocks: Vec<CommonStock> = prices
            .iter()
            .enumerate()
            .map(|(i, px)| {
                let mut stock = CommonStock::new(format!("S{i}"), Decimal::ONE, Decimal::ONE_HUNDRED);
                stock.record_trade(Trade::with_side(now(), 1, Side::Sell, *px));
                stock
            })
            .collect();

        let index = all_shares_index(&stocks, &FixedClock::new(now()));
        let lo = prices.iter().min().copied().unwrap();
        let hi = prices.iter().max().copied().unwrap();
        let tolerance = hi * Decimal::new(1, 7);

        prop_assert!(index >= lo - tolerance && index <= hi + tolerance,
            "{} not in [{}, {}]", index, lo, hi);
    }

    #[test]
    fn trades_do_not_affect_yield_or_pe(
        trades in prop::collection::vec(trade_params(), 0..20),
        market_price in price(),
    ) {
        let mut stock = PreferredStock::new(
            "GIN",
            Decimal::new(8, 0),
            Decimal::ONE_HUNDRED,
            Decimal::new(2, 2),
        );
        let before = (stock.dividend_yield(market_price), stock.pe_ratio(market_price));
        for (secs, qty, px) in trades {
            stock.record_trade(Trade::with_side(now() - Duration::seconds(secs), qty, Side::Buy, px));
        }
        let after = (stock.dividend_yield(market_price), stock.pe_ratio(market_price));
        prop_assert_eq!(before, after);
    }
}
