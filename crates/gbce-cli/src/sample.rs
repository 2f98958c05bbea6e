//! The GBCE sample universe and a fixed set of demonstration trades.

use chrono::{DateTime, Duration, Utc};
use gbce_core::{FixedClock, MarketResult, Side, Trade};
use gbce_market::{CommonStock, Equity, Exchange, MarketConfig, PreferredStock};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Symbols of the sample universe in listing order.
pub const SYMBOLS: [&str; 5] = ["TEA", "POP", "ALE", "GIN", "JOE"];

/// Returns the sample stock listed under `symbol`, without trades.
pub fn stock(symbol: &str) -> Option<Box<dyn Equity>> {
    let stock: Box<dyn Equity> = match symbol {
        "TEA" => Box::new(CommonStock::new("TEA", Decimal::ZERO, dec!(100))),
        "POP" => Box::new(CommonStock::new("POP", dec!(8), dec!(100))),
        "ALE" => Box::new(CommonStock::new("ALE", dec!(23), dec!(60))),
        "GIN" => Box::new(PreferredStock::new("GIN", dec!(8), dec!(100), dec!(0.02))),
        "JOE" => Box::new(CommonStock::new("JOE", dec!(13), dec!(250))),
        _ => return None,
    };
    Some(stock)
}

/// (symbol, minutes before now, quantity, side, price)
const SAMPLE_TRADES: [(&str, i64, u64, Side, Decimal); 9] = [
    ("POP", 16, 1000, Side::Buy, dec!(99.99)),
    ("POP", 15, 3, Side::Buy, dec!(18.10)),
    ("POP", 6, 5, Side::Sell, dec!(3)),
    ("POP", 0, 18, Side::Buy, dec!(1.35)),
    ("ALE", 12, 200, Side::Sell, dec!(61.50)),
    ("ALE", 2, 100, Side::Buy, dec!(59.75)),
    ("GIN", 4, 50, Side::Buy, dec!(102.25)),
    ("JOE", 9, 40, Side::Sell, dec!(248)),
    ("JOE", 30, 10, Side::Buy, dec!(260)),
];

/// Trades placed at fixed offsets before `now`.
pub fn trades(now: DateTime<Utc>) -> impl Iterator<Item = (&'static str, Trade)> {
    SAMPLE_TRADES
        .into_iter()
        .map(move |(symbol, minutes, quantity, side, price)| {
            let timestamp = now - Duration::minutes(minutes);
            (symbol, Trade::with_side(timestamp, quantity, side, price))
        })
}

/// Lists the sample universe on an exchange frozen at `now` and records the
/// sample trades.
pub fn exchange(config: MarketConfig, now: DateTime<Utc>) -> MarketResult<Exchange> {
    let mut exchange = Exchange::new(config)?.with_clock(FixedClock::new(now));
    for symbol in SYMBOLS {
        if let Some(stock) = stock(symbol) {
            exchange.list_boxed(stock)?;
        }
    }
    for (symbol, trade) in trades(now) {
        exchange.record_trade(symbol, trade)?;
    }
    Ok(exchange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_every_symbol_resolves() {
        for symbol in SYMBOLS {
            assert_eq!(stock(symbol).unwrap().symbol(), symbol);
        }
        assert!(stock("XYZ").is_none());
    }

    #[test]
    fn test_sample_exchange() {
        let exchange = exchange(MarketConfig::default(), now()).unwrap();
        assert_eq!(exchange.symbols(), SYMBOLS.to_vec());
        assert_eq!(exchange.volume_weighted_price("POP").unwrap(), dec!(3.6));
        assert_eq!(exchange.volume_weighted_price("TEA").unwrap(), Decimal::ZERO);
        // The 30 minute old JOE trade falls outside the window.
        assert_eq!(exchange.volume_weighted_price("JOE").unwrap(), dec!(248));
        assert!(exchange.all_shares_index() > Decimal::ZERO);
    }
}
