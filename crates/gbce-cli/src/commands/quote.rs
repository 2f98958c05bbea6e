//! Quote command implementation.
//!
//! Dividend yield and P/E ratio of one sample stock at a caller-supplied price.

use anyhow::Result;
use clap::Args;
use gbce_core::MarketError;
use gbce_market::Equity;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_header, print_json, print_table, round, KeyValue};
use crate::sample;

/// Arguments for the quote command.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Stock symbol (TEA, POP, ALE, GIN or JOE)
    #[arg(short, long)]
    pub symbol: String,

    /// Market price to evaluate at
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: Decimal,
}

/// Quote for one stock.
#[derive(Debug, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub kind: String,
    pub price: Decimal,
    pub dividend_yield: Decimal,
    pub pe_ratio: Decimal,
}

/// Evaluates the quote for `symbol` at `price`.
pub fn quote(symbol: &str, price: Decimal) -> Result<Quote> {
    let symbol = symbol.to_ascii_uppercase();
    let stock = sample::stock(&symbol).ok_or_else(|| MarketError::unknown_symbol(&symbol))?;
    quote_stock(stock.as_ref(), price)
}

fn quote_stock(stock: &dyn Equity, price: Decimal) -> Result<Quote> {
    Ok(Quote {
        symbol: stock.symbol().to_string(),
        kind: stock.kind().to_string(),
        price,
        dividend_yield: round(stock.dividend_yield(price)?),
        pe_ratio: round(stock.pe_ratio(price)?),
    })
}

/// Execute the quote command.
pub fn execute(args: QuoteArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let quote = quote(&args.symbol, args.price)?;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(&format!("{} Quote", quote.symbol));
            }
            let stock = sample::stock(&quote.symbol);
            let mut rows = vec![
                KeyValue::new("Symbol", quote.symbol.as_str()),
                KeyValue::new("Type", quote.kind.as_str()),
            ];
            if let Some(fixed) = stock.and_then(|s| s.fixed_dividend()) {
                rows.push(KeyValue::new("Fixed Dividend", format_percent(fixed)));
            }
            rows.push(KeyValue::from_decimal("Price", quote.price));
            rows.push(KeyValue::from_decimal("Dividend Yield", quote.dividend_yield));
            rows.push(KeyValue::from_decimal("P/E Ratio", quote.pe_ratio));
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&quote)?,
    }

    Ok(())
}
