//! Demo command implementation.
//!
//! Lists the sample universe, records the sample trades and reports every
//! stock's analytics followed by the All Share Index.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use gbce_market::{Equity, Exchange, MarketConfig};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{
    format_percent, print_header, print_json, print_summary, print_table, round,
};
use crate::sample;

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Report at par value instead of skipping yields for untraded stocks
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub par_fallback: bool,
}

/// One row of the demo report.
#[derive(Debug, Serialize, Tabled)]
pub struct StockRow {
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Last Dividend")]
    pub last_dividend: Decimal,
    #[tabled(rename = "Fixed Dividend", display_with = "display_fixed")]
    pub fixed_dividend: Option<Decimal>,
    #[tabled(rename = "Par Value")]
    pub par_value: Decimal,
    #[tabled(rename = "VWP")]
    pub volume_weighted_price: Decimal,
    #[tabled(rename = "Priced At")]
    pub priced_at: Decimal,
    #[tabled(rename = "Dividend Yield", display_with = "display_metric")]
    pub dividend_yield: Option<Decimal>,
    #[tabled(rename = "P/E Ratio", display_with = "display_metric")]
    pub pe_ratio: Option<Decimal>,
}

fn display_fixed(value: &Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), format_percent)
}

fn display_metric(value: &Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Full demo report.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub as_of: DateTime<Utc>,
    pub config: MarketConfig,
    pub stocks: Vec<StockRow>,
    pub all_share_index: Decimal,
}

/// Builds the row for one stock. The market price is the VWP, or par when
/// there were no trades inside the window and `par_fallback` is set.
fn stock_row(stock: &dyn Equity, exchange: &Exchange, par_fallback: bool) -> Result<StockRow> {
    let vwap = exchange.volume_weighted_price(stock.symbol())?;
    let priced_at = if vwap.is_zero() && par_fallback {
        stock.par_value()
    } else {
        vwap
    };

    let (dividend_yield, pe_ratio) = if priced_at > Decimal::ZERO {
        (
            Some(round(stock.dividend_yield(priced_at)?)),
            Some(round(stock.pe_ratio(priced_at)?)),
        )
    } else {
        (None, None)
    };

    Ok(StockRow {
        symbol: stock.symbol().to_string(),
        kind: stock.kind().to_string(),
        last_dividend: stock.last_dividend(),
        fixed_dividend: stock.fixed_dividend(),
        par_value: stock.par_value(),
        volume_weighted_price: round(vwap),
        priced_at: round(priced_at),
        dividend_yield,
        pe_ratio,
    })
}

/// Builds the report for the sample universe evaluated at `now`.
pub fn build_report(
    config: MarketConfig,
    now: DateTime<Utc>,
    par_fallback: bool,
) -> Result<DemoReport> {
    let exchange = sample::exchange(config, now)?;

    let stocks = exchange
        .stocks()
        .map(|stock| stock_row(stock, &exchange, par_fallback))
        .collect::<Result<Vec<_>>>()?;

    Ok(DemoReport {
        as_of: now,
        config: exchange.config().clone(),
        stocks,
        all_share_index: exchange.all_shares_index(),
    })
}

/// Execute the demo command.
pub fn execute(
    args: DemoArgs,
    config: MarketConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let report = build_report(config, Utc::now(), args.par_fallback)?;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(&format!(
                    "GBCE Sample Universe ({}s window)",
                    report.config.vwap_window_secs
                ));
            }
            print_table(&report.stocks);
            print_summary("GBCE All Share Index", report.all_share_index);
        }
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
