//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Decimal places shown for ratios and prices.
pub const DISPLAY_DP: u32 = 6;

/// Prints rows as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Rounds for display and drops trailing zeros.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DP).normalize()
}

/// Formats a decimal as a percentage string.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", (value * Decimal::ONE_HUNDRED).normalize())
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a decimal value rounded for display.
    pub fn from_decimal(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, round(value).to_string())
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a highlighted summary line.
pub fn print_summary(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{label}:").bold(), value.to_string().green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_trims_trailing_zeros() {
        assert_eq!(round(dec!(3.600)).to_string(), "3.6");
        assert_eq!(round(dec!(2.2222222222)).to_string(), "2.222222");
        assert_eq!(round(Decimal::ZERO).to_string(), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(0.02)), "2%");
        assert_eq!(format_percent(dec!(0.125)), "12.5%");
    }

    #[test]
    fn test_key_value_from_decimal() {
        let kv = KeyValue::from_decimal("P/E Ratio", dec!(32.0000));
        assert_eq!(kv.key, "P/E Ratio");
        assert_eq!(kv.value, "32");
    }
}
