//! Error types for the GBCE library.
//!
//! Caller misuse (a non-positive market price, an unknown trade side) is
//! rejected with [`MarketError::InvalidArgument`]. Degenerate but legitimate
//! states, such as a stock with no recent trades, are not errors and resolve
//! to zero in the calculations that meet them.

use thiserror::Error;

/// A specialized Result type for GBCE operations.
pub type MarketResult<T> = Result<T, MarketError>;

/// The main error type for GBCE operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// An argument was outside the domain of the operation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected argument.
        reason: String,
    },

    /// A decimal operation exceeded the representable range.
    #[error("Decimal overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// No stock is listed under the symbol.
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol that was looked up.
        symbol: String,
    },

    /// A stock is already listed under the symbol.
    #[error("Symbol already listed: {symbol}")]
    DuplicateSymbol {
        /// The symbol that was listed twice.
        symbol: String,
    },
}

impl MarketError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Creates an unknown symbol error.
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
        }
    }

    /// Creates a duplicate symbol error.
    #[must_use]
    pub fn duplicate_symbol(symbol: impl Into<String>) -> Self {
        Self::DuplicateSymbol {
            symbol: symbol.into(),
        }
    }

    /// Returns true for the caller-misuse kind.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
