//! Custom error types for spendbook
//!
//! This module defines the error taxonomy for ledger operations using
//! thiserror for ergonomic error definitions. Every parser and store
//! operation returns one of these values; none of them is process-fatal.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Expense line does not match `<amount> <category> [description...]`
    #[error("invalid expense syntax")]
    InvalidExpenseSyntax,

    /// Income line does not match `+ <amount> [source...]`
    #[error("invalid income syntax")]
    InvalidIncomeSyntax,

    /// Delete line does not name `last`, `-1`, or a positive index
    #[error("invalid delete syntax")]
    InvalidDeleteSyntax,

    /// Category add/delete body is malformed (missing `:` separator)
    #[error("invalid category syntax")]
    InvalidCategorySyntax,

    /// Balance sub-command is not show, set, or convert
    #[error("invalid balance query syntax")]
    InvalidBalanceSyntax,

    /// Exchange query is not `<from> <to>` or `<amount> <from> <to>`
    #[error("invalid exchange query syntax")]
    InvalidExchangeSyntax,

    /// Month argument is not a `YYYY.MM` period
    #[error("invalid month syntax")]
    InvalidMonthSyntax,

    /// Named category has no entry in the catalog
    #[error("category not found: {name}")]
    CategoryNotFound { name: String },

    /// No category catalog has been created yet
    #[error("category catalog not found")]
    CatalogNotFound,

    /// The requested period has no journal
    #[error("no journal for period {period}")]
    PeriodNotFound { period: String },

    /// Deletion index exceeds the journal's entry count
    #[error("index {index} out of range (journal has {count} entries)")]
    IndexOutOfRange { index: u32, count: u32 },

    /// The balance has never been set
    #[error("balance not initialized")]
    NotInitialized,

    /// The external exchange-rate service failed or is unreachable
    #[error("exchange service unavailable: {0}")]
    ExchangeUnavailable(String),

    /// File I/O or serialization faults from the storage layer
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration errors (paths, settings file)
    #[error("configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Create a "category not found" error
    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound { name: name.into() }
    }

    /// Create a "period not found" error
    pub fn period_not_found(period: impl std::fmt::Display) -> Self {
        Self::PeriodNotFound {
            period: period.to_string(),
        }
    }

    /// Check if this is one of the parser syntax errors
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpenseSyntax
                | Self::InvalidIncomeSyntax
                | Self::InvalidDeleteSyntax
                | Self::InvalidCategorySyntax
                | Self::InvalidBalanceSyntax
                | Self::InvalidExchangeSyntax
                | Self::InvalidMonthSyntax
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
