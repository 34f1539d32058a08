//! spendbook - free-text personal ledger
//!
//! One command line in, one typed operation out. Lines are classified by
//! their leading token (an amount starts an expense, `+` an income,
//! keywords start queries and edits), validated by per-kind parsers, and
//! applied to a file-backed balance, per-month journals with contiguous
//! 1-based indexing, and a category catalog.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: the `LedgerError` taxonomy
//! - `models`: amounts, periods, transactions, catalog entries
//! - `parse`: command classifier and operation parsers
//! - `storage`: JSON file stores (balance, journals, catalog)
//! - `services`: the ledger service applying operations
//! - `reports`: monthly statistics aggregation
//! - `oplog`: append-only operations log
//! - `exchange`: currency-rate boundary and HTTP client
//! - `export`: journal CSV export
//! - `display`: reply text formatting
//! - `cli`: per-line command dispatch

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod exchange;
pub mod export;
pub mod models;
pub mod oplog;
pub mod parse;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
