//! Business logic layer

pub mod ledger;

pub use ledger::Ledger;
