//! Core data models for spendbook
//!
//! - `Amount`: whole-unit signed money value
//! - `Period`: year-month bucket identifying one journal
//! - `Transaction` / `TxKind`: a single journal entry
//! - `CategoryEntry`: one catalog entry (canonical name + aliases)

pub mod amount;
pub mod category;
pub mod period;
pub mod transaction;

pub use amount::Amount;
pub use category::{CategoryEntry, FALLBACK_CATEGORY};
pub use period::Period;
pub use transaction::{Transaction, TxKind};
