//! Command classification and operation parsers
//!
//! `classify` tags a raw line with an operation kind; the per-kind
//! parsers validate syntax and produce typed commands for the services
//! layer to apply.

pub mod balance;
pub mod category;
pub mod classifier;
pub mod delete;
pub mod exchange;
pub mod expense;
pub mod income;
pub mod month;

pub use balance::{parse_balance, BalanceCommand};
pub use category::{parse_category_add, parse_category_delete, CategoryAddCommand};
pub use classifier::{classify, CommandKind};
pub use delete::parse_delete;
pub use exchange::{parse_exchange, ExchangeCommand};
pub use expense::{parse_expense, ExpenseCommand};
pub use income::{parse_income, IncomeCommand};
pub use month::{parse_month, MonthCommand};
