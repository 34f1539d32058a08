//! Expense line parser
//!
//! Contract: `<amount> <category-token> [description words...]`.
//! The amount must be a non-zero integer and the category token must not
//! contain digits (`"250 250"` is rejected). Category resolution happens
//! against the catalog when the parsed command is turned into a journal
//! entry.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Transaction};
use crate::storage::CatalogStore;

/// A syntactically valid expense command, not yet resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseCommand {
    pub amount: Amount,
    pub category_token: String,
    pub description: String,
}

/// Parse an expense line
///
/// # Errors
///
/// `InvalidExpenseSyntax` for a single-token line, a zero amount, a
/// non-integer amount, or a category token containing digits.
pub fn parse_expense(line: &str) -> LedgerResult<ExpenseCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(LedgerError::InvalidExpenseSyntax);
    }

    let amount = Amount::parse(tokens[0]).map_err(|_| LedgerError::InvalidExpenseSyntax)?;
    if amount.is_zero() {
        return Err(LedgerError::InvalidExpenseSyntax);
    }

    let category_token = tokens[1];
    if category_token.chars().any(|c| c.is_ascii_digit()) {
        return Err(LedgerError::InvalidExpenseSyntax);
    }

    Ok(ExpenseCommand {
        amount,
        category_token: category_token.to_string(),
        description: tokens[2..].join(" "),
    })
}

impl ExpenseCommand {
    /// Resolve the category and build the journal entry
    ///
    /// The category token goes through the catalog (falling back to the
    /// default entry); the note is the capitalized token followed by the
    /// description, trimmed of trailing whitespace.
    pub fn into_transaction(
        self,
        catalog: &CatalogStore,
        date: NaiveDate,
    ) -> LedgerResult<Transaction> {
        let category = catalog.resolve(&self.category_token)?;

        let note = format!("{} {}", capitalize(&self.category_token), self.description)
            .trim_end()
            .to_string();

        Ok(Transaction::expense(date, self.amount, category, note))
    }
}

/// Capitalize the first character of a token, leaving the rest untouched
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
