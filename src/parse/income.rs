//! Income line parser
//!
//! Contract: `+ <amount> [source words...]`. The amount may be a real
//! number ("+ 99.5 refund") and is truncated to whole units; the source is
//! everything after the amount, whitespace-collapsed.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Amount;

/// A syntactically valid income command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeCommand {
    pub amount: Amount,
    pub source: String,
}

/// Parse an income line
///
/// # Errors
///
/// `InvalidIncomeSyntax` if the second token is missing, non-numeric, or
/// zero.
pub fn parse_income(line: &str) -> LedgerResult<IncomeCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let amount_token = tokens.get(1).ok_or(LedgerError::InvalidIncomeSyntax)?;
    let amount =
        Amount::parse_truncating(amount_token).map_err(|_| LedgerError::InvalidIncomeSyntax)?;

    // The zero check runs on the untruncated value: "+ 0.4 tip" is a
    // non-zero income even though it truncates to 0 stored units.
    let raw: f64 = amount_token
        .parse()
        .map_err(|_| LedgerError::InvalidIncomeSyntax)?;
    if raw == 0.0 {
        return Err(LedgerError::InvalidIncomeSyntax);
    }

    Ok(IncomeCommand {
        amount,
        source: tokens[2..].join(" "),
    })
}
