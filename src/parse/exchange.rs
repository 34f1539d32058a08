//! Exchange query parser
//!
//! Contract: `<marker> <from> <to>` for a pair rate, or
//! `<marker> <amount> <from> <to>` to also convert an amount. Both
//! currencies must be known codes and must differ.

use crate::error::{LedgerError, LedgerResult};
use crate::exchange::is_known_currency;

/// A parsed exchange query
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeCommand {
    /// Source currency code (uppercase)
    pub from: String,
    /// Target currency code (uppercase)
    pub to: String,
    /// Amount to convert, if one was given
    pub amount: Option<f64>,
}

/// Parse an exchange line
///
/// # Errors
///
/// `InvalidExchangeSyntax` for a wrong token count, unknown or equal
/// currency codes, or a non-numeric amount.
pub fn parse_exchange(line: &str) -> LedgerResult<ExchangeCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (amount, from, to) = match tokens.len() {
        3 => (None, tokens[1], tokens[2]),
        4 => {
            let amount: f64 = tokens[1]
                .parse()
                .map_err(|_| LedgerError::InvalidExchangeSyntax)?;
            (Some(amount), tokens[2], tokens[3])
        }
        _ => return Err(LedgerError::InvalidExchangeSyntax),
    };

    if !is_known_currency(from) || !is_known_currency(to) {
        return Err(LedgerError::InvalidExchangeSyntax);
    }
    if from.eq_ignore_ascii_case(to) {
        return Err(LedgerError::InvalidExchangeSyntax);
    }

    Ok(ExchangeCommand {
        from: from.to_uppercase(),
        to: to.to_uppercase(),
        amount,
    })
}
