//! Month query parser
//!
//! A bare month keyword asks for the current period's journal listing;
//! `month YYYY.MM` asks for that period's statistics summary.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Period;

/// A parsed month query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthCommand {
    /// List the current period's journal
    Current,
    /// Summarize the named period
    Stats(Period),
}

/// Parse a month line
///
/// # Errors
///
/// `InvalidMonthSyntax` if the argument is not a `YYYY.MM` period or
/// there is more than one argument.
pub fn parse_month(line: &str) -> LedgerResult<MonthCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.len() {
        1 => Ok(MonthCommand::Current),
        2 => Period::parse(tokens[1])
            .map(MonthCommand::Stats)
            .map_err(|_| LedgerError::InvalidMonthSyntax),
        _ => Err(LedgerError::InvalidMonthSyntax),
    }
}
