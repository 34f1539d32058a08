//! Balance query parser
//!
//! A bare balance keyword shows the balance; a second integer token sets
//! it; a second currency token asks for a conversion overlay.

use crate::error::{LedgerError, LedgerResult};
use crate::exchange::is_known_currency;
use crate::models::Amount;

/// A parsed balance sub-command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceCommand {
    /// Display the current balance
    Show,
    /// Overwrite the balance with a new value
    Set(Amount),
    /// Display the balance converted to another currency (uppercase code)
    Convert(String),
}

/// Parse a balance line
///
/// # Errors
///
/// `InvalidBalanceSyntax` if there are three or more tokens, or the
/// second token is neither an integer nor a known currency code.
pub fn parse_balance(line: &str) -> LedgerResult<BalanceCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.len() {
        1 => Ok(BalanceCommand::Show),
        2 => {
            let arg = tokens[1];
            if is_known_currency(arg) {
                return Ok(BalanceCommand::Convert(arg.to_uppercase()));
            }
            Amount::parse(arg)
                .map(BalanceCommand::Set)
                .map_err(|_| LedgerError::InvalidBalanceSyntax)
        }
        _ => Err(LedgerError::InvalidBalanceSyntax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show() {
        assert_eq!(parse_balance("bl").unwrap(), BalanceCommand::Show);
    }

    #[test]
    fn test_set() {
        assert_eq!(
            parse_balance("bl 1500").unwrap(),
            BalanceCommand::Set(Amount::new(1500))
        );
        assert_eq!(
            parse_balance("balance -20").unwrap(),
            BalanceCommand::Set(Amount::new(-20))
        );
    }

    #[test]
    fn test_convert() {
        assert_eq!(
            parse_balance("bl usd").unwrap(),
            BalanceCommand::Convert("USD".to_string())
        );
        assert_eq!(
            parse_balance("bl EUR").unwrap(),
            BalanceCommand::Convert("EUR".to_string())
        );
    }

    #[test]
    fn test_rejects_unknown_argument() {
        assert!(parse_balance("bl gbp").is_err());
        assert!(parse_balance("bl 10.5").is_err());
    }

    #[test]
    fn test_rejects_extra_tokens() {
        assert!(parse_balance("bl 100 usd").is_err());
    }
}
