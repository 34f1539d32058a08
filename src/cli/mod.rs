//! Command dispatch
//!
//! One free-text line in, one reply out: classify, parse, apply through
//! the ledger service, and render the result. Taxonomy errors become
//! reply text here; nothing is retried.

use crate::config::Settings;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::exchange::RateProvider;
use crate::models::Period;
use crate::parse::{
    classify, parse_balance, parse_category_add, parse_category_delete, parse_delete,
    parse_exchange, parse_expense, parse_income, parse_month, BalanceCommand, CommandKind,
    MonthCommand,
};
use crate::services::Ledger;
use crate::storage::Storage;

/// Dispatch one command line and produce the reply text
pub fn dispatch_line(
    line: &str,
    storage: &Storage,
    settings: &Settings,
    rates: Option<&dyn RateProvider>,
) -> String {
    match try_dispatch(line, storage, settings, rates) {
        Ok(reply) => reply,
        Err(err) => display::format_error(&err),
    }
}

fn try_dispatch(
    line: &str,
    storage: &Storage,
    settings: &Settings,
    rates: Option<&dyn RateProvider>,
) -> LedgerResult<String> {
    let ledger = Ledger::new(storage);

    match classify(line) {
        CommandKind::Expense => {
            let (tx, balance) = ledger.record_expense(parse_expense(line)?)?;
            Ok(display::format_expense_added(&tx, balance))
        }

        CommandKind::Income => {
            let (tx, balance) = ledger.record_income(parse_income(line)?)?;
            Ok(display::format_income_added(&tx, balance))
        }

        CommandKind::BalanceQuery => match parse_balance(line)? {
            BalanceCommand::Show => Ok(display::format_balance(
                ledger.balance()?,
                &settings.base_currency,
            )),
            BalanceCommand::Set(value) => {
                ledger.set_balance(value)?;
                Ok(display::format_balance(value, &settings.base_currency))
            }
            BalanceCommand::Convert(target) => {
                let balance = ledger.balance()?;
                let conversion = provider(rates)?.pair_rate(
                    &settings.base_currency,
                    &target,
                    Some(balance.units() as f64),
                )?;
                Ok(display::format_balance_conversion(
                    balance,
                    &settings.base_currency,
                    &target,
                    &conversion,
                ))
            }
        },

        CommandKind::ExchangeQuery => {
            let cmd = parse_exchange(line)?;
            let conversion = provider(rates)?.pair_rate(&cmd.from, &cmd.to, cmd.amount)?;
            Ok(display::format_exchange(
                &cmd.from,
                &cmd.to,
                cmd.amount,
                &conversion,
            ))
        }

        CommandKind::MonthQuery => match parse_month(line)? {
            MonthCommand::Current => {
                let period = Period::current();
                let entries = ledger.month_entries(period)?;
                Ok(display::format_month_listing(period, &entries))
            }
            MonthCommand::Stats(period) => {
                let stats = ledger.month_stats(period, settings.top_expenses)?;
                Ok(display::format_month_stats(&stats))
            }
        },

        CommandKind::Delete => {
            let (removed, balance) = ledger.delete_entry(parse_delete(line)?)?;
            Ok(display::format_deleted(&removed, balance))
        }

        CommandKind::CategoryShow => {
            let entries = storage.catalog.entries()?;
            Ok(display::format_categories(&entries))
        }

        CommandKind::CategoryAdd => {
            let cmd = parse_category_add(line)?;
            let name = cmd.name.clone();
            let aliases = cmd.aliases.join(", ");
            ledger.add_category(cmd)?;
            Ok(format!("Added category \"{}\". Aliases: {}", name, aliases))
        }

        CommandKind::CategoryDelete => {
            let name = parse_category_delete(line)?;
            ledger.delete_category(&name)?;
            Ok(format!("Deleted category \"{}\".", name))
        }

        CommandKind::Unrecognized => Ok("Unknown command.".to_string()),
    }
}

fn provider<'a>(rates: Option<&'a dyn RateProvider>) -> LedgerResult<&'a dyn RateProvider> {
    rates.ok_or_else(|| {
        LedgerError::ExchangeUnavailable("no exchange API key configured".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpendbookPaths;
    use crate::error::LedgerResult;
    use crate::exchange::Conversion;
    use tempfile::TempDir;

    struct FixedRate(f64);

    impl RateProvider for FixedRate {
        fn pair_rate(
            &self,
            _from: &str,
            _to: &str,
            amount: Option<f64>,
        ) -> LedgerResult<Conversion> {
            Ok(Conversion {
                rate: self.0,
                converted: amount.map(|a| a * self.0),
            })
        }
    }

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage, Settings::default())
    }

    #[test]
    fn test_expense_flow() {
        let (_temp_dir, storage, settings) = setup();

        let reply = dispatch_line("bl 1000", &storage, &settings, None);
        assert!(reply.contains("1000"));

        let reply = dispatch_line("250 taxi home", &storage, &settings, None);
        assert!(reply.contains("-250 Other"));
        assert!(reply.contains("Balance: 750"));
    }

    #[test]
    fn test_expense_before_balance_set() {
        let (_temp_dir, storage, settings) = setup();
        let reply = dispatch_line("250 taxi", &storage, &settings, None);
        assert!(reply.contains("Balance is not set"));
    }

    #[test]
    fn test_invalid_expense_reply() {
        let (_temp_dir, storage, settings) = setup();
        dispatch_line("bl 1000", &storage, &settings, None);

        let reply = dispatch_line("250 250", &storage, &settings, None);
        assert!(reply.contains("Invalid expense"));
    }

    #[test]
    fn test_unknown_command() {
        let (_temp_dir, storage, settings) = setup();
        assert_eq!(
            dispatch_line("bla bla", &storage, &settings, None),
            "Unknown command."
        );
    }

    #[test]
    fn test_category_add_show_delete() {
        let (_temp_dir, storage, settings) = setup();

        let reply = dispatch_line("addcat food: cafe, coffee", &storage, &settings, None);
        assert!(reply.contains("\"Food\""));

        let reply = dispatch_line("categories", &storage, &settings, None);
        assert!(reply.contains("Other: other"));
        assert!(reply.contains("Food: cafe, coffee"));

        let reply = dispatch_line("delcat food", &storage, &settings, None);
        assert!(reply.contains("Deleted"));

        let reply = dispatch_line("delcat food", &storage, &settings, None);
        assert!(reply.contains("does not exist"));
    }

    #[test]
    fn test_delete_flow() {
        let (_temp_dir, storage, settings) = setup();
        dispatch_line("bl 1000", &storage, &settings, None);
        dispatch_line("250 taxi", &storage, &settings, None);

        let reply = dispatch_line("del 1", &storage, &settings, None);
        assert!(reply.contains("Deleted entry 1"));
        assert!(reply.contains("Balance: 1000"));
    }

    #[test]
    fn test_month_stats_for_named_period() {
        let (_temp_dir, storage, settings) = setup();
        dispatch_line("bl 1000", &storage, &settings, None);
        dispatch_line("250 taxi", &storage, &settings, None);

        let period = Period::current();
        let reply = dispatch_line(&format!("month {}", period), &storage, &settings, None);
        assert!(reply.contains("Total spent: 250"));
    }

    #[test]
    fn test_exchange_with_fixed_provider() {
        let (_temp_dir, storage, settings) = setup();
        let rates = FixedRate(2.0);

        let reply = dispatch_line("cv 10 usd eur", &storage, &settings, Some(&rates));
        assert!(reply.contains("20.00"));
    }

    #[test]
    fn test_exchange_without_provider() {
        let (_temp_dir, storage, settings) = setup();
        let reply = dispatch_line("cv usd eur", &storage, &settings, None);
        assert!(reply.contains("unavailable"));
    }

    #[test]
    fn test_balance_convert_overlay_does_not_mutate() {
        let (_temp_dir, storage, settings) = setup();
        let rates = FixedRate(0.5);

        dispatch_line("bl 1000", &storage, &settings, Some(&rates));
        let reply = dispatch_line("bl usd", &storage, &settings, Some(&rates));
        assert!(reply.contains("500.00"));

        let reply = dispatch_line("bl", &storage, &settings, Some(&rates));
        assert!(reply.contains("Balance: 1000"));
    }
}
