//! Reply formatting
//!
//! Turns the core's structured results and taxonomy errors into the text
//! the user sees. Nothing here touches storage; these are pure functions
//! over already-computed values.

use crate::error::LedgerError;
use crate::exchange::{symbol, Conversion};
use crate::models::{Amount, CategoryEntry, Period, Transaction};
use crate::reports::MonthStats;

/// Format a freshly recorded expense with the new balance
pub fn format_expense_added(tx: &Transaction, balance: Amount) -> String {
    let note = if tx.note.is_empty() {
        "(no note)".to_string()
    } else {
        tx.note.clone()
    };
    format!(
        "Added expense: -{} {}\nNote: {}\nBalance: {}",
        tx.amount, tx.category, note, balance
    )
}

/// Format a freshly recorded income with the new balance
pub fn format_income_added(tx: &Transaction, balance: Amount) -> String {
    let source = if tx.note.is_empty() {
        "(no source)".to_string()
    } else {
        tx.note.clone()
    };
    format!(
        "Added income: +{}\nSource: {}\nBalance: {}",
        tx.amount, source, balance
    )
}

/// Format a deleted entry with the restored balance
pub fn format_deleted(tx: &Transaction, balance: Amount) -> String {
    format!(
        "Deleted entry {}: {} {}\nDate: {}\nBalance: {}",
        tx.index,
        tx.amount,
        tx.note,
        tx.date.format("%Y.%m.%d"),
        balance
    )
}

/// Format the current balance
pub fn format_balance(balance: Amount, currency: &str) -> String {
    format!("Balance: {} {}", balance, currency)
}

/// Format the balance converted into another currency
pub fn format_balance_conversion(
    balance: Amount,
    base: &str,
    target: &str,
    conversion: &Conversion,
) -> String {
    let converted = conversion
        .converted
        .unwrap_or(balance.units() as f64 * conversion.rate);
    format!(
        "{}{} = {}{:.2} ({}1 = {}{:.4})",
        symbol(base),
        balance,
        symbol(target),
        converted,
        symbol(base),
        symbol(target),
        conversion.rate
    )
}

/// Format an exchange query reply
pub fn format_exchange(from: &str, to: &str, amount: Option<f64>, conversion: &Conversion) -> String {
    match (amount, conversion.converted) {
        (Some(amount), Some(converted)) => format!(
            "{}{} = {}{:.2} ({}1 = {}{:.4})",
            symbol(from),
            amount,
            symbol(to),
            converted,
            symbol(from),
            symbol(to),
            conversion.rate
        ),
        _ => format!("{}1 = {}{:.4}", symbol(from), symbol(to), conversion.rate),
    }
}

/// Format a period's journal as a numbered listing
pub fn format_month_listing(period: Period, entries: &[Transaction]) -> String {
    if entries.is_empty() {
        return format!("No entries for {}.", period);
    }

    let mut output = format!("Entries for {}:\n", period);
    for tx in entries {
        output.push_str(&format!("{}\n", tx));
    }
    output.trim_end().to_string()
}

/// Format a period's statistics summary
pub fn format_month_stats(stats: &MonthStats) -> String {
    let mut output = format!(
        "Month: {}\nTotal spent: {}\nEntries: {}\n",
        stats.period, stats.total, stats.count
    );

    if !stats.top.is_empty() {
        output.push_str("Biggest expenses:\n");
        for (rank, tx) in stats.top.iter().enumerate() {
            output.push_str(&format!("  {}. {} {}\n", rank + 1, tx.amount, tx.note));
        }
    }

    output.push_str("By category:\n");
    for (name, sum) in &stats.per_category {
        output.push_str(&format!("  {}: {}\n", name, sum));
    }

    output.trim_end().to_string()
}

/// Format the catalog listing
pub fn format_categories(entries: &[CategoryEntry]) -> String {
    let mut output = String::from("Categories:\n");
    for entry in entries {
        output.push_str(&format!("{}: {}\n", entry.name, entry.aliases.join(", ")));
    }
    output.trim_end().to_string()
}

/// Format a taxonomy error as reply text
pub fn format_error(err: &LedgerError) -> String {
    match err {
        LedgerError::InvalidExpenseSyntax => {
            "Invalid expense. Format: <amount> <category> [description]".to_string()
        }
        LedgerError::InvalidIncomeSyntax => {
            "Invalid income. Format: + <amount> [source]".to_string()
        }
        LedgerError::InvalidDeleteSyntax => {
            "Invalid delete. Use a positive entry number, -1, or \"last\".".to_string()
        }
        LedgerError::InvalidCategorySyntax => {
            "Invalid category. Format: <name>: <alias>, <alias>, ...".to_string()
        }
        LedgerError::InvalidBalanceSyntax => {
            "Invalid balance query. Use bl, bl <amount>, or bl <currency>.".to_string()
        }
        LedgerError::InvalidExchangeSyntax => {
            "Invalid exchange query. Format: cv [<amount>] <from> <to>".to_string()
        }
        LedgerError::InvalidMonthSyntax => {
            "Invalid month. Format: month [YYYY.MM]".to_string()
        }
        LedgerError::CategoryNotFound { name } => {
            format!("Category \"{}\" does not exist.", name)
        }
        LedgerError::CatalogNotFound => "No categories have been added yet.".to_string(),
        LedgerError::PeriodNotFound { period } => {
            format!("No entries recorded in {}.", period)
        }
        LedgerError::IndexOutOfRange { index, count } => format!(
            "Entry {} does not exist (the journal has {} entries).",
            index, count
        ),
        LedgerError::NotInitialized => {
            "Balance is not set yet. Set it first: bl <amount>".to_string()
        }
        LedgerError::ExchangeUnavailable(_) => {
            "Exchange-rate service is unavailable. Try again later.".to_string()
        }
        other => format!("Internal error: {}", other),
    }
}
