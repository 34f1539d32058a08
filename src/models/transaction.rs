//! Transaction model
//!
//! A journal entry: either an expense against a catalog category or an
//! income from some source. Entries are immutable once stored, except for
//! the index, which is renumbered when an earlier entry is deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// Kind of a ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Money spent; carries a canonical category
    #[default]
    Expense,
    /// Money received; category is empty, the note names the source
    Income,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// 1-based position within the period's journal, contiguous
    pub index: u32,

    /// Calendar date the entry was recorded
    pub date: NaiveDate,

    /// Amount in whole currency units; stored positive for both kinds
    pub amount: Amount,

    /// Canonical category name (expenses only, empty for income)
    #[serde(default)]
    pub category: String,

    /// Free text: category-prefixed description for expenses, source for income
    #[serde(default)]
    pub note: String,

    /// Whether this entry is an expense or an income
    #[serde(default)]
    pub kind: TxKind,
}

impl Transaction {
    /// Create an unindexed expense entry (the journal assigns the index)
    pub fn expense(
        date: NaiveDate,
        amount: Amount,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            index: 0,
            date,
            amount,
            category: category.into(),
            note: note.into(),
            kind: TxKind::Expense,
        }
    }

    /// Create an unindexed income entry
    pub fn income(date: NaiveDate, amount: Amount, source: impl Into<String>) -> Self {
        Self {
            index: 0,
            date,
            amount,
            category: String::new(),
            note: source.into(),
            kind: TxKind::Income,
        }
    }

    /// The delta this entry applies to the balance when recorded
    ///
    /// Expenses subtract, incomes add. Reversing a deletion subtracts the
    /// same delta, so the sign is tracked by kind rather than assumed from
    /// the stored amount.
    pub fn signed_delta(&self) -> Amount {
        match self.kind {
            TxKind::Expense => -self.amount,
            TxKind::Income => self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {}",
            self.index,
            self.date.format("%Y.%m.%d"),
            self.amount,
            self.note
        )
    }
}
