//! Ledger service
//!
//! Applies typed operations to the stores: recording expenses and
//! incomes, deleting entries with balance reversal, and catalog edits.
//! One command is fully applied before the next is accepted; every
//! mutation lands in the operations log.

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{Amount, Period, Transaction};
use crate::oplog::{OpKind, OpLog};
use crate::parse::{CategoryAddCommand, ExpenseCommand, IncomeCommand};
use crate::reports::MonthStats;
use crate::storage::{DeleteTarget, Storage};

/// Service applying ledger operations over the storage layer
pub struct Ledger<'a> {
    storage: &'a Storage,
    oplog: OpLog,
}

impl<'a> Ledger<'a> {
    /// Create a ledger service over the given storage
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            oplog: OpLog::new(storage.paths().oplog_file()),
        }
    }

    /// Record a parsed expense dated today
    ///
    /// Resolves the category, appends to the current period's journal,
    /// and subtracts the amount from the balance. Returns the stored
    /// entry and the new balance.
    pub fn record_expense(&self, cmd: ExpenseCommand) -> LedgerResult<(Transaction, Amount)> {
        self.record_expense_on(cmd, today())
    }

    /// Record a parsed expense on an explicit date
    pub fn record_expense_on(
        &self,
        cmd: ExpenseCommand,
        date: NaiveDate,
    ) -> LedgerResult<(Transaction, Amount)> {
        let tx = cmd.into_transaction(&self.storage.catalog, date)?;
        self.apply(tx)
    }

    /// Record a parsed income dated today
    pub fn record_income(&self, cmd: IncomeCommand) -> LedgerResult<(Transaction, Amount)> {
        self.record_income_on(cmd, today())
    }

    /// Record a parsed income on an explicit date
    pub fn record_income_on(
        &self,
        cmd: IncomeCommand,
        date: NaiveDate,
    ) -> LedgerResult<(Transaction, Amount)> {
        let tx = Transaction::income(date, cmd.amount, cmd.source);
        self.apply(tx)
    }

    fn apply(&self, tx: Transaction) -> LedgerResult<(Transaction, Amount)> {
        // Balance first: an uninitialized balance rejects the command
        // before anything is journaled.
        let current = self.storage.balance.get()?;

        let stored = self.storage.journals.append(tx)?;
        let new_balance = current + stored.signed_delta();
        self.storage.balance.set(new_balance)?;

        self.oplog.log_append(&stored)?;
        Ok((stored, new_balance))
    }

    /// Delete an entry from the current period and reverse its balance
    /// effect
    pub fn delete_entry(&self, target: DeleteTarget) -> LedgerResult<(Transaction, Amount)> {
        self.delete_entry_in(Period::current(), target)
    }

    /// Delete an entry from an explicit period
    pub fn delete_entry_in(
        &self,
        period: Period,
        target: DeleteTarget,
    ) -> LedgerResult<(Transaction, Amount)> {
        let current = self.storage.balance.get()?;

        let removed = self.storage.journals.delete(period, target)?;
        let new_balance = current - removed.signed_delta();
        self.storage.balance.set(new_balance)?;

        self.oplog.log_delete(&removed)?;
        Ok((removed, new_balance))
    }

    /// Read the current balance
    pub fn balance(&self) -> LedgerResult<Amount> {
        self.storage.balance.get()
    }

    /// Overwrite the balance
    pub fn set_balance(&self, value: Amount) -> LedgerResult<()> {
        self.storage.balance.set(value)?;
        self.oplog.log_balance_set(value)
    }

    /// All entries of a period's journal, in order
    pub fn month_entries(&self, period: Period) -> LedgerResult<Vec<Transaction>> {
        self.storage.journals.read_all(period)
    }

    /// Statistics summary for a period
    pub fn month_stats(&self, period: Period, top_n: usize) -> LedgerResult<MonthStats> {
        let entries = self.storage.journals.read_all(period)?;
        let names = self.storage.catalog.names()?;
        Ok(MonthStats::generate(period, &entries, names, top_n))
    }

    /// Add or overwrite a catalog entry
    pub fn add_category(&self, cmd: CategoryAddCommand) -> LedgerResult<()> {
        self.storage.catalog.add(&cmd.name, cmd.aliases)?;
        self.oplog.log_category(OpKind::CategoryAdd, &cmd.name)
    }

    /// Delete a catalog entry by normalized name
    pub fn delete_category(&self, name: &str) -> LedgerResult<()> {
        self.storage.catalog.delete(name)?;
        self.oplog.log_category(OpKind::CategoryDelete, name)
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
