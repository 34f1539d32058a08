//! Period journal store
//!
//! One JSON file per year-month period, holding an ordered, contiguously
//! indexed transaction log. Appending assigns the next index from the
//! current tail; deleting by position renumbers the survivors so indices
//! always form `1..=N`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Which journal entry a delete command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// The highest-indexed entry
    Last,
    /// A specific 1-based index
    Index(u32),
}

/// Serializable journal file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct JournalData {
    entries: Vec<Transaction>,
}

/// Store for per-period journal files
pub struct JournalStore {
    dir: PathBuf,
}

impl JournalStore {
    /// Create a journal store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn file_for(&self, period: Period) -> PathBuf {
        self.dir.join(format!("{}.json", period))
    }

    /// Whether a journal exists for the period
    pub fn exists(&self, period: Period) -> bool {
        self.file_for(period).exists()
    }

    /// Append a transaction to the journal of the period its date falls in
    ///
    /// Creates the journal on first append. The index is recomputed from
    /// the current tail on every call, so it is never reused within a
    /// batch of appends even if deletions happened in between.
    pub fn append(&self, tx: Transaction) -> LedgerResult<Transaction> {
        let period = Period::from_date(tx.date);
        let path = self.file_for(period);

        let mut data: JournalData = read_json(&path)?;

        let mut tx = tx;
        tx.index = data.entries.last().map(|t| t.index + 1).unwrap_or(1);
        data.entries.push(tx.clone());

        write_json_atomic(&path, &data)?;
        Ok(tx)
    }

    /// Read all transactions for a period, in journal order
    ///
    /// # Errors
    ///
    /// `PeriodNotFound` if the period has no journal.
    pub fn read_all(&self, period: Period) -> LedgerResult<Vec<Transaction>> {
        let path = self.file_for(period);
        if !path.exists() {
            return Err(LedgerError::period_not_found(period));
        }

        let data: JournalData = read_json(&path)?;
        Ok(data.entries)
    }

    /// Delete a transaction and restore the contiguous-from-1 invariant
    ///
    /// `Last` removes the highest-indexed entry without touching the
    /// others. `Index(i)` removes the entry at position `i` and shifts
    /// every later entry's index down by one. Returns the removed
    /// transaction so the caller can reverse it against the balance.
    ///
    /// # Errors
    ///
    /// `PeriodNotFound` if the period has no journal, `IndexOutOfRange`
    /// if the target exceeds the entry count (or the journal is empty).
    pub fn delete(&self, period: Period, target: DeleteTarget) -> LedgerResult<Transaction> {
        let path = self.file_for(period);
        if !path.exists() {
            return Err(LedgerError::period_not_found(period));
        }

        let mut data: JournalData = read_json(&path)?;
        let count = data.entries.len() as u32;

        let removed = match target {
            DeleteTarget::Last => match data.entries.pop() {
                Some(tx) => tx,
                None => return Err(LedgerError::IndexOutOfRange { index: 0, count: 0 }),
            },
            DeleteTarget::Index(index) => {
                if index == 0 || index > count {
                    return Err(LedgerError::IndexOutOfRange { index, count });
                }
                let removed = data.entries.remove(index as usize - 1);
                renumber(&mut data.entries);
                removed
            }
        };

        write_json_atomic(&path, &data)?;
        Ok(removed)
    }
}

/// Reassign indices as one deterministic pass: position k gets index k+1
fn renumber(entries: &mut [Transaction]) {
    for (pos, tx) in entries.iter_mut().enumerate() {
        tx.index = pos as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JournalStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JournalStore::new(temp_dir.path().to_path_buf());
        (temp_dir, store)
    }

    fn expense(units: i64) -> Transaction {
        Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            Amount::new(units),
            "Other",
            "",
        )
    }

    const JULY: Period = Period {
        year: 2025,
        month: 7,
    };

    #[test]
    fn test_append_assigns_contiguous_indices() {
        let (_temp_dir, store) = create_test_store();

        for units in [100, 200, 300] {
            store.append(expense(units)).unwrap();
        }

        let entries = store.read_all(JULY).unwrap();
        let indices: Vec<u32> = entries.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_creates_journal_lazily() {
        let (_temp_dir, store) = create_test_store();
        assert!(!store.exists(JULY));

        let appended = store.append(expense(250)).unwrap();
        assert_eq!(appended.index, 1);
        assert!(store.exists(JULY));
    }

    #[test]
    fn test_read_all_missing_period() {
        let (_temp_dir, store) = create_test_store();
        assert!(matches!(
            store.read_all(JULY),
            Err(LedgerError::PeriodNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_by_index_renumbers() {
        let (_temp_dir, store) = create_test_store();
        for units in [100, 200, 300] {
            store.append(expense(units)).unwrap();
        }

        let removed = store.delete(JULY, DeleteTarget::Index(2)).unwrap();
        assert_eq!(removed.amount.units(), 200);

        let entries = store.read_all(JULY).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries.iter().map(|t| t.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            entries.iter().map(|t| t.amount.units()).collect::<Vec<_>>(),
            vec![100, 300]
        );
    }

    #[test]
    fn test_delete_last_keeps_survivor_indices() {
        let (_temp_dir, store) = create_test_store();
        for units in [100, 200, 300] {
            store.append(expense(units)).unwrap();
        }

        let removed = store.delete(JULY, DeleteTarget::Last).unwrap();
        assert_eq!(removed.index, 3);
        assert_eq!(removed.amount.units(), 300);

        let entries = store.read_all(JULY).unwrap();
        assert_eq!(
            entries.iter().map(|t| t.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_delete_out_of_range() {
        let (_temp_dir, store) = create_test_store();
        store.append(expense(100)).unwrap();

        assert!(matches!(
            store.delete(JULY, DeleteTarget::Index(2)),
            Err(LedgerError::IndexOutOfRange { index: 2, count: 1 })
        ));
        assert!(matches!(
            store.delete(JULY, DeleteTarget::Index(0)),
            Err(LedgerError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_delete_missing_period() {
        let (_temp_dir, store) = create_test_store();
        assert!(matches!(
            store.delete(JULY, DeleteTarget::Last),
            Err(LedgerError::PeriodNotFound { .. })
        ));
    }

    #[test]
    fn test_index_recomputed_from_tail_after_delete() {
        let (_temp_dir, store) = create_test_store();
        for units in [100, 200] {
            store.append(expense(units)).unwrap();
        }

        store.delete(JULY, DeleteTarget::Last).unwrap();
        let appended = store.append(expense(300)).unwrap();

        // Tail is index 1, so the fresh entry gets 2
        assert_eq!(appended.index, 2);
        let entries = store.read_all(JULY).unwrap();
        assert_eq!(
            entries.iter().map(|t| t.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_periods_do_not_share_journals() {
        let (_temp_dir, store) = create_test_store();
        store.append(expense(100)).unwrap();

        let august = Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            Amount::new(500),
            "Other",
            "",
        );
        let appended = store.append(august).unwrap();
        assert_eq!(appended.index, 1);

        assert_eq!(store.read_all(JULY).unwrap().len(), 1);
        assert_eq!(store.read_all(Period::new(2025, 8)).unwrap().len(), 1);
    }

    #[test]
    fn test_relative_order_preserved_on_delete() {
        let (_temp_dir, store) = create_test_store();
        for units in [10, 20, 30, 40, 50] {
            store.append(expense(units)).unwrap();
        }

        store.delete(JULY, DeleteTarget::Index(3)).unwrap();

        let entries = store.read_all(JULY).unwrap();
        assert_eq!(
            entries.iter().map(|t| t.amount.units()).collect::<Vec<_>>(),
            vec![10, 20, 40, 50]
        );
        assert_eq!(
            entries.iter().map(|t| t.index).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }
}
