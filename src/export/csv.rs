//! CSV export for period journals
//!
//! Writes one row per journal entry in a stable column order, so a
//! period's history can be handed to a spreadsheet or another tool.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Export journal entries as CSV
///
/// Columns: `index,date,amount,category,note,kind`.
pub fn export_journal_csv<W: Write>(writer: W, entries: &[Transaction]) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["index", "date", "amount", "category", "note", "kind"])
        .map_err(|e| LedgerError::Storage(format!("failed to write CSV header: {}", e)))?;

    for tx in entries {
        csv_writer
            .write_record([
                tx.index.to_string(),
                tx.date.format("%Y.%m.%d").to_string(),
                tx.amount.to_string(),
                tx.category.clone(),
                tx.note.clone(),
                tx.kind.to_string(),
            ])
            .map_err(|e| LedgerError::Storage(format!("failed to write CSV row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("failed to flush CSV: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    #[test]
    fn test_export_column_order() {
        let mut tx = Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            Amount::new(250),
            "Transport",
            "Taxi home",
        );
        tx.index = 1;

        let mut buf = Vec::new();
        export_journal_csv(&mut buf, &[tx]).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "index,date,amount,category,note,kind");
        assert_eq!(lines.next().unwrap(), "1,2025.07.14,250,Transport,Taxi home,expense");
    }

    #[test]
    fn test_export_empty_journal() {
        let mut buf = Vec::new();
        export_journal_csv(&mut buf, &[]).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
