//! Append-only operations log
//!
//! Every applied mutation (append, delete, balance set) is recorded as
//! one JSON line in `ledger.log`, flushed immediately. The log is a
//! record of what the ledger did, separate from the journals themselves.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Transaction};

/// Kind of mutation recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Append,
    Delete,
    BalanceSet,
    CategoryAdd,
    CategoryDelete,
}

/// A single operations-log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpEntry {
    /// When the mutation was applied (UTC)
    pub timestamp: DateTime<Utc>,

    /// What kind of mutation it was
    pub op: OpKind,

    /// JSON snapshot of the affected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl OpEntry {
    fn new(op: OpKind, detail: Option<serde_json::Value>) -> Self {
        Self {
            timestamp: Utc::now(),
            op,
            detail,
        }
    }
}

/// Writes operations-log entries as line-delimited JSON
pub struct OpLog {
    path: PathBuf,
}

impl OpLog {
    /// Create a log that appends to the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Record an appended transaction
    pub fn log_append(&self, tx: &Transaction) -> LedgerResult<()> {
        self.write(OpEntry::new(OpKind::Append, serde_json::to_value(tx).ok()))
    }

    /// Record a deleted transaction
    pub fn log_delete(&self, tx: &Transaction) -> LedgerResult<()> {
        self.write(OpEntry::new(OpKind::Delete, serde_json::to_value(tx).ok()))
    }

    /// Record a balance overwrite
    pub fn log_balance_set(&self, value: Amount) -> LedgerResult<()> {
        self.write(OpEntry::new(
            OpKind::BalanceSet,
            serde_json::to_value(value).ok(),
        ))
    }

    /// Record a catalog mutation
    pub fn log_category(&self, op: OpKind, name: &str) -> LedgerResult<()> {
        self.write(OpEntry::new(op, serde_json::to_value(name).ok()))
    }

    fn write(&self, entry: OpEntry) -> LedgerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::Storage(format!("failed to open operations log: {}", e)))?;

        let json = serde_json::to_string(&entry)
            .map_err(|e| LedgerError::Storage(format!("failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| LedgerError::Storage(format!("failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| LedgerError::Storage(format!("failed to flush operations log: {}", e)))
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<OpEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| LedgerError::Storage(format!("failed to open operations log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                LedgerError::Storage(format!("failed to read log line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: OpEntry = serde_json::from_str(&line).map_err(|e| {
                LedgerError::Storage(format!("failed to parse log line {}: {}", line_num + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
