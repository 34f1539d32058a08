//! Balance account store
//!
//! A single signed scalar persisted independently of any period. The file
//! does not exist until the balance is first set; reading before that
//! fails with `NotInitialized`.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Amount;

use super::file_io::write_json_atomic;

/// Store for the process-wide balance scalar
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    /// Create a balance store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the current balance
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the balance has never been set.
    pub fn get(&self) -> LedgerResult<Amount> {
        if !self.path.exists() {
            return Err(LedgerError::NotInitialized);
        }

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Storage(format!("failed to open {}: {}", self.path.display(), e))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            LedgerError::Storage(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Overwrite the balance, creating the file on first call
    pub fn set(&self, value: Amount) -> LedgerResult<()> {
        write_json_atomic(&self.path, &value)
    }

    /// Whether the balance has ever been set
    pub fn is_initialized(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BalanceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BalanceStore::new(temp_dir.path().join("balance.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_get_before_set_fails() {
        let (_temp_dir, store) = create_test_store();
        assert!(matches!(store.get(), Err(LedgerError::NotInitialized)));
        assert!(!store.is_initialized());
    }

    #[test]
    fn test_set_then_get() {
        let (_temp_dir, store) = create_test_store();

        store.set(Amount::new(1500)).unwrap();
        assert!(store.is_initialized());
        assert_eq!(store.get().unwrap().units(), 1500);

        // set is an unconditional overwrite
        store.set(Amount::new(-20)).unwrap();
        assert_eq!(store.get().unwrap().units(), -20);
    }
}
