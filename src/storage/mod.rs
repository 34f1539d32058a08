//! Storage layer for spendbook
//!
//! File-backed stores with atomic JSON writes. Every call is a full
//! read-modify-write; the design assumes a single writer process.

pub mod balance;
pub mod catalog;
pub mod file_io;
pub mod journal;

pub use balance::BalanceStore;
pub use catalog::CatalogStore;
pub use journal::{DeleteTarget, JournalStore};

use crate::config::SpendbookPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: SpendbookPaths,
    pub balance: BalanceStore,
    pub journals: JournalStore,
    pub catalog: CatalogStore,
}

impl Storage {
    /// Create a new Storage instance, ensuring directories exist
    pub fn new(paths: SpendbookPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            balance: BalanceStore::new(paths.balance_file()),
            journals: JournalStore::new(paths.journals_dir()),
            catalog: CatalogStore::new(paths.catalog_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendbookPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").join("journals").exists());
        assert!(!storage.balance.is_initialized());
    }
}
