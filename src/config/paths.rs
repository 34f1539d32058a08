//! Path management for spendbook
//!
//! Resolves where the balance file, journals, catalog, and settings live.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendbook` or `~/.config/spendbook`
//! 3. Windows: `%APPDATA%\spendbook`

use std::path::PathBuf;

use crate::error::LedgerError;
use crate::models::Period;

/// Manages all paths used by spendbook
#[derive(Debug, Clone)]
pub struct SpendbookPaths {
    base_dir: PathBuf,
}

impl SpendbookPaths {
    /// Create a new SpendbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding one journal file per period
    pub fn journals_dir(&self) -> PathBuf {
        self.data_dir().join("journals")
    }

    /// Get the path to the journal file for a period (`journals/YYYY.MM.json`)
    pub fn journal_file(&self, period: Period) -> PathBuf {
        self.journals_dir().join(format!("{}.json", period))
    }

    /// Get the path to the balance scalar file
    pub fn balance_file(&self) -> PathBuf {
        self.data_dir().join("balance.json")
    }

    /// Get the path to the category catalog file
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir().join("catalog.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the operations log
    pub fn oplog_file(&self) -> PathBuf {
        self.base_dir.join("ledger.log")
    }

    /// Ensure the base, data, and journals directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Config(format!("failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.journals_dir())
            .map_err(|e| LedgerError::Config(format!("failed to create journals directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| LedgerError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("spendbook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedgerError::Config("could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.journals_dir(),
            temp_dir.path().join("data").join("journals")
        );
    }

    #[test]
    fn test_journal_file_naming() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.journal_file(Period::new(2025, 3)),
            paths.journals_dir().join("2025.03.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.journals_dir().exists());
    }
}
