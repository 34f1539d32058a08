//! Category catalog store
//!
//! The catalog lives in one JSON file and is cached in memory; every
//! mutation writes through and refreshes the cache, so lookups during a
//! command never re-read the file. The catalog is created lazily with the
//! fallback entry the first time anything resolves against it.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::category::{normalize_name, CategoryEntry, FALLBACK_CATEGORY};

use super::file_io::{read_json, write_json_atomic};

/// Serializable catalog file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogData {
    entries: Vec<CategoryEntry>,
}

/// Store for the category catalog
pub struct CatalogStore {
    path: PathBuf,
    cache: RwLock<Option<Vec<CategoryEntry>>>,
}

impl CatalogStore {
    /// Create a catalog store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::new(None),
        }
    }

    /// Whether a catalog file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Resolve a free-text token to a canonical category name
    ///
    /// Case-insensitive scan over every entry's aliases, first match wins.
    /// Falls back to the default category when nothing matches. Creates
    /// the catalog (fallback entry only) if it doesn't exist yet.
    pub fn resolve(&self, token: &str) -> LedgerResult<String> {
        if !self.exists() {
            self.write_entries(vec![CategoryEntry::fallback()])?;
        }

        let entries = self.cached_entries()?;
        Ok(entries
            .iter()
            .find(|e| e.matches(token))
            .map(|e| e.name.clone())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()))
    }

    /// Add or overwrite a catalog entry
    ///
    /// The name is normalized before storing. A missing catalog is created
    /// pre-seeded with the fallback entry plus the new one.
    pub fn add(&self, name: &str, aliases: Vec<String>) -> LedgerResult<CategoryEntry> {
        let entry = CategoryEntry::new(name, aliases);

        let mut entries = if self.exists() {
            self.cached_entries()?
        } else {
            vec![CategoryEntry::fallback()]
        };

        match entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }

        self.write_entries(entries)?;
        Ok(entry)
    }

    /// Delete a catalog entry by name
    ///
    /// # Errors
    ///
    /// `CatalogNotFound` if no catalog exists yet, `CategoryNotFound` if
    /// the normalized name has no entry.
    pub fn delete(&self, name: &str) -> LedgerResult<()> {
        if !self.exists() {
            return Err(LedgerError::CatalogNotFound);
        }

        let name = normalize_name(name);
        let mut entries = self.cached_entries()?;

        let before = entries.len();
        entries.retain(|e| e.name != name);
        if entries.len() == before {
            return Err(LedgerError::category_not_found(name));
        }

        self.write_entries(entries)
    }

    /// All catalog entries, in stored order
    ///
    /// # Errors
    ///
    /// `CatalogNotFound` if no catalog exists yet.
    pub fn entries(&self) -> LedgerResult<Vec<CategoryEntry>> {
        if !self.exists() {
            return Err(LedgerError::CatalogNotFound);
        }
        self.cached_entries()
    }

    /// The current set of canonical names, empty when no catalog exists
    ///
    /// Statistics zero-fill against this set, and a period can be
    /// summarized before any expense ever created the catalog.
    pub fn names(&self) -> LedgerResult<Vec<String>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        Ok(self.cached_entries()?.into_iter().map(|e| e.name).collect())
    }

    fn cached_entries(&self) -> LedgerResult<Vec<CategoryEntry>> {
        {
            let cache = self
                .cache
                .read()
                .map_err(|e| LedgerError::Storage(format!("failed to acquire read lock: {}", e)))?;
            if let Some(entries) = cache.as_ref() {
                return Ok(entries.clone());
            }
        }

        let data: CatalogData = read_json(&self.path)?;

        let mut cache = self
            .cache
            .write()
            .map_err(|e| LedgerError::Storage(format!("failed to acquire write lock: {}", e)))?;
        *cache = Some(data.entries.clone());
        Ok(data.entries)
    }

    fn write_entries(&self, entries: Vec<CategoryEntry>) -> LedgerResult<()> {
        write_json_atomic(
            &self.path,
            &CatalogData {
                entries: entries.clone(),
            },
        )?;

        let mut cache = self
            .cache
            .write()
            .map_err(|e| LedgerError::Storage(format!("failed to acquire write lock: {}", e)))?;
        *cache = Some(entries);
        Ok(())
    }
}
