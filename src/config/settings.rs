//! User settings for spendbook
//!
//! A small JSON settings file next to the data directory. Every field has
//! a serde default so older files keep loading as fields are added.

use serde::{Deserialize, Serialize};

use super::paths::SpendbookPaths;
use crate::error::LedgerResult;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code the balance is denominated in
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    /// API key for the exchange-rate service, if configured
    #[serde(default)]
    pub exchange_api_key: Option<String>,

    /// How many biggest expenses the month report shows
    #[serde(default = "default_top_expenses")]
    pub top_expenses: usize,
}

fn default_base_currency() -> String {
    "UAH".to_string()
}

fn default_top_expenses() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            exchange_api_key: None,
            top_expenses: default_top_expenses(),
        }
    }
}

impl Settings {
    /// Load settings, writing a default file on first run
    pub fn load_or_create(paths: &SpendbookPaths) -> LedgerResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            let settings = Self::default();
            write_json_atomic(&path, &settings)?;
            return Ok(settings);
        }
        read_json(&path)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendbookPaths) -> LedgerResult<()> {
        write_json_atomic(&paths.settings_file(), self)
    }
}
