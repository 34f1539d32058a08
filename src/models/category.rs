//! Category catalog entry
//!
//! A catalog entry maps a canonical display name to the lowercase alias
//! tokens that resolve to it. Matching is over aliases only; the canonical
//! name is what gets stored on expense transactions.

use serde::{Deserialize, Serialize};

/// The always-present fallback category
pub const FALLBACK_CATEGORY: &str = "Other";

/// Alias under which the fallback category can be addressed
pub const FALLBACK_ALIAS: &str = "other";

/// One catalog entry: canonical name plus its aliases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Canonical display name (normalized: lowercase, first letter capitalized)
    pub name: String,

    /// Lowercase alias tokens that resolve to this entry
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CategoryEntry {
    /// Create an entry with a normalized name
    pub fn new(name: &str, aliases: Vec<String>) -> Self {
        Self {
            name: normalize_name(name),
            aliases,
        }
    }

    /// The fallback entry seeded into every new catalog
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_CATEGORY.to_string(),
            aliases: vec![FALLBACK_ALIAS.to_string()],
        }
    }

    /// Check whether a token matches one of this entry's aliases
    /// (case-insensitive)
    pub fn matches(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.aliases.iter().any(|a| *a == token)
    }
}

/// Normalize a category name: lowercase, then capitalize the first letter
pub fn normalize_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lowered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("transport"), "Transport");
        assert_eq!(normalize_name("TRANSPORT"), "Transport");
        assert_eq!(normalize_name("  groceries "), "Groceries");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_new_normalizes() {
        let entry = CategoryEntry::new("fOOD", vec!["food".into(), "cafe".into()]);
        assert_eq!(entry.name, "Food");
    }

    #[test]
    fn test_matches_case_insensitive() {
        let entry = CategoryEntry::new("Food", vec!["food".into(), "cafe".into()]);
        assert!(entry.matches("cafe"));
        assert!(entry.matches("CAFE"));
        assert!(entry.matches("Food"));
        assert!(!entry.matches("taxi"));
    }

    #[test]
    fn test_matches_aliases_only() {
        // The canonical name is not itself an alias unless listed.
        let entry = CategoryEntry::new("Food", vec!["cafe".into()]);
        assert!(!entry.matches("food"));
    }

    #[test]
    fn test_fallback() {
        let entry = CategoryEntry::fallback();
        assert_eq!(entry.name, "Other");
        assert!(entry.matches("other"));
    }
}
