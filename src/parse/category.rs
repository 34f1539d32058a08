//! Category command parsers
//!
//! An add body is `<name>: <alias>, <alias>, ...`: split on the first
//! `:`, with aliases extracted as maximal runs of alphabetic characters in
//! order of appearance. A delete body is just the category name.

use crate::error::{LedgerError, LedgerResult};
use crate::models::category::normalize_name;

/// A parsed category-add command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAddCommand {
    /// Normalized canonical name
    pub name: String,
    /// Lowercase aliases in order of appearance
    pub aliases: Vec<String>,
}

/// Parse a category-add line (marker token included)
///
/// # Errors
///
/// `InvalidCategorySyntax` if the body lacks a `:` or the name segment is
/// empty.
pub fn parse_category_add(line: &str) -> LedgerResult<CategoryAddCommand> {
    let body = strip_marker(line);

    let (name_segment, aliases_segment) = body
        .split_once(':')
        .ok_or(LedgerError::InvalidCategorySyntax)?;

    let name = normalize_name(name_segment);
    if name.is_empty() {
        return Err(LedgerError::InvalidCategorySyntax);
    }

    Ok(CategoryAddCommand {
        name,
        aliases: alphabetic_runs(aliases_segment),
    })
}

/// Parse a category-delete line (marker token included)
///
/// # Errors
///
/// `InvalidCategorySyntax` if no name follows the marker.
pub fn parse_category_delete(line: &str) -> LedgerResult<String> {
    let name = normalize_name(strip_marker(line));
    if name.is_empty() {
        return Err(LedgerError::InvalidCategorySyntax);
    }
    Ok(name)
}

/// Everything after the first whitespace-delimited token
fn strip_marker(line: &str) -> &str {
    line.trim_start()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

/// Maximal runs of alphabetic characters, lowercased, in order
fn alphabetic_runs(segment: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();

    for c in segment.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_aliases() {
        let cmd = parse_category_add("addcat food: cafe, coffee, GROCERY").unwrap();
        assert_eq!(cmd.name, "Food");
        assert_eq!(cmd.aliases, vec!["cafe", "coffee", "grocery"]);
    }

    #[test]
    fn test_add_aliases_split_on_non_alphabetic() {
        let cmd = parse_category_add("addcat transport: taxi/bus;metro42tram").unwrap();
        assert_eq!(cmd.aliases, vec!["taxi", "bus", "metro", "tram"]);
    }

    #[test]
    fn test_add_empty_alias_segment() {
        let cmd = parse_category_add("addcat food:").unwrap();
        assert_eq!(cmd.name, "Food");
        assert!(cmd.aliases.is_empty());
    }

    #[test]
    fn test_add_rejects_missing_colon() {
        assert!(matches!(
            parse_category_add("addcat food cafe"),
            Err(LedgerError::InvalidCategorySyntax)
        ));
    }

    #[test]
    fn test_add_rejects_empty_name() {
        assert!(parse_category_add("addcat : cafe").is_err());
        assert!(parse_category_add("addcat").is_err());
    }

    #[test]
    fn test_delete_normalizes_name() {
        assert_eq!(parse_category_delete("delcat FOOD").unwrap(), "Food");
    }

    #[test]
    fn test_delete_rejects_missing_name() {
        assert!(parse_category_delete("delcat").is_err());
        assert!(parse_category_delete("delcat   ").is_err());
    }
}
