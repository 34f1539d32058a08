//! Calendar period identifying one journal
//!
//! A period is a year-month bucket rendered as "YYYY.MM". Every journal
//! file is keyed by the period of its transactions' dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A year-month bucket identifying one journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a period for the given year and month
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Get the period containing today's date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Get the period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a "YYYY.MM" period string
    ///
    /// The year must be exactly four digits and the month exactly two
    /// digits in 01..=12. Anything else is rejected.
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        let (year_part, month_part) = s
            .split_once('.')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        if year_part.len() != 4
            || month_part.len() != 2
            || !year_part.chars().all(|c| c.is_ascii_digit())
            || !month_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year_part
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}.{:02}", self.year, self.month)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2025.03").unwrap(), Period::new(2025, 3));
        assert_eq!(Period::parse("1999.12").unwrap(), Period::new(1999, 12));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Period::parse("2025-03").is_err());
        assert!(Period::parse("25.03").is_err());
        assert!(Period::parse("2025.3").is_err());
        assert!(Period::parse("2025.13").is_err());
        assert!(Period::parse("2025.00").is_err());
        assert!(Period::parse("year.mo").is_err());
        assert!(Period::parse("").is_err());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        assert_eq!(Period::from_date(date), Period::new(2025, 7));
    }

    #[test]
    fn test_contains() {
        let period = Period::new(2025, 7);
        assert!(period.contains(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Period::new(2025, 3)), "2025.03");
        assert_eq!(format!("{}", Period::new(999, 11)), "0999.11");
    }
}
