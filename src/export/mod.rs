//! Data export

pub mod csv;

pub use csv::export_journal_csv;
