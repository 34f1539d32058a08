//! Monthly statistics
//!
//! Aggregates one period's journal into an expense summary: total spent,
//! running entry count, the biggest expenses, and per-category sums
//! zero-filled from the catalog's current key set. Income entries sit in
//! the same journal but are excluded from every statistic here.

use crate::models::{Amount, Period, Transaction};

/// Expense statistics for one period
#[derive(Debug, Clone)]
pub struct MonthStats {
    /// The summarized period
    pub period: Period,

    /// Sum of all expense amounts in the period
    pub total: Amount,

    /// Highest transaction index present (the running entry counter)
    pub count: u32,

    /// Biggest expenses, descending by amount, at most the requested N
    pub top: Vec<Transaction>,

    /// Per-category expense sums in catalog order, zero-filled
    ///
    /// Entries whose stored category is no longer in the catalog are
    /// excluded, so these sums can diverge from `total`.
    pub per_category: Vec<(String, Amount)>,
}

impl MonthStats {
    /// Aggregate a period's journal against the catalog's current names
    pub fn generate(
        period: Period,
        entries: &[Transaction],
        catalog_names: Vec<String>,
        top_n: usize,
    ) -> Self {
        let expenses: Vec<&Transaction> = entries.iter().filter(|t| t.is_expense()).collect();

        let total: Amount = expenses.iter().map(|t| t.amount).sum();
        let count = entries.iter().map(|t| t.index).max().unwrap_or(0);

        // Stable sort keeps the journal order of equal amounts
        let mut ranked: Vec<Transaction> = expenses.iter().map(|t| (*t).clone()).collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked.truncate(top_n.min(ranked.len()));

        let per_category = catalog_names
            .into_iter()
            .map(|name| {
                let sum: Amount = expenses
                    .iter()
                    .filter(|t| t.category == name)
                    .map(|t| t.amount)
                    .sum();
                (name, sum)
            })
            .collect();

        Self {
            period,
            total,
            count,
            top: ranked,
            per_category,
        }
    }

    /// The summed amount for a category, if it is in the mapping
    pub fn category_total(&self, name: &str) -> Option<Amount> {
        self.per_category
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sum)| *sum)
    }

    /// Sum of the per-category mapping
    ///
    /// Equals `total` while every stored category is still in the
    /// catalog; diverges by exactly the omitted amounts otherwise.
    pub fn per_category_sum(&self) -> Amount {
        self.per_category.iter().map(|(_, sum)| *sum).sum()
    }
}
