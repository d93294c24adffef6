//! Query and aggregation over ledger entries
//!
//! Pure functions over entry slices: no mutation, no I/O. The ledger hands
//! out its collection and these functions produce filtered views and
//! running-sum aggregates.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Entry, EntryKind, Money};

/// Optional criteria for selecting entries
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Keep entries dated on or after this date
    pub start: Option<NaiveDate>,
    /// Keep entries dated on or before this date (inclusive)
    pub end: Option<NaiveDate>,
    /// Keep entries whose category matches, case-insensitively
    pub category: Option<String>,
    /// Keep entries of this kind
    pub kind: Option<EntryKind>,
}

impl EntryFilter {
    /// Filter bounded below by a date, as used by period reports
    pub fn since(start: Option<NaiveDate>) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    fn matches(&self, entry: &Entry) -> bool {
        if let Some(start) = self.start {
            if entry.date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if entry.date > end {
                return false;
            }
        }
        if let Some(category) = &self.category {
            // Case normalization happens here, at the comparison boundary
            if entry.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        true
    }
}

/// Select matching entries, sorted by date descending
///
/// The sort is stable, so entries sharing a date keep insertion order.
pub fn filter(entries: &[Entry], criteria: &EntryFilter) -> Vec<Entry> {
    let mut selected: Vec<Entry> = entries
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

/// Income, expense, and net totals over a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

/// Sum entry amounts by kind; empty input yields all zeros
pub fn balance(entries: &[Entry]) -> Balance {
    let income: Money = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Income)
        .map(|e| e.amount)
        .sum();
    let expenses: Money = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Expense)
        .map(|e| e.amount)
        .sum();

    Balance {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Per-category totals, split by kind
///
/// Categories with no entries in the input are absent from the maps.
#[derive(Debug, Clone, Default)]
pub struct CategorySummary {
    pub income: HashMap<String, Money>,
    pub expense: HashMap<String, Money>,
}

impl CategorySummary {
    /// The totals map for one kind
    pub fn for_kind(&self, kind: EntryKind) -> &HashMap<String, Money> {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }

    /// Whether both maps are empty
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty()
    }
}

/// Accumulate per-category totals over a set of entries
pub fn category_summary(entries: &[Entry]) -> CategorySummary {
    let mut summary = CategorySummary::default();

    for entry in entries {
        let map = match entry.kind {
            EntryKind::Income => &mut summary.income,
            EntryKind::Expense => &mut summary.expense,
        };
        *map.entry(entry.category.clone()).or_insert_with(Money::zero) += entry.amount;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: u64, cents: i64, category: &str, kind: EntryKind, d: NaiveDate) -> Entry {
        Entry::new(id, Money::from_cents(cents), category, "", kind, d)
    }

    #[test]
    fn test_filter_date_range_inclusive() {
        let entries = vec![
            entry(1, 100, "Food", EntryKind::Expense, date(2024, 1, 31)),
            entry(2, 200, "Food", EntryKind::Expense, date(2024, 2, 15)),
            entry(3, 300, "Food", EntryKind::Expense, date(2024, 2, 29)),
            entry(4, 400, "Food", EntryKind::Expense, date(2024, 3, 1)),
        ];

        let criteria = EntryFilter {
            start: Some(date(2024, 2, 1)),
            end: Some(date(2024, 2, 29)),
            ..EntryFilter::default()
        };
        let result = filter(&entries, &criteria);

        let ids: Vec<u64> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_filter_category_case_insensitive() {
        let entries = vec![
            entry(1, 100, "Food", EntryKind::Expense, date(2024, 1, 1)),
            entry(2, 200, "Bills", EntryKind::Expense, date(2024, 1, 2)),
        ];

        let criteria = EntryFilter {
            category: Some("fOOd".to_string()),
            ..EntryFilter::default()
        };
        let result = filter(&entries, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_filter_kind() {
        let entries = vec![
            entry(1, 100, "Salary", EntryKind::Income, date(2024, 1, 1)),
            entry(2, 200, "Food", EntryKind::Expense, date(2024, 1, 2)),
        ];

        let criteria = EntryFilter {
            kind: Some(EntryKind::Income),
            ..EntryFilter::default()
        };
        let result = filter(&entries, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, EntryKind::Income);
    }

    #[test]
    fn test_filter_sorts_date_descending_keeping_insertion_order_on_ties() {
        let entries = vec![
            entry(1, 100, "Food", EntryKind::Expense, date(2024, 1, 5)),
            entry(2, 200, "Food", EntryKind::Expense, date(2024, 1, 10)),
            entry(3, 300, "Food", EntryKind::Expense, date(2024, 1, 10)),
        ];

        let result = filter(&entries, &EntryFilter::default());
        let ids: Vec<u64> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_balance() {
        let entries = vec![
            entry(1, 10000, "Salary", EntryKind::Income, date(2024, 1, 1)),
            entry(2, 4000, "Food", EntryKind::Expense, date(2024, 1, 2)),
            entry(3, 1000, "Bills", EntryKind::Expense, date(2024, 1, 3)),
        ];

        let b = balance(&entries);
        assert_eq!(b.income.cents(), 10000);
        assert_eq!(b.expenses.cents(), 5000);
        assert_eq!(b.balance.cents(), 5000);
    }

    #[test]
    fn test_balance_empty_is_zero() {
        let b = balance(&[]);
        assert_eq!(b.income, Money::zero());
        assert_eq!(b.expenses, Money::zero());
        assert_eq!(b.balance, Money::zero());
    }

    #[test]
    fn test_category_summary() {
        let entries = vec![
            entry(1, 2000, "Food", EntryKind::Expense, date(2024, 1, 1)),
            entry(2, 3000, "Food", EntryKind::Expense, date(2024, 1, 2)),
            entry(3, 100000, "Salary", EntryKind::Income, date(2024, 1, 3)),
        ];

        let summary = category_summary(&entries);
        assert_eq!(summary.expense["Food"].cents(), 5000);
        assert_eq!(summary.income["Salary"].cents(), 100000);
        assert_eq!(summary.expense.len(), 1);
        assert_eq!(summary.income.len(), 1);
    }

    #[test]
    fn test_category_summary_empty() {
        let summary = category_summary(&[]);
        assert!(summary.is_empty());
    }
}
