//! Ledger entry model
//!
//! Represents one recorded financial movement. The amount is always stored
//! as a non-negative value; direction is carried by the entry kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

use crate::error::LedgerError;

/// The direction of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within a ledger
    pub id: u64,

    /// Amount, always non-negative; sign comes from `kind`
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Free-form description
    pub description: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Entry date (YYYY-MM-DD on the wire)
    pub date: NaiveDate,
}

impl Entry {
    /// Create a new entry; negative amounts are stored as their absolute value
    pub fn new(
        id: u64,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        kind: EntryKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            amount: amount.abs(),
            category: category.into(),
            description: description.into(),
            kind,
            date,
        }
    }

    /// The amount with its direction applied: positive for income,
    /// negative for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_entry_stores_absolute_amount() {
        let entry = Entry::new(
            1,
            Money::from_cents(-5000),
            "Food",
            "Groceries",
            EntryKind::Expense,
            test_date(),
        );
        assert_eq!(entry.amount.cents(), 5000);
    }

    #[test]
    fn test_signed_amount() {
        let income = Entry::new(
            1,
            Money::from_cents(10000),
            "Salary",
            "Paycheck",
            EntryKind::Income,
            test_date(),
        );
        let expense = Entry::new(
            2,
            Money::from_cents(4000),
            "Food",
            "Lunch",
            EntryKind::Expense,
            test_date(),
        );

        assert_eq!(income.signed_amount().cents(), 10000);
        assert_eq!(expense.signed_amount().cents(), -4000);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("Expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert_eq!("INCOME".parse::<EntryKind>().unwrap(), EntryKind::Income);

        let err = "transfer".parse::<EntryKind>().unwrap_err();
        assert!(err.is_invalid_kind());
    }

    #[test]
    fn test_serialization_wire_format() {
        let entry = Entry::new(
            42,
            Money::from_cents(1050),
            "Food",
            "Lunch",
            EntryKind::Expense,
            test_date(),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["amount"], 10.5);
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2025-01-15");

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
