//! Storage layer for tally-cli
//!
//! The [`Ledger`] owns the entry collection and the category vocabularies,
//! and persists both to a single JSON data file. Every successful mutation
//! rewrites the whole file; there is no partial or append write.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::models::{Entry, EntryKind, Money};

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "finance_data.json";

const DEFAULT_INCOME_CATEGORIES: &[&str] =
    &["Salary", "Freelance", "Investment", "Gift", "Other Income"];

const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Entertainment",
    "Bills",
    "Shopping",
    "Healthcare",
    "Education",
    "Travel",
    "Other Expense",
];

/// The category vocabularies, one per entry kind
///
/// Each vocabulary is seeded with a default list and grows as new categories
/// are used. Categories are never removed automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySet {
    #[serde(default)]
    income: Vec<String>,
    #[serde(default)]
    expense: Vec<String>,
}

impl CategorySet {
    /// The default vocabularies a fresh ledger starts with
    pub fn defaults() -> Self {
        Self {
            income: DEFAULT_INCOME_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            expense: DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// The vocabulary for one kind
    pub fn for_kind(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }

    /// Whether `name` is already in the vocabulary for `kind`
    pub fn contains(&self, kind: EntryKind, name: &str) -> bool {
        self.for_kind(kind).iter().any(|c| c == name)
    }

    /// Add `name` to the vocabulary for `kind` if it isn't there yet
    pub fn insert(&mut self, kind: EntryKind, name: &str) {
        if !self.contains(kind, name) {
            let list = match kind {
                EntryKind::Income => &mut self.income,
                EntryKind::Expense => &mut self.expense,
            };
            list.push(name.to_string());
        }
    }

    /// Union `other` into this set, keeping existing order and skipping
    /// duplicates
    pub fn merge(&mut self, other: &CategorySet) {
        for name in &other.income {
            self.insert(EntryKind::Income, name);
        }
        for name in &other.expense {
            self.insert(EntryKind::Expense, name);
        }
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Serializable shape of the data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    transactions: Vec<Entry>,
    #[serde(default)]
    categories: CategorySet,
}

/// The ledger: entry collection, category vocabularies, and persistence
pub struct Ledger {
    path: PathBuf,
    entries: Vec<Entry>,
    categories: CategorySet,
    next_id: u64,
}

impl Ledger {
    /// Open a ledger backed by `path`, loading it if the file exists
    ///
    /// A missing file yields an empty ledger. Malformed content is reported
    /// on stderr and replaced by an empty ledger with default categories;
    /// it is never a fatal error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let file: LedgerFile = match read_json(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error loading data: {}. Starting with empty data.", e);
                LedgerFile::default()
            }
        };

        let mut categories = CategorySet::defaults();
        categories.merge(&file.categories);

        let next_id = file
            .transactions
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            path,
            entries: file.transactions,
            categories,
            next_id,
        }
    }

    /// The path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The category vocabularies
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Rewrite the full data file
    pub fn save(&self) -> LedgerResult<()> {
        let file = LedgerFile {
            transactions: self.entries.clone(),
            categories: self.categories.clone(),
        };
        write_json_atomic(&self.path, &file)
    }

    /// Add a new entry and persist
    ///
    /// Fails with [`crate::error::LedgerError::InvalidKind`] before any mutation if `kind`
    /// is not "income" or "expense". A new category joins the vocabulary for
    /// that kind. The date defaults to today. Returns the created entry.
    pub fn add(
        &mut self,
        amount: Money,
        category: &str,
        description: &str,
        kind: &str,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Entry> {
        let kind: EntryKind = kind.parse()?;

        self.categories.insert(kind, category);

        let id = self.next_id;
        self.next_id += 1;

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let entry = Entry::new(id, amount, category, description, kind, date);
        self.entries.push(entry.clone());
        self.save()?;

        Ok(entry)
    }

    /// Delete the entry with the given id and persist
    ///
    /// Returns whether an entry was removed. The file is only rewritten
    /// when a removal occurred.
    pub fn delete(&mut self, id: u64) -> LedgerResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() < before {
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
