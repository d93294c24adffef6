//! Terminal display formatting
//!
//! Pure formatting functions returning strings for the CLI to print.
//! Layout uses fixed-width columns; nothing here touches the ledger.

use crate::models::{Entry, EntryKind};
use crate::query::Balance;
use crate::storage::CategorySet;

/// Format entries as the `list` command's table, at most `limit` rows
pub fn format_entry_table(entries: &[Entry], limit: usize) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n{:<8} {:<12} {:<8} {:<15} {:<10} Description\n",
        "ID", "Date", "Type", "Category", "Amount"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for entry in entries.iter().take(limit) {
        let sign = match entry.kind {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        };
        let amount = format!("{}${:<9.2}", sign, entry.amount.units());
        out.push_str(&format!(
            "{:<8} {:<12} {:<8} {:<15} {} {}\n",
            entry.id,
            entry.date.format("%Y-%m-%d"),
            entry.kind,
            entry.category,
            amount,
            entry.description
        ));
    }

    out
}

/// Format the `balance` command's summary block
pub fn format_balance(totals: &Balance) -> String {
    let mut out = String::new();
    out.push_str("\nFINANCIAL SUMMARY\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out.push_str(&format!("Total Income:   ${:>10.2}\n", totals.income.units()));
    out.push_str(&format!("Total Expenses: ${:>10.2}\n", totals.expenses.units()));
    out.push_str(&format!("Net Balance:    ${:>10.2}\n", totals.balance.units()));
    out
}

/// Format the `categories` command's vocabulary listing
pub fn format_categories(categories: &CategorySet) -> String {
    let mut out = String::new();
    out.push_str("\nAVAILABLE CATEGORIES:\n");

    out.push_str("\nIncome Categories:\n");
    for name in categories.for_kind(EntryKind::Income) {
        out.push_str(&format!("  - {}\n", name));
    }

    out.push_str("\nExpense Categories:\n");
    for name in categories.for_kind(EntryKind::Expense) {
        out.push_str(&format!("  - {}\n", name));
    }

    out
}
