//! Period report
//!
//! Builds the aggregate view for a lookback period and renders it as the
//! fixed text layout printed by the `report` command.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{Entry, Money, Period};
use crate::query::{self, Balance, EntryFilter};

/// Aggregates for one reporting period, ready to render
#[derive(Debug, Clone)]
pub struct PeriodReport {
    /// The period this report covers
    pub period: Period,
    /// Income, expense, and net totals
    pub totals: Balance,
    /// Income categories with summed amounts, largest first
    pub income_by_category: Vec<(String, Money)>,
    /// Expense categories with summed amounts, largest first
    pub expense_by_category: Vec<(String, Money)>,
}

impl PeriodReport {
    /// Build a report over the entries dated within the period ending at
    /// `today`
    pub fn generate(entries: &[Entry], period: Period, today: NaiveDate) -> Self {
        let selected = query::filter(entries, &EntryFilter::since(period.start_from(today)));
        let totals = query::balance(&selected);
        let summary = query::category_summary(&selected);

        Self {
            period,
            totals,
            income_by_category: sorted_by_amount_desc(&summary.income),
            expense_by_category: sorted_by_amount_desc(&summary.expense),
        }
    }

    /// Render the report as terminal text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(50);

        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "FINANCIAL REPORT - {}\n",
            self.period.to_string().to_uppercase()
        ));
        out.push_str(&rule);
        out.push_str("\n\n");

        out.push_str("SUMMARY:\n");
        out.push_str(&format!(
            "Total Income:    ${:>10.2}\n",
            self.totals.income.units()
        ));
        out.push_str(&format!(
            "Total Expenses:  ${:>10.2}\n",
            self.totals.expenses.units()
        ));
        out.push_str(&format!(
            "Net Balance:     ${:>10.2}\n",
            self.totals.balance.units()
        ));
        out.push('\n');

        if !self.income_by_category.is_empty() {
            out.push_str("INCOME BY CATEGORY:\n");
            for (category, amount) in &self.income_by_category {
                out.push_str(&format!("  {:<20} ${:>8.2}\n", category, amount.units()));
            }
            out.push('\n');
        }

        if !self.expense_by_category.is_empty() {
            out.push_str("EXPENSES BY CATEGORY:\n");
            for (category, amount) in &self.expense_by_category {
                out.push_str(&format!("  {:<20} ${:>8.2}\n", category, amount.units()));
            }
        }

        out
    }
}

/// Sort category totals by amount descending, breaking ties by name so
/// rendering is deterministic
fn sorted_by_amount_desc(totals: &HashMap<String, Money>) -> Vec<(String, Money)> {
    let mut rows: Vec<(String, Money)> = totals
        .iter()
        .map(|(name, amount)| (name.clone(), *amount))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
