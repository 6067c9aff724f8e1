//! The shapes the backend sends and the canonical records the renderers use.
//!
//! Canonical records serialize with the field names the chart and list
//! renderers expect, e.g. `{"x": "2023-01", "l": 100.0}` for a point on the
//! monthly totals line.

use serde::{Deserialize, Serialize};

/// An income entry as sent by the backend.
///
/// Every field may be missing or `null`, e.g. once its category is deleted.
/// Such a record still becomes a row with blanks in place of the gaps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    #[serde(default)]
    pub income_amount: Option<f64>,
    #[serde(default)]
    pub income_date: Option<String>,
    #[serde(default)]
    pub category_income_name: Option<String>,
    #[serde(default)]
    pub income_content: Option<String>,
}

/// An expense entry as sent by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(default)]
    pub expense_amount: Option<f64>,
    #[serde(default)]
    pub expense_date: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub expense_content: Option<String>,
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// The serialized name, e.g. `"income"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }
}

/// One row of the ledger list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub amount: f64,
    pub date: String,
    pub category: String,
    pub detail: String,
    pub kind: EntryKind,
}

impl From<IncomeRecord> for LedgerEntry {
    fn from(record: IncomeRecord) -> Self {
        Self {
            amount: record.income_amount.unwrap_or_default(),
            date: record.income_date.unwrap_or_default(),
            category: record.category_income_name.unwrap_or_default(),
            detail: record.income_content.unwrap_or_default(),
            kind: EntryKind::Income,
        }
    }
}

impl From<ExpenseRecord> for LedgerEntry {
    fn from(record: ExpenseRecord) -> Self {
        Self {
            amount: record.expense_amount.unwrap_or_default(),
            date: record.expense_date.unwrap_or_default(),
            category: record.category_name.unwrap_or_default(),
            detail: record.expense_content.unwrap_or_default(),
            kind: EntryKind::Expense,
        }
    }
}

/// A point on the monthly totals line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub x: String,
    pub l: f64,
}

/// A bar on the monthly income chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeBarPoint {
    pub x: String,
    pub v: f64,
}

/// A bar on the monthly expense chart.
///
/// Kept separate from [IncomeBarPoint] because the expense chart reads `v1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBarPoint {
    pub x: String,
    pub v1: f64,
}

/// A slice of the expenses-by-category pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub id: String,
    pub label: String,
    pub category: String,
    pub value: f64,
}

impl CategoryShare {
    /// Build a share from a backend key of the form `"<category>_<id>"`.
    ///
    /// Everything before the first underscore names the category. A key
    /// without an underscore is used whole.
    pub fn from_key(key: &str, value: f64) -> Self {
        let category = key.split('_').next().unwrap_or(key);

        Self {
            id: category.to_owned(),
            label: category.to_owned(),
            category: category.to_owned(),
            value,
        }
    }
}
