//! Expense model
//!
//! An expense is immutable once recorded: there is no edit or delete, only
//! the ledger's newest-first sequence of entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier assigned by the ledger
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent; never negative
    pub amount: Money,

    /// Spending category
    pub category: ExpenseCategory,

    /// Date of the expense
    pub date: NaiveDate,

    /// Whether the category was inferred from the description rather than
    /// chosen by hand
    #[serde(default)]
    pub predicted: bool,
}

impl Expense {
    /// Create an expense with a manually chosen category
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category,
            date,
            predicted: false,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}, {})",
            self.id, self.description, self.amount, self.category
        )
    }
}
