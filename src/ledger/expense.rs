//! Expense ledger
//!
//! Owns the newest-first sequence of expenses and the counter that hands out
//! their ids. Input arrives as raw form field text and is validated here;
//! entries are immutable once stored.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};

/// Raw form input for a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Description field text
    pub description: String,
    /// Amount field text, e.g. "12.50"
    pub amount: String,
    /// Chosen or inferred category; `None` means the field was left empty
    pub category: Option<ExpenseCategory>,
    /// Date of the expense
    pub date: NaiveDate,
    /// Whether the category came from the classifier
    pub predicted: bool,
}

/// In-memory store of recorded expenses, newest first
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    next_id: u32,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a ledger holding `entries`, stored in the given order (newest
    /// first). The id counter resumes after the highest id present.
    pub fn with_entries(entries: Vec<Expense>) -> Self {
        let next_id = entries.iter().map(|e| e.id.raw()).max().unwrap_or(0) + 1;
        Self {
            expenses: entries,
            next_id,
        }
    }

    /// Validate and record a new expense.
    ///
    /// Fails with [`FinanceError::Validation`] when the description, amount
    /// or category is missing, when the amount does not parse, or when it is
    /// negative. On success the entry gets the next id and is prepended so
    /// the most recent expense is always first.
    pub fn add(&mut self, input: NewExpense) -> FinanceResult<&Expense> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(FinanceError::Validation("Description is required".into()));
        }

        if input.amount.trim().is_empty() {
            return Err(FinanceError::Validation("Amount is required".into()));
        }
        let amount = Money::parse(&input.amount)
            .map_err(|e| FinanceError::Validation(format!("Amount: {e}")))?;
        if amount.is_negative() {
            return Err(FinanceError::Validation("Amount cannot be negative".into()));
        }

        let category = input
            .category
            .ok_or_else(|| FinanceError::Validation("Category is required".into()))?;

        let id = ExpenseId::from_raw(self.next_id);
        self.next_id += 1;

        let mut expense = Expense::new(id, description, amount, category, input.date);
        expense.predicted = input.predicted;

        tracing::info!(
            id = %expense.id,
            category = %expense.category,
            amount = %expense.amount,
            predicted = expense.predicted,
            "expense recorded"
        );

        self.expenses.insert(0, expense);
        Ok(&self.expenses[0])
    }

    /// All expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Total amount across all expenses
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
