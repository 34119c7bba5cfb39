//! Expense display formatting

use crate::config::Settings;
use crate::models::Expense;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    let category = if expense.predicted {
        format!("{}*", expense.category)
    } else {
        expense.category.to_string()
    };

    format!(
        "{:<8} {:<10} {:<28} {:<16} {:>10}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format).to_string(),
        truncate(&expense.description, 28),
        category,
        expense.amount.format_with_symbol(&settings.currency_symbol),
    )
}

/// Format a list of expenses as a register, newest first
pub fn format_expense_register(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<10} {:<28} {:<16} {:>10}\n",
        "Id", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    if expenses.iter().any(|e| e.predicted) {
        output.push_str("\n* category inferred from the description\n");
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
