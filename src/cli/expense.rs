//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;
use std::str::FromStr;

use crate::classifier;
use crate::config::Settings;
use crate::display::format_expense_register;
use crate::error::{FinanceError, FinanceResult};
use crate::ledger::{NewExpense, Session};
use crate::models::ExpenseCategory;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "12.50")
        amount: String,
        /// Category; inferred from the description when omitted
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all expenses, newest first
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut Session,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinanceResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let chosen = match category {
                Some(label) => Some(
                    ExpenseCategory::from_str(&label)
                        .map_err(|e| FinanceError::Validation(e.to_string()))?,
                ),
                None => None,
            };

            let date = parse_date(date)?;

            // no manual choice: let the classifier pick and mark the entry
            let predicted = chosen.is_none();
            let category = chosen.unwrap_or_else(|| classifier::classify(&description));

            let expense = session.expenses.add(NewExpense {
                description,
                amount,
                category: Some(category),
                date,
                predicted,
            })?;

            println!("Added expense {expense}");
            println!();
            print!(
                "{}",
                format_expense_register(session.expenses.expenses(), settings)
            );
        }
        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_register(session.expenses.expenses(), settings)
            );
        }
    }

    Ok(())
}

fn parse_date(date: Option<String>) -> FinanceResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            FinanceError::Validation(format!("Invalid date format: '{s}'. Use YYYY-MM-DD"))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-01-15".into())).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date(Some("01/15/2024".into())).is_err());
        assert!(parse_date(None).is_ok());
    }

    #[test]
    fn test_add_infers_category_when_omitted() {
        let mut session = Session::new();
        handle_expense_command(
            &mut session,
            &Settings::default(),
            ExpenseCommands::Add {
                description: "Bus ticket".into(),
                amount: "2.75".into(),
                category: None,
                date: Some("2024-01-15".into()),
            },
        )
        .unwrap();

        let expense = &session.expenses.expenses()[0];
        assert_eq!(expense.category, ExpenseCategory::Transportation);
        assert!(expense.predicted);
    }

    #[test]
    fn test_add_keeps_manual_category() {
        let mut session = Session::new();
        handle_expense_command(
            &mut session,
            &Settings::default(),
            ExpenseCommands::Add {
                description: "Bus ticket".into(),
                amount: "2.75".into(),
                category: Some("Other".into()),
                date: Some("2024-01-15".into()),
            },
        )
        .unwrap();

        let expense = &session.expenses.expenses()[0];
        assert_eq!(expense.category, ExpenseCategory::Other);
        assert!(!expense.predicted);
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let mut session = Session::new();
        let err = handle_expense_command(
            &mut session,
            &Settings::default(),
            ExpenseCommands::Add {
                description: "Bus ticket".into(),
                amount: "2.75".into(),
                category: Some("Groceries".into()),
                date: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
