//! A single in-memory tracking session
//!
//! All state lives here for the lifetime of one run: the expense ledger and
//! the goal ledger, nothing shared, nothing persisted. The demo constructor
//! seeds the dataset the front end ships with so every command has something
//! to show.

use chrono::NaiveDate;

use super::expense::ExpenseLedger;
use super::goal::GoalLedger;
use crate::models::{
    Expense, ExpenseCategory, ExpenseId, Goal, GoalCategory, GoalId, Money, Priority,
};

/// The in-memory state owned by one run of the application
#[derive(Debug, Clone)]
pub struct Session {
    pub expenses: ExpenseLedger,
    pub goals: GoalLedger,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            expenses: ExpenseLedger::new(),
            goals: GoalLedger::new(),
        }
    }

    /// Create a session seeded with the built-in demo dataset
    pub fn demo() -> Self {
        Self {
            expenses: ExpenseLedger::with_entries(demo_expenses()),
            goals: GoalLedger::with_entries(demo_goals()),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn demo_expenses() -> Vec<Expense> {
    vec![
        Expense::new(
            ExpenseId::from_raw(1),
            "Lunch at cafeteria",
            Money::from_cents(1250),
            ExpenseCategory::Food,
            date(2024, 1, 15),
        ),
        Expense::new(
            ExpenseId::from_raw(2),
            "Bus ticket",
            Money::from_cents(275),
            ExpenseCategory::Transportation,
            date(2024, 1, 15),
        ),
        Expense::new(
            ExpenseId::from_raw(3),
            "Coffee with friends",
            Money::from_cents(890),
            ExpenseCategory::Entertainment,
            date(2024, 1, 14),
        ),
        Expense::new(
            ExpenseId::from_raw(4),
            "Textbook rental",
            Money::from_cents(4500),
            ExpenseCategory::Books,
            date(2024, 1, 14),
        ),
        Expense::new(
            ExpenseId::from_raw(5),
            "Movie tickets",
            Money::from_cents(2500),
            ExpenseCategory::Entertainment,
            date(2024, 1, 13),
        ),
    ]
}

fn demo_goals() -> Vec<Goal> {
    let mut goals = vec![
        Goal::new(
            GoalId::from_raw(1),
            "Emergency Fund",
            Money::from_cents(200_000),
            date(2024, 6, 30),
            GoalCategory::Savings,
            Priority::High,
        ),
        Goal::new(
            GoalId::from_raw(2),
            "New Laptop",
            Money::from_cents(120_000),
            date(2024, 5, 15),
            GoalCategory::Technology,
            Priority::Medium,
        ),
        Goal::new(
            GoalId::from_raw(3),
            "Spring Break Trip",
            Money::from_cents(80_000),
            date(2024, 3, 1),
            GoalCategory::Travel,
            Priority::Low,
        ),
        Goal::new(
            GoalId::from_raw(4),
            "Course Certification",
            Money::from_cents(30_000),
            date(2024, 4, 20),
            GoalCategory::Education,
            Priority::High,
        ),
    ];

    // partial progress matching the demo dataset
    goals[0].receive(Money::from_cents(80_000));
    goals[1].receive(Money::from_cents(60_000));
    goals[2].receive(Money::from_cents(20_000));
    goals[3].receive(Money::from_cents(15_000));

    goals
}
