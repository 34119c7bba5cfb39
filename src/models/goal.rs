//! Savings goal model
//!
//! A goal moves in one direction: contributions raise `current` until it
//! reaches `target`, and nothing ever lowers it. Progress, remaining amount
//! and days-to-deadline are derived on demand, never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{GoalCategory, Priority};
use super::ids::GoalId;
use super::money::Money;

/// A savings goal with a target amount and deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier assigned by the ledger
    pub id: GoalId,

    /// Goal name, e.g. "Emergency Fund"
    pub name: String,

    /// Amount to save; always positive
    pub target: Money,

    /// Amount saved so far; kept within `0..=target`
    pub current: Money,

    /// Date the goal should be reached by
    pub deadline: NaiveDate,

    /// What the goal is for
    pub category: GoalCategory,

    /// How urgent the goal is
    pub priority: Priority,
}

impl Goal {
    /// Create a goal with nothing saved yet
    pub fn new(
        id: GoalId,
        name: impl Into<String>,
        target: Money,
        deadline: NaiveDate,
        category: GoalCategory,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            current: Money::zero(),
            deadline,
            category,
            priority,
        }
    }

    /// Apply a contribution, clamped so `current` never exceeds `target`.
    ///
    /// Returns the amount actually applied, which is smaller than `amount`
    /// when the goal is close to (or already at) its target.
    pub(crate) fn receive(&mut self, amount: Money) -> Money {
        let before = self.current;
        self.current = (self.current + amount).min(self.target);
        self.current - before
    }

    /// Share of the target reached, as a whole percentage in `0..=100`.
    ///
    /// Rounded to the nearest point, but capped at 99 until the goal is
    /// actually complete so that 100 always means "done".
    pub fn progress_percent(&self) -> u8 {
        if !self.target.is_positive() {
            return 0;
        }
        if self.is_completed() {
            return 100;
        }
        let pct = (self.current.cents() as f64 / self.target.cents() as f64 * 100.0).round();
        (pct as u8).min(99)
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        self.target - self.current
    }

    /// Whole days from `today` until the deadline.
    ///
    /// Zero when the deadline is today; negative once it has passed. A
    /// passed deadline is a valid state, not an error.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    /// Whether the target has been reached
    pub fn is_completed(&self) -> bool {
        self.current >= self.target
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} / {})",
            self.id, self.name, self.current, self.target
        )
    }
}
