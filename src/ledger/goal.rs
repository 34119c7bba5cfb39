//! Goal ledger
//!
//! Owns the list of savings goals and the counter for their ids. Goals are
//! created from raw form input, then only ever change through clamped
//! contributions: Open until `current` reaches `target`, Completed after,
//! with no way back.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Goal, GoalCategory, GoalId, Money, Priority};

/// The fixed quick-add contribution steps a front end offers
pub const CONTRIBUTION_STEPS: [Money; 2] = [Money::from_cents(2_500), Money::from_cents(5_000)];

/// Raw form input for a new goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    /// Name field text
    pub name: String,
    /// Target amount field text, e.g. "2000"
    pub target: String,
    /// Deadline; `None` means the field was left empty
    pub deadline: Option<NaiveDate>,
    /// What the goal is for
    pub category: GoalCategory,
    /// How urgent the goal is
    pub priority: Priority,
}

/// In-memory store of savings goals
#[derive(Debug, Clone)]
pub struct GoalLedger {
    goals: Vec<Goal>,
    next_id: u32,
}

impl Default for GoalLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a ledger holding `entries`. The id counter resumes after the
    /// highest id present.
    pub fn with_entries(entries: Vec<Goal>) -> Self {
        let next_id = entries.iter().map(|g| g.id.raw()).max().unwrap_or(0) + 1;
        Self {
            goals: entries,
            next_id,
        }
    }

    /// Validate and create a new goal with nothing saved yet.
    ///
    /// Fails with [`FinanceError::Validation`] when the name, target or
    /// deadline is missing, when the target does not parse, or when it is
    /// not strictly positive - a zero target would make progress undefined,
    /// so it is rejected here rather than discovered later.
    pub fn add(&mut self, input: NewGoal) -> FinanceResult<&Goal> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("Name is required".into()));
        }

        if input.target.trim().is_empty() {
            return Err(FinanceError::Validation("Target amount is required".into()));
        }
        let target = Money::parse(&input.target)
            .map_err(|e| FinanceError::Validation(format!("Target amount: {e}")))?;
        if !target.is_positive() {
            return Err(FinanceError::Validation(
                "Target amount must be greater than zero".into(),
            ));
        }

        let deadline = input
            .deadline
            .ok_or_else(|| FinanceError::Validation("Deadline is required".into()))?;

        let id = GoalId::from_raw(self.next_id);
        self.next_id += 1;

        let goal = Goal::new(id, name, target, deadline, input.category, input.priority);

        tracing::info!(
            id = %goal.id,
            target = %goal.target,
            deadline = %goal.deadline,
            "goal created"
        );

        let idx = self.goals.len();
        self.goals.push(goal);
        Ok(&self.goals[idx])
    }

    /// Apply a contribution to a goal, clamped at its target.
    ///
    /// Fails with [`FinanceError::NotFound`] for an unknown id and with
    /// [`FinanceError::Validation`] for a non-positive amount.
    pub fn contribute(&mut self, id: GoalId, amount: Money) -> FinanceResult<&Goal> {
        if !amount.is_positive() {
            return Err(FinanceError::Validation(
                "Contribution amount must be positive".into(),
            ));
        }

        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| FinanceError::goal_not_found(id.to_string()))?;

        let applied = goal.receive(amount);
        if applied < amount {
            tracing::debug!(
                id = %goal.id,
                requested = %amount,
                applied = %applied,
                "contribution clamped at target"
            );
        }
        tracing::info!(
            id = %goal.id,
            applied = %applied,
            current = %goal.current,
            completed = goal.is_completed(),
            "contribution applied"
        );

        Ok(&*goal)
    }

    /// All goals, in creation order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Look up a goal by id
    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
