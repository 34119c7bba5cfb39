//! Goal aggregation
//!
//! The quick stats shown above the goal list: how many goals exist, how much
//! they add up to, how much has been saved, and how many are done.

use crate::ledger::GoalLedger;
use crate::models::Money;

/// Aggregated view over a goal ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSummary {
    /// Number of goals
    pub goal_count: usize,
    /// Sum of all targets
    pub total_target: Money,
    /// Sum of all current amounts
    pub total_saved: Money,
    /// Goals whose target has been reached
    pub completed_count: usize,
    /// Saved share of the combined target, rounded to a whole percent
    pub overall_percent: u8,
}

impl GoalSummary {
    /// Compute the summary for the current ledger contents
    pub fn compute(ledger: &GoalLedger) -> Self {
        let goals = ledger.goals();
        let total_target: Money = goals.iter().map(|g| g.target).sum();
        let total_saved: Money = goals.iter().map(|g| g.current).sum();
        let completed_count = goals.iter().filter(|g| g.is_completed()).count();

        let overall_percent = if total_target.is_positive() {
            let pct =
                (total_saved.cents() as f64 / total_target.cents() as f64 * 100.0).round();
            (pct as u8).min(100)
        } else {
            0
        };

        Self {
            goal_count: goals.len(),
            total_target,
            total_saved,
            completed_count,
            overall_percent,
        }
    }
}
