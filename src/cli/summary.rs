//! Summary CLI command

use crate::config::Settings;
use crate::display::{format_goal_summary, format_spending_summary};
use crate::error::FinanceResult;
use crate::ledger::Session;
use crate::summary::{GoalSummary, SpendingSummary};

/// Print the spending and goal summaries
pub fn handle_summary_command(session: &Session, settings: &Settings) -> FinanceResult<()> {
    let spending = SpendingSummary::compute(&session.expenses);
    let goals = GoalSummary::compute(&session.goals);

    print!("{}", format_spending_summary(&spending, settings));
    println!();
    print!("{}", format_goal_summary(&goals, settings));

    Ok(())
}
