//! Goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;
use std::str::FromStr;

use crate::config::Settings;
use crate::display::{format_goal_card, format_goal_list};
use crate::error::{FinanceError, FinanceResult};
use crate::ledger::{NewGoal, Session};
use crate::models::{GoalCategory, GoalId, Money, Priority};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name, e.g. "Emergency Fund"
        name: String,
        /// Target amount (e.g. "2000")
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// Category (defaults to Savings)
        #[arg(short, long)]
        category: Option<String>,
        /// Priority (defaults to Medium)
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// List all goals with their progress
    List,
    /// Add money toward a goal
    Contribute {
        /// Goal id, e.g. "goal-1"
        id: String,
        /// Amount to contribute (e.g. "25" or "50")
        amount: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    session: &mut Session,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let today = chrono::Local::now().date_naive();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            category,
            priority,
        } => {
            let deadline = deadline
                .map(|s| {
                    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                        FinanceError::Validation(format!(
                            "Invalid deadline format: '{s}'. Use YYYY-MM-DD"
                        ))
                    })
                })
                .transpose()?;

            let category = match category {
                Some(label) => GoalCategory::from_str(&label)
                    .map_err(|e| FinanceError::Validation(e.to_string()))?,
                None => GoalCategory::default(),
            };
            let priority = match priority {
                Some(label) => Priority::from_str(&label)
                    .map_err(|e| FinanceError::Validation(e.to_string()))?,
                None => Priority::default(),
            };

            let goal = session.goals.add(NewGoal {
                name,
                target,
                deadline,
                category,
                priority,
            })?;

            println!("Created goal {goal}");
            println!();
            print!("{}", format_goal_card(goal, today, settings));
        }
        GoalCommands::List => {
            print!(
                "{}",
                format_goal_list(session.goals.goals(), today, settings)
            );
        }
        GoalCommands::Contribute { id, amount } => {
            let id = GoalId::from_str(&id)
                .map_err(|e| FinanceError::Validation(e.to_string()))?;
            let amount = Money::parse(&amount)
                .map_err(|e| FinanceError::Validation(format!("Amount: {e}")))?;

            let goal = session.goals.contribute(id, amount)?;

            println!("Contribution applied to {}", goal.name);
            println!();
            print!("{}", format_goal_card(goal, today, settings));
        }
    }

    Ok(())
}
