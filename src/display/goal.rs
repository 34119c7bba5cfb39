//! Goal display formatting
//!
//! One multi-line card per goal, in the shape the goal tracker view shows:
//! amounts, a progress bar, days to the deadline, and a completion marker.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Goal;

const BAR_WIDTH: usize = 20;

/// Format a single goal as a progress card
pub fn format_goal_card(goal: &Goal, today: NaiveDate, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}  {} [{}] [{}]\n",
        goal.id, goal.name, goal.priority, goal.category
    ));
    output.push_str(&format!(
        "  {} / {}\n",
        goal.current.format_with_symbol(&settings.currency_symbol),
        goal.target.format_with_symbol(&settings.currency_symbol),
    ));

    let pct = goal.progress_percent();
    output.push_str(&format!(
        "  [{}] {}% complete\n",
        progress_bar(pct),
        pct
    ));

    if goal.is_completed() {
        output.push_str("  Goal completed!\n");
    } else {
        output.push_str(&format!(
            "  {} to go, {}\n",
            goal.remaining().format_with_symbol(&settings.currency_symbol),
            format_days_remaining(goal.days_remaining(today)),
        ));
    }

    output
}

/// Format a list of goals as cards separated by blank lines
pub fn format_goal_list(goals: &[Goal], today: NaiveDate, settings: &Settings) -> String {
    if goals.is_empty() {
        return "No goals yet.\n".to_string();
    }

    let cards: Vec<String> = goals
        .iter()
        .map(|g| format_goal_card(g, today, settings))
        .collect();
    cards.join("\n")
}

fn progress_bar(pct: u8) -> String {
    let filled = (pct as usize * BAR_WIDTH) / 100;
    let mut bar = "#".repeat(filled);
    bar.push_str(&"-".repeat(BAR_WIDTH - filled));
    bar
}

fn format_days_remaining(days: i64) -> String {
    if days > 0 {
        format!("{days} days left")
    } else if days == 0 {
        "due today".to_string()
    } else {
        "deadline passed".to_string()
    }
}
