//! Summary display formatting

use crate::config::Settings;
use crate::summary::{GoalSummary, SpendingSummary};

/// Format the spending summary block
pub fn format_spending_summary(summary: &SpendingSummary, settings: &Settings) -> String {
    let sym = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Spending\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Total spent: {} ({} expenses)\n",
        summary.total.format_with_symbol(sym),
        summary.expense_count
    ));

    if !summary.by_category.is_empty() {
        output.push_str("\nBy category:\n");
        for entry in &summary.by_category {
            output.push_str(&format!(
                "  {:<16} {:>10}  {:>5.1}%\n",
                entry.category.to_string(),
                entry.total.format_with_symbol(sym),
                entry.percentage
            ));
        }
    }

    if !summary.monthly.is_empty() {
        output.push_str("\nBy month:\n");
        for month in &summary.monthly {
            output.push_str(&format!(
                "  {}-{:02} {:>12}\n",
                month.year,
                month.month,
                month.total.format_with_symbol(sym)
            ));
        }
    }

    if let Some(projected) = summary.projected_next_month {
        output.push_str(&format!(
            "\nProjected next month: {}\n",
            projected.format_with_symbol(sym)
        ));
    }

    output
}

/// Format the goal summary block
pub fn format_goal_summary(summary: &GoalSummary, settings: &Settings) -> String {
    let sym = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Goals\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Goals: {}   Completed: {}\n",
        summary.goal_count, summary.completed_count
    ));
    output.push_str(&format!(
        "Target total: {}\n",
        summary.total_target.format_with_symbol(sym)
    ));
    output.push_str(&format!(
        "Saved so far: {}\n",
        summary.total_saved.format_with_symbol(sym)
    ));
    output.push_str(&format!("Overall progress: {}%\n", summary.overall_percent));

    output
}
