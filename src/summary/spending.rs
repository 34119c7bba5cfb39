//! Spending aggregation
//!
//! Everything the dashboard shows about expenses is derived here: the grand
//! total, the per-category breakdown with percentage shares, month-by-month
//! totals, and a plain average of recent months as the next-month figure.

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::ledger::ExpenseLedger;
use crate::models::{ExpenseCategory, Money};

/// How many trailing months feed the next-month projection
const PROJECTION_WINDOW: usize = 3;

/// Spending within one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    /// Total spent in this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
    /// Share of overall spending, in percent
    pub percentage: f64,
}

/// Total spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySpending {
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

/// Aggregated view over an expense ledger
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// Total spent across all expenses
    pub total: Money,
    /// Number of recorded expenses
    pub expense_count: usize,
    /// Per-category breakdown, largest first; categories with no spending
    /// are omitted
    pub by_category: Vec<CategorySpending>,
    /// Month totals in chronological order
    pub monthly: Vec<MonthlySpending>,
    /// Average of the most recent month totals; `None` without history
    pub projected_next_month: Option<Money>,
}

impl SpendingSummary {
    /// Compute the summary for the current ledger contents
    pub fn compute(ledger: &ExpenseLedger) -> Self {
        let expenses = ledger.expenses();
        let total = ledger.total();

        let mut by_category: Vec<CategorySpending> = ExpenseCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let mut sum = Money::zero();
                let mut count = 0;
                for e in expenses.iter().filter(|e| e.category == category) {
                    sum += e.amount;
                    count += 1;
                }
                if count == 0 {
                    return None;
                }
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    sum.cents() as f64 / total.cents() as f64 * 100.0
                };
                Some(CategorySpending {
                    category,
                    total: sum,
                    count,
                    percentage,
                })
            })
            .collect();
        // stable sort keeps the category precedence order among ties
        by_category.sort_by(|a, b| b.total.cmp(&a.total));

        let mut months: BTreeMap<(i32, u32), Money> = BTreeMap::new();
        for e in expenses {
            *months
                .entry((e.date.year(), e.date.month()))
                .or_insert_with(Money::zero) += e.amount;
        }
        let monthly: Vec<MonthlySpending> = months
            .into_iter()
            .map(|((year, month), total)| MonthlySpending { year, month, total })
            .collect();

        let projected_next_month = project(&monthly);

        Self {
            total,
            expense_count: expenses.len(),
            by_category,
            monthly,
            projected_next_month,
        }
    }
}

/// Mean of the trailing month totals, rounded to whole cents
fn project(monthly: &[MonthlySpending]) -> Option<Money> {
    if monthly.is_empty() {
        return None;
    }
    let recent: Vec<i64> = monthly
        .iter()
        .rev()
        .take(PROJECTION_WINDOW)
        .map(|m| m.total.cents())
        .collect();
    let mean = recent.iter().sum::<i64>() as f64 / recent.len() as f64;
    Some(Money::from_cents(mean.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::NewExpense;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(ledger: &mut ExpenseLedger, desc: &str, amount: &str, cat: ExpenseCategory, d: NaiveDate) {
        ledger
            .add(NewExpense {
                description: desc.into(),
                amount: amount.into(),
                category: Some(cat),
                date: d,
                predicted: false,
            })
            .unwrap();
    }

    #[test]
    fn test_empty_ledger() {
        let summary = SpendingSummary::compute(&ExpenseLedger::new());
        assert!(summary.total.is_zero());
        assert_eq!(summary.expense_count, 0);
        assert!(summary.by_category.is_empty());
        assert!(summary.monthly.is_empty());
        assert_eq!(summary.projected_next_month, None);
    }

    #[test]
    fn test_category_breakdown() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Lunch", "30.00", ExpenseCategory::Food, date(2024, 1, 10));
        add(&mut ledger, "Dinner", "30.00", ExpenseCategory::Food, date(2024, 1, 11));
        add(&mut ledger, "Bus", "40.00", ExpenseCategory::Transportation, date(2024, 1, 12));

        let summary = SpendingSummary::compute(&ledger);
        assert_eq!(summary.total, Money::from_cents(10_000));
        assert_eq!(summary.by_category.len(), 2);

        // Food ($60) ranks above Transportation ($40)
        assert_eq!(summary.by_category[0].category, ExpenseCategory::Food);
        assert_eq!(summary.by_category[0].count, 2);
        assert!((summary.by_category[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(summary.by_category[1].category, ExpenseCategory::Transportation);
        assert!((summary.by_category[1].percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_spend_categories_are_omitted() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Lunch", "12.50", ExpenseCategory::Food, date(2024, 1, 10));
        let summary = SpendingSummary::compute(&ledger);
        assert_eq!(summary.by_category.len(), 1);
    }

    #[test]
    fn test_monthly_totals_in_order() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Feb groceries", "11.00", ExpenseCategory::Food, date(2024, 2, 2));
        add(&mut ledger, "Jan lunch", "12.00", ExpenseCategory::Food, date(2024, 1, 15));
        add(&mut ledger, "Dec dinner", "13.00", ExpenseCategory::Food, date(2023, 12, 30));

        let summary = SpendingSummary::compute(&ledger);
        let labels: Vec<_> = summary.monthly.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(labels, [(2023, 12), (2024, 1), (2024, 2)]);
    }

    #[test]
    fn test_projection_averages_recent_months() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "a", "10.00", ExpenseCategory::Food, date(2024, 1, 5));
        add(&mut ledger, "b", "20.00", ExpenseCategory::Food, date(2024, 2, 5));
        add(&mut ledger, "c", "30.00", ExpenseCategory::Food, date(2024, 3, 5));
        // a fourth, older month must not affect the 3-month window
        add(&mut ledger, "d", "99.00", ExpenseCategory::Food, date(2023, 12, 5));

        let summary = SpendingSummary::compute(&ledger);
        assert_eq!(summary.projected_next_month, Some(Money::from_cents(2_000)));
    }

    #[test]
    fn test_projection_with_single_month() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "a", "10.00", ExpenseCategory::Food, date(2024, 1, 5));
        let summary = SpendingSummary::compute(&ledger);
        assert_eq!(summary.projected_next_month, Some(Money::from_cents(1_000)));
    }
}
