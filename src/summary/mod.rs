//! Derived aggregates for dashboard-style views
//!
//! A front end displays these values as returned; all the arithmetic lives
//! here so the rendering layer never computes anything itself.

pub mod goals;
pub mod spending;

pub use goals::GoalSummary;
pub use spending::{CategorySpending, MonthlySpending, SpendingSummary};
