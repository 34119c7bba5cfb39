//! In-memory ledgers
//!
//! The ledgers are the only owners of application state and the only way to
//! mutate it. Each one validates raw form input, hands out ids from its own
//! monotonic counter, and exposes read access for display and aggregation.

pub mod expense;
pub mod goal;
pub mod session;

pub use expense::{ExpenseLedger, NewExpense};
pub use goal::{GoalLedger, NewGoal, CONTRIBUTION_STEPS};
pub use session::Session;
