//! Core data models
//!
//! Plain data types shared by the ledgers, the classifier and the display
//! layer: money, strongly-typed ids, the fixed category sets, and the
//! expense and goal entities themselves.

pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;

pub use category::{ExpenseCategory, GoalCategory, ParseLabelError, Priority};
pub use expense::Expense;
pub use goal::Goal;
pub use ids::{ExpenseId, GoalId, ParseIdError};
pub use money::{Money, MoneyParseError};
