//! Student Finance - core logic for a student-focused personal finance tracker
//!
//! This library implements the decidable pieces of a small personal-finance
//! tracker: keyword-based category inference for expense descriptions, and
//! in-memory ledgers of expenses and savings goals with their derived metrics
//! (progress, remaining amount, days to deadline). Rendering is someone
//! else's job: the ledgers hand back entities and computed values, and a
//! front end only has to display them.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, ids, categories, expenses, goals)
//! - `classifier`: Keyword-based expense category inference
//! - `ledger`: In-memory expense and goal ledgers plus the session wrapper
//! - `summary`: Spending and goal aggregates for dashboard-style views
//! - `display`: Plain-text formatting of entities and summaries
//! - `config`: User-facing formatting settings
//! - `cli`: Command handlers for the `stufin` binary
//!
//! # Example
//!
//! ```rust
//! use student_finance::classifier;
//! use student_finance::models::ExpenseCategory;
//!
//! assert_eq!(classifier::classify("Lunch at cafeteria"), ExpenseCategory::Food);
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod summary;

pub use error::{FinanceError, FinanceResult};
