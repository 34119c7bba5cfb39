//! Category and priority enumerations
//!
//! Both category sets are fixed: expenses use the six labels the classifier
//! knows about, goals use their own six. The order of
//! [`ExpenseCategory::ALL`] matters - it is the precedence order the
//! classifier walks when several keyword sets match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing a category or priority label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind}: {value}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Spending category for an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Entertainment,
    Books,
    Health,
    Other,
}

impl ExpenseCategory {
    /// All categories, in classifier precedence order
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Transportation,
        Self::Entertainment,
        Self::Books,
        Self::Health,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Books => "Books",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError {
                kind: "expense category",
                value: s.to_string(),
            })
    }
}

/// Category for a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    Savings,
    Technology,
    Travel,
    Education,
    Health,
    Other,
}

impl GoalCategory {
    pub const ALL: [Self; 6] = [
        Self::Savings,
        Self::Technology,
        Self::Travel,
        Self::Education,
        Self::Health,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Technology => "Technology",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

impl Default for GoalCategory {
    fn default() -> Self {
        Self::Savings
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError {
                kind: "goal category",
                value: s.to_string(),
            })
    }
}

/// How urgent a goal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError {
                kind: "priority",
                value: s.to_string(),
            })
    }
}
