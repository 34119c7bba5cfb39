//! Custom error types for Student Finance
//!
//! The error surface is intentionally small: creation operations fail on
//! missing or malformed fields, and lookups can miss. Everything is
//! recoverable at the boundary that collected the input.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A required field was missing or malformed on creation
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation referenced an identifier that does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl FinanceError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for ledger operations
pub type FinanceResult<T> = Result<T, FinanceError>;
