//! Typed errors for task operations
//!
//! Store mutations report a missing id through their boolean result; these
//! variants are what the parsing and tool layers raise on top of that.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Task '{0}' not found. Use list() to see available tasks.")]
    NotFound(String),

    #[error("required-field-missing: title must not be empty")]
    TitleRequired,

    #[error("Invalid priority '{0}'. Valid priorities: low, medium, high")]
    InvalidPriority(String),

    #[error("Invalid priority filter '{0}'. Valid filters: all, low, medium, high")]
    InvalidPriorityFilter(String),

    #[error("Invalid status filter '{0}'. Valid filters: all, completed, pending")]
    InvalidStatusFilter(String),

    #[error("Invalid sort mode '{0}'. Valid modes: due_date, priority, manual")]
    InvalidSortMode(String),

    #[error("Invalid theme '{0}'. Valid themes: light, dark")]
    InvalidTheme(String),

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    InvalidDate(String),
}
