use crate::error::StoreError;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Generate a fresh opaque task ID
pub fn generate_task_id() -> String {
    Uuid::new_v4().to_string()
}

/// Task priority
///
/// Uses lowercase naming to match the TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    low,
    #[default]
    medium,
    high,
}

impl Priority {
    /// Rank used when sorting by priority (high=3, medium=2, low=1)
    pub fn rank(self) -> u8 {
        match self {
            Priority::low => 1,
            Priority::medium => 2,
            Priority::high => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::low => "low",
            Priority::medium => "medium",
            Priority::high => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            other => Err(StoreError::InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived task status, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Completed,
    Overdue,
    Pending,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item
///
/// Field names are serialized in camelCase (`dueDate`, `createdAt`) so the
/// stored layout matches the browser local-storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, immutable
    pub id: String,
    /// Display title, trimmed on write
    pub title: String,
    /// Optional description, trimmed on write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date (format: YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Manual sequence position
    #[serde(default)]
    pub order: i64,
}

impl Task {
    /// Build a new pending task with a fresh ID
    ///
    /// Title and description are trimmed; an empty description is stored as absent.
    pub fn new(
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        priority: Option<Priority>,
        order: i64,
    ) -> Self {
        Self {
            id: generate_task_id(),
            title: title.trim().to_string(),
            description: normalize_description(description),
            completed: false,
            priority: priority.unwrap_or_default(),
            due_date,
            created_at: Utc::now(),
            order,
        }
    }

    /// Description text, or the placeholder shown for tasks without one
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }

    /// Derive the status relative to the given local calendar day
    ///
    /// A task is overdue when it is incomplete and its due date is strictly
    /// before `today`. Tasks without a due date are never overdue.
    pub fn status_on(&self, today: NaiveDate) -> TaskStatus {
        if self.completed {
            return TaskStatus::Completed;
        }
        match self.due_date {
            Some(due) if due < today => TaskStatus::Overdue,
            _ => TaskStatus::Pending,
        }
    }
}

/// Trim a description and collapse empty text to `None`
pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
