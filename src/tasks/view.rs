//! Filtering and sorting of the task list into a view
//!
//! A view is always derived from the backing list: filter first, then a
//! stable sort. Nothing here mutates the store.

use super::task::{Priority, Task};
use crate::error::StoreError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Completion filter. `overdue` is a display label only and is not filterable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl FromStr for StatusFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(StoreError::InvalidStatusFilter(other.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl FromStr for PriorityFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(PriorityFilter::All),
            other => other
                .parse::<Priority>()
                .map(PriorityFilter::Only)
                .map_err(|_| StoreError::InvalidPriorityFilter(other.to_string())),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => f.write_str("all"),
            PriorityFilter::Only(p) => write!(f, "{}", p),
        }
    }
}

/// Active filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    /// Case-insensitive title substring; empty matches everything
    pub search: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Earliest due date first, undated tasks last
    #[default]
    DueDate,
    /// Highest priority first
    Priority,
    /// Most recent `order` first
    Manual,
}

impl FromStr for SortMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "due_date" | "date" => Ok(SortMode::DueDate),
            "priority" => Ok(SortMode::Priority),
            "manual" | "order" => Ok(SortMode::Manual),
            other => Err(StoreError::InvalidSortMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortMode::DueDate => "due_date",
            SortMode::Priority => "priority",
            SortMode::Manual => "manual",
        })
    }
}

/// Check whether a task passes all three filter criteria
pub fn matches(task: &Task, filters: &Filters) -> bool {
    let status_matches = match filters.status {
        StatusFilter::All => true,
        StatusFilter::Completed => task.completed,
        StatusFilter::Pending => !task.completed,
    };

    let priority_matches = match filters.priority {
        PriorityFilter::All => true,
        PriorityFilter::Only(p) => task.priority == p,
    };

    let search_matches = filters.search.is_empty()
        || task
            .title
            .to_lowercase()
            .contains(&filters.search.to_lowercase());

    status_matches && priority_matches && search_matches
}

/// Compare two tasks under a sort mode
fn compare(a: &Task, b: &Task, mode: SortMode) -> Ordering {
    match mode {
        SortMode::DueDate => match (a.due_date, b.due_date) {
            (None, None) => b.order.cmp(&a.order),
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(da), Some(db)) => da.cmp(&db),
        },
        SortMode::Priority => b
            .priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| b.order.cmp(&a.order)),
        SortMode::Manual => b.order.cmp(&a.order),
    }
}

/// Stable sort of a view in place
pub fn sort(view: &mut [Task], mode: SortMode) {
    view.sort_by(|a, b| compare(a, b, mode));
}

/// Filter then sort, returning owned copies in display order
pub fn compute_view(tasks: &[Task], filters: &Filters, mode: SortMode) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| matches(task, filters))
        .cloned()
        .collect();
    sort(&mut view, mode);
    view
}
