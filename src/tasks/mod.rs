//! Task domain models and list logic
//!
//! - `task`: the task record, priority and derived status
//! - `view`: filter criteria, sort modes and view computation
//! - `reports`: summary counts and due-date reminder buckets
//! - `task_store`: the owned store applying mutations and persisting them

mod reports;
mod task;
mod task_store;
mod view;

pub use reports::{DueReminders, TaskStats, compute_stats_at, due_reminders_on};
pub use task::{Priority, Task, TaskStatus, generate_task_id, local_date_today};
pub use task_store::TaskStore;
pub use view::{Filters, PriorityFilter, SortMode, StatusFilter, compute_view, matches, sort};
