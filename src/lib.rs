//! Taskpad MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for everyday to-do
//! list management: create, edit, delete, complete, filter, sort and manually
//! reorder tasks, with every change saved to a local TOML file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TaskServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `tasks` module - Task model, view computation and the owned `TaskStore`
//! - **Persistence Layer**: `storage` module - File-based TOML storage with optional Git commits
//!
//! # Example
//!
//! ```no_run
//! use taskpad_mcp::TaskServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TaskServerHandler::new("tasks.toml", false);
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

mod error;
mod git_ops;
mod handlers;

pub mod formatting;
pub mod import;
pub mod storage;
pub mod tasks;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use error::StoreError;
pub use storage::{Persistence, Storage, Theme};
pub use tasks::{Priority, Task, TaskStatus, TaskStore};

/// MCP Server handler for task management
///
/// Owns the `TaskStore` behind a mutex so tool calls are applied one at a time.
/// All changes are persisted to a TOML file and optionally committed to Git.
pub struct TaskServerHandler {
    pub(crate) store: Arc<Mutex<TaskStore>>,
}

impl TaskServerHandler {
    /// Create a new task server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the task data file (TOML format)
    /// * `git_commit` - Commit the data file after every save
    ///
    /// An unreadable data file does not fail construction; the store runs in
    /// memory only and every tool response carries a warning.
    pub fn new(storage_path: &str, git_commit: bool) -> Self {
        let storage = Storage::new(storage_path, git_commit);
        Self::from_store(TaskStore::open(storage))
    }

    /// Wrap an already constructed store
    pub fn from_store(store: TaskStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Handle to the store for background work such as the reminder scan
    pub fn shared_store(&self) -> Arc<Mutex<TaskStore>> {
        Arc::clone(&self.store)
    }

    /// Lock the store
    ///
    /// Store operations never leave the list half-updated, so a poisoned
    /// lock still guards consistent data.
    pub fn lock_store(&self) -> MutexGuard<'_, TaskStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a warning when saves are no longer reaching the file
    pub(crate) fn with_persistence_note(store: &TaskStore, message: String) -> String {
        match store.persistence() {
            Persistence::Degraded(reason) => format!(
                "{}\nWarning: changes are kept in memory only for this session ({})",
                message, reason
            ),
            _ => message,
        }
    }
}

/// To-do list server for capturing and organizing everyday tasks.
///
/// Each task has a title, optional description, optional due date (YYYY-MM-DD),
/// a priority (low/medium/high) and a completed flag. Tasks are shown through a
/// view: filtered by status (all/completed/pending), priority and title search,
/// then sorted by due date, priority or manual order.
///
/// Key concepts:
/// - **pending**: not yet completed (includes overdue tasks)
/// - **overdue**: pending with a due date before today
/// - **manual order**: set by dragging one task onto another with `reorder`
///
/// Task IDs are opaque strings returned by `add_task`.
#[mcp_server]
impl McpServer for TaskServerHandler {
    /// **Add**: Create a new pending task at the end of the list.
    /// **Tip**: Only the title is required; priority defaults to medium.
    #[tool]
    async fn add_task(
        &self,
        /// Title: short description of the task
        title: String,
        /// Description: longer details (optional)
        description: Option<String>,
        /// Due date: YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// Priority: low/medium/high (optional, default medium)
        priority: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_task(title, description, due_date, priority)
            .await
    }

    /// **Edit**: Replace a task's title, description, due date and priority.
    /// **Note**: Omitted optional fields are cleared; priority resets to medium. Completion is kept.
    #[tool]
    async fn edit_task(
        &self,
        /// ID of the task to edit
        id: String,
        /// New title
        title: String,
        /// New description (optional, omitted=clear)
        description: Option<String>,
        /// New due date YYYY-MM-DD (optional, omitted=clear)
        due_date: Option<String>,
        /// New priority: low/medium/high (optional, default medium)
        priority: Option<String>,
    ) -> McpResult<String> {
        self.handle_edit_task(id, title, description, due_date, priority)
            .await
    }

    /// **Delete**: Permanently remove a task. Confirm with the user before calling.
    #[tool]
    async fn delete_task(
        &self,
        /// ID of the task to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Complete**: Mark a pending task completed, or a completed task pending again.
    #[tool]
    async fn toggle_complete(
        &self,
        /// ID of the task to toggle
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_complete(id).await
    }

    /// **Reorder**: Move a task to the position of another task, as a drag and drop would.
    /// **Tip**: Use sort="manual" in list to see the manual order.
    #[tool]
    async fn reorder(
        &self,
        /// ID of the task being moved
        dragged_id: String,
        /// ID of the task it is dropped onto
        target_id: String,
    ) -> McpResult<String> {
        self.handle_reorder(dragged_id, target_id).await
    }

    /// **Review**: Show the current view of tasks.
    /// **Use**: Given arguments update the saved criteria; omitted ones keep their previous value.
    #[tool]
    async fn list(
        &self,
        /// Status filter: all/completed/pending (optional)
        status: Option<String>,
        /// Priority filter: all/low/medium/high (optional)
        priority: Option<String>,
        /// Case-insensitive title search, ""=clear (optional)
        search: Option<String>,
        /// Sort: due_date/priority/manual (optional)
        sort: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(status, priority, search, sort).await
    }

    /// **Reset**: Clear status, priority and search filters.
    #[tool]
    async fn clear_filters(&self) -> McpResult<String> {
        self.handle_clear_filters().await
    }

    /// **Stats**: Total, completed, pending and overdue counts for all tasks.
    #[tool]
    async fn stats(&self) -> McpResult<String> {
        self.handle_stats().await
    }

    /// **Reminders**: Pending tasks due today, due tomorrow, or overdue.
    #[tool]
    async fn reminders(&self) -> McpResult<String> {
        self.handle_reminders().await
    }

    /// **Theme**: Store the light/dark display preference. Omit to toggle.
    #[tool]
    async fn set_theme(
        &self,
        /// Theme: light/dark (optional)
        theme: Option<String>,
    ) -> McpResult<String> {
        self.handle_set_theme(theme).await
    }
}
