//! Edit handler for the task server

use crate::TaskServerHandler;
use crate::tasks::Priority;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Replaces title, description, due date and priority of an existing task.
    /// Omitted optional fields are cleared; priority falls back to medium.
    pub async fn handle_edit_task(
        &self,
        id: String,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        priority: Option<String>,
    ) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        validation::require_title(&title)?;
        let due_date = validation::parse_due_date(due_date.as_deref())?;
        let priority: Option<Priority> = validation::parse_optional_arg(priority.as_deref())?;

        let mut store = self.lock_store();
        if !store.edit_task(&id, &title, description.as_deref(), due_date, priority) {
            drop(store);
            bail_public!(_, "{}", crate::StoreError::NotFound(id));
        }

        Ok(Self::with_persistence_note(
            &store,
            format!("Task {} updated successfully", id),
        ))
    }
}
