//! Add handler for the task server

use crate::TaskServerHandler;
use crate::tasks::Priority;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TaskServerHandler {
    /// Validates arguments, appends the task and reports its generated ID.
    pub async fn handle_add_task(
        &self,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        priority: Option<String>,
    ) -> McpResult<String> {
        validation::require_title(&title)?;
        let due_date = validation::parse_due_date(due_date.as_deref())?;
        let priority: Option<Priority> = validation::parse_optional_arg(priority.as_deref())?;

        let mut store = self.lock_store();
        let task = store.add_task(&title, description.as_deref(), due_date, priority);

        Ok(Self::with_persistence_note(
            &store,
            format!("Task created with ID: {} (priority: {})", task.id, task.priority),
        ))
    }
}
