//! Toggle-complete handler for the task server

use crate::TaskServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Flips completion and reports the resulting state.
    pub async fn handle_toggle_complete(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);

        let mut store = self.lock_store();
        if !store.toggle_complete(&id) {
            drop(store);
            bail_public!(_, "{}", crate::StoreError::NotFound(id));
        }

        let completed = store.find(&id).is_some_and(|t| t.completed);
        let message = if completed {
            format!("Task {} marked as completed", id)
        } else {
            format!("Task {} marked as pending", id)
        };
        Ok(Self::with_persistence_note(&store, message))
    }
}
