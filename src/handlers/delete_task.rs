//! Delete handler for the task server

use crate::TaskServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Removes a task permanently. Confirmation is the client's responsibility.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);

        let mut store = self.lock_store();
        let title = store.find(&id).map(|t| t.title.clone());
        if !store.delete_task(&id) {
            drop(store);
            bail_public!(_, "{}", crate::StoreError::NotFound(id));
        }

        Ok(Self::with_persistence_note(
            &store,
            format!("Task {} \"{}\" deleted", id, title.unwrap_or_default()),
        ))
    }
}
