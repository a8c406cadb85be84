//! Reorder handler for the task server

use crate::TaskServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskServerHandler {
    /// Translates a drop of `dragged_id` onto `target_id` into a store reorder.
    pub async fn handle_reorder(&self, dragged_id: String, target_id: String) -> McpResult<String> {
        let dragged_id = validation::normalize_task_id(&dragged_id);
        let target_id = validation::normalize_task_id(&target_id);

        if dragged_id == target_id {
            bail_public!(_, "Cannot reorder task '{}' onto itself", dragged_id);
        }

        let mut store = self.lock_store();
        if !store.reorder(&dragged_id, &target_id) {
            let missing = if store.find(&dragged_id).is_none() {
                dragged_id
            } else {
                target_id
            };
            drop(store);
            bail_public!(_, "{}", crate::StoreError::NotFound(missing));
        }

        Ok(Self::with_persistence_note(
            &store,
            format!("Task {} reordered successfully", dragged_id),
        ))
    }
}
