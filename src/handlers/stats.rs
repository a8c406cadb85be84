//! Stats and reminder handlers for the task server

use crate::TaskServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TaskServerHandler {
    /// Counts over the whole collection, ignoring filters.
    pub async fn handle_stats(&self) -> McpResult<String> {
        let stats = self.lock_store().compute_stats();
        Ok(formatting::format_stats(&stats))
    }

    /// Due-today, due-tomorrow and overdue tasks, each listed under a summary line.
    pub async fn handle_reminders(&self) -> McpResult<String> {
        let today = crate::tasks::local_date_today();
        let reminders = self.lock_store().due_reminders_on(today);

        let mut result = formatting::format_reminders(&reminders);
        for (label, tasks) in [
            ("Due today", &reminders.due_today),
            ("Due tomorrow", &reminders.due_tomorrow),
            ("Overdue", &reminders.overdue),
        ] {
            if tasks.is_empty() {
                continue;
            }
            result.push_str(&format!("\n\n{}:\n", label));
            for task in tasks {
                result.push_str(&formatting::format_task(task, today));
            }
        }
        Ok(result)
    }
}
