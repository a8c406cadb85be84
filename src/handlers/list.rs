//! List handler for the task server

use crate::TaskServerHandler;
use crate::formatting;
use crate::tasks::{PriorityFilter, SortMode, StatusFilter, local_date_today};
use crate::validation;
use mcp_attr::Result as McpResult;

impl TaskServerHandler {
    /// Updates any view criteria that were given, then renders the current view.
    /// Criteria persist between calls, like the filter controls of a UI.
    pub async fn handle_list(
        &self,
        status: Option<String>,
        priority: Option<String>,
        search: Option<String>,
        sort: Option<String>,
    ) -> McpResult<String> {
        // Parse everything before touching the store so a bad argument changes nothing
        let status: Option<StatusFilter> = validation::parse_optional_arg(status.as_deref())?;
        let priority: Option<PriorityFilter> =
            validation::parse_optional_arg(priority.as_deref())?;
        let sort: Option<SortMode> = validation::parse_optional_arg(sort.as_deref())?;

        let mut store = self.lock_store();
        if let Some(status) = status {
            store.set_status_filter(status);
        }
        if let Some(priority) = priority {
            store.set_priority_filter(priority);
        }
        if let Some(search) = search {
            store.set_search(search);
        }
        if let Some(sort) = sort {
            store.set_sort_mode(sort);
        }

        let view = store.compute_view();
        let filters = store.filters();
        let header = format!(
            "Filters: status={}, priority={}, search=\"{}\"; sort={}\n",
            filters.status,
            filters.priority,
            filters.search,
            store.sort_mode()
        );
        Ok(format!(
            "{}{}",
            header,
            formatting::format_view(&view, local_date_today())
        ))
    }

    /// Resets status, priority and search filters; the sort mode is kept.
    pub async fn handle_clear_filters(&self) -> McpResult<String> {
        self.lock_store().clear_filters();
        Ok("Filters cleared".to_string())
    }
}
