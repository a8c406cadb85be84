//! Theme handler for the task server

use crate::TaskServerHandler;
use crate::storage::Theme;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TaskServerHandler {
    /// Sets the stored theme, or toggles it when no theme is given.
    pub async fn handle_set_theme(&self, theme: Option<String>) -> McpResult<String> {
        let theme: Option<Theme> = validation::parse_optional_arg(theme.as_deref())?;

        let mut store = self.lock_store();
        let theme = match theme {
            Some(t) => {
                store.set_theme(t);
                t
            }
            None => store.toggle_theme(),
        };

        Ok(Self::with_persistence_note(
            &store,
            format!("Theme set to {}", theme),
        ))
    }
}
