//! MCP tool handlers for the task server
//!
//! Each handler is in a separate file for better organization.

pub mod add_task;
pub mod delete_task;
pub mod edit_task;
pub mod list;
pub mod reorder;
pub mod stats;
pub mod theme;
pub mod toggle_complete;
