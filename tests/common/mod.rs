//! Common test utilities for integration tests
#![allow(dead_code)]

use taskpad_mcp::{Storage, TaskServerHandler, TaskStore};
use tempfile::TempDir;

/// Create an empty store that never touches the filesystem
pub fn empty_store() -> TaskStore {
    TaskStore::new(Storage::in_memory())
}

/// Create an in-memory store holding tasks with the given titles, returning their IDs
pub fn store_with_titles(titles: &[&str]) -> (TaskStore, Vec<String>) {
    let mut store = empty_store();
    let ids = titles
        .iter()
        .map(|title| store.add_task(title, None, None, None).id)
        .collect();
    (store, ids)
}

/// Create a test handler over an empty in-memory store
pub fn get_test_handler() -> TaskServerHandler {
    TaskServerHandler::from_store(empty_store())
}

/// Create a test handler backed by a file in a temporary directory
pub fn get_file_handler() -> (TaskServerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    let handler = TaskServerHandler::new(path.to_str().unwrap(), false);
    (handler, dir)
}

/// Extract task ID from add_task() response message
/// Response format: "Task created with ID: <id> (priority: medium)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string()
}

pub fn titles(store: &TaskStore) -> Vec<String> {
    store.tasks().iter().map(|t| t.title.clone()).collect()
}

pub fn orders(store: &TaskStore) -> Vec<i64> {
    store.tasks().iter().map(|t| t.order).collect()
}
