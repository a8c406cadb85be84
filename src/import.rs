//! Import of task lists exported from browser local storage
//!
//! The browser app keeps its list as JSON under the `tasks` key. Values in
//! those exports are loose: `dueDate` may be `null` or `""`, `priority` may be
//! missing, and descriptions are stored as possibly-empty strings. Everything
//! is normalized to the same defaults `TaskStore::add_task` applies.

use crate::tasks::{Priority, Task, generate_task_id};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrowserTask {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    order: Option<i64>,
}

/// Either the raw `tasks` array or a dump of the whole local-storage map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BrowserExport {
    Tasks(Vec<BrowserTask>),
    Storage { tasks: Vec<BrowserTask> },
}

/// Read and normalize a browser export file
pub fn read_browser_export(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_browser_export(&content).with_context(|| format!("Failed to import {}", path.display()))
}

/// Parse a browser export, keeping the array order
///
/// A task's exported `order` is kept as is, ties included; tasks without
/// one fall back to their array index.
pub fn parse_browser_export(json: &str) -> Result<Vec<Task>> {
    let export: BrowserExport = serde_json::from_str(json).context("Invalid task export JSON")?;
    let raw = match export {
        BrowserExport::Tasks(tasks) | BrowserExport::Storage { tasks } => tasks,
    };

    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, t)| {
            let order = t.order.unwrap_or(index as i64);
            normalize(t, order)
        })
        .collect())
}

fn normalize(raw: BrowserTask, order: i64) -> Task {
    let mut task = Task::new(
        &raw.title,
        raw.description.as_deref(),
        raw.due_date.as_deref().and_then(parse_due_date),
        raw.priority.as_deref().and_then(parse_priority),
        order,
    );
    task.completed = raw.completed;

    if let Some(id) = raw.id.filter(|id| !id.trim().is_empty()) {
        task.id = id;
    } else {
        task.id = generate_task_id();
    }

    if let Some(created) = raw.created_at.as_deref() {
        match DateTime::parse_from_rfc3339(created) {
            Ok(ts) => task.created_at = ts.with_timezone(&Utc),
            Err(_) => tracing::warn!(%created, "unparseable createdAt, using import time"),
        }
    }

    task
}

fn parse_priority(value: &str) -> Option<Priority> {
    if value.trim().is_empty() {
        return None;
    }
    match value.parse() {
        Ok(p) => Some(p),
        Err(_) => {
            tracing::warn!(%value, "unknown priority, defaulting to medium");
            None
        }
    }
}

/// Accept `YYYY-MM-DD`, or a full timestamp whose date part is used
fn parse_due_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            tracing::warn!(%value, "unparseable dueDate, importing without due date");
            None
        }
    }
}
