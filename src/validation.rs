//! Argument parsing for MCP tool parameters
//!
//! Converts raw string arguments into domain values and maps failures to
//! MCP invalid-params errors.

use crate::error::StoreError;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use std::str::FromStr;

fn invalid_params(err: StoreError) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(err.to_string(), true)
}

/// Parse any domain enum argument
pub fn parse_arg<T>(value: &str) -> McpResult<T>
where
    T: FromStr<Err = StoreError>,
{
    value.parse::<T>().map_err(invalid_params)
}

/// Parse an optional enum argument, where empty text means "not given"
pub fn parse_optional_arg<T>(value: Option<&str>) -> McpResult<Option<T>>
where
    T: FromStr<Err = StoreError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_arg(v).map(Some),
    }
}

/// Parse an optional due date in YYYY-MM-DD format; empty text means no due date
pub fn parse_due_date(value: Option<&str>) -> McpResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| invalid_params(StoreError::InvalidDate(v.to_string()))),
    }
}

/// Reject titles that are empty after trimming
pub fn require_title(title: &str) -> McpResult<()> {
    if title.trim().is_empty() {
        return Err(invalid_params(StoreError::TitleRequired));
    }
    Ok(())
}

/// Normalize task ID by trimming surrounding whitespace
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}
