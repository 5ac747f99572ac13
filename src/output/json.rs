//! JSON output formatting for tomatui.

use serde::Serialize;
use serde_json::json;

use crate::core::task::Task;
use crate::error::TomatuiError;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TomatuiError::Serialize` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&Task], filter: &str) -> Result<String, TomatuiError> {
    let output = json!({
        "filter": filter,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TomatuiError::Serialize` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TomatuiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
