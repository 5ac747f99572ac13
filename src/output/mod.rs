//! Output formatting for tomatui.
//!
//! Formatters for displaying the task list in the headless CLI.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::task::Task;
use crate::error::TomatuiError;

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TomatuiError::Serialize` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[&Task],
    title: &str,
    stats: &str,
    format: OutputFormat,
) -> Result<String, TomatuiError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, stats)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}
