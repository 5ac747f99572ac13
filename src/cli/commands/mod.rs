//! Command implementations for tomatui.
//!
//! Each headless command loads the task list, applies one mutation, and
//! persists the result, so the CLI and the TUI share the same stored state.

mod completions;
mod config;

pub use completions::completions;
pub use config::config;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::task::{Filter, TaskList};
use crate::error::TomatuiError;
use crate::output::{format_tasks, to_json};
use crate::storage::TaskStore;

/// Execute the add command
///
/// # Errors
///
/// Returns an error if the store cannot be opened. A whitespace-only task
/// text is silently ignored, matching the TUI behavior.
pub fn add(text: &str, format: OutputFormat) -> Result<String, TomatuiError> {
    let store = TaskStore::open()?;
    let mut tasks = TaskList::from_tasks(store.load());

    if !tasks.add(text) {
        return Ok(String::new());
    }
    save_best_effort(&store, &tasks);

    match format {
        OutputFormat::Json => {
            let added = tasks.all().last();
            to_json(&added)
        }
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Added:".green().bold(),
            text.trim()
        )),
    }
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the store cannot be opened or formatting fails.
pub fn list(filter: Filter, format: OutputFormat) -> Result<String, TomatuiError> {
    let store = TaskStore::open()?;
    let mut tasks = TaskList::from_tasks(store.load());
    tasks.set_filter(filter);

    format_tasks(
        &tasks.filtered(),
        &filter.to_string(),
        &tasks.stats_line(),
        format,
    )
}

/// Execute the toggle command
///
/// # Errors
///
/// Returns `TomatuiError::NotFound` if no task has the given id.
pub fn toggle(id: i64, format: OutputFormat) -> Result<String, TomatuiError> {
    let store = TaskStore::open()?;
    let mut tasks = TaskList::from_tasks(store.load());

    if !tasks.toggle(id) {
        return Err(TomatuiError::NotFound(format!("No task with id {id}")));
    }
    save_best_effort(&store, &tasks);

    let task = tasks.all().iter().find(|t| t.id == id);
    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => {
            let Some(task) = task else {
                return Ok(String::new());
            };
            let verb = if task.completed {
                "Completed:".green().bold()
            } else {
                "Reopened:".yellow().bold()
            };
            Ok(format!("{verb} {}", task.text))
        }
    }
}

/// Execute the delete command
///
/// # Errors
///
/// Returns `TomatuiError::NotFound` if no task has the given id.
pub fn delete(id: i64, format: OutputFormat) -> Result<String, TomatuiError> {
    let store = TaskStore::open()?;
    let mut tasks = TaskList::from_tasks(store.load());

    if !tasks.delete(id) {
        return Err(TomatuiError::NotFound(format!("No task with id {id}")));
    }
    save_best_effort(&store, &tasks);

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "deleted": id })),
        OutputFormat::Pretty => Ok(format!("{} {id}", "Deleted:".red().bold())),
    }
}

/// Execute the clear-completed command
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn clear_completed(format: OutputFormat) -> Result<String, TomatuiError> {
    let store = TaskStore::open()?;
    let mut tasks = TaskList::from_tasks(store.load());

    let removed = tasks.clear_completed();
    if removed > 0 {
        save_best_effort(&store, &tasks);
    }

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "removed": removed })),
        OutputFormat::Pretty => {
            let noun = if removed == 1 { "task" } else { "tasks" };
            Ok(format!("Removed {removed} completed {noun}"))
        }
    }
}

/// Persist the list, warning instead of failing; in-memory state already
/// reflects the mutation and the command's answer should not be lost.
fn save_best_effort(store: &TaskStore, tasks: &TaskList) {
    if let Err(e) = store.save(tasks.all()) {
        eprintln!("{}: {e}", "warning".yellow().bold());
    }
}
