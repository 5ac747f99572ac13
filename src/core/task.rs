//! Task records and the task list manager.
//!
//! Tasks keep their insertion order. Every mutation is followed by a save
//! through the storage boundary; the list itself never talks to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, time-derived identifier
    pub id: i64,
    /// Task text, trimmed and non-empty
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

/// View predicate for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Show every task.
    #[default]
    All,
    /// Show tasks that are not completed.
    Active,
    /// Show completed tasks.
    Completed,
}

impl Filter {
    /// Check whether a task passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// An ordered task list with a view filter.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    filter: Filter,
}

impl TaskList {
    /// Create a list from previously loaded tasks.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::All,
        }
    }

    /// Append a new task.
    ///
    /// Whitespace-only text is silently ignored. Returns whether a task was
    /// actually added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.tasks.push(Task {
            id: self.next_id(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        });
        true
    }

    /// Flip the completed flag of the task with the given id.
    ///
    /// Unknown ids are silently ignored. Returns whether a task changed.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with the given id.
    ///
    /// Unknown ids are silently ignored. Returns whether a task was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Remove every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Change the view filter. Does not touch the tasks themselves.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Current view filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks matching the current filter, in insertion order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// All tasks, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks that are not completed.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Remaining-count text with correct pluralization.
    #[must_use]
    pub fn stats_line(&self) -> String {
        let active = self.active_count();
        let noun = if active == 1 { "task" } else { "tasks" };
        format!("{active} {noun} remaining")
    }

    /// Whether the clear-completed control should be offered.
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.completed_count() > 0
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Time-derived id, bumped past the newest existing id so that two tasks
    /// created within the same millisecond stay distinct.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(now, |max| now.max(max + 1))
    }
}
