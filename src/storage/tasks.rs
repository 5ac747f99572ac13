//! Task list persistence.
//!
//! The whole list is stored as a JSON array at `~/.tomatui/tasks.json` and
//! overwritten wholesale after every mutation. Loading is forgiving: a
//! missing or corrupt file yields an empty list, never an error.

use std::path::PathBuf;

use crate::config::Paths;
use crate::core::task::Task;
use crate::error::TomatuiError;

/// File-backed task list store.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open() -> Result<Self, TomatuiError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Ok(Self::at(paths.tasks_file))
    }

    /// Create a store at a specific path (useful for testing).
    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the task list.
    ///
    /// A missing, unreadable, or corrupt file is treated as an empty list.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Overwrite the stored list with the given tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails. Callers treat
    /// this as non-fatal; in-memory state stays authoritative.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TomatuiError> {
        let contents = serde_json::to_string_pretty(tasks)?;

        std::fs::write(&self.path, contents).map_err(|e| {
            TomatuiError::Storage(format!(
                "Failed to write task file {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn task(id: i64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::at(temp_dir.path().join("tasks.json"));

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = TaskStore::at(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::at(temp_dir.path().join("tasks.json"));

        let tasks = vec![task(1, "Buy milk", false), task(2, "Write report", true)];
        store.save(&tasks).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "Buy milk");
        assert!(loaded[1].completed);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::at(temp_dir.path().join("tasks.json"));

        store.save(&[task(1, "a", false), task(2, "b", false)]).unwrap();
        store.save(&[task(2, "b", false)]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn test_save_to_unwritable_path_fails_without_panic() {
        let store = TaskStore::at(PathBuf::from("/nonexistent-dir/tasks.json"));
        assert!(store.save(&[task(1, "a", false)]).is_err());
    }

    #[test]
    fn test_persisted_shape() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::at(temp_dir.path().join("tasks.json"));
        store.save(&[task(7, "a", false)]).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["id"], 7);
        assert_eq!(first["text"], "a");
        assert_eq!(first["completed"], false);
        assert!(first.get("createdAt").is_some());
    }
}
