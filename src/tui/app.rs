//! Application state for the TUI.

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::core::task::Filter;
use crate::core::SessionController;

/// Which part of the UI owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the timer and task list.
    Normal,
    /// Keys go into the new-task text field.
    Editing,
}

/// Application state.
pub struct App<C: Clock, N: Notifier> {
    /// The session controller owning timer, tasks, and boundaries.
    pub controller: SessionController<C, N>,
    /// Current input mode.
    pub input_mode: InputMode,
    /// New-task text being typed.
    pub input: String,
    /// Currently selected index into the filtered task view.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
}

impl<C: Clock, N: Notifier> App<C, N> {
    /// Create a new app instance.
    pub fn new(controller: SessionController<C, N>) -> Self {
        Self {
            controller,
            input_mode: InputMode::Normal,
            input: String::new(),
            selected: 0,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Apply due countdown ticks and surface any non-fatal errors.
    pub fn pump(&mut self) {
        self.controller.pump();
        if let Some(error) = self.controller.take_error() {
            self.status = Some(error);
        }
    }

    /// Number of tasks in the current filtered view.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.controller.tasks().filtered().len()
    }

    /// Id of the currently selected task, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<i64> {
        self.controller
            .tasks()
            .filtered()
            .get(self.selected)
            .map(|t| t.id)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Keep the selection inside the filtered view after a mutation.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Enter editing mode for a new task.
    pub fn begin_input(&mut self) {
        self.input_mode = InputMode::Editing;
        self.input.clear();
        self.status = None;
    }

    /// Commit the typed task text. Whitespace-only input adds nothing.
    pub fn commit_input(&mut self) {
        self.controller.add_task(&self.input);
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.clamp_selection();
    }

    /// Leave editing mode without adding a task.
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Toggle the selected task.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.toggle_task(id);
            self.clamp_selection();
        }
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.delete_task(id);
            self.clamp_selection();
        }
    }

    /// Remove all completed tasks.
    pub fn clear_completed(&mut self) {
        self.controller.clear_completed();
        self.clamp_selection();
    }

    /// Cycle the task view filter: All -> Active -> Completed -> All.
    pub fn cycle_filter(&mut self) {
        let next = match self.controller.tasks().filter() {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        };
        self.controller.set_filter(next);
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::clock::ManualClock;
    use crate::core::notify::NullNotifier;
    use crate::storage::TaskStore;
    use tempfile::TempDir;

    fn app(temp_dir: &TempDir) -> App<ManualClock, NullNotifier> {
        let config = Config::default();
        let store = TaskStore::at(temp_dir.path().join("tasks.json"));
        App::new(SessionController::new(
            &config,
            store,
            ManualClock::new(),
            NullNotifier,
        ))
    }

    #[test]
    fn test_commit_input_adds_task() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app(&temp_dir);

        app.begin_input();
        app.input.push_str("Buy milk");
        app.commit_input();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.visible_len(), 1);
    }

    #[test]
    fn test_commit_blank_input_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app(&temp_dir);

        app.begin_input();
        app.input.push_str("   ");
        app.commit_input();

        assert_eq!(app.visible_len(), 0);
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app(&temp_dir);

        for text in ["a", "b", "c"] {
            app.begin_input();
            app.input.push_str(text);
            app.commit_input();
        }

        app.selected = 2;
        app.delete_selected();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app(&temp_dir);

        assert_eq!(app.controller.tasks().filter(), Filter::All);
        app.cycle_filter();
        assert_eq!(app.controller.tasks().filter(), Filter::Active);
        app.cycle_filter();
        assert_eq!(app.controller.tasks().filter(), Filter::Completed);
        app.cycle_filter();
        assert_eq!(app.controller.tasks().filter(), Filter::All);
    }

    #[test]
    fn test_toggle_hides_task_under_active_filter() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app(&temp_dir);

        app.begin_input();
        app.input.push_str("only");
        app.commit_input();

        app.cycle_filter(); // Active
        assert_eq!(app.visible_len(), 1);
        app.toggle_selected();
        assert_eq!(app.visible_len(), 0);
        assert_eq!(app.selected, 0);
    }
}
