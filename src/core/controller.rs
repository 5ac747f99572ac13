//! The session controller.
//!
//! One owned object ties the timer, the task list, persistence, the tick
//! source, and the notification boundary together. UI layers hold a
//! controller, feed it user intents, and read its state back for rendering.

use std::time::Duration;

use crate::config::Config;
use crate::core::clock::{Clock, TickHandle};
use crate::core::notify::{completion_message, Notifier, Permission};
use crate::core::task::{Filter, TaskList};
use crate::core::timer::{Mode, Timer};
use crate::storage::TaskStore;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns all session state and the external boundaries.
pub struct SessionController<C: Clock, N: Notifier> {
    timer: Timer,
    tasks: TaskList,
    store: TaskStore,
    clock: C,
    notifier: N,
    notifications_enabled: bool,
    permission: Option<Permission>,
    tick_handle: Option<TickHandle>,
    last_error: Option<String>,
}

impl<C: Clock, N: Notifier> SessionController<C, N> {
    /// Create a controller, loading the persisted task list once.
    pub fn new(config: &Config, store: TaskStore, clock: C, notifier: N) -> Self {
        let tasks = TaskList::from_tasks(store.load());

        Self {
            timer: Timer::new(config.timer.work_minutes, config.timer.break_minutes),
            tasks,
            store,
            clock,
            notifier,
            notifications_enabled: config.timer.notifications,
            permission: None,
            tick_handle: None,
            last_error: None,
        }
    }

    /// Start the countdown. No-op if already running.
    pub fn start(&mut self) {
        if self.tick_handle.is_some() {
            return;
        }
        self.timer.start();
        self.tick_handle = Some(self.clock.schedule_repeating(TICK_INTERVAL));
    }

    /// Pause the countdown. Safe to call repeatedly; the scheduled tick is
    /// cancelled exactly once.
    pub fn pause(&mut self) {
        self.timer.pause();
        if let Some(handle) = self.tick_handle.take() {
            self.clock.cancel(handle);
        }
    }

    /// Pause and restore the current mode's full duration.
    pub fn reset(&mut self) {
        self.pause();
        self.timer.reset();
    }

    /// Apply any ticks that have come due.
    ///
    /// Returns whether timer state changed. When an interval finishes, the
    /// pending tick is cancelled and the completion notification fires;
    /// any further due ticks are discarded since the timer has stopped.
    pub fn pump(&mut self) -> bool {
        let due = self.clock.due_ticks();
        let changed = due > 0 && self.timer.is_running();

        for _ in 0..due {
            if let Some(exited) = self.timer.tick() {
                if let Some(handle) = self.tick_handle.take() {
                    self.clock.cancel(handle);
                }
                self.maybe_notify(exited);
                break;
            }
        }

        changed
    }

    /// Set the work interval length (clamped). Display updates immediately
    /// only while idle in work mode.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.timer.set_work_minutes(minutes);
    }

    /// Set the break interval length (clamped). Display updates immediately
    /// only while idle in break mode.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.timer.set_break_minutes(minutes);
    }

    /// Add a task. Whitespace-only text is silently ignored.
    pub fn add_task(&mut self, text: &str) {
        if self.tasks.add(text) {
            self.persist();
        }
    }

    /// Toggle a task's completed flag. Unknown ids are silently ignored.
    pub fn toggle_task(&mut self, id: i64) {
        if self.tasks.toggle(id) {
            self.persist();
        }
    }

    /// Delete a task. Unknown ids are silently ignored.
    pub fn delete_task(&mut self, id: i64) {
        if self.tasks.delete(id) {
            self.persist();
        }
    }

    /// Remove all completed tasks.
    pub fn clear_completed(&mut self) {
        if self.tasks.clear_completed() > 0 {
            self.persist();
        }
    }

    /// Change the task view filter. Does not mutate or persist the list.
    pub fn set_filter(&mut self, filter: Filter) {
        self.tasks.set_filter(filter);
    }

    /// Timer state for rendering.
    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Task list for rendering.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Take the most recent non-fatal error, if any, for display.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Save the task list, best-effort. In-memory state stays authoritative
    /// when the write fails.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.tasks.all()) {
            self.last_error = Some(e.to_string());
        }
    }

    fn maybe_notify(&mut self, exited: Mode) {
        if !self.notifications_enabled {
            return;
        }

        if self.permission.is_none() {
            self.permission = Some(self.notifier.request_permission());
        }

        if self.permission == Some(Permission::Granted) {
            let (summary, body) = completion_message(exited);
            self.notifier.notify(summary, body);
        }
    }

    #[cfg(test)]
    pub(crate) fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::timer::Mode;
    use tempfile::TempDir;

    /// Notifier test double that records calls.
    #[derive(Default)]
    struct RecordingNotifier {
        grant: bool,
        permission_requests: u32,
        shown: Vec<(String, String)>,
    }

    impl Notifier for RecordingNotifier {
        fn request_permission(&mut self) -> Permission {
            self.permission_requests += 1;
            if self.grant {
                Permission::Granted
            } else {
                Permission::Denied
            }
        }

        fn notify(&mut self, summary: &str, body: &str) {
            self.shown.push((summary.to_string(), body.to_string()));
        }
    }

    fn controller(
        temp_dir: &TempDir,
        grant: bool,
    ) -> SessionController<ManualClock, RecordingNotifier> {
        let mut config = Config::default();
        config.timer.work_minutes = 1;
        config.timer.break_minutes = 1;

        let store = TaskStore::at(temp_dir.path().join("tasks.json"));
        let notifier = RecordingNotifier {
            grant,
            ..RecordingNotifier::default()
        };

        SessionController::new(&config, store, ManualClock::new(), notifier)
    }

    #[test]
    fn test_start_schedules_a_tick() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        assert!(ctl.timer().is_running());
        assert!(ctl.clock_mut().is_scheduled());
    }

    #[test]
    fn test_double_start_keeps_single_schedule() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        ctl.start();
        ctl.clock_mut().advance(1);
        ctl.pump();
        assert_eq!(ctl.timer().remaining_seconds(), 59);
    }

    #[test]
    fn test_pause_cancels_exactly_once() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        ctl.pause();
        assert!(!ctl.timer().is_running());
        assert!(!ctl.clock_mut().is_scheduled());

        // Double pause must not cancel twice or error.
        ctl.pause();
        assert!(!ctl.timer().is_running());
    }

    #[test]
    fn test_no_stale_tick_after_pause() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        ctl.pause();
        ctl.clock_mut().advance(5);
        ctl.pump();
        assert_eq!(ctl.timer().remaining_seconds(), 60);
    }

    #[test]
    fn test_reset_restores_duration() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        ctl.clock_mut().advance(10);
        ctl.pump();
        assert_eq!(ctl.timer().remaining_seconds(), 50);

        ctl.reset();
        assert_eq!(ctl.timer().remaining_seconds(), 60);
        assert!(!ctl.timer().is_running());
    }

    #[test]
    fn test_work_completion_notifies_and_stops() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        ctl.clock_mut().advance(60);
        ctl.pump();

        assert_eq!(ctl.timer().mode(), Mode::Break);
        assert!(!ctl.timer().is_running());
        assert_eq!(ctl.timer().completed_sessions(), 1);
        assert!(!ctl.clock_mut().is_scheduled());

        let shown = &ctl.notifier.shown;
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "Work session completed!");
    }

    #[test]
    fn test_excess_ticks_discarded_after_completion() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        ctl.start();
        ctl.clock_mut().advance(90);
        ctl.pump();

        // Break duration untouched by the 30 extra ticks.
        assert_eq!(ctl.timer().mode(), Mode::Break);
        assert_eq!(ctl.timer().remaining_seconds(), 60);
    }

    #[test]
    fn test_permission_requested_once_and_denied_skips() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, false);

        // Complete two intervals.
        for _ in 0..2 {
            ctl.start();
            ctl.clock_mut().advance(60);
            ctl.pump();
        }

        assert_eq!(ctl.notifier.permission_requests, 1);
        assert!(ctl.notifier.shown.is_empty());
    }

    #[test]
    fn test_break_completion_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctl = controller(&temp_dir, true);

        // Work interval, then break interval.
        ctl.start();
        ctl.clock_mut().advance(60);
        ctl.pump();
        ctl.start();
        ctl.clock_mut().advance(60);
        ctl.pump();

        assert_eq!(ctl.timer().mode(), Mode::Work);
        assert_eq!(ctl.timer().completed_sessions(), 1);
        assert_eq!(ctl.notifier.shown[1].0, "Break time is over!");
    }

    #[test]
    fn test_task_mutations_persist() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("tasks.json");

        {
            let mut ctl = controller(&temp_dir, true);
            ctl.add_task("Buy milk");
            ctl.add_task("   ");
        }

        let store = TaskStore::at(store_path);
        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "Buy milk");
    }

    #[test]
    fn test_list_survives_reload() {
        let temp_dir = TempDir::new().unwrap();

        let id = {
            let mut ctl = controller(&temp_dir, true);
            ctl.add_task("A");
            ctl.add_task("B");
            ctl.tasks().all()[0].id
        };

        let mut ctl = controller(&temp_dir, true);
        assert_eq!(ctl.tasks().all().len(), 2);
        ctl.toggle_task(id);
        ctl.clear_completed();

        let ctl = controller(&temp_dir, true);
        assert_eq!(ctl.tasks().all().len(), 1);
        assert_eq!(ctl.tasks().all()[0].text, "B");
    }

    #[test]
    fn test_save_failure_is_nonfatal() {
        let config = Config::default();
        let store = TaskStore::at(std::path::PathBuf::from("/nonexistent-dir/tasks.json"));
        let mut ctl = SessionController::new(
            &config,
            store,
            ManualClock::new(),
            RecordingNotifier::default(),
        );

        ctl.add_task("kept in memory");
        assert_eq!(ctl.tasks().all().len(), 1);
        assert!(ctl.take_error().is_some());
        assert!(ctl.take_error().is_none());
    }
}
