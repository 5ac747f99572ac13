//! Countdown timer state machine.
//!
//! Alternates between work and break modes, counting down one second per
//! tick. Durations are configured in whole minutes and clamped to a sane
//! range.

use serde::{Deserialize, Serialize};

/// Minimum configurable duration in minutes.
pub const MIN_MINUTES: u32 = 1;
/// Maximum configurable duration in minutes.
pub const MAX_MINUTES: u32 = 60;

/// Which interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Work session
    Work,
    /// Break between work sessions
    Break,
}

impl Mode {
    /// Get the display label for this mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work Session",
            Self::Break => "Break Time",
        }
    }

    /// Get the mode that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A work/break countdown timer.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Remaining seconds in the current interval
    remaining_seconds: u32,
    /// Current mode
    mode: Mode,
    /// Whether the countdown is running
    running: bool,
    /// Completed work sessions
    completed_sessions: u32,
    /// Work interval length in minutes
    work_minutes: u32,
    /// Break interval length in minutes
    break_minutes: u32,
}

impl Timer {
    /// Create a new idle timer in work mode with the given durations.
    ///
    /// Durations are clamped to `[MIN_MINUTES, MAX_MINUTES]`.
    #[must_use]
    pub fn new(work_minutes: u32, break_minutes: u32) -> Self {
        let work_minutes = clamp_minutes(work_minutes);
        let break_minutes = clamp_minutes(break_minutes);

        Self {
            remaining_seconds: work_minutes * 60,
            mode: Mode::Work,
            running: false,
            completed_sessions: 0,
            work_minutes,
            break_minutes,
        }
    }

    /// Start the countdown. No-op if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the countdown. No-op if already idle.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause and restore the current mode's full duration.
    pub fn reset(&mut self) {
        self.pause();
        self.remaining_seconds = self.duration_for(self.mode);
    }

    /// Advance the countdown by one second.
    ///
    /// When the countdown reaches zero the timer stops, switches mode, and
    /// resets to the new mode's full duration. Completing a work interval
    /// increments the session counter. Returns the mode that was just exited
    /// if an interval completed, so the caller can notify.
    pub fn tick(&mut self) -> Option<Mode> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        let exited = self.mode;
        self.running = false;
        if exited == Mode::Work {
            self.completed_sessions += 1;
        }
        self.mode = exited.next();
        self.remaining_seconds = self.duration_for(self.mode);

        Some(exited)
    }

    /// Set the work interval length.
    ///
    /// Takes effect on the display immediately only while idle in work mode;
    /// otherwise it applies the next time a work interval starts fresh.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.work_minutes = clamp_minutes(minutes);
        if self.mode == Mode::Work && !self.running {
            self.remaining_seconds = self.work_minutes * 60;
        }
    }

    /// Set the break interval length.
    ///
    /// Takes effect on the display immediately only while idle in break mode.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes = clamp_minutes(minutes);
        if self.mode == Mode::Break && !self.running {
            self.remaining_seconds = self.break_minutes * 60;
        }
    }

    /// Full duration of the given mode, in seconds.
    const fn duration_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes * 60,
            Mode::Break => self.break_minutes * 60,
        }
    }

    /// Remaining seconds in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of completed work sessions.
    #[must_use]
    pub const fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Configured work interval length in minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Configured break interval length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Progress through the current interval (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.duration_for(self.mode);
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(total))
    }

    /// Format the remaining time as MM:SS.
    #[must_use]
    pub fn display(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format a second count as zero-padded MM:SS.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Clamp a duration into the configurable range.
#[must_use]
pub const fn clamp_minutes(minutes: u32) -> u32 {
    if minutes < MIN_MINUTES {
        MIN_MINUTES
    } else if minutes > MAX_MINUTES {
        MAX_MINUTES
    } else {
        minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_idle_in_work_mode() {
        let timer = Timer::new(25, 5);
        assert_eq!(timer.mode(), Mode::Work);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.completed_sessions(), 0);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(5), "00:05");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(60), "01:00");
        assert_eq!(format_mmss(125), "02:05");
        assert_eq!(format_mmss(3599), "59:59");
        assert_eq!(format_mmss(3600), "60:00");
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut timer = Timer::new(1, 1);
        timer.start();

        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_seconds(), 59);
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let mut timer = Timer::new(1, 1);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_work_completion_switches_to_break() {
        let mut timer = Timer::new(25, 5);
        timer.start();
        for _ in 0..(25 * 60 - 1) {
            assert_eq!(timer.tick(), None);
        }

        assert_eq!(timer.tick(), Some(Mode::Work));
        assert_eq!(timer.mode(), Mode::Break);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 5 * 60);
        assert_eq!(timer.completed_sessions(), 1);
    }

    #[test]
    fn test_break_completion_does_not_count_session() {
        let mut timer = Timer::new(25, 5);
        timer.start();
        while timer.tick().is_none() {}
        assert_eq!(timer.completed_sessions(), 1);

        // Run the break down to zero
        timer.start();
        while timer.tick().is_none() {}

        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.completed_sessions(), 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = Timer::new(25, 5);
        timer.start();
        timer.pause();
        assert!(!timer.is_running());
        timer.pause();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut timer = Timer::new(25, 5);
        timer.start();
        timer.tick();
        timer.tick();
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn test_set_work_minutes_idle_active_mode() {
        let mut timer = Timer::new(25, 5);
        timer.set_work_minutes(30);
        assert_eq!(timer.remaining_seconds(), 30 * 60);
    }

    #[test]
    fn test_set_work_minutes_while_running_deferred() {
        let mut timer = Timer::new(25, 5);
        timer.start();
        timer.tick();
        timer.set_work_minutes(30);
        assert_eq!(timer.remaining_seconds(), 25 * 60 - 1);
        assert_eq!(timer.work_minutes(), 30);
    }

    #[test]
    fn test_set_break_minutes_inactive_mode_deferred() {
        let mut timer = Timer::new(25, 5);
        timer.set_break_minutes(10);
        // Display unchanged; break duration applies when the break starts.
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.break_minutes(), 10);

        timer.start();
        while timer.tick().is_none() {}
        assert_eq!(timer.remaining_seconds(), 10 * 60);
    }

    #[test]
    fn test_durations_clamped() {
        let timer = Timer::new(0, 500);
        assert_eq!(timer.work_minutes(), 1);
        assert_eq!(timer.break_minutes(), 60);

        let mut timer = Timer::new(25, 5);
        timer.set_work_minutes(0);
        assert_eq!(timer.work_minutes(), 1);
    }

    #[test]
    fn test_progress() {
        let mut timer = Timer::new(1, 1);
        assert!(timer.progress().abs() < f64::EPSILON);
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }
}
