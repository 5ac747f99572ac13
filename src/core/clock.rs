//! Injected tick source for the countdown.
//!
//! The controller never reads the wall clock directly. It schedules a
//! repeating tick through the `Clock` trait and drains due ticks from its
//! event loop, so timer logic is testable with a manual clock.

use std::time::{Duration, Instant};

/// Handle to a scheduled repeating tick.
///
/// Cancellation is idempotent: cancelling an already-cancelled handle is a
/// no-op and reports `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

/// A source of repeating ticks.
pub trait Clock {
    /// Schedule a repeating tick at the given interval, replacing any
    /// previously scheduled one.
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle;

    /// Cancel a scheduled tick. Returns whether the handle was still live.
    fn cancel(&mut self, handle: TickHandle) -> bool;

    /// Number of ticks that have become due since the last call.
    ///
    /// Returns 0 when nothing is scheduled.
    fn due_ticks(&mut self) -> u32;
}

/// Wall-clock tick source driven by polling.
///
/// The TUI event loop polls input with a short timeout and asks this clock
/// how many whole intervals have elapsed, so ticks are not lost when event
/// handling runs long.
#[derive(Debug, Default)]
pub struct IntervalClock {
    scheduled: Option<Schedule>,
    next_handle: u64,
}

#[derive(Debug)]
struct Schedule {
    handle: TickHandle,
    interval: Duration,
    next_due: Instant,
}

impl IntervalClock {
    /// Create an idle clock with nothing scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scheduled: None,
            next_handle: 0,
        }
    }
}

impl Clock for IntervalClock {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        self.next_handle += 1;
        let handle = TickHandle(self.next_handle);
        self.scheduled = Some(Schedule {
            handle,
            interval,
            next_due: Instant::now() + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TickHandle) -> bool {
        match &self.scheduled {
            Some(s) if s.handle == handle => {
                self.scheduled = None;
                true
            }
            _ => false,
        }
    }

    fn due_ticks(&mut self) -> u32 {
        let Some(schedule) = &mut self.scheduled else {
            return 0;
        };

        let now = Instant::now();
        let mut due = 0;
        while schedule.next_due <= now {
            schedule.next_due += schedule.interval;
            due += 1;
        }
        due
    }
}

/// Manually driven clock for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    scheduled: Option<TickHandle>,
    next_handle: u64,
    pending: u32,
}

impl ManualClock {
    /// Create an idle manual clock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scheduled: None,
            next_handle: 0,
            pending: 0,
        }
    }

    /// Make the given number of ticks due.
    pub fn advance(&mut self, ticks: u32) {
        if self.scheduled.is_some() {
            self.pending += ticks;
        }
    }

    /// Whether a tick is currently scheduled.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.scheduled.is_some()
    }
}

impl Clock for ManualClock {
    fn schedule_repeating(&mut self, _interval: Duration) -> TickHandle {
        self.next_handle += 1;
        let handle = TickHandle(self.next_handle);
        self.scheduled = Some(handle);
        self.pending = 0;
        handle
    }

    fn cancel(&mut self, handle: TickHandle) -> bool {
        if self.scheduled == Some(handle) {
            self.scheduled = None;
            self.pending = 0;
            true
        } else {
            false
        }
    }

    fn due_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}
