//! Desktop notification boundary.
//!
//! Permission is asked at most once per undecided state. A denied decision
//! silently disables notifications for the rest of the session.

use notify_rust::Notification;

use super::timer::Mode;

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Notifications may be shown.
    Granted,
    /// Notifications are disabled.
    Denied,
}

/// Something that can show user-facing alerts.
pub trait Notifier {
    /// Ask for permission to show notifications. Called at most once while
    /// permission is undecided.
    fn request_permission(&mut self) -> Permission;

    /// Show an alert. Failures are swallowed; notifications are best-effort.
    fn notify(&mut self, summary: &str, body: &str);
}

/// Message pair for the interval that just finished.
#[must_use]
pub const fn completion_message(exited: Mode) -> (&'static str, &'static str) {
    match exited {
        Mode::Work => ("Work session completed!", "Take a well-deserved break!"),
        Mode::Break => ("Break time is over!", "Time to get back to work!"),
    }
}

/// Notifier backed by the desktop notification service.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Create a desktop notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn request_permission(&mut self) -> Permission {
        // Desktop services have no browser-style prompt; probe with a
        // zero-impact handle instead. If no notification daemon answers,
        // treat it as denied for the rest of the session.
        match Notification::new()
            .appname("tomatui")
            .summary("tomatui")
            .body("Notifications enabled")
            .show()
        {
            Ok(_) => Permission::Granted,
            Err(_) => Permission::Denied,
        }
    }

    fn notify(&mut self, summary: &str, body: &str) {
        let _ = Notification::new()
            .appname("tomatui")
            .summary(summary)
            .body(body)
            .icon("alarm-clock")
            .show();
    }
}

/// Notifier that never shows anything, for headless commands.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn notify(&mut self, _summary: &str, _body: &str) {}
}
