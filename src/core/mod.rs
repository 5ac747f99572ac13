//! Core timer and task-list logic, independent of any UI.

pub mod clock;
pub mod controller;
pub mod notify;
pub mod task;
pub mod timer;

pub use clock::{Clock, IntervalClock, ManualClock, TickHandle};
pub use controller::SessionController;
pub use notify::{completion_message, DesktopNotifier, Notifier, NullNotifier, Permission};
pub use task::{Filter, Task, TaskList};
pub use timer::{format_mmss, Mode, Timer};
