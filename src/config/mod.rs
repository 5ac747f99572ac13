//! Configuration management for tomatui.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, TimerConfig};
