//! Local persistence for tomatui.

mod tasks;

pub use tasks::TaskStore;
