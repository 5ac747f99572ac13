//! Command-line interface for tomatui.

pub mod args;
pub mod commands;
