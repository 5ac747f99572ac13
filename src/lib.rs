//! tomatui - A terminal Pomodoro timer with a persisted task list
//!
//! This crate provides a work/break countdown timer and a small task list,
//! usable as an interactive TUI or through headless subcommands.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::controller::SessionController;
pub use error::TomatuiError;
