use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::task::Filter;

#[derive(Parser)]
#[command(name = "tomatui")]
#[command(about = "A terminal Pomodoro timer with a persisted task list")]
#[command(long_about = "tomatui - A terminal Pomodoro timer with a persisted task list

Run with no arguments for the interactive TUI: a work/break countdown
alongside your task list. Every task subcommand works headlessly too, so
the list can be scripted from anywhere.

QUICK START:
  tomatui                   Open the interactive timer
  tomatui add \"Buy milk\"    Add a task
  tomatui list              Show all tasks
  tomatui list -f active    Show only unfinished tasks

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tomatui <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer and task list
    ///
    /// This is the default when no subcommand is given. The TUI shows the
    /// work/break countdown, the session counter, and the task list.
    ///
    /// # Keys
    ///
    ///   s:start  p:pause  r:reset  a:add task  Space:toggle  d:delete
    ///   c:clear completed  f:cycle filter  j/k:navigate  q:quit
    Tui,

    /// Add a task
    ///
    /// Leading and trailing whitespace is trimmed; empty text is ignored.
    ///
    /// # Examples
    ///
    ///   tomatui add "Buy milk"
    #[command(alias = "a")]
    Add {
        /// Task text
        text: String,
    },

    /// List tasks
    ///
    /// Shows tasks in insertion order with their ids, a checkbox, and the
    /// remaining-task count.
    ///
    /// # Examples
    ///
    ///   tomatui list
    ///   tomatui list --filter active
    ///   tomatui list -o json
    #[command(alias = "ls")]
    List {
        /// Which tasks to show
        #[arg(short, long, value_enum, default_value = "all")]
        filter: Filter,
    },

    /// Toggle a task's completed state
    ///
    /// # Examples
    ///
    ///   tomatui toggle 1755600000000
    Toggle {
        /// Task id (shown by 'tomatui list')
        id: i64,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task id (shown by 'tomatui list')
        id: i64,
    },

    /// Remove all completed tasks
    ClearCompleted,

    /// Show or change timer configuration
    ///
    /// Without flags, prints the current configuration. Durations are whole
    /// minutes, clamped to 1-60.
    ///
    /// # Examples
    ///
    ///   tomatui config
    ///   tomatui config --work 30
    ///   tomatui config --work 50 --break 10
    Config {
        /// Work interval length in minutes
        #[arg(long)]
        work: Option<u32>,

        /// Break interval length in minutes
        #[arg(long = "break")]
        break_minutes: Option<u32>,

        /// Enable or disable desktop notifications
        #[arg(long)]
        notifications: Option<bool>,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   tomatui completions bash > /usr/local/etc/bash_completion.d/tomatui
    ///   tomatui completions zsh > ~/.zsh/completions/_tomatui
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
