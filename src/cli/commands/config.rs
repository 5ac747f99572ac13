//! Config command implementation.
//!
//! Shows or updates the persisted timer settings.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::timer::clamp_minutes;
use crate::error::TomatuiError;
use crate::output::to_json;

/// Execute the config command.
///
/// Without any flags this prints the current configuration; with flags it
/// updates the named settings and saves.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(
    work: Option<u32>,
    break_minutes: Option<u32>,
    notifications: Option<bool>,
    format: OutputFormat,
) -> Result<String, TomatuiError> {
    let mut cfg = Config::load()?;
    let changed = work.is_some() || break_minutes.is_some() || notifications.is_some();

    if let Some(minutes) = work {
        cfg.timer.work_minutes = clamp_minutes(minutes);
    }
    if let Some(minutes) = break_minutes {
        cfg.timer.break_minutes = clamp_minutes(minutes);
    }
    if let Some(enabled) = notifications {
        cfg.timer.notifications = enabled;
    }

    if changed {
        cfg.save()?;
    }

    match format {
        OutputFormat::Json => to_json(&cfg),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            if changed {
                output.push("Configuration updated".green().bold().to_string());
            }
            output.push(format!("Work:          {} min", cfg.timer.work_minutes));
            output.push(format!("Break:         {} min", cfg.timer.break_minutes));
            output.push(format!(
                "Notifications: {}",
                if cfg.timer.notifications { "on" } else { "off" }
            ));
            Ok(output.join("\n"))
        }
    }
}
