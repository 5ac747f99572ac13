//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::error::TomatuiError;
use crate::tui::app::{App, InputMode};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. The short
/// poll timeout keeps the loop spinning so countdown ticks are picked up
/// promptly even when no keys are pressed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock, N: Notifier>(
    app: &mut App<C, N>,
) -> Result<Option<Action>, TomatuiError> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| TomatuiError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| TomatuiError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    // Handle Ctrl+C in any mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    match app.input_mode {
        InputMode::Editing => handle_editing(app, key.code),
        InputMode::Normal => return handle_normal(app, key.code),
    }

    Ok(None)
}

/// Keys while typing a new task.
fn handle_editing<C: Clock, N: Notifier>(app: &mut App<C, N>, code: KeyCode) {
    match code {
        KeyCode::Enter => app.commit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

/// Keys in normal mode.
fn handle_normal<C: Clock, N: Notifier>(
    app: &mut App<C, N>,
    code: KeyCode,
) -> Result<Option<Action>, TomatuiError> {
    match code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        // Timer controls
        KeyCode::Char('s') => {
            app.controller.start();
            app.status = None;
        }
        KeyCode::Char('p') => app.controller.pause(),
        KeyCode::Char('r') => app.controller.reset(),

        // Duration configuration (idle active mode updates immediately)
        KeyCode::Char('[') => {
            let minutes = app.controller.timer().work_minutes();
            app.controller.set_work_minutes(minutes.saturating_sub(1));
        }
        KeyCode::Char(']') => {
            let minutes = app.controller.timer().work_minutes();
            app.controller.set_work_minutes(minutes + 1);
        }
        KeyCode::Char('{') => {
            let minutes = app.controller.timer().break_minutes();
            app.controller.set_break_minutes(minutes.saturating_sub(1));
        }
        KeyCode::Char('}') => {
            let minutes = app.controller.timer().break_minutes();
            app.controller.set_break_minutes(minutes + 1);
        }

        // Task list
        KeyCode::Char('a') | KeyCode::Char('i') => app.begin_input(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('c') => app.clear_completed(),
        KeyCode::Char('f') => app.cycle_filter(),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "s:start p:pause r:reset [/]:work {/}:break a:add Space:toggle d:delete c:clear f:filter q:quit"
                    .to_string(),
            );
        }

        _ => {}
    }

    Ok(None)
}
