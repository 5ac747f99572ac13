//! Terminal User Interface (TUI) for tomatui.
//!
//! The interactive timer and task list. Built with ratatui and crossterm.
//! The event loop polls input with a short timeout and pumps the
//! controller's clock on every pass, which is what drives the countdown.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::core::clock::IntervalClock;
use crate::core::notify::DesktopNotifier;
use crate::core::SessionController;
use crate::error::TomatuiError;
use crate::storage::TaskStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), TomatuiError> {
    let store = TaskStore::open()?;
    let controller =
        SessionController::new(config, store, IntervalClock::new(), DesktopNotifier::new());

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TomatuiError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomatuiError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomatuiError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(controller);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<IntervalClock, DesktopNotifier>,
) -> Result<(), TomatuiError> {
    loop {
        // Apply any countdown ticks that came due since the last pass.
        app.pump();

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomatuiError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
            }
        }
    }

    Ok(())
}
