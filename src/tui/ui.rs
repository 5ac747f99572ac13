//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::clock::Clock;
use crate::core::notify::Notifier;
use crate::core::timer::Mode;
use crate::tui::app::{App, InputMode};

/// Render the application UI.
pub fn render<C: Clock, N: Notifier>(frame: &mut Frame<'_>, app: &App<C, N>) {
    // Create layout: timer, task list, input, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Timer
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_timer(frame, app, chunks[0]);
    render_tasks(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the countdown, mode, and session counter.
fn render_timer<C: Clock, N: Notifier>(frame: &mut Frame<'_>, app: &App<C, N>, area: Rect) {
    let timer = app.controller.timer();

    let mode_color = match timer.mode() {
        Mode::Work => Color::Red,
        Mode::Break => Color::Green,
    };
    let state = if timer.is_running() { "running" } else { "paused" };

    let title = format!(" {} ({state}) ", timer.mode());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(mode_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Countdown line
            Constraint::Length(1), // Session / duration line
            Constraint::Length(1), // Progress gauge
        ])
        .split(inner);

    let countdown = Paragraph::new(timer.display()).style(
        Style::default()
            .fg(mode_color)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(countdown, rows[0]);

    let info = Paragraph::new(format!(
        "Sessions: {}   Work: {}m   Break: {}m",
        timer.completed_sessions(),
        timer.work_minutes(),
        timer.break_minutes()
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(info, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(mode_color))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, rows[2]);
}

/// Render the task list.
fn render_tasks<C: Clock, N: Notifier>(frame: &mut Frame<'_>, app: &App<C, N>, area: Rect) {
    let tasks = app.controller.tasks();
    let visible = tasks.filtered();

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let status_icon = if task.completed { "[x]" } else { "[ ]" };
            let icon_color = if task.completed {
                Color::Green
            } else {
                Color::White
            };

            let mut text_style = Style::default().add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });
            if task.completed {
                text_style = text_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }

            let spans = vec![
                Span::styled(format!("{status_icon} "), Style::default().fg(icon_color)),
                Span::styled(&task.text, text_style),
            ];

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let mut title = format!(" Tasks - {} ({}) ", tasks.filter(), tasks.stats_line());
    if tasks.has_completed() {
        title.push_str("- c: clear completed ");
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the new-task input field.
fn render_input<C: Clock, N: Notifier>(frame: &mut Frame<'_>, app: &App<C, N>, area: Rect) {
    let (text, style, title) = match app.input_mode {
        InputMode::Editing => (
            app.input.as_str(),
            Style::default().fg(Color::Yellow),
            " New task (Enter: add, Esc: cancel) ",
        ),
        InputMode::Normal => (
            "Press 'a' to add a task",
            Style::default().fg(Color::DarkGray),
            " New task ",
        ),
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Editing {
        #[allow(clippy::cast_possible_truncation)]
        frame.set_cursor_position((area.x + app.input.len() as u16 + 1, area.y + 1));
    }
}

/// Render the status bar.
fn render_status_bar<C: Clock, N: Notifier>(frame: &mut Frame<'_>, app: &App<C, N>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("s:start | p:pause | r:reset | a:add | Space:toggle | f:filter | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
