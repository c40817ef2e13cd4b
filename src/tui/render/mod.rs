//! TUI rendering
//!
//! The host screen is a single "Show Custom Alert" button with a status bar.
//! The alert overlay, when presented, is drawn last over the whole frame.

pub(crate) mod colors;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::alert::{AlertButton, centered_rect};
use crate::app::App;

/// Label of the host button that presents the alert
pub const SHOW_ALERT_LABEL: &str = "Show Custom Alert";

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let [main, status] = main_areas(frame.area());

    render_host(frame, main);
    render_status_bar(frame, app, status);

    app.overlay().draw(frame);
}

/// Main pane and one-row status bar
#[must_use]
pub fn main_areas(frame_area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame_area)
}

/// Where the "Show Custom Alert" button sits in a frame of `frame_area`
///
/// Shared with mouse handling so clicks hit what was drawn.
#[must_use]
pub fn show_button_rect(frame_area: Rect) -> Rect {
    let [main, _] = main_areas(frame_area);
    let width = u16::try_from(SHOW_ALERT_LABEL.len() + 4).unwrap_or(u16::MAX);
    centered_rect(width, 3, main)
}

fn render_host(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" custom-alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    frame.render_widget(block, area);

    let button = Paragraph::new(Line::from(Span::styled(
        SHOW_ALERT_LABEL,
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::SELECTED)),
    );
    frame.render_widget(button, show_button_rect(frame.area()));
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let keys = &app.config.keys;
    let hints = if app.is_alert_presented() {
        format!(
            "[{}]{}  [{}]{}",
            keys.format_keys(AlertButton::Left),
            AlertButton::Left.label(&app.content),
            keys.format_keys(AlertButton::Right),
            AlertButton::Right.label(&app.content),
        )
    } else {
        "[Space]show alert  [v]toggle layout  [q]quit".to_string()
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(colors::TEXT_DIM))];
    if let Some(button) = app.last_action {
        spans.push(Span::styled(
            format!("  last: {}", button.label(&app.content)),
            Style::default().fg(colors::TEXT_MUTED),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests;
