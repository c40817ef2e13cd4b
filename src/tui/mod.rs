//! Terminal lifecycle and run loop for the demo host

pub mod input;
pub mod render;

use anyhow::{Context, Result, anyhow};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::{debug, warn};

use crate::app::{App, Event, Handler};

/// Run the TUI application until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let result = run_loop(&mut terminal, &mut app, &event_handler);

    let teardown_errors = restore_terminal(&mut terminal);
    finish(result, &teardown_errors)
}

/// Undo terminal setup, running every step even when an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Vec<anyhow::Error> {
    let steps = [
        disable_raw_mode().context("Failed to disable raw mode"),
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen"),
        terminal.show_cursor().context("Failed to show cursor"),
    ];
    steps.into_iter().filter_map(Result::err).collect()
}

/// Combine the run loop result with teardown failures.
///
/// A run loop error wins; teardown failures are attached to it as context.
fn finish(result: Result<()>, teardown_errors: &[anyhow::Error]) -> Result<()> {
    if teardown_errors.is_empty() {
        return result;
    }
    for error in teardown_errors {
        warn!("Terminal teardown step failed: {error:#}");
    }
    let summary = teardown_errors
        .iter()
        .map(|error| format!("{error:#}"))
        .collect::<Vec<_>>()
        .join("; ");
    match result {
        Ok(()) => Err(anyhow!("Failed to restore terminal: {summary}")),
        Err(error) => Err(error.context(format!("Failed to restore terminal: {summary}"))),
    }
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        let frame_area = terminal.draw(|frame| render::render(frame, app))?.area;

        match event_handler.next()? {
            Event::Key(key) => input::handle_key_event(app, key),
            Event::Mouse(mouse) => input::handle_mouse_event(app, mouse, frame_area),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_without_teardown_errors_keeps_result() {
        assert!(finish(Ok(()), &[]).is_ok());
        assert!(finish(Err(anyhow!("draw failed")), &[]).is_err());
    }

    #[test]
    fn test_finish_reports_every_teardown_error() -> Result<(), Box<dyn std::error::Error>> {
        let errors = [
            anyhow!("raw mode stuck").context("Failed to disable raw mode"),
            anyhow!("broken pipe").context("Failed to show cursor"),
        ];

        let error = finish(Ok(()), &errors).err().ok_or("teardown errors were dropped")?;
        let message = format!("{error:#}");

        assert!(message.contains("raw mode stuck"));
        assert!(message.contains("broken pipe"));
        Ok(())
    }

    #[test]
    fn test_finish_keeps_run_error_as_root_cause() -> Result<(), Box<dyn std::error::Error>> {
        let errors = [anyhow!("broken pipe").context("Failed to leave alternate screen")];

        let error = finish(Err(anyhow!("draw failed")), &errors)
            .err()
            .ok_or("run error was dropped")?;

        assert_eq!(error.root_cause().to_string(), "draw failed");
        assert!(format!("{error:#}").contains("Failed to leave alternate screen"));
        Ok(())
    }
}
