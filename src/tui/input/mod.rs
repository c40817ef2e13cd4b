//! Input handling for the demo host
//!
//! While the alert is presented it captures every key and click; the host
//! screen only sees input when the alert is hidden.

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
};

use crate::app::App;
use crate::tui::render::show_button_rect;

/// Handle a key press
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.is_alert_presented() {
        let activated = app.overlay().handle_key(key);
        if let Some(button) = activated {
            app.record_action(button);
        }
        return;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_alert(),
        KeyCode::Char('v') => app.toggle_layout(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Handle a mouse event inside a frame of `frame_area`
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if app.is_alert_presented() {
        let activated = app.overlay().handle_mouse(mouse, frame_area);
        if let Some(button) = activated {
            app.record_action(button);
        }
        return;
    }

    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
        && show_button_rect(frame_area).contains(Position::new(mouse.column, mouse.row))
    {
        app.toggle_alert();
    }
}
