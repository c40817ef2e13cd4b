use super::*;
use crate::alert::{AlertContent, ButtonLayout};
use crate::config::Config;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Modifier;

const LONG_MESSAGE: &str = "Please confirm that you're still open to session requests then you will find the call from new user.";

fn create_test_app(content: AlertContent, layout: ButtonLayout) -> App {
    App::new(Config::default(), content, layout)
}

fn draw(app: &App, width: u16, height: u16) -> Result<Buffer, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(terminal.backend().buffer().clone())
}

fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            result.push_str(buf[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// Cell position of the first occurrence of `text`, matched cell by cell.
fn find_text(buf: &Buffer, text: &str) -> Option<Position> {
    let wanted: Vec<String> = text.chars().map(String::from).collect();
    let width = usize::from(buf.area.width);
    for y in 0..buf.area.height {
        let row: Vec<&str> = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
        for start in 0..width.saturating_sub(wanted.len() - 1) {
            if wanted
                .iter()
                .zip(&row[start..])
                .all(|(w, cell)| w.as_str() == *cell)
            {
                let x = u16::try_from(start).ok()?;
                return Some(Position::new(x, y));
            }
        }
    }
    None
}

#[test]
fn test_render_host_without_alert() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AlertContent::Success, ButtonLayout::Horizontal);
    let buf = draw(&app, 80, 24)?;
    let content = buffer_to_string(&buf);

    assert!(content.contains(SHOW_ALERT_LABEL));
    assert!(content.contains("[Space]show alert"));
    assert!(!content.contains("Cancel"));
    assert!(!buf[(0, 0)].modifier.contains(Modifier::DIM));
    Ok(())
}

#[test]
fn test_render_presented_error_alert() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(
        AlertContent::error_with_message("Error", LONG_MESSAGE),
        ButtonLayout::Horizontal,
    );
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;
    let content = buffer_to_string(&buf);

    assert!(content.contains("Error"));
    assert!(content.contains("Please confirm"));
    assert!(content.contains("new user."));
    assert!(content.contains("Go"));
    assert!(content.contains("Cancel"));
    assert!(content.contains('╭'));
    assert!(content.contains('┬'));
    assert!(content.contains('┴'));
    Ok(())
}

#[test]
fn test_render_backdrop_dims_host() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AlertContent::Success, ButtonLayout::Horizontal);
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;

    let corner = &buf[(0, 0)];
    assert!(corner.modifier.contains(Modifier::DIM));
    // Host chrome is still drawn underneath
    assert_eq!(corner.symbol(), "┌");
    Ok(())
}

#[test]
fn test_render_button_colors() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AlertContent::Success, ButtonLayout::Horizontal);
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;

    let cancel = find_text(&buf, "Cancel").ok_or("Cancel not drawn")?;
    let go = find_text(&buf, "Go").ok_or("Go not drawn")?;

    assert_eq!(buf[(cancel.x, cancel.y)].fg, colors::ACCENT);
    assert_eq!(buf[(go.x, go.y)].fg, colors::CARD_TEXT);
    assert_eq!(buf[(go.x, go.y)].bg, colors::CARD_BG);
    assert!(buf[(go.x, go.y)].modifier.contains(Modifier::BOLD));
    assert_eq!(go.y, cancel.y);
    assert!(go.x < cancel.x);
    Ok(())
}

#[test]
fn test_render_empty_title_keeps_message_and_buttons() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(
        AlertContent::error_with_message("", "x"),
        ButtonLayout::Horizontal,
    );
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;
    let geometry = app.overlay().geometry(buf.area).ok_or("alert hidden")?;

    assert!(geometry.title.is_none());
    assert!(find_text(&buf, "x").is_some());
    assert!(find_text(&buf, "Go").is_some());
    assert!(find_text(&buf, "Cancel").is_some());

    // The first row inside the card holds no title text
    let first_row: String = (geometry.message.left()..geometry.message.right())
        .map(|x| buf[(x, geometry.card.y + 1)].symbol().to_string())
        .collect();
    assert!(!first_row.contains("Error"));
    Ok(())
}

#[test]
fn test_render_vertical_buttons_are_stacked() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AlertContent::Success, ButtonLayout::Vertical);
    app.toggle_alert();
    let buf = draw(&app, 80, 30)?;

    let cancel = find_text(&buf, "Cancel").ok_or("Cancel not drawn")?;
    let go = find_text(&buf, "Go").ok_or("Go not drawn")?;

    assert!(go.y < cancel.y);
    assert_eq!(buf[(cancel.x, cancel.y)].fg, colors::ACCENT);
    Ok(())
}

#[test]
fn test_render_status_bar_shows_alert_keys() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(AlertContent::Success, ButtonLayout::Horizontal);
    app.record_action(crate::alert::AlertButton::Left);
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;
    let content = buffer_to_string(&buf);

    assert!(content.contains("[g/Enter]Go"));
    assert!(content.contains("[c/Esc]Cancel"));
    assert!(content.contains("last: Go"));
    Ok(())
}

#[test]
fn test_render_truncates_overflowing_message() -> Result<(), Box<dyn std::error::Error>> {
    let long = "word ".repeat(200);
    let app = create_test_app(
        AlertContent::error_with_message("Error", long),
        ButtonLayout::Horizontal,
    );
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;

    assert!(buffer_to_string(&buf).contains('…'));
    Ok(())
}

#[test]
fn test_render_various_terminal_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let sizes = [(20, 6), (40, 12), (80, 24), (200, 50)];

    for layout in [ButtonLayout::Horizontal, ButtonLayout::Vertical] {
        for (width, height) in sizes {
            let app = create_test_app(AlertContent::Success, layout);
            app.toggle_alert();
            let buf = draw(&app, width, height)?;
            assert!(
                !buf.content.is_empty(),
                "Failed at size {width}x{height} ({layout:?})"
            );
        }
    }
    Ok(())
}

#[test]
fn test_show_button_rect_is_inside_main_area() {
    let frame = Rect::new(0, 0, 80, 24);
    let [main, status] = main_areas(frame);
    let button = show_button_rect(frame);

    assert_eq!(status.height, 1);
    assert!(main.contains(Position::new(button.x, button.y)));
    assert_eq!(button.height, 3);
}

#[test]
fn test_render_wide_message_wraps_by_columns() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(
        AlertContent::error_with_message("Error", "日本語のメッセージ ".repeat(12)),
        ButtonLayout::Horizontal,
    );
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;
    let geometry = app.overlay().geometry(buf.area).ok_or("alert hidden")?;

    // Four message rows of two whole phrases each, the last one cut
    let phrase_starts = buf.content.iter().filter(|cell| cell.symbol() == "日").count();
    assert_eq!(phrase_starts, 8);
    assert!(buffer_to_string(&buf).contains('…'));

    // Nothing is drawn past the padded message area
    for y in geometry.message.top()..geometry.message.bottom() {
        for x in geometry.message.right()..geometry.card.right() - 1 {
            assert_eq!(buf[(x, y)].symbol(), " ", "stray glyph at ({x}, {y})");
        }
    }
    Ok(())
}

#[test]
fn test_render_keeps_blank_line_between_paragraphs() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(
        AlertContent::error_with_message("Error", "first\n\nsecond"),
        ButtonLayout::Horizontal,
    );
    app.toggle_alert();
    let buf = draw(&app, 80, 24)?;

    let first = find_text(&buf, "first").ok_or("first paragraph missing")?;
    let second = find_text(&buf, "second").ok_or("second paragraph missing")?;
    assert_eq!(second.y, first.y + 2);
    Ok(())
}
