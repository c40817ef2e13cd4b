//! The alert overlay widget
//!
//! [`AlertOverlay`] is a controlled component. The host owns the visibility
//! flag and passes it in on every frame. The overlay never changes it; button
//! activations call back into the host, which decides whether to dismiss.

use std::fmt;

use ratatui::{
    Frame,
    buffer::Buffer,
    crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::backdrop;
use super::content::{AlertButton, AlertContent, ButtonLayout};
use super::geometry::AlertGeometry;
use super::view::{ActionArea, AlertView, ButtonElement, ButtonTint, Font, TextElement};
use crate::config::{CellScale, KeyBindings};
use crate::tui::render::colors;

type Action<'a> = Box<dyn FnMut() + 'a>;

/// Modal alert drawn over the whole frame.
///
/// Build one per frame (or per event) from host state:
///
/// ```
/// use std::cell::Cell;
/// use custom_alert::alert::{AlertContent, AlertOverlay, AlertButton};
///
/// let present_alert = Cell::new(true);
/// let content = AlertContent::error_with_message("Error", "Try again later.");
///
/// let mut overlay = AlertOverlay::new(present_alert.get(), &content)
///     .vertical(true)
///     .on_right_action(|| present_alert.set(false));
///
/// assert_eq!(overlay.activate(AlertButton::Right), Some(AlertButton::Right));
/// assert!(!present_alert.get());
/// ```
pub struct AlertOverlay<'a> {
    visible: bool,
    content: &'a AlertContent,
    layout: ButtonLayout,
    scale: CellScale,
    keys: Option<&'a KeyBindings>,
    on_left_action: Option<Action<'a>>,
    on_right_action: Option<Action<'a>>,
}

impl<'a> AlertOverlay<'a> {
    /// Overlay for `content`, shown only while `visible` is true.
    #[must_use]
    pub fn new(visible: bool, content: &'a AlertContent) -> Self {
        Self {
            visible,
            content,
            layout: ButtonLayout::default(),
            scale: CellScale::default(),
            keys: None,
            on_left_action: None,
            on_right_action: None,
        }
    }

    /// Arrange the buttons with `layout`.
    #[must_use]
    pub const fn layout(mut self, layout: ButtonLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Stack the buttons when `vertical` is true.
    #[must_use]
    pub const fn vertical(self, vertical: bool) -> Self {
        self.layout(ButtonLayout::from_vertical(vertical))
    }

    /// Project points onto cells with `scale`.
    #[must_use]
    pub const fn scale(mut self, scale: CellScale) -> Self {
        self.scale = scale;
        self
    }

    /// Activate buttons with `keys` instead of the defaults.
    #[must_use]
    pub const fn keys(mut self, keys: &'a KeyBindings) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Called when the left button is activated.
    #[must_use]
    pub fn on_left_action(mut self, action: impl FnMut() + 'a) -> Self {
        self.on_left_action = Some(Box::new(action));
        self
    }

    /// Called when the right button is activated.
    #[must_use]
    pub fn on_right_action(mut self, action: impl FnMut() + 'a) -> Self {
        self.on_right_action = Some(Box::new(action));
        self
    }

    /// Whether the host asked for the overlay to be shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The content being presented.
    #[must_use]
    pub const fn content(&self) -> &'a AlertContent {
        self.content
    }

    /// Current button arrangement.
    #[must_use]
    pub const fn button_layout(&self) -> ButtonLayout {
        self.layout
    }

    /// Description of what would be drawn; `None` while hidden.
    #[must_use]
    pub fn view(&self) -> Option<AlertView<'a>> {
        self.visible
            .then(|| AlertView::build(self.content, self.layout))
    }

    /// Cell layout inside `area`; `None` while hidden.
    #[must_use]
    pub fn geometry(&self, area: Rect) -> Option<AlertGeometry> {
        self.view()
            .map(|view| AlertGeometry::compute(&view, self.scale, area))
    }

    /// Run the callback for `button`.
    ///
    /// Returns the activated button, or `None` when the overlay is hidden or
    /// the button is not rendered. A rendered button without a callback is
    /// still activated.
    pub fn activate(&mut self, button: AlertButton) -> Option<AlertButton> {
        self.view()?.actions.button(button)?;

        debug!(?button, label = button.label(self.content), "Alert button activated");
        let action = match button {
            AlertButton::Left => self.on_left_action.as_mut(),
            AlertButton::Right => self.on_right_action.as_mut(),
        };
        if let Some(action) = action {
            action();
        }
        Some(button)
    }

    /// Activate the button bound to `key`, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AlertButton> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let button = match self.keys {
            Some(keys) => keys.button_for(key.code, key.modifiers),
            None => KeyBindings::default().button_for(key.code, key.modifiers),
        }?;
        self.activate(button)
    }

    /// Activate the button under a left click inside `frame_area`.
    ///
    /// Clicks on the card body or the backdrop are swallowed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, frame_area: Rect) -> Option<AlertButton> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let button = self
            .geometry(frame_area)?
            .button_at(mouse.column, mouse.row)?;
        self.activate(button)
    }

    /// Draw over the whole frame.
    pub fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl fmt::Debug for AlertOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertOverlay")
            .field("visible", &self.visible)
            .field("content", self.content)
            .field("layout", &self.layout)
            .field("scale", &self.scale)
            .field("has_left_action", &self.on_left_action.is_some())
            .field("has_right_action", &self.on_right_action.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for &AlertOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(view) = self.view() else {
            return;
        };
        let geometry = AlertGeometry::compute(&view, self.scale, area);

        backdrop::dim(buf, geometry.backdrop, view.backdrop_opacity);

        Clear.render(geometry.card, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::CARD_SEPARATOR))
            .style(Style::default().bg(colors::CARD_BG))
            .render(geometry.card, buf);

        if let (Some(title), Some(rect)) = (view.title, geometry.title) {
            Paragraph::new(Line::from(title.text))
                .style(text_style(title.font, colors::CARD_TEXT))
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        render_message(&view.message, geometry.message, buf);
        render_divider(geometry.divider, buf);
        render_actions(&view.actions, &geometry, buf);
    }
}

fn text_style(font: Font, color: Color) -> Style {
    let style = Style::default().fg(color).bg(colors::CARD_BG);
    if font.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

const fn tint_color(tint: ButtonTint) -> Color {
    match tint {
        ButtonTint::Default => colors::CARD_TEXT,
        ButtonTint::Accent => colors::ACCENT,
    }
}

/// Word-wrapped, vertically centered; cut with an ellipsis if it still overflows.
fn render_message(message: &TextElement<'_>, area: Rect, buf: &mut Buffer) {
    let lines = fit_lines(
        wrap_words(message.text, usize::from(area.width)),
        usize::from(area.height),
        usize::from(area.width),
    );
    let rows = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let rect = Rect {
        y: area.y + (area.height - rows) / 2,
        height: rows,
        ..area
    };

    Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(text_style(message.font, colors::CARD_TEXT))
        .alignment(Alignment::Center)
        .render(rect, buf);
}

fn render_divider(divider: Rect, buf: &mut Buffer) {
    if divider.is_empty() {
        return;
    }
    let style = Style::default()
        .fg(colors::CARD_SEPARATOR)
        .bg(colors::CARD_BG);
    for x in divider.left()..divider.right() {
        let symbol = if x == divider.left() {
            "├"
        } else if x + 1 == divider.right() {
            "┤"
        } else {
            "─"
        };
        buf.set_string(x, divider.y, symbol, style);
    }
}

fn render_actions(actions: &ActionArea<'_>, geometry: &AlertGeometry, buf: &mut Buffer) {
    let rule_style = Style::default()
        .fg(colors::CARD_SEPARATOR)
        .bg(colors::CARD_BG);

    if let Some(rule) = geometry.button_rule.filter(|r| !r.is_empty()) {
        match actions {
            ActionArea::Horizontal { .. } => {
                for y in rule.top()..rule.bottom() {
                    buf.set_string(rule.x, y, "│", rule_style);
                }
                if geometry.divider.height > 0 {
                    buf.set_string(rule.x, geometry.divider.y, "┬", rule_style);
                }
                if rule.bottom() + 1 == geometry.card.bottom() {
                    buf.set_string(rule.x, rule.bottom(), "┴", rule_style);
                }
            }
            ActionArea::Vertical { .. } => {
                let line = "─".repeat(usize::from(rule.width));
                buf.set_string(rule.x, rule.y, line, rule_style);
            }
        }
    }

    for element in actions.buttons() {
        if let Some(rect) = geometry.button_rect(element.button) {
            render_button(&element, rect, buf);
        }
    }
}

fn render_button(element: &ButtonElement<'_>, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let label_row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    Paragraph::new(Line::from(element.label))
        .style(text_style(element.font, tint_color(element.tint)))
        .alignment(Alignment::Center)
        .render(label_row, buf);
}

/// Greedy word wrap by display width; words wider than `width` are split.
///
/// Blank lines between paragraphs are kept.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let mut rest = word;
            while rest.width() > width {
                if current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let (head, tail) = split_at_width(rest, width);
                lines.push(head.to_string());
                rest = tail;
            }
            let word_width = rest.width();
            if rest.is_empty() {
                continue;
            }

            if current_width == 0 {
                current = rest.to_string();
                current_width = word_width;
            } else if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(rest);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::replace(&mut current, rest.to_string()));
                current_width = word_width;
            }
        }

        if current_width > 0 {
            lines.push(current);
        }
    }

    lines
}

/// Split `text` after the longest prefix that fits in `width` columns.
///
/// At least one character goes to the prefix so wrapping always advances.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0usize;
    for (index, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width && index > 0 {
            return text.split_at(index);
        }
        used += ch_width;
    }
    (text, "")
}

/// Keep at most `max_rows` lines, marking the cut with an ellipsis.
fn fit_lines(mut lines: Vec<String>, max_rows: usize, width: usize) -> Vec<String> {
    if lines.len() <= max_rows {
        return lines;
    }
    lines.truncate(max_rows);
    if let Some(last) = lines.last_mut() {
        let keep = width.saturating_sub(1);
        let mut cut = String::new();
        let mut used = 0usize;
        for ch in last.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > keep {
                break;
            }
            used += ch_width;
            cut.push(ch);
        }
        cut.push('…');
        *last = cut;
    }
    lines
}
