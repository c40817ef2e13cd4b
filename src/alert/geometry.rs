//! Terminal cell layout of the alert card
//!
//! Rendering and mouse hit-testing both go through [`AlertGeometry::compute`],
//! so input handlers can find buttons without storing layout state.

use ratatui::layout::{Constraint, Flex, Layout, Margin, Position, Rect};

use super::content::AlertButton;
use super::view::{ActionArea, AlertView, CONTENT_PADDING};
use crate::config::CellScale;

/// Cell rectangles for one frame of the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertGeometry {
    /// Whole area covered by the backdrop.
    pub backdrop: Rect,
    /// Card including its rounded border.
    pub card: Rect,
    /// Title row, when the title is shown.
    pub title: Option<Rect>,
    /// Message block after horizontal padding.
    pub message: Rect,
    /// Divider row spanning the full card width.
    pub divider: Rect,
    /// Area below the divider holding the buttons.
    pub actions: Rect,
    /// Left button hit area, when rendered.
    pub left_button: Option<Rect>,
    /// Right button hit area.
    pub right_button: Rect,
    /// Rule between the buttons: a column for horizontal actions, a row
    /// for vertical ones.
    pub button_rule: Option<Rect>,
}

impl AlertGeometry {
    /// Lay out `view` centered in `area`.
    #[must_use]
    pub fn compute(view: &AlertView<'_>, scale: CellScale, area: Rect) -> Self {
        let card = centered_rect(scale.columns(view.width), scale.rows(view.height), area);
        let inner = card.inner(Margin::new(1, 1));

        let title_rows = if view.title.is_some() { 2 } else { 0 };
        let [title_area, message_area, divider_row, actions] = Layout::vertical([
            Constraint::Length(title_rows),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(scale.rows(view.actions.height())),
        ])
        .areas(inner);

        let padding = Margin::new(scale.columns(CONTENT_PADDING), 0);
        let title = view.title.map(|_| {
            Rect {
                height: title_area.height.min(1),
                ..title_area
            }
            .inner(padding)
        });

        let divider = Rect {
            x: card.x,
            y: divider_row.y,
            width: card.width,
            height: divider_row.height,
        };

        let (left_button, button_rule, right_button) = match view.actions {
            ActionArea::Horizontal { left: Some(_), .. } => {
                let [left, rule, right] =
                    Layout::horizontal([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
                        .areas(actions);
                (Some(left), Some(rule), right)
            }
            ActionArea::Horizontal { left: None, .. } => (None, None, actions),
            ActionArea::Vertical { .. } => {
                let [_, left, _, rule, _, right, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(actions);
                (Some(left), Some(rule), right)
            }
        };

        Self {
            backdrop: area,
            card,
            title,
            message: message_area.inner(padding),
            divider,
            actions,
            left_button,
            right_button,
            button_rule,
        }
    }

    /// The button whose hit area contains the cell at (`x`, `y`).
    #[must_use]
    pub fn button_at(&self, x: u16, y: u16) -> Option<AlertButton> {
        let position = Position::new(x, y);
        if self.left_button.is_some_and(|r| r.contains(position)) {
            Some(AlertButton::Left)
        } else if self.right_button.contains(position) {
            Some(AlertButton::Right)
        } else {
            None
        }
    }

    /// Hit area of `button`, if it is rendered.
    #[must_use]
    pub const fn button_rect(&self, button: AlertButton) -> Option<Rect> {
        match button {
            AlertButton::Left => self.left_button,
            AlertButton::Right => Some(self.right_button),
        }
    }
}

/// Center a fixed-size rect in `area`, shrinking it to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
