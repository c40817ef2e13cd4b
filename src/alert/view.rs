//! Render-independent description of the alert card
//!
//! All sizes are in points. [`super::geometry`] projects them onto terminal
//! cells; tests inspect this tree to check structure without a backend.

use super::content::{AlertButton, AlertContent, ButtonLayout};

/// Backdrop opacity over the host screen.
pub const BACKDROP_OPACITY: f32 = 0.75;
/// Card width in points.
pub const CARD_WIDTH: u16 = 270;
/// Card corner radius in points.
pub const CORNER_RADIUS: u16 = 4;
/// Horizontal inset of title and message, in points.
pub const CONTENT_PADDING: u16 = 16;
/// Divider and rule thickness in points.
pub const DIVIDER_THICKNESS: f32 = 0.5;
/// Action row height for [`ButtonLayout::Horizontal`].
pub const HORIZONTAL_ACTIONS_HEIGHT: u16 = 55;
/// Action column height for [`ButtonLayout::Vertical`].
pub const VERTICAL_ACTIONS_HEIGHT: u16 = 80;
/// Smallest scale the message may shrink to before it is cut.
pub const MESSAGE_MIN_SCALE: f32 = 0.5;

const TITLE_FONT: Font = Font {
    size: 16,
    bold: true,
};
const MESSAGE_FONT: Font = Font {
    size: 14,
    bold: false,
};
const BUTTON_FONT: Font = Font {
    size: 16,
    bold: true,
};

/// Font request for a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Point size.
    pub size: u16,
    /// Bold weight.
    pub bold: bool,
}

/// Centered text inside the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextElement<'a> {
    /// Text to show.
    pub text: &'a str,
    /// Requested font.
    pub font: Font,
    /// Smallest scale the text may shrink to; `1.0` means fixed size.
    pub min_scale: f32,
}

/// Text color of a button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTint {
    /// Regular card text color.
    Default,
    /// Accent color marking the primary action.
    Accent,
}

/// A tappable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonElement<'a> {
    /// Which callback the button triggers.
    pub button: AlertButton,
    /// Label text.
    pub label: &'a str,
    /// Label font.
    pub font: Font,
    /// Label color.
    pub tint: ButtonTint,
}

/// The bottom action area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArea<'a> {
    /// One row: `[left?] | [right]`.
    Horizontal {
        /// Row height in points.
        height: u16,
        /// Omitted when its label is empty.
        left: Option<ButtonElement<'a>>,
        /// Always present.
        right: ButtonElement<'a>,
    },
    /// `[spacer, left, spacer, divider, spacer, right, spacer]`.
    Vertical {
        /// Column height in points.
        height: u16,
        /// Upper button.
        left: ButtonElement<'a>,
        /// Lower button.
        right: ButtonElement<'a>,
    },
}

impl<'a> ActionArea<'a> {
    /// Height of the area in points.
    #[must_use]
    pub const fn height(&self) -> u16 {
        match self {
            Self::Horizontal { height, .. } | Self::Vertical { height, .. } => *height,
        }
    }

    /// Buttons in visual order.
    #[must_use]
    pub fn buttons(&self) -> Vec<ButtonElement<'a>> {
        match *self {
            Self::Horizontal { left, right, .. } => left.into_iter().chain([right]).collect(),
            Self::Vertical { left, right, .. } => vec![left, right],
        }
    }

    /// The element for `button`, if rendered.
    #[must_use]
    pub fn button(&self, button: AlertButton) -> Option<ButtonElement<'a>> {
        self.buttons().into_iter().find(|b| b.button == button)
    }
}

/// The full card, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertView<'a> {
    /// Backdrop opacity.
    pub backdrop_opacity: f32,
    /// Card width in points.
    pub width: u16,
    /// Card height in points.
    pub height: u16,
    /// Corner radius in points.
    pub corner_radius: u16,
    /// Title row; `None` when the title is empty.
    pub title: Option<TextElement<'a>>,
    /// Message block.
    pub message: TextElement<'a>,
    /// Thickness of the divider above the actions.
    pub divider_thickness: f32,
    /// Buttons.
    pub actions: ActionArea<'a>,
}

impl<'a> AlertView<'a> {
    /// Describe the card for `content` with buttons arranged by `layout`.
    #[must_use]
    pub fn build(content: &'a AlertContent, layout: ButtonLayout) -> Self {
        let title = content.has_title().then(|| TextElement {
            text: content.title(),
            font: TITLE_FONT,
            min_scale: 1.0,
        });

        let right = ButtonElement {
            button: AlertButton::Right,
            label: content.right_action_text(),
            font: BUTTON_FONT,
            tint: ButtonTint::Accent,
        };
        let left = ButtonElement {
            button: AlertButton::Left,
            label: content.left_action_text(),
            font: BUTTON_FONT,
            tint: ButtonTint::Default,
        };

        let actions = match layout {
            ButtonLayout::Horizontal => ActionArea::Horizontal {
                height: HORIZONTAL_ACTIONS_HEIGHT,
                left: (!left.label.is_empty()).then_some(left),
                right,
            },
            ButtonLayout::Vertical => ActionArea::Vertical {
                height: VERTICAL_ACTIONS_HEIGHT,
                left,
                right,
            },
        };

        Self {
            backdrop_opacity: BACKDROP_OPACITY,
            width: CARD_WIDTH,
            height: content.height(layout),
            corner_radius: CORNER_RADIUS,
            title,
            message: TextElement {
                text: content.message(),
                font: MESSAGE_FONT,
                min_scale: MESSAGE_MIN_SCALE,
            },
            divider_thickness: DIVIDER_THICKNESS,
            actions,
        }
    }

    /// The layout the action area was built with.
    #[must_use]
    pub const fn layout(&self) -> ButtonLayout {
        match self.actions {
            ActionArea::Horizontal { .. } => ButtonLayout::Horizontal,
            ActionArea::Vertical { .. } => ButtonLayout::Vertical,
        }
    }
}
