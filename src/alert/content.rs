//! Alert copy and sizing policy

use serde::{Deserialize, Serialize};

/// Message shown by [`AlertContent::Success`].
pub const SUCCESS_MESSAGE: &str = "Please confirm that you're still open to session requests";

/// Card height in points when the buttons sit side by side.
pub const HORIZONTAL_HEIGHT: u16 = 150;

/// Card height in points when the buttons are stacked.
pub const VERTICAL_HEIGHT: u16 = 220;

/// What the alert says.
///
/// Every derived field is a pure function of the variant and its payload.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AlertContent {
    /// Fixed "Success" copy.
    #[default]
    Success,
    /// Caller-supplied title and message.
    Error {
        /// Title row text; an empty title drops the row.
        title: String,
        /// Body text.
        #[serde(default)]
        message: String,
    },
}

impl AlertContent {
    /// Error alert with an empty message.
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self::error_with_message(title, String::new())
    }

    /// Error alert with both fields supplied.
    #[must_use]
    pub fn error_with_message(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Title text
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Success => "Success",
            Self::Error { title, .. } => title,
        }
    }

    /// Body text
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Error { message, .. } => message,
        }
    }

    /// Label of the left (secondary) button.
    #[must_use]
    pub const fn left_action_text(&self) -> &'static str {
        match self {
            Self::Success | Self::Error { .. } => "Go",
        }
    }

    /// Label of the right (primary) button.
    #[must_use]
    pub const fn right_action_text(&self) -> &'static str {
        match self {
            Self::Success | Self::Error { .. } => "Cancel",
        }
    }

    /// Card height in points for the given button arrangement.
    #[must_use]
    pub const fn height(&self, layout: ButtonLayout) -> u16 {
        match (self, layout) {
            (Self::Success | Self::Error { .. }, ButtonLayout::Horizontal) => HORIZONTAL_HEIGHT,
            (Self::Success | Self::Error { .. }, ButtonLayout::Vertical) => VERTICAL_HEIGHT,
        }
    }

    /// Whether the title row is rendered at all.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title().is_empty()
    }
}

/// How the two action buttons are arranged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLayout {
    /// One row, left and right button separated by a rule.
    #[default]
    Horizontal,
    /// One column, left button above the right one.
    Vertical,
}

impl ButtonLayout {
    /// Map the `vertical` flag used by hosts onto a layout.
    #[must_use]
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Inverse of [`ButtonLayout::from_vertical`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

impl From<bool> for ButtonLayout {
    fn from(vertical: bool) -> Self {
        Self::from_vertical(vertical)
    }
}

/// One of the two action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertButton {
    /// Secondary action, default text color.
    Left,
    /// Primary action, accent color.
    Right,
}

impl AlertButton {
    /// Both buttons, left first.
    pub const ALL: &'static [Self] = &[Self::Left, Self::Right];

    /// Label for this button under `content`.
    #[must_use]
    pub const fn label(self, content: &AlertContent) -> &'static str {
        match self {
            Self::Left => content.left_action_text(),
            Self::Right => content.right_action_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn error_sample() -> AlertContent {
        AlertContent::error_with_message("Error", "Something went wrong")
    }

    #[test]
    fn test_success_copy() {
        let content = AlertContent::Success;
        assert_eq!(content.title(), "Success");
        assert_eq!(content.message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn test_error_message_defaults_to_empty() {
        let content = AlertContent::error("Error");
        assert_eq!(content.title(), "Error");
        assert_eq!(content.message(), "");
    }

    #[rstest]
    #[case::success_horizontal(AlertContent::Success, ButtonLayout::Horizontal, 150)]
    #[case::success_vertical(AlertContent::Success, ButtonLayout::Vertical, 220)]
    #[case::error_horizontal(error_sample(), ButtonLayout::Horizontal, 150)]
    #[case::error_vertical(error_sample(), ButtonLayout::Vertical, 220)]
    fn test_height_grid(
        #[case] content: AlertContent,
        #[case] layout: ButtonLayout,
        #[case] expected: u16,
    ) {
        assert_eq!(content.height(layout), expected);
    }

    #[rstest]
    #[case::success(AlertContent::Success)]
    #[case::error(error_sample())]
    #[case::error_empty(AlertContent::error(""))]
    fn test_action_labels_are_constant(#[case] content: AlertContent) {
        assert_eq!(content.left_action_text(), "Go");
        assert_eq!(content.right_action_text(), "Cancel");
        assert_eq!(AlertButton::Left.label(&content), "Go");
        assert_eq!(AlertButton::Right.label(&content), "Cancel");
    }

    #[test]
    fn test_empty_title_has_no_title_row() {
        assert!(!AlertContent::error_with_message("", "x").has_title());
        assert!(AlertContent::Success.has_title());
    }

    #[test]
    fn test_button_layout_from_flag() {
        assert_eq!(ButtonLayout::from(true), ButtonLayout::Vertical);
        assert_eq!(ButtonLayout::from(false), ButtonLayout::Horizontal);
        assert_eq!(ButtonLayout::default(), ButtonLayout::Horizontal);
        assert!(ButtonLayout::Vertical.is_vertical());
        assert!(!ButtonLayout::Horizontal.is_vertical());
    }

    #[test]
    fn test_content_serde() -> Result<(), Box<dyn std::error::Error>> {
        let content: AlertContent = serde_json::from_str(r#"{"kind":"error","title":"Oops"}"#)?;
        assert_eq!(content, AlertContent::error("Oops"));

        let json = serde_json::to_string(&AlertContent::Success)?;
        assert_eq!(json, r#"{"kind":"success"}"#);
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_error_payload_is_returned_verbatim(title in ".*", message in ".*") {
            let content = AlertContent::error_with_message(title.clone(), message.clone());
            prop_assert_eq!(content.title(), title.as_str());
            prop_assert_eq!(content.message(), message.as_str());
        }
    }
}
