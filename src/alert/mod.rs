//! Modal alert overlay
//!
//! - `content`: what the alert says and how tall it is
//! - `view`: point-based description of the card
//! - `geometry`: the card projected onto terminal cells
//! - `backdrop`: dimming of the host screen
//! - `overlay`: the widget and its button callbacks

mod backdrop;
mod content;
mod geometry;
mod overlay;
mod view;

pub use backdrop::{blend, dim};
pub use content::{
    AlertButton, AlertContent, ButtonLayout, HORIZONTAL_HEIGHT, SUCCESS_MESSAGE, VERTICAL_HEIGHT,
};
pub use geometry::{AlertGeometry, centered_rect};
pub use overlay::AlertOverlay;
pub use view::{
    ActionArea, AlertView, BACKDROP_OPACITY, ButtonElement, ButtonTint, CARD_WIDTH,
    CONTENT_PADDING, CORNER_RADIUS, DIVIDER_THICKNESS, Font, HORIZONTAL_ACTIONS_HEIGHT,
    MESSAGE_MIN_SCALE, TextElement, VERTICAL_ACTIONS_HEIGHT,
};
