//! Color palette for the TUI
//!
//! The alert card mirrors a light system dialog; the host screen keeps the
//! muted dark palette.

use ratatui::style::Color;

// Host screen
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const SELECTED: Color = Color::Rgb(100, 180, 220);
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Alert card
pub const CARD_BG: Color = Color::Rgb(255, 255, 255);
pub const CARD_TEXT: Color = Color::Rgb(0, 0, 0);
pub const CARD_SEPARATOR: Color = Color::Rgb(198, 198, 200);
pub const ACCENT: Color = Color::Rgb(255, 45, 85);

// Backdrop
pub const BACKDROP: Color = Color::Rgb(0, 0, 0);
