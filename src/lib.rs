//! Custom alert - a modal confirmation overlay for ratatui apps
//!
//! The overlay is a controlled component: the host owns the visibility flag
//! and reacts to the button callbacks. A small demo host in [`tui`] shows it
//! over a placeholder screen.

pub mod alert;
pub mod app;
pub mod config;
pub mod paths;
pub mod tui;

pub use alert::{AlertButton, AlertContent, AlertOverlay, ButtonLayout};
pub use app::App;
pub use config::Config;
