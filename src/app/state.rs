//! Host screen state
//!
//! The host owns the presentation flag. The overlay only reads it; both
//! alert buttons call back here to clear it.

use std::cell::Cell;

use tracing::info;

use crate::alert::{AlertButton, AlertContent, AlertOverlay, ButtonLayout};
use crate::config::Config;

/// Demo application state
#[derive(Debug)]
pub struct App {
    /// Loaded configuration
    pub config: Config,
    /// What the alert says when presented
    pub content: AlertContent,
    /// Button arrangement for the alert
    pub layout: ButtonLayout,
    /// Most recent button the user activated
    pub last_action: Option<AlertButton>,
    /// Set when the run loop should exit
    pub should_quit: bool,
    present_alert: Cell<bool>,
}

impl App {
    /// Create the host screen with the alert hidden
    #[must_use]
    pub const fn new(config: Config, content: AlertContent, layout: ButtonLayout) -> Self {
        Self {
            config,
            content,
            layout,
            last_action: None,
            should_quit: false,
            present_alert: Cell::new(false),
        }
    }

    /// Whether the alert is currently mounted
    #[must_use]
    pub fn is_alert_presented(&self) -> bool {
        self.present_alert.get()
    }

    /// Show the alert if hidden, hide it if shown
    pub fn toggle_alert(&self) {
        let presented = !self.present_alert.get();
        info!(presented, "Toggling alert");
        self.present_alert.set(presented);
    }

    /// Switch between horizontal and vertical buttons
    pub const fn toggle_layout(&mut self) {
        self.layout = ButtonLayout::from_vertical(!self.layout.is_vertical());
    }

    /// The overlay for the current frame, wired to dismiss on either button
    #[must_use]
    pub fn overlay(&self) -> AlertOverlay<'_> {
        AlertOverlay::new(self.present_alert.get(), &self.content)
            .layout(self.layout)
            .scale(self.config.scale)
            .keys(&self.config.keys)
            .on_left_action(|| self.toggle_alert())
            .on_right_action(|| self.toggle_alert())
    }

    /// Remember which button the user picked
    pub fn record_action(&mut self, button: AlertButton) {
        info!(?button, "Alert action recorded");
        self.last_action = Some(button);
    }

    /// Request exit from the run loop
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}
