//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::alert::AlertButton;

/// Keys that activate the alert buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to buttons (for serialization)
    bindings: HashMap<String, AlertButton>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Enter".to_string(), AlertButton::Left);
        bindings.insert("g".to_string(), AlertButton::Left);
        bindings.insert("Esc".to_string(), AlertButton::Right);
        bindings.insert("c".to_string(), AlertButton::Right);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// Keys the user already bound keep their button.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, button) in defaults.bindings {
            self.bindings.entry(key).or_insert(button);
        }
    }

    /// Get the button bound to a key event
    #[must_use]
    pub fn button_for(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<AlertButton> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, button: AlertButton) {
        self.bindings.insert(key.to_string(), button);
    }

    /// Get all keys bound to a button
    #[must_use]
    pub fn keys_for(&self, button: AlertButton) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == button { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format the keys for a button for display (e.g. "g/Enter")
    #[must_use]
    pub fn format_keys(&self, button: AlertButton) -> String {
        let mut keys = self.keys_for(button);
        // Single characters first, then named keys
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            b_simple.cmp(&a_simple).then_with(|| a.cmp(b))
        });
        keys.join("/")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
