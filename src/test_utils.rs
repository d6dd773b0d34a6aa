//! Shared test utilities for autoscroll
//!
//! Common fixtures and helpers used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Five short lines, one terminal row each
    pub const TEST_TEXT: &str = "alpha\nbravo\ncharlie\ndelta\necho";

    /// Config whose cycles wait long enough that tests see a still offset
    pub fn still_config() -> Config {
        let mut config = Config::default();
        config.scroll.delay_start = 600;
        config.layout.line_height = 1;
        config
    }

    /// Helper to create an App whose scroll cycles stay in their start delay
    pub fn test_app(text: &str) -> App {
        App::new(text.to_string(), &still_config())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
