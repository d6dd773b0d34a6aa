//! autoscroll library - Timed vertical auto-scrolling for terminal text
//!
//! This library exposes the scroll scheduler and the terminal host for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod notification;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use scroll::{CycleHooks, CycleSupervisor, ScrollConfig, ScrollCycle, ScrollState};
