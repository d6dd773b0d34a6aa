// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::scroll::ScrollConfig;

/// Scroll behavior section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScrollSection {
    /// Seconds to wait before the text starts moving
    #[serde(default = "default_delay_start")]
    pub delay_start: u64,
    /// Pixels per tick; 0 disables the animation, negative scrolls down
    #[serde(default = "default_step")]
    pub step: i32,
    /// Tick interval in multiples of 50ms
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default)]
    pub reset_on_finish: bool,
}

fn default_delay_start() -> u64 {
    5
}

fn default_step() -> i32 {
    5
}

fn default_speed() -> u32 {
    1
}

impl Default for ScrollSection {
    fn default() -> Self {
        ScrollSection {
            delay_start: default_delay_start(),
            step: default_step(),
            speed: default_speed(),
            reset_on_finish: false,
        }
    }
}

impl ScrollSection {
    pub fn to_scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            delay_start: Duration::from_secs(self.delay_start),
            step: self.step,
            speed: self.speed,
            reset_on_finish: self.reset_on_finish,
        }
    }
}

/// Text layout section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutSection {
    /// Virtual pixels covered by one terminal row
    #[serde(default = "default_line_height")]
    pub line_height: i32,
}

fn default_line_height() -> i32 {
    16
}

impl Default for LayoutSection {
    fn default() -> Self {
        LayoutSection {
            line_height: default_line_height(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scroll: ScrollSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

impl Config {
    /// Clamp values the scroll core cannot work with and describe each change.
    ///
    /// `step` is deliberately left alone: zero and negative steps are valid.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.scroll.speed == 0 {
            self.scroll.speed = 1;
            warnings.push("scroll.speed must be at least 1, using 1".to_string());
        }

        if self.layout.line_height < 1 {
            warnings.push(format!(
                "layout.line_height {} must be at least 1, using 1",
                self.layout.line_height
            ));
            self.layout.line_height = 1;
        }

        for warning in &warnings {
            log::warn!("{}", warning);
        }
        warnings
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
