use std::time::Duration;

/// Length of one speed unit; a cycle sleeps `speed * TICK_UNIT` between ticks.
pub const TICK_UNIT: Duration = Duration::from_millis(50);

/// Snapshot of the scroll settings a cycle captures when it starts.
///
/// Changing the owner's configuration never affects a cycle that is already
/// running; the new values are picked up on the next restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Wait before the first tick
    pub delay_start: Duration,
    /// Pixels subtracted from the offset per tick (0 and negative are allowed)
    pub step: i32,
    /// Tick interval multiplier
    pub speed: u32,
    /// Jump back to offset 0 once the text has left the viewport
    pub reset_on_finish: bool,
}

impl ScrollConfig {
    pub fn tick_interval(&self) -> Duration {
        TICK_UNIT.saturating_mul(self.speed)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            delay_start: Duration::from_secs(5),
            step: 5,
            speed: 1,
            reset_on_finish: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollConfig::default();
        assert_eq!(config.delay_start, Duration::from_secs(5));
        assert_eq!(config.step, 5);
        assert_eq!(config.speed, 1);
        assert!(!config.reset_on_finish);
    }

    #[test]
    fn test_tick_interval_scales_with_speed() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(50));

        config.speed = 4;
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_tick_interval_zero_speed() {
        let config = ScrollConfig {
            speed: 0,
            ..ScrollConfig::default()
        };
        assert_eq!(config.tick_interval(), Duration::ZERO);
    }
}
