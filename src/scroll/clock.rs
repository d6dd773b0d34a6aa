use std::time::Duration;

/// Sleep primitive used by scroll cycles for the start delay and tick cadence.
///
/// Implementations must be stateless with respect to the cycle: a single clock
/// is shared by every cycle a supervisor starts. A sleep that returns early is
/// treated as if the full duration had elapsed.
pub trait ScrollClock: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Clock backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadClock;

impl ScrollClock for ThreadClock {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
