//! Recording collaborators shared by the scroll tests

use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use super::{RenderTrigger, ScrollClock, ScrollEvent, ScrollState, ScrollStatusListener};

/// Listener that keeps every event in arrival order
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<ScrollEvent>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<ScrollEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ScrollEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ScrollStatusListener for RecordingListener {
    fn on_scroll_prepare(&self) {
        self.push(ScrollEvent::Prepare);
    }

    fn on_scroll_start(&self) {
        self.push(ScrollEvent::Start);
    }

    fn on_scroll_stop(&self) {
        self.push(ScrollEvent::Stop);
    }
}

/// Render trigger that samples the offset each time a repaint is requested
#[derive(Debug)]
pub struct OffsetRecorder {
    state: Arc<ScrollState>,
    offsets: Mutex<Vec<i32>>,
}

impl OffsetRecorder {
    pub fn new(state: Arc<ScrollState>) -> Self {
        Self {
            state,
            offsets: Mutex::new(Vec::new()),
        }
    }

    pub fn offsets(&self) -> Vec<i32> {
        self.offsets.lock().unwrap().clone()
    }
}

impl RenderTrigger for OffsetRecorder {
    fn request_render(&self) {
        let offset = self.state.offset();
        self.offsets.lock().unwrap().push(offset);
    }
}

/// Clock that records requested durations and only yields
#[derive(Debug, Default)]
pub struct InstantClock {
    sleeps: Mutex<Vec<Duration>>,
}

impl InstantClock {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl ScrollClock for InstantClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        thread::yield_now();
    }
}

/// Clock whose sleeps each block until `release` hands out a permit
#[derive(Debug, Default)]
pub struct GatedClock {
    permits: Mutex<usize>,
    opened: Condvar,
}

impl GatedClock {
    pub fn release(&self, permits: usize) {
        *self.permits.lock().unwrap() += permits;
        self.opened.notify_all();
    }
}

impl ScrollClock for GatedClock {
    fn sleep(&self, _duration: Duration) {
        let mut permits = self.permits.lock().unwrap();
        while *permits == 0 {
            permits = self.opened.wait(permits).unwrap();
        }
        *permits -= 1;
    }
}

/// Poll `condition` every few milliseconds until it holds or `timeout` passes
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}
