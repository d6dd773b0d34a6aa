//! Scroll phase notifications

use std::sync::mpsc::Sender;

/// Phase transitions of a single scroll cycle, in the order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// The cycle has started and is waiting out its start delay
    Prepare,
    /// The delay elapsed and the offset is about to move
    Start,
    /// The text has fully left the viewport
    Stop,
}

/// Receives phase transitions of scroll cycles.
///
/// Callbacks run on the cycle's own thread, never on the thread that started
/// it. They must return quickly: a slow listener delays the next tick.
pub trait ScrollStatusListener: Send + Sync {
    fn on_scroll_prepare(&self);

    fn on_scroll_start(&self);

    fn on_scroll_stop(&self);

    fn notify(&self, event: ScrollEvent) {
        match event {
            ScrollEvent::Prepare => self.on_scroll_prepare(),
            ScrollEvent::Start => self.on_scroll_start(),
            ScrollEvent::Stop => self.on_scroll_stop(),
        }
    }
}

/// Forwards every callback to a channel so the host can handle it on its own
/// thread.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    tx: Sender<ScrollEvent>,
}

impl ChannelListener {
    pub fn new(tx: Sender<ScrollEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: ScrollEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("Dropped {:?}: scroll event receiver is gone", event);
        }
    }
}

impl ScrollStatusListener for ChannelListener {
    fn on_scroll_prepare(&self) {
        self.send(ScrollEvent::Prepare);
    }

    fn on_scroll_start(&self) {
        self.send(ScrollEvent::Start);
    }

    fn on_scroll_stop(&self) {
        self.send(ScrollEvent::Stop);
    }
}
