use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::config::Config;
use crate::layout::TextLayout;
use crate::notification::{NotificationState, scroll_event_message};
use crate::scroll::{ChannelListener, CycleHooks, CycleSupervisor, RenderTrigger, ScrollEvent};

/// What the status line reports about the current cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Waiting,
    Scrolling,
    Finished,
    Stopped,
}

impl ScrollPhase {
    pub fn label(self) -> &'static str {
        match self {
            ScrollPhase::Idle => "idle",
            ScrollPhase::Waiting => "waiting",
            ScrollPhase::Scrolling => "scrolling",
            ScrollPhase::Finished => "finished",
            ScrollPhase::Stopped => "stopped",
        }
    }
}

/// Render trigger shared with scroll cycles; the event loop redraws when set.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Arc<AtomicBool>);

impl RedrawFlag {
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl RenderTrigger for RedrawFlag {
    fn request_render(&self) {
        self.0.store(true, Ordering::Release);
    }
}

pub struct App {
    pub text: String,
    pub layout: TextLayout,
    pub supervisor: CycleSupervisor,
    pub notification: NotificationState,
    pub phase: ScrollPhase,
    pub should_quit: bool,
    pub needs_render: bool,
    pub line_height: i32,
    pub(crate) viewport: Option<Rect>,
    pub(crate) redraw: RedrawFlag,
    scroll_events: Receiver<ScrollEvent>,
}

impl App {
    pub fn new(text: String, config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let redraw = RedrawFlag::default();
        let hooks = CycleHooks::new()
            .with_listener(Arc::new(ChannelListener::new(tx)))
            .with_renderer(Arc::new(redraw.clone()));

        Self {
            text,
            layout: TextLayout::default(),
            supervisor: CycleSupervisor::new(config.scroll.to_scroll_config(), hooks),
            notification: NotificationState::new(),
            phase: ScrollPhase::Idle,
            should_quit: false,
            needs_render: true,
            line_height: config.layout.line_height,
            viewport: None,
            redraw,
            scroll_events: rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// True when a redraw is pending from the UI side or from a scroll cycle
    pub fn should_render(&mut self) -> bool {
        // Always consume the cycle's request so it does not linger
        let requested = self.redraw.take();
        self.needs_render || requested
    }

    /// Re-wrap and restart scrolling if the text pane changed size.
    pub fn sync_viewport(&mut self, frame_area: Rect) {
        let inner = text_pane_inner(frame_area);
        if self.viewport == Some(inner) {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("Viewport changed to {:?}", inner);

        self.viewport = Some(inner);
        self.layout = TextLayout::new(&self.text, inner.width, self.line_height);
        self.supervisor.relayout(&self.layout);
        self.mark_dirty();
    }

    /// Drain phase notifications sent by scroll cycles
    pub fn poll_scroll_events(&mut self) {
        while let Ok(event) = self.scroll_events.try_recv() {
            self.phase = match event {
                ScrollEvent::Prepare => ScrollPhase::Waiting,
                ScrollEvent::Start => ScrollPhase::Scrolling,
                ScrollEvent::Stop => ScrollPhase::Finished,
            };
            let message = scroll_event_message(event, self.active_delay());
            self.notification.show(&message);
            self.mark_dirty();
        }

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }
    }
}

impl App {
    /// Start delay the running cycle captured, which can differ from the
    /// supervisor's pending configuration
    fn active_delay(&self) -> std::time::Duration {
        self.supervisor
            .active_cycle()
            .map(|cycle| cycle.config().delay_start)
            .unwrap_or_else(|| self.supervisor.delay_start())
    }
}

/// Split the frame into the text pane and the status line
pub fn split_frame(frame_area: Rect) -> (Rect, Rect) {
    let [pane, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame_area);
    (pane, status)
}

/// Area inside the text pane's borders where the text is painted
pub fn text_pane_inner(frame_area: Rect) -> Rect {
    let (pane, _) = split_frame(frame_area);
    Block::default().borders(Borders::ALL).inner(pane)
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
