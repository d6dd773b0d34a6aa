//! Cycle Supervisor
//!
//! Replaces the active scroll cycle whenever the text layout changes. The old
//! cycle is told to stop and abandoned; its thread is never joined, so a
//! restart costs the caller no more than a lock and a thread spawn.

use std::sync::Arc;
use std::time::Duration;

use super::collaborators::{LayoutProvider, content_height};
use super::listener::ScrollStatusListener;
use super::scroll_config::ScrollConfig;
use super::scroll_cycle::{CycleHooks, ScrollCycle};
use super::scroll_state::{ScrollSnapshot, ScrollState};

pub struct CycleSupervisor {
    state: Arc<ScrollState>,
    config: ScrollConfig,
    hooks: CycleHooks,
    active: Option<ScrollCycle>,
}

impl CycleSupervisor {
    pub fn new(config: ScrollConfig, hooks: CycleHooks) -> Self {
        Self::with_state(Arc::new(ScrollState::new()), config, hooks)
    }

    /// Supervise an existing state, e.g. one a renderer already holds.
    pub fn with_state(state: Arc<ScrollState>, config: ScrollConfig, hooks: CycleHooks) -> Self {
        Self {
            state,
            config,
            hooks,
            active: None,
        }
    }

    pub fn state(&self) -> &Arc<ScrollState> {
        &self.state
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.state.snapshot()
    }

    pub fn offset(&self) -> i32 {
        self.state.offset()
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_running()
    }

    pub fn active_cycle(&self) -> Option<&ScrollCycle> {
        self.active.as_ref()
    }

    /// Restart scrolling for a new text geometry.
    ///
    /// The offset is left where the previous cycle put it; only `reset` moves
    /// the text back to the top.
    pub fn on_layout_changed(&mut self, line_count: i32, line_height: i32) {
        let height = content_height(line_count, line_height);
        self.state.set_content_height(height);
        log::debug!(
            "Layout changed: {} lines x {}px = {}px",
            line_count,
            line_height,
            height
        );

        self.stop_previous();

        self.active = Some(ScrollCycle::start(
            self.config,
            Arc::clone(&self.state),
            self.hooks.clone(),
        ));
    }

    /// Re-measure `layout` and restart.
    pub fn relayout(&mut self, layout: &dyn LayoutProvider) {
        self.on_layout_changed(layout.line_count(), layout.line_height());
    }

    /// Move the text back to the top and start a fresh cycle.
    ///
    /// The layout is measured and the old cycle stopped before the offset is
    /// zeroed, so no tick from the old cycle can land after the reset.
    pub fn reset(&mut self, layout: &dyn LayoutProvider) {
        let line_count = layout.line_count();
        let line_height = layout.line_height();
        self.stop_previous();
        self.state.reset();
        self.on_layout_changed(line_count, line_height);
    }

    /// Revoke the active cycle's write access unless it already terminated.
    fn stop_previous(&self) {
        if let Some(previous) = &self.active
            && !previous.is_finished()
        {
            previous.request_stop();
        }
    }

    /// Stop the active cycle and clear the scrolling flag.
    pub fn request_stop(&mut self) {
        if let Some(cycle) = &self.active {
            cycle.request_stop();
        }
        self.state.set_running(false);
    }

    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    /// Replace the configuration used by the next restart.
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn delay_start(&self) -> Duration {
        self.config.delay_start
    }

    pub fn set_delay_start(&mut self, delay_start: Duration) {
        self.config.delay_start = delay_start;
    }

    pub fn step(&self) -> i32 {
        self.config.step
    }

    pub fn set_step(&mut self, step: i32) {
        self.config.step = step;
    }

    pub fn speed(&self) -> u32 {
        self.config.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.config.speed = speed;
    }

    pub fn is_reset_on_finish(&self) -> bool {
        self.config.reset_on_finish
    }

    pub fn set_reset_on_finish(&mut self, reset_on_finish: bool) {
        self.config.reset_on_finish = reset_on_finish;
    }

    pub fn listener(&self) -> Option<&Arc<dyn ScrollStatusListener>> {
        self.hooks.listener.as_ref()
    }

    pub fn set_listener(&mut self, listener: Option<Arc<dyn ScrollStatusListener>>) {
        self.hooks.listener = listener;
    }
}

impl Drop for CycleSupervisor {
    fn drop(&mut self) {
        if let Some(cycle) = &self.active {
            cycle.request_stop();
        }
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod supervisor_tests;
