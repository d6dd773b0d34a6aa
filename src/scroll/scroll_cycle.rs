//! Scroll Cycle
//!
//! One run of the scroll animation on a dedicated thread: wait out the start
//! delay, then move the offset by `step` every `speed * 50ms` until the text
//! has left the viewport or the cycle is told to stop.
//!
//! Stopping is level-triggered. The cycle checks its stop signal between
//! sleeps, so a stopped cycle may stay asleep for up to one more delay or tick
//! interval before its thread exits. It will not write to the shared state or
//! notify the listener once the stop has been requested, because every write
//! is additionally rejected by `ScrollState` for cycles that lost ownership.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use tokio_util::sync::CancellationToken;

use super::clock::{ScrollClock, ThreadClock};
use super::collaborators::{NoopRender, RenderTrigger};
use super::listener::{ScrollEvent, ScrollStatusListener};
use super::scroll_config::ScrollConfig;
use super::scroll_state::{CycleId, ScrollState};

/// Collaborators a cycle calls out to from its thread.
#[derive(Clone)]
pub struct CycleHooks {
    pub listener: Option<Arc<dyn ScrollStatusListener>>,
    pub renderer: Arc<dyn RenderTrigger>,
    pub clock: Arc<dyn ScrollClock>,
}

impl CycleHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(mut self, listener: Arc<dyn ScrollStatusListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn RenderTrigger>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ScrollClock>) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for CycleHooks {
    fn default() -> Self {
        Self {
            listener: None,
            renderer: Arc::new(NoopRender),
            clock: Arc::new(ThreadClock),
        }
    }
}

/// Handle to a running (or terminated) scroll cycle.
pub struct ScrollCycle {
    id: CycleId,
    config: ScrollConfig,
    state: Arc<ScrollState>,
    cancel: CancellationToken,
    terminated: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ScrollCycle {
    /// Claim `state` for a new cycle and start it on its own thread.
    ///
    /// Returns immediately. Any cycle that previously owned `state` can no
    /// longer write to it once this returns.
    pub fn start(config: ScrollConfig, state: Arc<ScrollState>, hooks: CycleHooks) -> Self {
        let id = state.claim();
        let cancel = CancellationToken::new();
        let terminated = Arc::new(AtomicBool::new(false));

        let runner = CycleRunner {
            id,
            config,
            state: Arc::clone(&state),
            hooks,
            cancel: cancel.clone(),
        };
        let guard = TerminationGuard(Arc::clone(&terminated));

        log::debug!("Starting scroll cycle {} with {:?}", id.get(), config);

        let handle = thread::spawn(move || {
            let _guard = guard;
            runner.run();
        });

        Self {
            id,
            config,
            state,
            cancel,
            terminated,
            handle: Some(handle),
        }
    }

    pub fn id(&self) -> CycleId {
        self.id
    }

    /// Configuration the cycle captured when it started.
    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    /// Ask the cycle to stop at its next check point. Safe to call repeatedly
    /// and from any thread.
    pub fn request_stop(&self) {
        if !self.cancel.is_cancelled() {
            log::debug!("Stop requested for scroll cycle {}", self.id.get());
        }
        self.cancel.cancel();
        self.state.finish(self.id);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True once the cycle's thread has left its loop, naturally or after a
    /// stop request.
    pub fn is_finished(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }

    /// Block until the cycle's thread exits.
    pub fn join(mut self) -> thread::Result<()> {
        match self.handle.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for ScrollCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollCycle")
            .field("id", &self.id)
            .field("stop_requested", &self.is_stop_requested())
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Flags the cycle terminated even if a listener panics on the cycle's thread.
struct TerminationGuard(Arc<AtomicBool>);

impl Drop for TerminationGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

enum Tick {
    Advanced,
    Completed,
}

struct CycleRunner {
    id: CycleId,
    config: ScrollConfig,
    state: Arc<ScrollState>,
    hooks: CycleHooks,
    cancel: CancellationToken,
}

impl CycleRunner {
    fn run(self) {
        if self.state.update(self.id, |s| s.running = true).is_none() {
            log::debug!("Scroll cycle {} stopped before it began", self.id.get());
            return;
        }
        self.notify(ScrollEvent::Prepare);

        self.hooks.clock.sleep(self.config.delay_start);

        if !self.stopped() {
            self.notify(ScrollEvent::Start);
            self.scroll();
        }

        self.state.finish(self.id);
        log::debug!("Scroll cycle {} terminated", self.id.get());
    }

    fn scroll(&self) {
        let step = self.config.step;
        let reset_on_finish = self.config.reset_on_finish;
        let interval = self.config.tick_interval();

        while !self.stopped() {
            if step == 0 {
                log::debug!("Scroll cycle {} has a zero step, nothing to animate", self.id.get());
                return;
            }

            let tick = self.state.update(self.id, |s| {
                s.offset = s.offset.saturating_sub(step);
                if s.content_height != 0 && s.offset < -s.content_height {
                    if reset_on_finish {
                        s.offset = 0;
                    }
                    s.running = false;
                    Tick::Completed
                } else {
                    Tick::Advanced
                }
            });

            match tick {
                None => return,
                Some(Tick::Completed) => {
                    if reset_on_finish {
                        self.hooks.renderer.request_render();
                    }
                    log::debug!("Scroll cycle {} reached the end", self.id.get());
                    self.notify(ScrollEvent::Stop);
                    return;
                }
                Some(Tick::Advanced) => {
                    self.hooks.renderer.request_render();
                    self.hooks.clock.sleep(interval);
                }
            }
        }
    }

    fn stopped(&self) -> bool {
        self.cancel.is_cancelled() || !self.state.owns(self.id)
    }

    fn notify(&self, event: ScrollEvent) {
        if let Some(listener) = &self.hooks.listener {
            listener.notify(event);
        }
    }
}

#[cfg(test)]
#[path = "scroll_cycle_tests.rs"]
mod scroll_cycle_tests;
