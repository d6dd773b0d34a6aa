//! Scroll cycle scheduling
//!
//! Drives delayed, interruptible vertical auto-scrolling. A `CycleSupervisor`
//! owns at most one active `ScrollCycle`; each cycle runs on its own thread,
//! advances the offset stored in the shared `ScrollState`, asks the renderer to
//! repaint and reports its phases to a `ScrollStatusListener`.

mod clock;
mod collaborators;
mod listener;
mod scroll_config;
mod scroll_cycle;
mod scroll_state;
mod supervisor;

pub use clock::{ScrollClock, ThreadClock};
pub use collaborators::{LayoutProvider, NoopRender, RenderTrigger, content_height};
pub use listener::{ChannelListener, ScrollEvent, ScrollStatusListener};
pub use scroll_config::{ScrollConfig, TICK_UNIT};
pub use scroll_cycle::{CycleHooks, ScrollCycle};
pub use scroll_state::{CycleId, ScrollSnapshot, ScrollState};
pub use supervisor::CycleSupervisor;

#[cfg(test)]
pub(crate) mod test_support;
