mod app_events;
mod app_render;
mod app_state;

// Re-export public types
pub use app_render::{RowPlacement, render_text_pane};
pub use app_state::{App, RedrawFlag, ScrollPhase, split_frame, text_pane_inner};
