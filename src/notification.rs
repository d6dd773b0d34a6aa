//! Notification module for autoscroll
//!
//! Transient overlay messages for scroll phase changes and warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType, scroll_event_message};
