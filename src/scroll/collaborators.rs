//! Seams to the rendering and text-layout side of the host

/// Asks the host to repaint using the offset currently stored in `ScrollState`.
///
/// Called from the cycle's thread; implementations should only flag the
/// request and let the host's own loop do the painting.
pub trait RenderTrigger: Send + Sync {
    fn request_render(&self);
}

/// Render trigger for hosts that poll the offset on their own schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRender;

impl RenderTrigger for NoopRender {
    fn request_render(&self) {}
}

/// Geometry of the wrapped text at the current viewport width.
pub trait LayoutProvider {
    fn line_count(&self) -> i32;

    /// Height of one line in pixels
    fn line_height(&self) -> i32;
}

/// Total pixel height of `line_count` lines, saturating instead of overflowing.
pub fn content_height(line_count: i32, line_height: i32) -> i32 {
    line_count.saturating_mul(line_height)
}
