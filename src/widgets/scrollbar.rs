//! Scroll progress indicator
//!
//! Draws a vertical scrollbar on the right border of the text pane showing how
//! far the text has moved out of the viewport.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right border of the given area
///
/// The scrollbar is only rendered if the content exceeds the viewport size.
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full area including borders (scrollbar renders on right border)
/// * `total_rows` - Total number of wrapped rows
/// * `viewport_rows` - Number of visible rows
/// * `scrolled_rows` - Rows that have left the top of the viewport
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_rows: usize,
    viewport_rows: usize,
    scrolled_rows: usize,
) {
    if total_rows <= viewport_rows || viewport_rows == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(Color::Cyan))
        .track_style(Style::default().fg(Color::DarkGray));

    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // Passing max_scroll + 1 lets the thumb reach the bottom at max scroll.
    let max_scroll = total_rows.saturating_sub(viewport_rows);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scrolled_rows.min(max_scroll))
        .viewport_content_length(viewport_rows);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
