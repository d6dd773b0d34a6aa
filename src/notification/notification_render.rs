//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

const MARGIN: u16 = 1;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after the main UI so the notification appears on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = &notif.style;

    // message + 2 padding + 2 borders, 1 line + 2 borders
    let content_width = message.chars().count() as u16;
    let notification_width = content_width + 4;
    let notification_height = 3;

    let frame_area = frame.area();
    let area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width + MARGIN),
        y: MARGIN,
        width: notification_width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: notification_height.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
