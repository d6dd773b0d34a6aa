//! Tests for notification_render

use super::*;
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_notification_to_string(
    notification: &mut NotificationState,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn snapshot_notification_top_right() {
    let mut notification = NotificationState::new();
    notification.show("Scrolling");

    let output = render_notification_to_string(&mut notification, 20, 5);
    assert_snapshot!(output, @r#"
    "                    "
    "      ┌───────────┐ "
    "      │ Scrolling │ "
    "      └───────────┘ "
    "                    "
    "#);
}

#[test]
fn test_no_notification_renders_nothing() {
    let mut notification = NotificationState::new();
    let output = render_notification_to_string(&mut notification, 20, 5);
    assert!(output.lines().all(|line| line.trim_matches('"').trim().is_empty()));
}

#[test]
fn test_too_small_frame_renders_nothing() {
    let mut notification = NotificationState::new();
    notification.show_warning("Invalid config");

    let output = render_notification_to_string(&mut notification, 20, 3);
    assert!(!output.contains("Invalid config"));
}

#[test]
fn test_warning_is_rendered() {
    let mut notification = NotificationState::new();
    notification.show_warning("Invalid config");

    let output = render_notification_to_string(&mut notification, 40, 6);
    assert!(output.contains(" Invalid config "));
}
