//! Tests for notification_state

use super::*;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_info_notification() {
    let notif = Notification::with_type("Scrolling", NotificationType::Info);
    assert_eq!(notif.message, "Scrolling");
    assert_eq!(notif.duration, Duration::from_millis(1500));
    assert_eq!(notif.style.bg, Color::DarkGray);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_notification() {
    let notif = Notification::with_type("Invalid config", NotificationType::Warning);
    assert_eq!(notif.notification_type, NotificationType::Warning);
    assert_eq!(notif.duration, Duration::from_secs(10));
    assert_eq!(notif.style.fg, Color::Black);
    assert_eq!(notif.style.bg, Color::Yellow);
}

#[test]
fn test_scroll_event_messages() {
    let delay = Duration::from_secs(5);
    assert_eq!(scroll_event_message(ScrollEvent::Prepare, delay), "Scrolling in 5s");
    assert_eq!(scroll_event_message(ScrollEvent::Start, delay), "Scrolling");
    assert_eq!(scroll_event_message(ScrollEvent::Stop, delay), "Scroll finished");
}

#[test]
fn test_show_replaces_current() {
    let mut state = NotificationState::new();
    assert!(state.current().is_none());

    state.show("First");
    state.show_warning("Second");

    assert_eq!(state.current_message(), Some("Second"));
    assert_eq!(
        state.current().unwrap().notification_type,
        NotificationType::Warning
    );
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::new();
    state.show("Test");

    if let Some(ref mut notif) = state.current {
        notif.duration = Duration::from_millis(10);
    }

    assert!(!state.clear_if_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
    assert!(!state.clear_if_expired());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Only the most recent notification is visible
    #[test]
    fn prop_notification_replacement(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
        let mut state = NotificationState::new();

        for msg in &messages {
            state.show(msg);
        }

        let last_message = messages.last().unwrap();
        prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
    }
}
