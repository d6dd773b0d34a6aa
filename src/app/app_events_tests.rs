//! Tests for app_events

use super::*;
use crate::test_utils::test_helpers::{TEST_TEXT, key, key_with_mods, test_app};
use ratatui::layout::Rect;

fn synced_app() -> App {
    let mut app = test_app(TEST_TEXT);
    app.sync_viewport(Rect::new(0, 0, 20, 8));
    app.clear_dirty();
    app
}

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = test_app(TEST_TEXT);
        app.handle_key_event(event);
        assert!(app.should_quit(), "{:?} should quit", event);
    }
}

#[test]
fn test_reset_key_zeroes_offset_and_restarts() {
    let mut app = synced_app();
    let before = app.supervisor.active_cycle().unwrap().id();
    app.supervisor.state().set_offset(-3);

    app.handle_key_event(key(KeyCode::Char('r')));

    assert_eq!(app.supervisor.offset(), 0);
    assert_ne!(app.supervisor.active_cycle().unwrap().id(), before);
    assert_eq!(app.notification.current_message(), Some("Reset"));
    assert!(app.needs_render);
}

#[test]
fn test_space_restarts_without_reset() {
    let mut app = synced_app();
    let before = app.supervisor.active_cycle().unwrap().id();
    app.supervisor.state().set_offset(-3);

    app.handle_key_event(key(KeyCode::Char(' ')));

    assert_eq!(app.supervisor.offset(), -3);
    assert_ne!(app.supervisor.active_cycle().unwrap().id(), before);
}

#[test]
fn test_stop_key() {
    let mut app = synced_app();

    app.handle_key_event(key(KeyCode::Char('s')));

    assert_eq!(app.phase, ScrollPhase::Stopped);
    assert!(!app.supervisor.is_scrolling());
    assert!(app.supervisor.active_cycle().unwrap().is_stop_requested());
}

#[test]
fn test_step_keys() {
    let mut app = test_app(TEST_TEXT);

    app.handle_key_event(key(KeyCode::Char('+')));
    assert_eq!(app.supervisor.step(), 6);

    for _ in 0..8 {
        app.handle_key_event(key(KeyCode::Char('-')));
    }
    assert_eq!(app.supervisor.step(), -2);
    assert_eq!(
        app.notification.current_message(),
        Some("Step -2px (applies on restart)")
    );
}

#[test]
fn test_speed_keys_clamp() {
    let mut app = test_app(TEST_TEXT);

    app.handle_key_event(key(KeyCode::Char('[')));
    assert_eq!(app.supervisor.speed(), 1);

    app.handle_key_event(key(KeyCode::Char(']')));
    app.handle_key_event(key(KeyCode::Char(']')));
    assert_eq!(app.supervisor.speed(), 3);
    assert_eq!(
        app.notification.current_message(),
        Some("Tick 150ms (applies on restart)")
    );
}

#[test]
fn test_reset_on_finish_toggle() {
    let mut app = test_app(TEST_TEXT);
    assert!(!app.supervisor.is_reset_on_finish());

    app.handle_key_event(key(KeyCode::Char('f')));
    assert!(app.supervisor.is_reset_on_finish());

    app.handle_key_event(key(KeyCode::Char('f')));
    assert!(!app.supervisor.is_reset_on_finish());
}

#[test]
fn test_config_keys_do_not_touch_running_cycle() {
    let mut app = synced_app();
    let before = app.supervisor.active_cycle().unwrap().id();

    app.handle_key_event(key(KeyCode::Char('+')));
    app.handle_key_event(key(KeyCode::Char(']')));

    assert_eq!(app.supervisor.active_cycle().unwrap().id(), before);
}

#[test]
fn test_unknown_key_is_ignored() {
    let mut app = synced_app();

    app.handle_key_event(key(KeyCode::Char('x')));

    assert!(!app.needs_render);
    assert!(!app.should_quit());
    assert!(app.notification.current().is_none());
}
