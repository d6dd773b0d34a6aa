use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, ScrollPhase};

/// Short enough that a 50ms tick never waits a whole poll for its repaint
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(20);

const MAX_SPEED: u32 = 100;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_scroll_events();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // The next loop iteration re-syncs the viewport
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.supervisor.reset(&self.layout);
                self.phase = ScrollPhase::Idle;
                self.notification.show("Reset");
            }
            KeyCode::Char('s') => {
                self.supervisor.request_stop();
                self.phase = ScrollPhase::Stopped;
                self.notification.show("Stopped");
            }
            KeyCode::Char(' ') => {
                self.supervisor.relayout(&self.layout);
                self.phase = ScrollPhase::Idle;
                self.notification.show("Restarted");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let step = self.supervisor.step().saturating_add(1);
                self.supervisor.set_step(step);
                self.notify_pending(&format!("Step {}px", step));
            }
            KeyCode::Char('-') => {
                let step = self.supervisor.step().saturating_sub(1);
                self.supervisor.set_step(step);
                self.notify_pending(&format!("Step {}px", step));
            }
            KeyCode::Char(']') => {
                let speed = (self.supervisor.speed() + 1).min(MAX_SPEED);
                self.supervisor.set_speed(speed);
                self.notify_pending(&format!("Tick {}ms", speed * 50));
            }
            KeyCode::Char('[') => {
                let speed = self.supervisor.speed().saturating_sub(1).max(1);
                self.supervisor.set_speed(speed);
                self.notify_pending(&format!("Tick {}ms", speed * 50));
            }
            KeyCode::Char('f') => {
                let reset = !self.supervisor.is_reset_on_finish();
                self.supervisor.set_reset_on_finish(reset);
                let state = if reset { "on" } else { "off" };
                self.notify_pending(&format!("Reset on finish {}", state));
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Configuration changes only reach the next cycle
    fn notify_pending(&mut self, change: &str) {
        self.notification
            .show(&format!("{} (applies on restart)", change));
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
