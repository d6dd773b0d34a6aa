use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, ScrollPhase, split_frame};
use crate::notification::render_notification;
use crate::widgets::scrollbar::render_vertical_scrollbar;

const KEY_HINTS: &str = " q quit  r reset  s stop  space restart  +/- step  [/] speed  f reset-on-finish";

/// Where the wrapped rows land for a given pixel offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPlacement {
    /// Rows that have scrolled out above the viewport
    pub skipped: usize,
    /// Blank rows above the text when the offset is positive
    pub pushed: u16,
}

impl RowPlacement {
    /// Convert a pixel offset to whole terminal rows of `line_height` pixels.
    pub fn from_offset(offset: i32, line_height: i32) -> Self {
        let rows = offset / line_height.max(1);
        if rows < 0 {
            Self {
                skipped: rows.unsigned_abs() as usize,
                pushed: 0,
            }
        } else {
            Self {
                skipped: 0,
                pushed: u16::try_from(rows).unwrap_or(u16::MAX),
            }
        }
    }
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let (pane, status) = split_frame(frame.area());
        let snapshot = self.supervisor.snapshot();
        let placement = RowPlacement::from_offset(snapshot.offset, self.line_height);

        render_text_pane(frame, pane, self.layout.rows(), placement);

        let viewport_rows = usize::from(pane.height.saturating_sub(2));
        render_vertical_scrollbar(
            frame,
            pane,
            self.layout.rows().len(),
            viewport_rows,
            placement.skipped,
        );

        frame.render_widget(Paragraph::new(self.status_line()), status);

        render_notification(frame, &mut self.notification);
    }

    pub fn status_line(&self) -> Line<'static> {
        let snapshot = self.supervisor.snapshot();
        let config = self.supervisor.config();

        let phase_color = match self.phase {
            ScrollPhase::Idle => Color::Gray,
            ScrollPhase::Waiting => Color::Yellow,
            ScrollPhase::Scrolling => Color::Green,
            ScrollPhase::Finished => Color::Cyan,
            ScrollPhase::Stopped => Color::Red,
        };

        Line::from(vec![
            Span::styled(
                format!(" {} ", self.phase.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(phase_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " {}px / {}px  step {}  tick {}ms  delay {}s  reset {} ",
                snapshot.offset,
                snapshot.content_height,
                config.step,
                config.tick_interval().as_millis(),
                config.delay_start.as_secs(),
                if config.reset_on_finish { "on" } else { "off" },
            )),
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        ])
    }
}

/// Paint the wrapped rows inside a bordered pane, shifted by `placement`.
pub fn render_text_pane(frame: &mut Frame, area: Rect, rows: &[String], placement: RowPlacement) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pushed = placement.pushed.min(inner.height);
    let text_area = Rect {
        y: inner.y + pushed,
        height: inner.height - pushed,
        ..inner
    };

    let lines: Vec<Line> = rows
        .iter()
        .skip(placement.skipped)
        .take(usize::from(text_area.height))
        .map(|row| Line::raw(row.as_str()))
        .collect();

    frame.render_widget(Paragraph::new(lines), text_area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
