//! Bottom status bar with key hints and transient notifications.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Styles;

/// One-line status bar. Shows context key hints, or a notification while one
/// is pending.
pub struct StatusBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    notification: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            notification: None,
        }
    }

    /// Set a notification that replaces the hints while visible.
    #[must_use]
    pub fn notification(mut self, notification: Option<&'a str>) -> Self {
        self.notification = notification;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        buf.set_style(area, Styles::status_bar());

        if let Some(message) = self.notification {
            let line = Line::from(Span::styled(format!(" {message}"), Styles::warning()));
            Paragraph::new(line).style(Styles::status_bar()).render(area, buf);
            return;
        }

        let mut spans = Vec::new();
        for (key, label) in self.hints {
            spans.push(Span::styled(format!(" {key} "), Styles::key_hint()));
            spans.push(Span::styled(format!(" {label}  "), Styles::key_label()));
        }

        Paragraph::new(Line::from(spans))
            .style(Styles::status_bar())
            .render(area, buf);
    }
}
