//! Centered modal dialogs: blocking alerts and the delete confirmation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Styles;

/// What the modal asks of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Blocking message, dismissed with Enter or Esc.
    Alert,
    /// Yes/no question; `y`/Enter confirms, `n`/Esc declines.
    Confirm,
}

/// A centered modal box over the whole screen.
pub struct ModalWidget<'a> {
    kind: ModalKind,
    message: &'a str,
}

impl<'a> ModalWidget<'a> {
    pub fn new(kind: ModalKind, message: &'a str) -> Self {
        Self { kind, message }
    }

    fn hint(&self) -> &'static str {
        match self.kind {
            ModalKind::Alert => "Enter to dismiss",
            ModalKind::Confirm => "y: confirm   n: cancel",
        }
    }
}

impl Widget for ModalWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(4).clamp(20, 50);
        let message_lines = textwrap::wrap(self.message, usize::from(width.saturating_sub(4)));
        #[allow(clippy::cast_possible_truncation)]
        let height = (message_lines.len() as u16 + 4).min(area.height);

        let modal_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        Clear.render(modal_area, buf);

        let title = match self.kind {
            ModalKind::Alert => " Notice ",
            ModalKind::Confirm => " Confirm ",
        };

        let block = Block::default()
            .title(title)
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::default());
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut lines: Vec<Line<'_>> = message_lines
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), Styles::default())))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(self.hint(), Styles::dim())));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_renders_message_and_hint() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ModalWidget::new(ModalKind::Alert, "Name and date are required").render(area, &mut buf);

        let text = crate::test_utils::buffer_to_string(&buf);
        assert!(text.contains("Notice"));
        assert!(text.contains("Name and date are required"));
        assert!(text.contains("Enter to dismiss"));
    }

    #[test]
    fn test_confirm_renders_choices() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ModalWidget::new(ModalKind::Confirm, "Delete \"Launch\"?").render(area, &mut buf);

        let text = crate::test_utils::buffer_to_string(&buf);
        assert!(text.contains("Confirm"));
        assert!(text.contains("Delete \"Launch\"?"));
        assert!(text.contains("y: confirm"));
    }
}
