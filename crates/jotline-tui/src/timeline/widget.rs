//! Timeline widget for rendering event rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::row::{EditField, Row, RowState};
use super::state::TimelineState;
use crate::theme::Styles;

/// Timeline pane widget.
pub struct TimelineWidget<'a> {
    state: &'a TimelineState,
    /// chrono format string for the displayed date.
    date_format: &'a str,
    focused: bool,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(state: &'a TimelineState, date_format: &'a str) -> Self {
        Self {
            state,
            date_format,
            focused: false,
        }
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render a single row in view mode. Returns lines used.
    fn render_view_row(&self, row: &Row, selected: bool, area: Rect, buf: &mut Buffer) -> u16 {
        let mut y = area.y;
        let width = area.width as usize;

        let marker = if selected { "\u{25b8} " } else { "  " }; // ▸ or space
        let marker_style = if selected {
            Styles::active()
        } else {
            Styles::default()
        };
        let name_style = if selected {
            Styles::highlight()
        } else {
            Styles::default()
        };

        let date = row.record.display_date_with(self.date_format);
        let name = truncate_to_width(
            &row.record.name,
            width.saturating_sub(2 + date.chars().count() + 2),
        );

        let header = Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(date, Styles::dim()),
            Span::raw("  "),
            Span::styled(name, name_style),
        ]);
        Paragraph::new(header).render(Rect::new(area.x, y, area.width, 1), buf);
        y += 1;

        if row.record.has_note() {
            for note_line in textwrap::wrap(&row.record.note, width.saturating_sub(4)) {
                if y >= area.y + area.height {
                    break;
                }
                let line = Line::from(vec![
                    Span::raw("    "),
                    Span::styled(note_line.to_string(), Styles::dim()),
                ]);
                Paragraph::new(line).render(Rect::new(area.x, y, area.width, 1), buf);
                y += 1;
            }
        }

        y - area.y
    }

    /// Render a single row in edit mode. Returns lines used.
    fn render_edit_row(row: &Row, area: Rect, buf: &mut Buffer) -> u16 {
        let RowState::Edit(editor) = &row.state else {
            return 0;
        };

        let fields = [
            ("  Name: ", &editor.name, EditField::Name),
            ("  Date: ", &editor.date, EditField::Date),
            ("  Note: ", &editor.note, EditField::Note),
        ];

        let mut y = area.y;
        for (label, input, field) in fields {
            if y >= area.y + area.height {
                break;
            }
            input
                .widget()
                .label(label)
                .focused(editor.field == field)
                .render(Rect::new(area.x, y, area.width, 1), buf);
            y += 1;
        }

        y - area.y
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Styles::border_active()
        } else {
            Styles::border()
        };

        let block = Block::default()
            .title(" Timeline ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Styles::default());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Empty state
        if self.state.is_empty() {
            let empty_msg = Line::from(Span::styled("No events yet", Styles::dim()));
            Paragraph::new(empty_msg).render(
                Rect::new(inner.x + 2, inner.y + inner.height / 2, inner.width.saturating_sub(4), 1),
                buf,
            );
            return;
        }

        let visible_count = self.state.rows_per_page(inner.height as usize).max(1);
        let visible = self.state.visible_rows(visible_count);

        let mut y = inner.y;
        for (idx, row) in visible {
            if y >= inner.y + inner.height {
                break;
            }

            let is_selected = self.state.selected() == Some(idx);
            let remaining_height = (inner.y + inner.height).saturating_sub(y);
            let row_area = Rect::new(inner.x, y, inner.width, remaining_height);

            let lines_used = if row.is_editing() {
                Self::render_edit_row(row, row_area, buf)
            } else {
                self.render_view_row(row, is_selected, row_area, buf)
            };
            y += lines_used;

            // Blank line between rows if space remains
            if y < inner.y + inner.height {
                y += 1;
            }
        }
    }
}

/// Truncate a string to the given display width, adding an ellipsis when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
