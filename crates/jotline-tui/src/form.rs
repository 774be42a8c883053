//! Add-event form: three inputs above the timeline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::theme::Styles;
use crate::widgets::TextInputState;

/// Which form input has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Date,
    Note,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Date => Self::Note,
            Self::Note => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Note,
            Self::Date => Self::Name,
            Self::Note => Self::Date,
        }
    }
}

/// State of the add-event form.
///
/// Inputs keep whatever the user typed until a successful submit clears them;
/// a rejected submit leaves them intact for correction.
#[derive(Debug, Default)]
pub struct EventForm {
    pub name: TextInputState,
    pub date: TextInputState,
    pub note: TextInputState,
    pub field: FormField,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input state currently holding the cursor.
    pub fn active_mut(&mut self) -> &mut TextInputState {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Date => &mut self.date,
            FormField::Note => &mut self.note,
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Reset all inputs after a successful submit.
    pub fn clear(&mut self) {
        self.name.clear();
        self.date.clear();
        self.note.clear();
        self.field = FormField::Name;
    }

    /// Create the render widget for this state.
    pub fn widget(&self) -> EventFormWidget<'_> {
        EventFormWidget {
            form: self,
            focused: false,
        }
    }
}

/// Render widget for [`EventForm`].
pub struct EventFormWidget<'a> {
    form: &'a EventForm,
    focused: bool,
}

impl EventFormWidget<'_> {
    /// Set whether the form pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for EventFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Styles::border_active()
        } else {
            Styles::border()
        };

        let block = Block::default()
            .title(" Add Event ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Styles::default());

        let inner = block.inner(area);
        block.render(area, buf);

        let fields = [
            (" Name: ", &self.form.name, FormField::Name, "event name"),
            (" Date: ", &self.form.date, FormField::Date, "2024-06-01T09:00"),
            (" Note: ", &self.form.note, FormField::Note, "optional"),
        ];

        for (i, (label, input, field, placeholder)) in fields.into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            input
                .widget()
                .label(label)
                .placeholder(placeholder)
                .focused(self.focused && self.form.field == field)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(form: &EventForm, focused: bool) -> String {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        form.widget().focused(focused).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_field_cycle() {
        let mut form = EventForm::new();
        assert_eq!(form.field, FormField::Name);
        form.next_field();
        assert_eq!(form.field, FormField::Date);
        form.next_field();
        assert_eq!(form.field, FormField::Note);
        form.next_field();
        assert_eq!(form.field, FormField::Name);
        form.prev_field();
        assert_eq!(form.field, FormField::Note);
    }

    #[test]
    fn test_active_field_receives_input() {
        let mut form = EventForm::new();
        form.active_mut().insert_str("Launch");
        form.next_field();
        form.active_mut().insert_str("2024-06-01");

        assert_eq!(form.name.content(), "Launch");
        assert_eq!(form.date.content(), "2024-06-01");
        assert!(form.note.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = EventForm::new();
        form.name.insert_str("Launch");
        form.next_field();
        form.date.insert_str("2024-06-01");

        form.clear();
        assert!(form.name.is_empty());
        assert!(form.date.is_empty());
        assert_eq!(form.field, FormField::Name);
    }

    #[test]
    fn test_renders_labels_and_content() {
        let mut form = EventForm::new();
        form.name.insert_str("Launch");

        let text = render(&form, true);
        assert!(text.contains("Add Event"));
        assert!(text.contains("Name:"));
        assert!(text.contains("Launch"));
        assert!(text.contains("Date:"));
        assert!(text.contains("Note:"));
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let form = EventForm::new();
        let text = render(&form, false);
        assert!(text.contains("2024-06-01T09:00"));
    }
}
