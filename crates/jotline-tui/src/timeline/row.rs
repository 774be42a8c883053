//! Per-record row model: view/edit state and the in-row editor.

use jotline_engine::EventRecord;

use crate::widgets::TextInputState;

/// Which editor field has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Date,
    Note,
}

impl EditField {
    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Date => Self::Note,
            Self::Note => Self::Name,
        }
    }

    /// The field before this one, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Note,
            Self::Date => Self::Name,
            Self::Note => Self::Date,
        }
    }
}

/// In-progress edits for one row, pre-filled from the record.
///
/// Holds working copies only; nothing touches the store until save.
#[derive(Debug, Clone, Default)]
pub struct RowEditor {
    pub name: TextInputState,
    pub date: TextInputState,
    pub note: TextInputState,
    pub field: EditField,
}

impl RowEditor {
    /// Create an editor pre-filled from a record.
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            name: TextInputState::with_content(&record.name),
            date: TextInputState::with_content(&record.date),
            note: TextInputState::with_content(&record.note),
            field: EditField::Name,
        }
    }

    /// The input state currently holding the cursor.
    pub fn active_mut(&mut self) -> &mut TextInputState {
        match self.field {
            EditField::Name => &mut self.name,
            EditField::Date => &mut self.date,
            EditField::Note => &mut self.note,
        }
    }

    /// Move the cursor to the next field.
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Move the cursor to the previous field.
    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }
}

/// UI mode of a single row.
#[derive(Debug, Clone, Default)]
pub enum RowState {
    /// Read-only: formatted date, name, note.
    #[default]
    View,
    /// Editable fields pre-filled from the record.
    Edit(RowEditor),
}

/// One displayed record with its transient UI state.
///
/// Row state never survives a rebuild: the renderer re-derives all rows from
/// the store snapshot, which resets every row to `View`.
#[derive(Debug, Clone)]
pub struct Row {
    pub record: EventRecord,
    pub state: RowState,
}

impl Row {
    /// Create a row in the initial `View` state.
    pub fn new(record: EventRecord) -> Self {
        Self {
            record,
            state: RowState::View,
        }
    }

    /// Whether the row is in edit mode.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, RowState::Edit(_))
    }

    /// Switch to edit mode, pre-filling the editor from the record.
    /// No-op if already editing.
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.state = RowState::Edit(RowEditor::from_record(&self.record));
        }
    }
}
