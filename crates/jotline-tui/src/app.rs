//! Application state and key dispatch.
//!
//! `App` owns the store, the add form, the timeline state, and the modal
//! stack (one deep). Every store mutation flows through here and ends in a
//! `refresh` that re-derives the timeline from the store snapshot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

use jotline_engine::{EventStore, StoreError};

use crate::event::{key_to_action, Action, Event};
use crate::form::EventForm;
use crate::timeline::{TimelineState, SCROLL_SPEED};
use crate::widgets::TextInputState;

/// Ticks a status-bar notification stays visible (~3s at 250ms per tick).
const NOTIFICATION_TICKS: u8 = 12;

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Timeline,
}

/// A blocking modal. While one is up it consumes all keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Message dismissed with Enter or Esc.
    Alert(String),
    /// Delete confirmation for a specific record.
    ConfirmDelete { id: String, name: String },
}

/// Top-level application state.
pub struct App {
    pub should_quit: bool,
    store: EventStore,
    date_format: String,
    pub timeline: TimelineState,
    pub form: EventForm,
    pub focus: Focus,
    pub modal: Option<Modal>,
    notification: Option<String>,
    notification_ticks: u8,
}

impl App {
    /// Create the app over an opened store.
    pub fn new(store: EventStore, date_format: impl Into<String>) -> Self {
        let mut app = Self {
            should_quit: false,
            store,
            date_format: date_format.into(),
            timeline: TimelineState::new(),
            form: EventForm::new(),
            focus: Focus::Timeline,
            modal: None,
            notification: None,
            notification_ticks: 0,
        };
        app.refresh();
        app
    }

    /// chrono format string used for displayed dates.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Current status-bar notification, if one is pending.
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Key hints for the current input context.
    pub fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.modal.is_some() {
            return &[];
        }
        match self.focus {
            Focus::Form => &[
                ("Tab", "Next field"),
                ("Enter", "Add"),
                ("Esc", "Timeline"),
            ],
            Focus::Timeline if self.timeline.is_editing() => &[
                ("Tab", "Next field"),
                ("Enter", "Save"),
                ("Esc", "Cancel"),
            ],
            Focus::Timeline => &[
                ("a", "Add"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("j/k", "Move"),
                ("q", "Quit"),
            ],
        }
    }

    /// Dispatch one input event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Tick => self.tick(),
            Event::Resize(..) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any context, modal included
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
            return;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Timeline if self.timeline.is_editing() => self.handle_edit_key(key),
            Focus::Timeline => self.handle_timeline_key(key),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.modal.take() else {
            return;
        };

        match modal {
            Modal::Alert(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc => {}
                _ => self.modal = Some(modal),
            },
            Modal::ConfirmDelete { id, name } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.delete_record(&id),
                KeyCode::Char('n') | KeyCode::Esc => {}
                _ => self.modal = Some(Modal::ConfirmDelete { id, name }),
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Timeline,
            KeyCode::Enter => self.submit_add(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            _ => apply_text_key(self.form.active_mut(), key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Enter => self.save_edit(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(editor) = self.timeline.selected_editor_mut() {
                    editor.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(editor) = self.timeline.selected_editor_mut() {
                    editor.prev_field();
                }
            }
            _ => {
                if let Some(editor) = self.timeline.selected_editor_mut() {
                    apply_text_key(editor.active_mut(), key);
                }
            }
        }
    }

    fn handle_timeline_key(&mut self, key: KeyEvent) {
        match key_to_action(key) {
            Action::Quit => self.should_quit = true,
            Action::Up => self.timeline.select_prev(),
            Action::Down => self.timeline.select_next(),
            Action::Edit => {
                self.timeline.begin_edit();
            }
            Action::Delete => self.request_delete(),
            Action::FocusForm => self.focus = Focus::Form,
            Action::None => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.timeline.scroll_up(SCROLL_SPEED),
            MouseEventKind::ScrollDown => self.timeline.scroll_down(SCROLL_SPEED),
            _ => {}
        }
    }

    fn tick(&mut self) {
        if self.notification_ticks > 0 {
            self.notification_ticks -= 1;
            if self.notification_ticks == 0 {
                self.notification = None;
            }
        }
    }

    /// Submit the add form to the store.
    ///
    /// A rejected submit leaves the form contents intact for correction; a
    /// successful one clears the form and keeps it focused for the next entry.
    fn submit_add(&mut self) {
        let result = self.store.add(
            self.form.name.content(),
            self.form.date.content(),
            self.form.note.content(),
        );

        match result {
            Ok(id) => {
                debug!(id = %id, "Added event");
                self.form.clear();
                self.refresh();
            }
            Err(StoreError::Validation(msg)) => self.modal = Some(Modal::Alert(msg)),
            // The record is already in memory even though the write failed;
            // show it and surface the warning
            Err(e) => {
                self.notify(format!("Could not save events: {e}"));
                self.refresh();
            }
        }
    }

    /// Save the selected row's editor back to the store.
    fn save_edit(&mut self) {
        let Some(row) = self.timeline.selected_row() else {
            return;
        };
        let id = row.record.id.clone();
        let Some(editor) = self.timeline.selected_editor_mut() else {
            return;
        };
        let (name, date, note) = (
            editor.name.content().to_string(),
            editor.date.content().to_string(),
            editor.note.content().to_string(),
        );

        match self.store.update(&id, &name, &date, &note) {
            Ok(()) => self.refresh(),
            // Keep the editor open so the user can fix the input
            Err(StoreError::Validation(msg)) => self.modal = Some(Modal::Alert(msg)),
            // The record vanished under the editor; drop the stale row
            Err(StoreError::NotFound(_)) => self.refresh(),
            Err(e) => {
                self.notify(format!("Could not save events: {e}"));
                self.refresh();
            }
        }
    }

    /// Discard the selected row's editor without touching the store. The
    /// rebuild resets every row to view mode.
    fn cancel_edit(&mut self) {
        self.refresh();
    }

    /// Open a delete confirmation for the selected row.
    fn request_delete(&mut self) {
        if let Some(row) = self.timeline.selected_row() {
            self.modal = Some(Modal::ConfirmDelete {
                id: row.record.id.clone(),
                name: row.record.name.clone(),
            });
        }
    }

    fn delete_record(&mut self, id: &str) {
        match self.store.remove(id) {
            Ok(removed) => {
                debug!(id = %id, removed, "Removed event");
                self.refresh();
            }
            Err(e) => {
                self.notify(format!("Could not save events: {e}"));
                self.refresh();
            }
        }
    }

    /// Re-derive the timeline from the store snapshot.
    fn refresh(&mut self) {
        self.timeline.rebuild(self.store.list());
    }

    fn notify(&mut self, message: String) {
        self.notification = Some(message);
        self.notification_ticks = NOTIFICATION_TICKS;
    }
}

/// Apply a plain editing key to a text input. Unmapped keys are ignored.
fn apply_text_key(input: &mut TextInputState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
