//! jotline-tui: Terminal UI for the jotline timeline notebook
//!
//! This crate provides the interactive layer over jotline-engine:
//! - The add-event form and the reverse-chronological timeline
//! - Per-row view/edit toggling and delete confirmation
//! - Shared widgets (text inputs, modals, status bar)

mod app;
mod event;
pub mod form;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod timeline;
pub mod widgets;

pub use app::{App, Focus, Modal};
pub use event::{Action, Event, EventHandler};
pub use form::{EventForm, FormField};
pub use jotline_engine;
pub use timeline::TimelineState;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Widget,
    Frame, Terminal,
};
use std::io::{self, stdout};

use jotline_engine::EventStore;
use widgets::{ModalKind, ModalWidget, StatusBar};

/// Lines the add form occupies (three inputs plus the border).
const FORM_HEIGHT: u16 = 5;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop over the given store, and
/// restores the terminal on exit.
pub async fn run_tui(
    store: EventStore,
    date_format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, date_format);

    // 4 Hz tick rate = 250ms
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        let Some(event) = events.next().await else {
            break;
        };
        app.handle_event(event);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the full frame: form on top, timeline below, status bar at the
/// bottom, modal over everything.
fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let buf = frame.buffer_mut();

    app.form
        .widget()
        .focused(app.focus == Focus::Form)
        .render(chunks[0], buf);

    // Keep the selection on screen before rendering the timeline
    let timeline_inner_height = chunks[1].height.saturating_sub(2) as usize;
    let visible_count = app.timeline.rows_per_page(timeline_inner_height).max(1);
    app.timeline.ensure_selection_visible(visible_count);

    timeline::TimelineWidget::new(&app.timeline, app.date_format())
        .focused(app.focus == Focus::Timeline)
        .render(chunks[1], buf);

    StatusBar::new(app.key_hints())
        .notification(app.notification())
        .render(chunks[2], buf);

    if let Some(modal) = &app.modal {
        let (kind, message) = match modal {
            Modal::Alert(message) => (ModalKind::Alert, message.clone()),
            Modal::ConfirmDelete { name, .. } => {
                (ModalKind::Confirm, format!("Delete \"{name}\"?"))
            }
        };
        ModalWidget::new(kind, &message).render(area, buf);
    }
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal, create_test_terminal_sized};
    use jotline_engine::EVENTS_FILE;
    use tempfile::TempDir;

    fn test_app_with_event() -> (TempDir, App) {
        let temp = TempDir::new().unwrap();
        let mut store = EventStore::open(temp.path().join(EVENTS_FILE)).unwrap();
        store.add("Launch", "2024-06-01T09:00", "checklist").unwrap();
        (temp, App::new(store, jotline_engine::DISPLAY_DATE_FORMAT))
    }

    #[test]
    fn test_tui_version() {
        assert!(!tui_version().is_empty());
    }

    #[test]
    fn test_draw_full_frame() {
        let (_temp, mut app) = test_app_with_event();
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Add Event"));
        assert!(text.contains("Timeline"));
        assert!(text.contains("Launch"));
        assert!(text.contains("2024/06/01 09:00"));
    }

    #[test]
    fn test_draw_modal_overlays_frame() {
        let (_temp, mut app) = test_app_with_event();
        app.modal = Some(Modal::ConfirmDelete {
            id: "x".to_string(),
            name: "Launch".to_string(),
        });
        let mut terminal = create_test_terminal_sized(70, 20);

        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Delete \"Launch\"?"));
        assert!(text.contains("y: confirm"));
    }
}
