//! Timeline pane: row model, state, and widget.

mod row;
mod state;
mod widget;

pub use row::{EditField, Row, RowEditor, RowState};
pub use state::{TimelineState, ROW_PAGE_HEIGHT, SCROLL_SPEED};
pub use widget::TimelineWidget;
