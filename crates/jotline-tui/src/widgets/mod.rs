//! Shared widgets for the jotline TUI.

mod modal;
mod status_bar;
mod text_input;

pub use modal::{ModalKind, ModalWidget};
pub use status_bar::StatusBar;
pub use text_input::{TextInput, TextInputState};
