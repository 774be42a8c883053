//! Timeline state management.
//!
//! Derives the display-ordered row list from a store snapshot and tracks
//! selection, scrolling, and the per-row edit toggle.

use jotline_engine::EventRecord;

use super::row::{Row, RowEditor, RowState};

/// Rows scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Estimated lines per collapsed row (header + gap), used for paging.
pub const ROW_PAGE_HEIGHT: usize = 2;

/// Timeline pane state.
#[derive(Debug, Default)]
pub struct TimelineState {
    /// Rows in display order: date descending, ties in storage order.
    rows: Vec<Row>,
    /// Index of selected row (if any).
    selected: Option<usize>,
    /// Index of first visible row.
    scroll_offset: usize,
}

impl TimelineState {
    /// Create a new empty timeline state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive all rows from a store snapshot.
    ///
    /// Pure function of the input: the same records always produce the same
    /// visible structure. Every row resets to `View`, so a rebuild triggered
    /// by any mutation exits edit mode everywhere. The selection cursor is
    /// restored by record id when the record still exists, otherwise clamped.
    pub fn rebuild(&mut self, records: &[EventRecord]) {
        let previous_id = self
            .selected
            .and_then(|i| self.rows.get(i))
            .map(|row| row.record.id.clone());

        let mut rows: Vec<Row> = records.iter().cloned().map(Row::new).collect();
        // Stable sort, most recent first. Unparseable dates key as None,
        // which orders last in the descending comparison; ties keep their
        // storage order.
        rows.sort_by(|a, b| b.record.sort_key().cmp(&a.record.sort_key()));
        self.rows = rows;

        self.selected = if self.rows.is_empty() {
            None
        } else {
            previous_id
                .and_then(|id| self.rows.iter().position(|row| row.record.id == id))
                .or_else(|| self.selected.map(|i| i.min(self.rows.len() - 1)))
                .or(Some(0))
        };
        self.scroll_offset = self.scroll_offset.min(self.rows.len().saturating_sub(1));
    }

    /// Get all rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the currently selected row index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Get the scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Check if the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Get the selected row, if any.
    pub fn selected_row(&self) -> Option<&Row> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Get the selected row mutably, if any.
    pub fn selected_row_mut(&mut self) -> Option<&mut Row> {
        self.selected.and_then(|i| self.rows.get_mut(i))
    }

    /// Get the selected row's editor, if it is in edit mode.
    pub fn selected_editor_mut(&mut self) -> Option<&mut RowEditor> {
        match self.selected_row_mut() {
            Some(Row {
                state: RowState::Edit(editor),
                ..
            }) => Some(editor),
            _ => None,
        }
    }

    /// Whether the selected row is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.selected_row().is_some_and(Row::is_editing)
    }

    /// Switch the selected row to edit mode. Returns false when there is no
    /// selection.
    pub fn begin_edit(&mut self) -> bool {
        match self.selected_row_mut() {
            Some(row) => {
                row.begin_edit();
                true
            }
            None => false,
        }
    }

    /// Move selection up. Stops at first row (no wrap).
    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        match self.selected {
            Some(0) => {} // Already at top
            Some(i) => self.selected = Some(i - 1),
            None => self.selected = Some(0),
        }
    }

    /// Move selection down. Stops at last row (no wrap).
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        match self.selected {
            Some(i) if i >= self.rows.len() - 1 => {} // Already at bottom
            Some(i) => self.selected = Some(i + 1),
            None => self.selected = Some(0),
        }
    }

    /// Scroll up by the given number of rows.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down by the given number of rows.
    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.rows.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max_offset);
    }

    /// Calculate how many rows fit in the given height.
    ///
    /// Simplified: assumes collapsed single-note-free rows.
    pub fn rows_per_page(&self, height: usize) -> usize {
        height / ROW_PAGE_HEIGHT
    }

    /// Ensure the selected row is visible, adjusting `scroll_offset` if needed.
    pub fn ensure_selection_visible(&mut self, visible_count: usize) {
        let Some(selected) = self.selected else {
            return;
        };

        if visible_count == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        }

        let last_visible = self.scroll_offset + visible_count - 1;
        if selected > last_visible {
            self.scroll_offset = selected.saturating_sub(visible_count - 1);
        }
    }

    /// Get visible rows for the current scroll position.
    ///
    /// Returns tuples of `(row_index, &row)`.
    pub fn visible_rows(&self, visible_count: usize) -> Vec<(usize, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_count)
            .collect()
    }
}
