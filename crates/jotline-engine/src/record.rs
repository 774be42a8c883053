//! Event record model for the jotline timeline.
//!
//! A record is the sole persisted entity: an id, a name, a raw date string as
//! entered, and an optional note. Sort keys and display strings are derived,
//! never stored.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default display format: year, 2-digit month/day/hour/minute.
pub const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Date string formats accepted when deriving a sort key.
///
/// The first two match datetime-local input (`2024-06-01T09:00`), with and
/// without seconds; the space-separated form and the bare date are accepted
/// for hand-entered values.
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// A single timeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique record identifier (UUID), immutable after creation.
    pub id: String,

    /// Event name. Never empty for a record that exists in the store.
    pub name: String,

    /// Event date-time, stored exactly as entered.
    pub date: String,

    /// Optional note. May be empty.
    pub note: String,
}

impl EventRecord {
    /// Create a new record with a fresh id.
    ///
    /// Inputs are stored as given; trimming and presence checks happen at the
    /// store's write boundary.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date: date.into(),
            note: note.into(),
        }
    }

    /// Derive the sort key from the stored date string.
    ///
    /// Returns `None` when the date does not parse; `None` orders before any
    /// parsed value, so unparseable dates sink to the bottom of the
    /// most-recent-first display.
    pub fn sort_key(&self) -> Option<NaiveDateTime> {
        parse_event_date(&self.date)
    }

    /// Format the date for display using the default format.
    ///
    /// Presentation-only: the stored string and the sort key are unaffected.
    /// An unparseable date is shown raw rather than hidden.
    pub fn display_date(&self) -> String {
        self.display_date_with(DISPLAY_DATE_FORMAT)
    }

    /// Format the date for display with a custom chrono format string.
    pub fn display_date_with(&self, format: &str) -> String {
        match self.sort_key() {
            Some(dt) => dt.format(format).to_string(),
            None => self.date.clone(),
        }
    }

    /// Whether the record has a non-empty note.
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

/// Parse an event date string into a naive local date-time.
///
/// Accepts the datetime-local formats (with or without seconds), a
/// space-separated variant, and a bare date (taken as midnight).
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = EventRecord::new("A", "2024-01-01T00:00", "");
        let b = EventRecord::new("B", "2024-01-01T00:00", "");

        assert_ne!(a.id, b.id);
        // UUID shape: 8-4-4-4-12 hex digits
        assert_eq!(a.id.len(), 36);
        assert!(a.id.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
    }

    #[test]
    fn test_parse_datetime_local() {
        let dt = parse_event_date("2024-06-01T09:30").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-06-01 09:30");

        let with_seconds = parse_event_date("2024-06-01T09:30:45").unwrap();
        assert_eq!(with_seconds.format("%S").to_string(), "45");
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = parse_event_date("2024-03-01").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn test_parse_space_separated() {
        assert!(parse_event_date("2024-06-01 09:30").is_some());
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_event_date("").is_none());
        assert!(parse_event_date("not a date").is_none());
        assert!(parse_event_date("2024-13-99").is_none());
    }

    #[test]
    fn test_unparseable_sorts_earliest() {
        let parsed = EventRecord::new("A", "2024-01-01", "").sort_key();
        let garbage = EventRecord::new("B", "someday", "").sort_key();

        // Option<NaiveDateTime>: None < Some(_), so garbage orders first
        // ascending and therefore last in the descending display.
        assert!(garbage < parsed);
    }

    #[test]
    fn test_display_date_format() {
        let record = EventRecord::new("Launch", "2024-06-01T09:05", "");
        assert_eq!(record.display_date(), "2024/06/01 09:05");
    }

    #[test]
    fn test_display_date_unparseable_shows_raw() {
        let record = EventRecord::new("Trip", "sometime in June", "");
        assert_eq!(record.display_date(), "sometime in June");
    }

    #[test]
    fn test_display_date_custom_format() {
        let record = EventRecord::new("Launch", "2024-06-01T09:05", "");
        assert_eq!(record.display_date_with("%d.%m.%Y"), "01.06.2024");
    }

    #[test]
    fn test_json_round_trip() {
        let record = EventRecord::new("Launch", "2024-06-01T09:00", "first try");
        let json = serde_json::to_string(&record).expect("serialize record");
        let restored: EventRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(record, restored);
    }
}
