//! Event persistence for jotline.
//!
//! The store owns the in-memory record collection and its single-file JSON
//! serialization, kept equal after every successful mutation: each write
//! operation persists the whole collection with an atomic overwrite. The file
//! holds a plain array of records in arrival order; display order is derived
//! by the renderer, never stored.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::warn;

use crate::record::EventRecord;

/// File name of the persisted event collection inside the data directory.
pub const EVENTS_FILE: &str = "events.json";

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owner of the event collection and its persisted form.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: Vec<EventRecord>,
}

impl EventStore {
    /// Open a store backed by the given file.
    ///
    /// An absent file starts an empty collection. A present but malformed
    /// file also starts empty: the corruption is logged and the file is
    /// replaced wholesale on the next successful mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let events = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<Vec<EventRecord>>(&content) {
                Ok(events) => events,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Malformed event file, starting empty");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self { path, events })
    }

    /// Persist the full collection, overwriting the file atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.events)?;
        atomic_write(&self.path, json.as_bytes())?;

        Ok(())
    }

    /// Add a new event and persist. Returns the new record's id.
    ///
    /// Name and date must be non-empty after trimming; a validation failure
    /// performs no mutation and no write.
    pub fn add(&mut self, name: &str, date: &str, note: &str) -> Result<String, StoreError> {
        let (name, date, note) = validate_fields(name, date, note)?;

        let record = EventRecord::new(name, date, note);
        let id = record.id.clone();
        self.events.push(record);
        self.save()?;

        Ok(id)
    }

    /// Replace an existing event's fields in place (id unchanged) and persist.
    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        date: &str,
        note: &str,
    ) -> Result<(), StoreError> {
        let (name, date, note) = validate_fields(name, date, note)?;

        let record = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        record.name = name;
        record.date = date;
        record.note = note;
        self.save()?;

        Ok(())
    }

    /// Remove an event by id and persist.
    ///
    /// An unknown id is a no-op, not an error: returns `Ok(false)` without
    /// touching the file.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        self.events.remove(index);
        self.save()?;

        Ok(true)
    }

    /// The current collection in storage-arrival order.
    ///
    /// Callers must not assume this is the display order.
    pub fn list(&self) -> &[EventRecord] {
        &self.events
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trim all fields and require a non-empty name and date.
fn validate_fields(
    name: &str,
    date: &str,
    note: &str,
) -> Result<(String, String, String), StoreError> {
    let name = name.trim();
    let date = date.trim();
    let note = note.trim();

    if name.is_empty() || date.is_empty() {
        return Err(StoreError::Validation(
            "Name and date are required".to_string(),
        ));
    }

    Ok((name.to_string(), date.to_string(), note.to_string()))
}

/// Write content atomically using temp file + fsync + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Unique temp filename from timestamp and process ID
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let pid = std::process::id();

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file");
    let tmp_name = format!("{file_name}.{timestamp}.{pid}.tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = (|| {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        // Best-effort cleanup
        let _ = fs::remove_file(&tmp_path);
    }

    result
}
