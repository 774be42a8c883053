//! jotline-engine: Event store and data model for the jotline timeline notebook
//!
//! This crate provides the headless core of jotline, including:
//! - The event record model and date parsing/formatting
//! - The single-file JSON event store (load/save/add/update/remove)
//! - Configuration loading and path resolution

pub mod config;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use config::{default_config_path, default_data_dir, Config, ConfigError};
pub use record::{parse_event_date, EventRecord, DISPLAY_DATE_FORMAT};
pub use store::{EventStore, StoreError, EVENTS_FILE};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
