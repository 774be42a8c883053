//! jotline CLI: timeline note-taking in the terminal

use clap::{Parser, Subcommand};
use jotline_engine::{Config, EventRecord, EventStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Timeline notebook with TUI
#[derive(Parser)]
#[command(name = "jotline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the event file (defaults to ~/.jotline)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Add an event from the command line
    Add {
        /// Event name
        name: String,

        /// Event date (e.g. 2024-06-01T09:00 or 2024-06-01)
        #[arg(long)]
        date: String,

        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// List events, most recent first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an event by id
    Remove {
        /// Record id (UUID)
        id: String,
    },
}

fn main() {
    // Logs go to stderr so TUI and JSON output stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load_or_default() {
        Ok(mut config) => {
            if let Some(data_dir) = cli.data_dir {
                config.data_dir = Some(data_dir);
            }
            config
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let store = match EventStore::open(config.events_path()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(jotline_tui::run_tui(store, &config.date_format)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Add { name, date, note }) => {
            cmd_add(store, &name, &date, &note);
        }
        Some(Commands::List { json }) => {
            cmd_list(&store, &config, json);
        }
        Some(Commands::Remove { id }) => {
            cmd_remove(store, &id);
        }
    }
}

fn cmd_add(mut store: EventStore, name: &str, date: &str, note: &str) {
    match store.add(name, date, note) {
        Ok(id) => println!("Added event {id}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_list(store: &EventStore, config: &Config, json: bool) {
    let records = sorted_for_display(store.list());

    if json {
        match serde_json::to_string_pretty(&records) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if records.is_empty() {
        println!("No events.");
        return;
    }

    for record in records {
        println!(
            "{}  {}  {}",
            record.id,
            record.display_date_with(&config.date_format),
            record.name
        );
        if record.has_note() {
            println!("    {}", record.note);
        }
    }
}

fn cmd_remove(mut store: EventStore, id: &str) {
    match store.remove(id) {
        Ok(true) => println!("Removed event {id}"),
        Ok(false) => println!("No event with id {id}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Clone the records into display order: date descending, ties in storage
/// order, unparseable dates last.
fn sorted_for_display(records: &[EventRecord]) -> Vec<EventRecord> {
    let mut records = records.to_vec();
    records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_for_display() {
        let records = vec![
            EventRecord::new("Old", "2024-01-01", ""),
            EventRecord::new("Mystery", "???", ""),
            EventRecord::new("New", "2024-06-01", ""),
        ];

        let sorted = sorted_for_display(&records);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Old", "Mystery"]);
    }
}
