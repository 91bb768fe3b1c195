use clap::{Parser, Subcommand};
use fieldops::models::{EventType, Stage};
use fieldops::validation::clap_event_id_validator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldops")]
#[command(about = "Event stage progression for field check-in/check-out", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Path to a fieldops.toml (default: ./fieldops.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the current stage from a check-in status snapshot
    Resolve {
        /// Event type: warehouse, event or warehouse-event
        #[arg(short = 't', long = "type")]
        event_type: EventType,

        /// JSON file holding a checkin_status object
        #[arg(short, long)]
        snapshot: PathBuf,
    },

    /// Show the stage and screen that follow a stage
    Next {
        /// Event type: warehouse, event or warehouse-event
        #[arg(short = 't', long = "type")]
        event_type: EventType,

        /// Current stage (e.g. truck_checkin)
        #[arg(short, long)]
        stage: Stage,
    },

    /// Print the route intent for one assignment as JSON
    Route {
        /// JSON file holding one assignment from the events feed
        #[arg(short, long)]
        event: PathBuf,
    },

    /// Reconcile an events feed against the stage cache
    Board {
        /// JSON file holding the events feed
        #[arg(short, long)]
        events: PathBuf,

        /// Stage cache directory (overrides config)
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the stage cache
    Cache {
        /// Stage cache directory (overrides config)
        #[arg(long, global = true)]
        cache_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: CacheCommands,
    },

    /// Report inconsistencies in a check-in status snapshot
    Check {
        /// Event type: warehouse, event or warehouse-event
        #[arg(short = 't', long = "type")]
        event_type: EventType,

        /// JSON file holding a checkin_status object
        #[arg(short, long)]
        snapshot: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// List cached stages
    List,

    /// Show the cached stage for an event
    Show {
        /// Event id (alphanumeric, dash, underscore only; max 128 characters)
        #[arg(value_parser = clap_event_id_validator)]
        event_id: String,
    },

    /// Remove the cached stage for an event
    Clear {
        /// Event id (alphanumeric, dash, underscore only; max 128 characters)
        #[arg(value_parser = clap_event_id_validator)]
        event_id: String,
    },
}
