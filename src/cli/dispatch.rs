use anyhow::Result;
use fieldops::commands::{board, cache, check, next, resolve, route};
use fieldops::config::Config;
use std::path::PathBuf;

use super::types::{CacheCommands, Commands};

pub fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Resolve {
            event_type,
            snapshot,
        } => resolve::execute(event_type, &snapshot),
        Commands::Next { event_type, stage } => next::execute(event_type, stage),
        Commands::Route { event } => route::execute(&event),
        Commands::Board {
            events,
            cache_dir,
            json,
        } => board::execute(&events, &cache_dir_or(cache_dir, config), json),
        Commands::Cache { cache_dir, command } => {
            let dir = cache_dir_or(cache_dir, config);
            match command {
                CacheCommands::List => cache::list(&dir),
                CacheCommands::Show { event_id } => cache::show(&dir, &event_id),
                CacheCommands::Clear { event_id } => cache::clear(&dir, &event_id),
            }
        }
        Commands::Check {
            event_type,
            snapshot,
        } => check::execute(event_type, &snapshot),
    }
}

fn cache_dir_or(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.cache_dir())
}
