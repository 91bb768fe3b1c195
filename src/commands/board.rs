//! `fieldops board --events <file> [--json]`

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::common::{next_colored, print_json, read_json, stage_colored};
use crate::board::EventsBoard;
use crate::fs::FileStageCache;
use crate::models::EventsResponse;

pub fn execute(events_path: &Path, cache_dir: &Path, json: bool) -> Result<()> {
    let response: EventsResponse = read_json(events_path)?;
    let cache = FileStageCache::new(cache_dir);
    let rows = EventsBoard::new(&cache).build(&response)?;

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("(no events)");
        return Ok(());
    }

    for row in &rows {
        println!(
            "{} {} [{}, {}]",
            row.event_id.bold(),
            row.title,
            row.event_type.cyan(),
            row.status.to_string().dimmed()
        );
        println!(
            "    {} {} -> {}  {}",
            row.label,
            stage_colored(row.stage),
            next_colored(row.next_stage),
            row.route.destination.path().dimmed()
        );
    }
    Ok(())
}
