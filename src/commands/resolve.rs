//! `fieldops resolve --type <type> --snapshot <file>`

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::common::{next_colored, read_json, stage_colored};
use crate::models::{CheckinStatusSnapshot, EventType};
use crate::planner::next_stage;
use crate::resolver::resolve_stage;

pub fn execute(event_type: EventType, snapshot_path: &Path) -> Result<()> {
    let snapshot: CheckinStatusSnapshot = read_json(snapshot_path)?;
    let stage = resolve_stage(event_type, &snapshot);

    println!("{} {}", "Event type:".bold(), event_type);
    println!("{} {} ({})", "Stage:".bold(), stage_colored(stage), stage.label());
    if stage.is_terminal() {
        println!("{} All check-ins recorded", "✓".green().bold());
    } else {
        println!("{} {}", "Next:".bold(), next_colored(next_stage(event_type, stage)));
    }
    Ok(())
}
