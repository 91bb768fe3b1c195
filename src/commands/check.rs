//! `fieldops check --type <type> --snapshot <file>`
//!
//! Reports inconsistencies in recorded check-ins. Issues are informational,
//! so the command succeeds whether or not any are found.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::common::read_json;
use crate::models::{CheckinStatusSnapshot, EventType};

pub fn execute(event_type: EventType, snapshot_path: &Path) -> Result<()> {
    let snapshot: CheckinStatusSnapshot = read_json(snapshot_path)?;
    let issues = snapshot.issues(event_type);

    if issues.is_empty() {
        println!("{} No issues in {} snapshot", "✓".green().bold(), event_type);
        return Ok(());
    }

    println!(
        "{} {} issue(s) in {} snapshot:",
        "!".yellow().bold(),
        issues.len(),
        event_type
    );
    for issue in &issues {
        println!("  {} {}", "-".dimmed(), issue);
    }
    Ok(())
}
