//! `fieldops next --type <type> --stage <stage>`

use anyhow::Result;
use colored::Colorize;

use super::common::next_colored;
use crate::models::{EventType, Stage};
use crate::planner::{destination_for, next_stage};

pub fn execute(event_type: EventType, stage: Stage) -> Result<()> {
    if !event_type.is_reachable(stage) {
        println!(
            "{} {} is not a {} stage",
            "!".yellow().bold(),
            stage,
            event_type
        );
    }
    println!("{}", next_colored(next_stage(event_type, stage)));
    println!(
        "{} {}",
        "Route:".bold(),
        destination_for(event_type, stage).to_string().cyan()
    );
    Ok(())
}
