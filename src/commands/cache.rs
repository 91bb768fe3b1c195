//! Stage cache inspection.
//! Usage: fieldops cache [list|show <id>|clear <id>]

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::common::stage_colored;
use crate::fs::{FileStageCache, StageCache};

pub fn list(cache_dir: &Path) -> Result<()> {
    let cache = FileStageCache::new(cache_dir);
    let entries = cache.entries()?;

    println!("{} {}", "Stage cache:".bold(), cache.dir().display());
    if entries.is_empty() {
        println!("(empty)");
        return Ok(());
    }
    for (event_id, stage) in entries {
        println!("  {event_id:<24} {}", stage_colored(stage));
    }
    Ok(())
}

pub fn show(cache_dir: &Path, event_id: &str) -> Result<()> {
    let cache = FileStageCache::new(cache_dir);
    match cache.load(event_id)? {
        Some(stage) => println!("{} ({})", stage_colored(stage), stage.label()),
        None => println!("(no cached stage for {event_id})"),
    }
    Ok(())
}

pub fn clear(cache_dir: &Path, event_id: &str) -> Result<()> {
    FileStageCache::new(cache_dir).evict(event_id)?;
    println!("{} Cleared cached stage for {}", "✓".green().bold(), event_id);
    Ok(())
}
