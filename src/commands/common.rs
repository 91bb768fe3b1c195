use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::models::Stage;

/// Read and parse a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Stage name coloured by how far along it is.
pub fn stage_colored(stage: Stage) -> ColoredString {
    match stage {
        Stage::NotStarted => stage.as_str().dimmed(),
        Stage::Completed => stage.as_str().green().bold(),
        _ => stage.as_str().yellow(),
    }
}

/// Next-stage text for human output.
pub fn next_colored(next: Option<Stage>) -> ColoredString {
    match next {
        Some(stage) => stage_colored(stage),
        None => "none (return home)".dimmed(),
    }
}
