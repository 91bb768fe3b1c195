//! `fieldops route --event <file>`: the route intent for one assignment.

use anyhow::Result;
use std::path::Path;

use super::common::{print_json, read_json};
use crate::models::Assignment;

pub fn execute(event_path: &Path) -> Result<()> {
    let assignment: Assignment = read_json(event_path)?;
    print_json(&assignment.route())
}
