//! Validation of event ids before they become part of a cache file name.

use anyhow::{bail, Result};

/// Maximum allowed length for an event id.
pub const MAX_EVENT_ID_LENGTH: usize = 128;

/// Names that cannot be used as ids (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validates that an event id is safe to embed in a file name.
///
/// Backend ids are numeric or UUID-like; anything outside
/// `[A-Za-z0-9_-]`, empty, longer than [`MAX_EVENT_ID_LENGTH`] or a reserved
/// device name is rejected.
///
/// ```
/// use fieldops::validation::validate_event_id;
///
/// assert!(validate_event_id("1042").is_ok());
/// assert!(validate_event_id("evt_2025-03").is_ok());
/// assert!(validate_event_id("../etc/passwd").is_err());
/// ```
pub fn validate_event_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("Event id cannot be empty");
    }

    if id.len() > MAX_EVENT_ID_LENGTH {
        bail!(
            "Event id too long: {} characters (max {})",
            id.len(),
            MAX_EVENT_ID_LENGTH
        );
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("Event id '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    if RESERVED_NAMES.contains(&id.to_lowercase().as_str()) {
        bail!("Event id '{id}' uses a reserved name");
    }

    Ok(())
}

/// Clap value parser for event id arguments.
pub fn clap_event_id_validator(s: &str) -> Result<String, String> {
    validate_event_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
