//! Last known stage per event, kept locally so a host can paint immediately
//! on launch.
//!
//! Entries live under the key `event_stage_<event id>`. The file-backed cache
//! stores one file per key holding the stage's wire name:
//!
//! ```text
//! <cache dir>/event_stage_1042    -> "truck_checkout"
//! ```
//!
//! A cached stage is only a display hint. Entries that cannot be read or
//! parsed load as absent rather than failing the caller.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

use super::locking::{locked_read_if_exists, locked_remove, locked_write};
use crate::models::Stage;
use crate::validation::validate_event_id;

const KEY_PREFIX: &str = "event_stage_";

/// Cache key for `event_id`, after validating the id.
pub fn stage_cache_key(event_id: &str) -> Result<String> {
    validate_event_id(event_id)?;
    Ok(format!("{KEY_PREFIX}{event_id}"))
}

/// Storage for last known stages.
pub trait StageCache: Send + Sync {
    /// Cached stage for `event_id`, or `None` when nothing usable is stored.
    fn load(&self, event_id: &str) -> Result<Option<Stage>>;

    fn store(&self, event_id: &str, stage: Stage) -> Result<()>;

    /// Drop the entry for `event_id`. Missing entries are not an error.
    fn evict(&self, event_id: &str) -> Result<()>;

    /// Every readable entry as `(event id, stage)`, sorted by event id.
    fn entries(&self) -> Result<Vec<(String, Stage)>>;
}

/// File-per-entry cache in a single directory.
#[derive(Debug, Clone)]
pub struct FileStageCache {
    dir: PathBuf,
}

impl FileStageCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, event_id: &str) -> Result<PathBuf> {
        Ok(self.dir.join(stage_cache_key(event_id)?))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create stage cache directory: {}", self.dir.display())
            })?;
        }
        Ok(())
    }
}

/// Parse a stored entry, logging and discarding anything unusable.
fn parse_entry(path: &Path, content: &str) -> Option<Stage> {
    match content.trim().parse::<Stage>() {
        Ok(stage) => Some(stage),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt stage cache entry");
            None
        }
    }
}

impl StageCache for FileStageCache {
    fn load(&self, event_id: &str) -> Result<Option<Stage>> {
        let path = self.entry_path(event_id)?;
        match locked_read_if_exists(&path) {
            Ok(Some(content)) => Ok(parse_entry(&path, &content)),
            Ok(None) => Ok(None),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read stage cache entry");
                Ok(None)
            }
        }
    }

    fn store(&self, event_id: &str, stage: Stage) -> Result<()> {
        let path = self.entry_path(event_id)?;
        self.ensure_dir()?;
        locked_write(&path, stage.as_str())?;
        debug!(event_id, %stage, "cached stage");
        Ok(())
    }

    fn evict(&self, event_id: &str) -> Result<()> {
        let path = self.entry_path(event_id)?;
        locked_remove(&path)
    }

    fn entries(&self) -> Result<Vec<(String, Stage)>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let listing = fs::read_dir(&self.dir).with_context(|| {
            format!("Failed to read stage cache directory: {}", self.dir.display())
        })?;

        let mut entries = Vec::new();
        for entry in listing {
            let path = entry?.path();
            let Some(event_id) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix(KEY_PREFIX))
            else {
                continue;
            };
            if validate_event_id(event_id).is_err() {
                continue;
            }
            let event_id = event_id.to_string();
            if let Some(stage) = self.load(&event_id)? {
                entries.push((event_id, stage));
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

/// In-process cache for hosts without a writable directory, and for tests.
#[derive(Debug, Default)]
pub struct MemoryStageCache {
    entries: RwLock<HashMap<String, Stage>>,
}

impl MemoryStageCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StageCache for MemoryStageCache {
    fn load(&self, event_id: &str) -> Result<Option<Stage>> {
        let key = stage_cache_key(event_id)?;
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow::anyhow!("stage cache lock poisoned"))?;
        Ok(entries.get(&key).copied())
    }

    fn store(&self, event_id: &str, stage: Stage) -> Result<()> {
        let key = stage_cache_key(event_id)?;
        self.entries
            .write()
            .map_err(|_| anyhow::anyhow!("stage cache lock poisoned"))?
            .insert(key, stage);
        Ok(())
    }

    fn evict(&self, event_id: &str) -> Result<()> {
        let key = stage_cache_key(event_id)?;
        self.entries
            .write()
            .map_err(|_| anyhow::anyhow!("stage cache lock poisoned"))?
            .remove(&key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, Stage)>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow::anyhow!("stage cache lock poisoned"))?;
        let mut out: Vec<(String, Stage)> = entries
            .iter()
            .filter_map(|(key, stage)| {
                key.strip_prefix(KEY_PREFIX)
                    .map(|id| (id.to_string(), *stage))
            })
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(out)
    }
}
