//! `fieldops.toml` configuration.
//!
//! ```toml
//! cache_dir = "~/.cache/fieldops/stages"
//! log_level = "debug"
//! ```
//!
//! Lookup order: an explicit `--config` path, then `./fieldops.toml`, then
//! built-in defaults. `FIELDOPS_CACHE_DIR` overrides `cache_dir`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "fieldops.toml";
pub const CACHE_DIR_ENV: &str = "FIELDOPS_CACHE_DIR";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub cache_dir: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `explicit`, or `./fieldops.toml` when present, or defaults.
    ///
    /// An explicit path that does not exist is an error; a missing
    /// `./fieldops.toml` is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Directory holding the stage cache.
    ///
    /// `FIELDOPS_CACHE_DIR` wins over the file; without either, the
    /// platform cache directory (or `./.fieldops` when there is none).
    pub fn cache_dir(&self) -> PathBuf {
        if let Ok(dir) = env::var(CACHE_DIR_ENV) {
            if !dir.trim().is_empty() {
                return PathBuf::from(expand_tilde(dir.trim()));
            }
        }
        match &self.cache_dir {
            Some(dir) => PathBuf::from(expand_tilde(dir)),
            None => default_cache_dir(),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("fieldops"))
        .unwrap_or_else(|| PathBuf::from(".fieldops"))
        .join("stages")
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    path.to_string()
}
