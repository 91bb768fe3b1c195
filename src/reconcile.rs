//! Merging a locally cached stage with one derived from fresh server data.
//!
//! The fresh value always wins. A cached stage is only a display hint for the
//! moment between launch and the first fetch.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::models::{CheckinStatusSnapshot, EventType, Stage};
use crate::resolver::resolve_stage;

/// Where a reconciled stage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageSource {
    /// Derived from a freshly fetched snapshot.
    Fresh,
    /// Cached display hint; no fresh data yet.
    Cached,
    /// Nothing known.
    Default,
}

impl fmt::Display for StageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageSource::Fresh => write!(f, "fresh"),
            StageSource::Cached => write!(f, "cached"),
            StageSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub stage: Stage,
    pub source: StageSource,
    /// The cache no longer matches `stage` and should be rewritten.
    pub cache_stale: bool,
}

pub fn reconcile(cached: Option<Stage>, fresh: Option<Stage>) -> Reconciled {
    let reconciled = match (cached, fresh) {
        (cached, Some(fresh)) => Reconciled {
            stage: fresh,
            source: StageSource::Fresh,
            cache_stale: cached != Some(fresh),
        },
        (Some(cached), None) => Reconciled {
            stage: cached,
            source: StageSource::Cached,
            cache_stale: false,
        },
        (None, None) => Reconciled {
            stage: Stage::NotStarted,
            source: StageSource::Default,
            cache_stale: false,
        },
    };
    if reconciled.cache_stale {
        debug!(?cached, stage = %reconciled.stage, "discarding stale cached stage");
    }
    reconciled
}

/// Reconcile `cached` against the stage resolved from `snapshot`.
pub fn reconcile_snapshot(
    cached: Option<Stage>,
    event_type: EventType,
    snapshot: &CheckinStatusSnapshot,
) -> Reconciled {
    reconcile(cached, Some(resolve_stage(event_type, snapshot)))
}
