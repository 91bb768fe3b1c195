//! The per-event list a host renders: reconciled stage, label, next step and
//! route for every assignment in the feed.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::fs::StageCache;
use crate::models::{Assignment, AssignmentStatus, EventsResponse, RouteIntent, Stage};
use crate::planner::{next_stage_raw, route_for_raw};
use crate::reconcile::{reconcile, Reconciled, StageSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    pub event_id: String,
    pub title: String,
    pub status: AssignmentStatus,
    /// Raw wire value, kept even when unrecognised.
    pub event_type: String,
    pub stage: Stage,
    pub label: String,
    pub source: StageSource,
    pub next_stage: Option<Stage>,
    pub route: RouteIntent,
}

/// Display hint for an event before its snapshot has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintRow {
    pub event_id: String,
    pub stage: Stage,
    pub label: String,
    pub source: StageSource,
}

pub struct EventsBoard<'a> {
    cache: &'a dyn StageCache,
}

impl<'a> EventsBoard<'a> {
    pub fn new(cache: &'a dyn StageCache) -> Self {
        Self { cache }
    }

    /// Build one row per assignment, assigned first, then accepted, then
    /// rejected.
    ///
    /// Every stage comes from the fresh snapshot in `response`; cached stages
    /// that disagree are rewritten. Cache failures are logged and never fail
    /// the board.
    pub fn build(&self, response: &EventsResponse) -> Result<Vec<BoardRow>> {
        let rows: Vec<BoardRow> = response.iter().map(|a| self.row(a)).collect();
        debug!(rows = rows.len(), "built events board");
        Ok(rows)
    }

    fn row(&self, assignment: &Assignment) -> BoardRow {
        let cached = self.cached_stage(&assignment.id);
        let reconciled = reconcile(cached, Some(assignment.current_stage()));
        if reconciled.cache_stale {
            self.write_back(&assignment.id, reconciled);
        }

        if let Some(event_type) = assignment.event_type() {
            for issue in assignment.checkin_status.issues(event_type) {
                warn!(event_id = %assignment.id, %issue, "inconsistent check-in record");
            }
        }

        BoardRow {
            event_id: assignment.id.clone(),
            title: assignment.title.clone(),
            status: assignment.status.clone(),
            event_type: assignment.event_type.clone(),
            stage: reconciled.stage,
            label: reconciled.stage.label().to_string(),
            source: reconciled.source,
            next_stage: next_stage_raw(&assignment.event_type, reconciled.stage),
            route: route_for_raw(
                &assignment.event_type,
                reconciled.stage,
                &assignment.context(),
            ),
        }
    }

    /// Rows for `event_ids` from the cache alone, for painting before the
    /// feed arrives. Unknown ids show as `NotStarted`.
    pub fn cached_only(&self, event_ids: &[&str]) -> Vec<HintRow> {
        event_ids
            .iter()
            .map(|id| {
                let reconciled = reconcile(self.cached_stage(id), None);
                HintRow {
                    event_id: id.to_string(),
                    stage: reconciled.stage,
                    label: reconciled.stage.label().to_string(),
                    source: reconciled.source,
                }
            })
            .collect()
    }

    fn cached_stage(&self, event_id: &str) -> Option<Stage> {
        match self.cache.load(event_id) {
            Ok(stage) => stage,
            Err(e) => {
                warn!(event_id, error = %e, "cannot load cached stage");
                None
            }
        }
    }

    fn write_back(&self, event_id: &str, reconciled: Reconciled) {
        if let Err(e) = self.cache.store(event_id, reconciled.stage) {
            warn!(event_id, error = %e, "cannot update cached stage");
        }
    }
}
