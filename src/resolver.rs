//! Stage resolution: which stage a vendor is in, derived from recorded
//! check-in/check-out timestamps.
//!
//! Resolution walks the event type's gates in order and stops at the first one
//! that is not met. Roles the type does not use are never read, so a stale or
//! default-initialised truck record cannot affect a warehouse-only shift.

use tracing::{debug, warn};

use crate::models::{CheckinStatusSnapshot, EventType, Stage};


/// Resolve the current stage for `event_type` from `snapshot`.
///
/// Total and pure: every input yields a stage, and the same input always
/// yields the same stage.
pub fn resolve_stage(event_type: EventType, snapshot: &CheckinStatusSnapshot) -> Stage {
    let stage = event_type
        .gates()
        .iter()
        .find(|gate| !snapshot.is_met(**gate))
        .map(|gate| gate.pending_stage())
        .unwrap_or(Stage::Completed);
    debug!(%event_type, %stage, "resolved stage");
    stage
}

/// Resolve from a raw wire event type. Unrecognised types resolve to
/// `NotStarted`.
pub fn resolve_stage_raw(raw_type: &str, snapshot: &CheckinStatusSnapshot) -> Stage {
    match raw_type.parse::<EventType>() {
        Ok(event_type) => resolve_stage(event_type, snapshot),
        Err(err) => {
            warn!(%err, "cannot resolve stage, using not_started");
            Stage::NotStarted
        }
    }
}
