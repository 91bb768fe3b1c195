//! Transition planning: the legal next stage and the screen that handles it.
//!
//! Illegal `(event type, stage)` pairs never fail. They degrade to no next
//! stage and the `Home` route, since the backend snapshot a client holds may
//! be stale.

use serde::Serialize;
use tracing::warn;

use crate::models::{AssignmentContext, EventType, RouteIntent, RouteName, Stage};
use crate::resolver::resolve_stage;


/// Next legal stage after `current`, or `None` when `current` is terminal or
/// not reachable for `event_type`.
pub fn next_stage(event_type: EventType, current: Stage) -> Option<Stage> {
    current.successor(event_type)
}

/// [`next_stage`] for a raw wire event type. Unknown types have no next stage.
pub fn next_stage_raw(raw_type: &str, current: Stage) -> Option<Stage> {
    raw_type
        .parse::<EventType>()
        .ok()
        .and_then(|event_type| next_stage(event_type, current))
}

/// Screen that handles `stage` for `event_type`, without parameters.
pub fn destination_for(event_type: EventType, stage: Stage) -> RouteName {
    if !event_type.is_reachable(stage) {
        warn!(%event_type, %stage, "stage not reachable for event type, routing home");
        return RouteName::Home;
    }
    match stage {
        Stage::WarehouseCheckin => RouteName::WarehouseCheckIn,
        Stage::WarehouseCheckout => RouteName::WarehouseCheckOut,
        Stage::TruckCheckin | Stage::TruckCheckout => RouteName::TruckCheckInOut,
        Stage::EventCheckin => RouteName::EventCheckIn,
        Stage::EventCheckout => RouteName::EventCompletion,
        Stage::NotStarted | Stage::Completed => RouteName::Home,
    }
}

/// Route intent for acting on `current`, with the parameters the host screen
/// expects. `Home` carries no parameters.
pub fn route_for(
    event_type: EventType,
    current: Stage,
    context: &AssignmentContext,
) -> RouteIntent {
    let destination = destination_for(event_type, current);
    if destination == RouteName::Home {
        return RouteIntent::home();
    }

    let checkin_status = match serde_json::to_string(&context.checkin_status) {
        Ok(json) => json,
        Err(err) => {
            warn!(%err, event_id = %context.event_id, "cannot encode checkin status");
            String::new()
        }
    };

    let mut intent = RouteIntent::new(destination)
        .with_param("eventId", context.event_id.as_str())
        .with_param("assignmentId", context.assignment_id.as_str())
        .with_param("title", context.title.as_str())
        .with_param("date", context.date.as_str())
        .with_param("location", context.location.as_str())
        .with_param("currentStage", current.as_str())
        .with_param("eventType", event_type.as_str())
        .with_param("latitude", context.latitude.as_str())
        .with_param("longitude", context.longitude.as_str())
        .with_param("imageUrl", context.image_url.as_str())
        .with_param("checkinStatus", checkin_status)
        .with_param("warehouse_lat", context.warehouse_lat.as_str())
        .with_param("warehouse_lng", context.warehouse_lng.as_str())
        .with_param("event_lat", context.event_lat.as_str())
        .with_param("event_lng", context.event_lng.as_str());

    if let Some(next) = next_stage(event_type, current) {
        intent = intent.with_param("nextStage", next.as_str());
    }
    intent
}

/// [`route_for`] for a raw wire event type. Unknown types route home.
pub fn route_for_raw(raw_type: &str, current: Stage, context: &AssignmentContext) -> RouteIntent {
    match raw_type.parse::<EventType>() {
        Ok(event_type) => route_for(event_type, current, context),
        Err(err) => {
            warn!(%err, event_id = %context.event_id, "routing home");
            RouteIntent::home()
        }
    }
}

/// Everything an action handler needs after a tap: where the vendor is,
/// where they go next, and which screen handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub current: Stage,
    pub next: Option<Stage>,
    pub route: RouteIntent,
}

impl Plan {
    /// No next stage: the host returns to the event list.
    pub fn is_finished(&self) -> bool {
        self.next.is_none()
    }
}

/// Resolve the assignment's snapshot and plan the next move in one call.
pub fn plan(event_type: EventType, context: &AssignmentContext) -> Plan {
    let current = resolve_stage(event_type, &context.checkin_status);
    Plan {
        current,
        next: next_stage(event_type, current),
        route: route_for(event_type, current, context),
    }
}
