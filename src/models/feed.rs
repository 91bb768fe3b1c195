//! Wire model of the vendor events feed.
//!
//! The feed groups a vendor's assignments by status:
//!
//! ```json
//! { "assigned": [...], "accepted": [...], "rejected": [...] }
//! ```
//!
//! Each entry carries the event's metadata plus a `checkin_status` snapshot.
//! Coordinates arrive as strings or numbers depending on the backend version,
//! so they are normalised to strings here.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::event_type::EventType;
use super::route::RouteIntent;
use super::snapshot::CheckinStatusSnapshot;
use super::stage::Stage;
use crate::{planner, resolver};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub assigned: Vec<Assignment>,
    #[serde(default)]
    pub accepted: Vec<Assignment>,
    #[serde(default)]
    pub rejected: Vec<Assignment>,
}

impl EventsResponse {
    /// All assignments, assigned first, then accepted, then rejected.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assigned
            .iter()
            .chain(self.accepted.iter())
            .chain(self.rejected.iter())
    }

    pub fn len(&self) -> usize {
        self.assigned.len() + self.accepted.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, event_id: &str) -> Option<&Assignment> {
        self.iter().find(|a| a.id == event_id)
    }
}

/// Vendor response to an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssignmentStatus {
    #[default]
    Assigned,
    Accepted,
    Rejected,
    Other(String),
}

impl From<String> for AssignmentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "assigned" => AssignmentStatus::Assigned,
            "accepted" => AssignmentStatus::Accepted,
            "rejected" => AssignmentStatus::Rejected,
            _ => AssignmentStatus::Other(raw),
        }
    }
}

impl From<AssignmentStatus> for String {
    fn from(status: AssignmentStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::Assigned => write!(f, "assigned"),
            AssignmentStatus::Accepted => write!(f, "accepted"),
            AssignmentStatus::Rejected => write!(f, "rejected"),
            AssignmentStatus::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// A vendor's assignment to an event, as returned by the feed.
///
/// `event_type` is kept as the raw wire string; use [`Assignment::event_type`]
/// to get the typed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assignment_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub event_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_datetime: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub latitude: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub longitude: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub warehouse_lat: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub warehouse_lng: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_lat: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub event_lng: String,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub checkin_status: CheckinStatusSnapshot,
}

impl Assignment {
    /// Typed event type, or `None` when the wire value is not recognised.
    pub fn event_type(&self) -> Option<EventType> {
        self.event_type.parse().ok()
    }

    pub fn context(&self) -> AssignmentContext {
        AssignmentContext {
            event_id: self.id.clone(),
            assignment_id: self.assignment_id.clone(),
            title: self.title.clone(),
            date: self.event_datetime.clone(),
            location: self.city.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            image_url: self.image_url.clone(),
            warehouse_lat: self.warehouse_lat.clone(),
            warehouse_lng: self.warehouse_lng.clone(),
            event_lat: self.event_lat.clone(),
            event_lng: self.event_lng.clone(),
            checkin_status: self.checkin_status.clone(),
        }
    }

    pub fn current_stage(&self) -> Stage {
        resolver::resolve_stage_raw(&self.event_type, &self.checkin_status)
    }

    pub fn next_stage(&self) -> Option<Stage> {
        planner::next_stage_raw(&self.event_type, self.current_stage())
    }

    /// Route for the vendor's next action on this assignment.
    pub fn route(&self) -> RouteIntent {
        planner::route_for_raw(&self.event_type, self.current_stage(), &self.context())
    }
}

/// What the planner needs to know about an assignment to fill in route
/// parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentContext {
    pub event_id: String,
    pub assignment_id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub image_url: String,
    pub warehouse_lat: String,
    pub warehouse_lng: String,
    pub event_lat: String,
    pub event_lng: String,
    pub checkin_status: CheckinStatusSnapshot,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}
