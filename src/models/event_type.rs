use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::location::{Gate, GateKind, LocationRole};
use super::stage::Stage;

/// Classification of an event, fixed when the event is created.
///
/// The type decides which physical locations a vendor must check in and out
/// of, and in which order. Adding a variant here forces every `match` over
/// event types (gates, successor tables, routing) to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Warehouse shift only.
    #[serde(rename = "warehouse")]
    Warehouse,
    /// Venue shift only.
    #[serde(rename = "event")]
    Event,
    /// Warehouse, then truck, then venue.
    #[serde(rename = "warehouse-event")]
    WarehouseEvent,
}

const WAREHOUSE_GATES: &[Gate] = &[
    Gate::new(LocationRole::Warehouse, GateKind::Checkin),
    Gate::new(LocationRole::Warehouse, GateKind::Checkout),
];

const EVENT_GATES: &[Gate] = &[
    Gate::new(LocationRole::Event, GateKind::Checkin),
    Gate::new(LocationRole::Event, GateKind::Checkout),
];

const WAREHOUSE_EVENT_GATES: &[Gate] = &[
    Gate::new(LocationRole::Warehouse, GateKind::Checkin),
    Gate::new(LocationRole::Warehouse, GateKind::Checkout),
    Gate::new(LocationRole::Truck, GateKind::Checkin),
    Gate::new(LocationRole::Truck, GateKind::Checkout),
    Gate::new(LocationRole::Event, GateKind::Checkin),
    Gate::new(LocationRole::Event, GateKind::Checkout),
];

impl EventType {
    pub fn all() -> &'static [EventType] {
        &[
            EventType::Warehouse,
            EventType::Event,
            EventType::WarehouseEvent,
        ]
    }

    /// Wire name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Warehouse => "warehouse",
            EventType::Event => "event",
            EventType::WarehouseEvent => "warehouse-event",
        }
    }

    /// Gates a vendor must pass, in the order they must be passed.
    pub fn gates(&self) -> &'static [Gate] {
        match self {
            EventType::Warehouse => WAREHOUSE_GATES,
            EventType::Event => EVENT_GATES,
            EventType::WarehouseEvent => WAREHOUSE_EVENT_GATES,
        }
    }

    /// Location roles this type consults. Other roles are never read.
    pub fn roles(&self) -> &'static [LocationRole] {
        match self {
            EventType::Warehouse => &[LocationRole::Warehouse],
            EventType::Event => &[LocationRole::Event],
            EventType::WarehouseEvent => &[
                LocationRole::Warehouse,
                LocationRole::Truck,
                LocationRole::Event,
            ],
        }
    }

    pub fn uses_role(&self, role: LocationRole) -> bool {
        self.roles().contains(&role)
    }

    /// Every stage a vendor can be in for this type, in progression order,
    /// ending with `Completed`.
    pub fn stages(&self) -> Vec<Stage> {
        self.gates()
            .iter()
            .map(Gate::pending_stage)
            .chain(std::iter::once(Stage::Completed))
            .collect()
    }

    /// Whether `stage` can ever be produced for this type.
    pub fn is_reachable(&self, stage: Stage) -> bool {
        stage == Stage::Completed || self.gates().iter().any(|g| g.pending_stage() == stage)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type '{0}' (expected warehouse, event or warehouse-event)")]
pub struct ParseEventTypeError(pub String);

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    /// Exact wire names only; the backend never varies case or padding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warehouse" => Ok(EventType::Warehouse),
            "event" => Ok(EventType::Event),
            "warehouse-event" => Ok(EventType::WarehouseEvent),
            _ => Err(ParseEventTypeError(s.to_string())),
        }
    }
}
