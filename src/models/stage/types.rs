use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vendor's position in an event's check-in/check-out sequence.
///
/// Variants are declared in progression order, so `Ord` follows the order in
/// which a `warehouse-event` assignment passes through them. Which stages are
/// reachable depends on the event type:
/// - `warehouse`: `WarehouseCheckin` -> `WarehouseCheckout` -> `Completed`
/// - `event`: `EventCheckin` -> `EventCheckout` -> `Completed`
/// - `warehouse-event`: all six location stages, then `Completed`
///
/// `NotStarted` is only produced for an event type the client does not know.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NotStarted,
    WarehouseCheckin,
    WarehouseCheckout,
    TruckCheckin,
    TruckCheckout,
    EventCheckin,
    EventCheckout,
    /// Every gate for the event type has been passed; terminal.
    Completed,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::NotStarted,
            Stage::WarehouseCheckin,
            Stage::WarehouseCheckout,
            Stage::TruckCheckin,
            Stage::TruckCheckout,
            Stage::EventCheckin,
            Stage::EventCheckout,
            Stage::Completed,
        ]
    }

    /// Wire and cache representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::NotStarted => "not_started",
            Stage::WarehouseCheckin => "warehouse_checkin",
            Stage::WarehouseCheckout => "warehouse_checkout",
            Stage::TruckCheckin => "truck_checkin",
            Stage::TruckCheckout => "truck_checkout",
            Stage::EventCheckin => "event_checkin",
            Stage::EventCheckout => "event_checkout",
            Stage::Completed => "completed",
        }
    }

    /// Human-readable label shown on event cards.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::NotStarted => "Not Started",
            Stage::WarehouseCheckin => "Warehouse Check-in",
            Stage::WarehouseCheckout => "Warehouse Check-out",
            Stage::TruckCheckin => "Truck Check-in",
            Stage::TruckCheckout => "Truck Check-out",
            Stage::EventCheckin => "Event Check-in",
            Stage::EventCheckout => "Event Check-out",
            Stage::Completed => "Completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Completed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage '{0}'")]
pub struct ParseStageError(pub String);

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Stage::all()
            .iter()
            .copied()
            .find(|stage| stage.as_str() == wanted)
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}
