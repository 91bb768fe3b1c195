use serde::{Deserialize, Serialize};

use super::event_type::EventType;
use super::location::{Gate, LocationCheckStatus, LocationRole, SnapshotIssue};

/// Point-in-time read of every check-in/check-out record for an assignment.
///
/// Mirrors the backend's `checkin_status` object. Absent roles read as not
/// started. Which roles matter is decided by the event type, never by which
/// records happen to be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinStatusSnapshot {
    #[serde(default)]
    pub warehouse: LocationCheckStatus,
    #[serde(default)]
    pub truck: LocationCheckStatus,
    #[serde(default)]
    pub event: LocationCheckStatus,
}

impl CheckinStatusSnapshot {
    pub fn get(&self, role: LocationRole) -> &LocationCheckStatus {
        match role {
            LocationRole::Warehouse => &self.warehouse,
            LocationRole::Truck => &self.truck,
            LocationRole::Event => &self.event,
        }
    }

    pub fn with(mut self, role: LocationRole, status: LocationCheckStatus) -> Self {
        match role {
            LocationRole::Warehouse => self.warehouse = status,
            LocationRole::Truck => self.truck = status,
            LocationRole::Event => self.event = status,
        }
        self
    }

    pub fn is_met(&self, gate: Gate) -> bool {
        self.get(gate.role).is_met(gate.kind)
    }

    /// Consistency problems among the roles `event_type` uses.
    ///
    /// Besides per-record problems this reports gates recorded while an
    /// earlier gate in the type's order is still open.
    pub fn issues(&self, event_type: EventType) -> Vec<SnapshotIssue> {
        let mut issues: Vec<SnapshotIssue> = event_type
            .roles()
            .iter()
            .flat_map(|role| self.get(*role).issues(*role))
            .collect();

        let mut first_open: Option<Gate> = None;
        for gate in event_type.gates() {
            let met = self.is_met(*gate);
            match (met, first_open) {
                (false, None) => first_open = Some(*gate),
                (true, Some(blocked_by)) => issues.push(SnapshotIssue::GateOutOfOrder {
                    gate: *gate,
                    blocked_by,
                }),
                _ => {}
            }
        }
        issues
    }
}
