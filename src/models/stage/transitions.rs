use anyhow::{bail, Result};

use super::types::Stage;
use crate::models::event_type::EventType;

impl Stage {
    /// The stage that follows this one for `event_type`.
    ///
    /// Successor tables:
    /// - `warehouse`: `WarehouseCheckin` -> `WarehouseCheckout` -> `Completed`
    /// - `event`: `EventCheckin` -> `EventCheckout` -> `Completed`
    /// - `warehouse-event`: `WarehouseCheckin` -> `WarehouseCheckout` ->
    ///   `TruckCheckin` -> `TruckCheckout` -> `EventCheckin` -> `EventCheckout`
    ///   -> `Completed`
    ///
    /// Returns `None` for `Completed` and for any stage the type cannot reach.
    pub fn successor(&self, event_type: EventType) -> Option<Stage> {
        match event_type {
            EventType::Warehouse => match self {
                Stage::WarehouseCheckin => Some(Stage::WarehouseCheckout),
                Stage::WarehouseCheckout => Some(Stage::Completed),
                _ => None,
            },
            EventType::Event => match self {
                Stage::EventCheckin => Some(Stage::EventCheckout),
                Stage::EventCheckout => Some(Stage::Completed),
                _ => None,
            },
            EventType::WarehouseEvent => match self {
                Stage::WarehouseCheckin => Some(Stage::WarehouseCheckout),
                Stage::WarehouseCheckout => Some(Stage::TruckCheckin),
                Stage::TruckCheckin => Some(Stage::TruckCheckout),
                Stage::TruckCheckout => Some(Stage::EventCheckin),
                Stage::EventCheckin => Some(Stage::EventCheckout),
                Stage::EventCheckout => Some(Stage::Completed),
                _ => None,
            },
        }
    }

    /// Check whether moving from this stage to `target` is a single legal step
    /// for `event_type`. Staying on the same stage is always allowed.
    pub fn can_advance_to(&self, event_type: EventType, target: Stage) -> bool {
        *self == target || self.valid_transitions(event_type).contains(&target)
    }

    /// Attempt to advance to `target`, returning an error if the step is not
    /// legal for `event_type`.
    pub fn try_advance(&self, event_type: EventType, target: Stage) -> Result<Stage> {
        if self.can_advance_to(event_type, target) {
            Ok(target)
        } else {
            bail!("Invalid {event_type} stage transition: {self} -> {target}")
        }
    }

    /// Stages reachable in one step. Empty for terminal or unreachable stages.
    pub fn valid_transitions(&self, event_type: EventType) -> Vec<Stage> {
        self.successor(event_type).into_iter().collect()
    }
}
