//! End-to-end progressions through each event type

use fieldops::{
    next_stage, plan, reconcile_snapshot, resolve_stage, AssignmentContext, CheckinStatusSnapshot,
    EventType, LocationCheckStatus, LocationRole, RouteName, Stage,
};

use super::helpers::{at, completed_roles};

/// Walk a progression by recording each gate in turn, checking that the
/// resolver and the successor table agree at every step.
fn walk(event_type: EventType) -> Vec<Stage> {
    let mut snapshot = CheckinStatusSnapshot::default();
    let mut seen = vec![resolve_stage(event_type, &snapshot)];

    for (i, gate) in event_type.gates().iter().enumerate() {
        let before = resolve_stage(event_type, &snapshot);
        let mut record = snapshot.get(gate.role).clone();
        match gate.kind {
            fieldops::GateKind::Checkin => {
                record.checked_in = true;
                record.checkin_time = Some(at(8 + i as u32).into());
            }
            fieldops::GateKind::Checkout => {
                record.checked_out = true;
                record.checkout_time = Some(at(8 + i as u32).into());
            }
        }
        snapshot = snapshot.with(gate.role, record);

        let after = resolve_stage(event_type, &snapshot);
        assert_eq!(next_stage(event_type, before), Some(after));
        seen.push(after);
    }
    seen
}

#[test]
fn test_warehouse_walk() {
    assert_eq!(
        walk(EventType::Warehouse),
        vec![Stage::WarehouseCheckin, Stage::WarehouseCheckout, Stage::Completed]
    );
}

#[test]
fn test_event_walk() {
    assert_eq!(
        walk(EventType::Event),
        vec![Stage::EventCheckin, Stage::EventCheckout, Stage::Completed]
    );
}

#[test]
fn test_warehouse_event_walk_visits_all_stages() {
    assert_eq!(walk(EventType::WarehouseEvent), EventType::WarehouseEvent.stages());
}

#[test]
fn test_scenario_a_fresh_warehouse() {
    let snapshot = CheckinStatusSnapshot::default();
    let stage = resolve_stage(EventType::Warehouse, &snapshot);
    assert_eq!(stage, Stage::WarehouseCheckin);
    assert_eq!(
        next_stage(EventType::Warehouse, stage),
        Some(Stage::WarehouseCheckout)
    );
}

#[test]
fn test_scenario_b_truck_in_transit() {
    let snapshot = completed_roles(&[LocationRole::Warehouse])
        .with(LocationRole::Truck, LocationCheckStatus::checked_in_at(at(11)));
    assert_eq!(
        resolve_stage(EventType::WarehouseEvent, &snapshot),
        Stage::TruckCheckout
    );
}

#[test]
fn test_scenario_c_finished_event() {
    let context = AssignmentContext {
        event_id: "203".to_string(),
        checkin_status: completed_roles(&[LocationRole::Event]),
        ..Default::default()
    };
    let plan = plan(EventType::Event, &context);
    assert_eq!(plan.current, Stage::Completed);
    assert_eq!(plan.next, None);
    assert_eq!(plan.route.destination, RouteName::Home);
}

#[test]
fn test_warehouse_ignores_completed_truck_and_event() {
    let snapshot = completed_roles(&[LocationRole::Truck, LocationRole::Event]);
    assert_eq!(
        resolve_stage(EventType::Warehouse, &snapshot),
        Stage::WarehouseCheckin
    );
}

#[test]
fn test_reconcile_prefers_fresh_snapshot() {
    let snapshot = completed_roles(&[LocationRole::Warehouse]);
    let reconciled = reconcile_snapshot(
        Some(Stage::WarehouseCheckout),
        EventType::WarehouseEvent,
        &snapshot,
    );
    assert_eq!(reconciled.stage, Stage::TruckCheckin);
    assert!(reconciled.cache_stale);
}

#[test]
fn test_try_advance_along_walk() {
    let t = EventType::WarehouseEvent;
    let mut stage = Stage::WarehouseCheckin;
    while let Some(next) = next_stage(t, stage) {
        stage = stage.try_advance(t, next).unwrap();
    }
    assert_eq!(stage, Stage::Completed);
    assert!(Stage::WarehouseCheckin.try_advance(t, Stage::Completed).is_err());
}
