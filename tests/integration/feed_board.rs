//! Feed parsing and board building against a file-backed cache

use tempfile::TempDir;

use fieldops::models::location::RecordedTime;
use fieldops::{
    Assignment, EventsBoard, EventsResponse, FileStageCache, RouteName, Stage, StageCache,
    StageSource,
};

use super::helpers::FEED;

fn feed() -> EventsResponse {
    serde_json::from_str(FEED).unwrap()
}

#[test]
fn test_feed_resolves_every_assignment() {
    let feed = feed();
    assert_eq!(feed.len(), 4);

    let stages: Vec<Stage> = feed.iter().map(|a| a.current_stage()).collect();
    assert_eq!(
        stages,
        vec![
            Stage::WarehouseCheckin,
            Stage::TruckCheckout,
            Stage::Completed,
            Stage::NotStarted,
        ]
    );
}

#[test]
fn test_unparseable_timestamp_is_kept_as_recorded() {
    let feed = feed();
    let popup = feed.find("204").unwrap();
    assert_eq!(
        popup.checkin_status.warehouse.checkin_time,
        Some(RecordedTime::Unparsed("not a date".to_string()))
    );
}

#[test]
fn test_postgres_style_timestamps_pass_their_gates() {
    let assignment: Assignment = serde_json::from_str(
        r#"{
            "id": "205",
            "type": "warehouse-event",
            "checkin_status": {
                "warehouse": {"checked_in": true, "checked_out": true, "checkin_time": "2025-03-14 07:00:00+00", "checkout_time": "2025-03-14 09:15:00.5+00"},
                "truck": {"checked_in": true, "checkin_time": "2025-03-14 10:30:00.123+00"}
            }
        }"#,
    )
    .unwrap();
    assert_eq!(assignment.current_stage(), Stage::TruckCheckout);
    assert_eq!(assignment.route().destination, RouteName::TruckCheckInOut);
}

#[test]
fn test_routes_carry_host_params() {
    let feed = feed();
    let route = feed.find("202").unwrap().route();
    assert_eq!(route.destination, RouteName::TruckCheckInOut);
    assert_eq!(route.destination.path(), "/truck-check-in-out");
    assert_eq!(route.param("eventId"), Some("202"));
    assert_eq!(route.param("latitude"), Some("40.015"));
    assert_eq!(route.param("currentStage"), Some("truck_checkout"));
    assert_eq!(route.param("nextStage"), Some("event_checkin"));
    assert_eq!(route.param("eventType"), Some("warehouse-event"));
}

#[test]
fn test_board_writes_fresh_stages_to_disk() {
    let temp = TempDir::new().unwrap();
    let cache = FileStageCache::new(temp.path().join("stages"));
    cache.store("202", Stage::WarehouseCheckout).unwrap();

    let rows = EventsBoard::new(&cache).build(&feed()).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1].stage, Stage::TruckCheckout);
    assert_eq!(rows[1].source, StageSource::Fresh);

    // Fresh data replaced the stale entry and filled in the rest
    let entries = cache.entries().unwrap();
    assert_eq!(
        entries,
        vec![
            ("201".to_string(), Stage::WarehouseCheckin),
            ("202".to_string(), Stage::TruckCheckout),
            ("203".to_string(), Stage::Completed),
            ("204".to_string(), Stage::NotStarted),
        ]
    );
}

#[test]
fn test_hints_before_feed_then_fresh_after() {
    let temp = TempDir::new().unwrap();
    let cache = FileStageCache::new(temp.path());
    cache.store("202", Stage::TruckCheckin).unwrap();

    let board = EventsBoard::new(&cache);
    let hints = board.cached_only(&["202"]);
    assert_eq!(hints[0].stage, Stage::TruckCheckin);
    assert_eq!(hints[0].source, StageSource::Cached);

    board.build(&feed()).unwrap();
    let hints = board.cached_only(&["202"]);
    assert_eq!(hints[0].stage, Stage::TruckCheckout);
}

#[test]
fn test_board_json_shape() {
    let temp = TempDir::new().unwrap();
    let cache = FileStageCache::new(temp.path());
    let rows = EventsBoard::new(&cache).build(&feed()).unwrap();

    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["stage"], "warehouse_checkin");
    assert_eq!(json[0]["label"], "Warehouse Check-in");
    assert_eq!(json[0]["route"]["destination"], "WarehouseCheckIn");
    assert_eq!(json[2]["next_stage"], serde_json::Value::Null);
    assert_eq!(json[3]["status"], "rejected");
}
