//! Binary smoke tests

use std::process::Command;
use tempfile::TempDir;

use super::helpers::{write_file, FEED};

fn fieldops(temp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fieldops"));
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("FIELDOPS_CACHE_DIR");
    cmd
}

#[test]
fn test_resolve_prints_stage() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_file(
        temp.path(),
        "snapshot.json",
        r#"{"warehouse": {"checked_in": true, "checkin_time": "2025-03-14T08:00:00Z"}}"#,
    );

    let output = fieldops(&temp)
        .args(["resolve", "--type", "warehouse", "--snapshot"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warehouse_checkout"));
    assert!(stdout.contains("Warehouse Check-out"));
}

#[test]
fn test_next_for_completed_returns_home() {
    let temp = TempDir::new().unwrap();
    let output = fieldops(&temp)
        .args(["next", "--type", "event", "--stage", "completed"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("none (return home)"));
    assert!(stdout.contains("Home"));
}

#[test]
fn test_unknown_type_argument_is_rejected() {
    let temp = TempDir::new().unwrap();
    let output = fieldops(&temp)
        .args(["next", "--type", "concert", "--stage", "completed"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_board_json_and_cache_commands() {
    let temp = TempDir::new().unwrap();
    let events = write_file(temp.path(), "events.json", FEED);
    let cache_dir = temp.path().join("cache");

    let output = fieldops(&temp)
        .args(["board", "--json", "--events"])
        .arg(&events)
        .arg("--cache-dir")
        .arg(&cache_dir)
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 4);
    assert_eq!(rows[1]["stage"], "truck_checkout");

    let output = fieldops(&temp)
        .args(["cache", "show", "202", "--cache-dir"])
        .arg(&cache_dir)
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("truck_checkout"));

    let output = fieldops(&temp)
        .args(["cache", "clear", "202", "--cache-dir"])
        .arg(&cache_dir)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!cache_dir.join("event_stage_202").exists());
}

#[test]
fn test_config_file_sets_cache_dir() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("from-config");
    write_file(
        temp.path(),
        "fieldops.toml",
        &format!("cache_dir = {:?}\n", cache_dir.display().to_string()),
    );
    let events = write_file(temp.path(), "events.json", FEED);

    let output = fieldops(&temp)
        .args(["board", "--events"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(cache_dir.join("event_stage_201").exists());
}

#[test]
fn test_missing_input_file_fails() {
    let temp = TempDir::new().unwrap();
    let output = fieldops(&temp)
        .args(["route", "--event", "missing.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

#[test]
fn test_check_reports_out_of_order_gates() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_file(
        temp.path(),
        "snapshot.json",
        r#"{"event": {"checked_in": true, "checkin_time": "2025-03-14T18:00:00Z"}}"#,
    );
    let output = fieldops(&temp)
        .args(["check", "--type", "warehouse-event", "--snapshot"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("issue(s)"));
}

#[test]
fn test_resolve_completed_snapshot() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_file(
        temp.path(),
        "snapshot.json",
        r#"{"event": {"checkin_time": "2025-03-14T18:00:00Z", "checkout_time": "2025-03-14T23:00:00Z"}}"#,
    );

    let output = fieldops(&temp)
        .args(["resolve", "--type", "event", "--snapshot"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("completed"));
    assert!(stdout.contains("All check-ins recorded"));
    assert!(!stdout.contains("Next:"));
}
