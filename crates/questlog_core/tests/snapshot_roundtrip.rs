use std::fs;

use chrono::NaiveDate;
use questlog_core::{
    DailyTask, JsonSnapshotStore, OneTimeTask, Snapshot, SnapshotStore, StoreError, Tier,
};
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn populated_snapshot() -> Snapshot {
    Snapshot {
        daily_tasks: vec![DailyTask {
            id: Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
            text: "morning run".to_string(),
            tier: Tier::Medium,
            last_completed_date: Some(day(9)),
            done: true,
        }],
        one_time_tasks: vec![OneTimeTask {
            id: Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
            text: "file taxes".to_string(),
            tier: Tier::Hard,
            created_date: day(8),
        }],
        xp: 42,
        level: 3,
        streak: 5,
        last_completed_date: Some(day(9)),
        last_reset_date: Some(day(10)),
    }
}

#[test]
fn missing_document_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("data.json"));

    assert!(store.load().unwrap().is_none());
}

#[test]
fn empty_snapshot_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("data.json"));

    store.save(&Snapshot::default()).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, Snapshot::default());
}

#[test]
fn populated_snapshot_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("data.json"));
    let snapshot = populated_snapshot();

    store.save(&snapshot).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, snapshot);
}

#[test]
fn saving_a_loaded_snapshot_rewrites_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");

    let first = JsonSnapshotStore::new(&first_path);
    first.save(&populated_snapshot()).unwrap();

    let loaded = first.load().unwrap().unwrap();
    JsonSnapshotStore::new(&second_path).save(&loaded).unwrap();

    assert_eq!(
        fs::read(&first_path).unwrap(),
        fs::read(&second_path).unwrap()
    );
}

#[test]
fn snapshot_serializes_to_the_documented_wire_shape() {
    let json = serde_json::to_value(populated_snapshot()).unwrap();

    assert_eq!(
        json["daily_tasks"][0]["id"],
        "00000000-0000-4000-8000-000000000001"
    );
    assert_eq!(json["daily_tasks"][0]["tier"], "medium");
    assert_eq!(json["daily_tasks"][0]["last_completed_date"], "2026-03-09");
    assert_eq!(json["daily_tasks"][0]["done"], true);
    assert_eq!(json["one_time_tasks"][0]["tier"], "hard");
    assert_eq!(json["one_time_tasks"][0]["created_date"], "2026-03-08");
    assert_eq!(json["xp"], 42);
    assert_eq!(json["level"], 3);
    assert_eq!(json["streak"], 5);
    assert_eq!(json["last_completed_date"], "2026-03-09");
    assert_eq!(json["last_reset_date"], "2026-03-10");

    let empty = serde_json::to_value(Snapshot::default()).unwrap();
    assert_eq!(empty["last_completed_date"], serde_json::Value::Null);
    assert_eq!(empty["last_reset_date"], serde_json::Value::Null);
}

#[test]
fn load_rejects_documents_with_unknown_tiers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
            "daily_tasks": [{
                "id": "00000000-0000-4000-8000-000000000001",
                "text": "mystery",
                "tier": "legendary",
                "last_completed_date": null,
                "done": false
            }],
            "one_time_tasks": [],
            "xp": 0,
            "level": 0,
            "streak": 0,
            "last_completed_date": null,
            "last_reset_date": null
        }"#,
    )
    .unwrap();

    let err = JsonSnapshotStore::new(path).load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidDocument(_)));
}

#[test]
fn load_rejects_unparseable_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{not json").unwrap();

    let err = JsonSnapshotStore::new(path).load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidDocument(_)));
}
