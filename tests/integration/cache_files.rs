//! On-disk stage cache behavior shared between processes

use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

use fieldops::{FileStageCache, Stage, StageCache};

#[test]
fn test_entries_survive_new_cache_instance() {
    let temp = TempDir::new().unwrap();
    FileStageCache::new(temp.path())
        .store("301", Stage::EventCheckout)
        .unwrap();

    let reopened = FileStageCache::new(temp.path());
    assert_eq!(reopened.load("301").unwrap(), Some(Stage::EventCheckout));
}

#[test]
fn test_corrupt_entry_does_not_poison_listing() {
    let temp = TempDir::new().unwrap();
    let cache = FileStageCache::new(temp.path());
    cache.store("302", Stage::Completed).unwrap();
    fs::write(temp.path().join("event_stage_303"), [0xff, 0xfe, 0x00]).unwrap();

    assert_eq!(cache.load("303").unwrap(), None);
    assert_eq!(
        cache.entries().unwrap(),
        vec![("302".to_string(), Stage::Completed)]
    );
}

#[test]
fn test_unsafe_ids_never_touch_the_filesystem() {
    let temp = TempDir::new().unwrap();
    let cache = FileStageCache::new(temp.path().join("stages"));

    for id in ["../x", "..", "a b", "", "con"] {
        assert!(cache.store(id, Stage::Completed).is_err(), "{id:?} accepted");
    }
    assert!(!temp.path().join("stages").exists());
}

#[test]
fn test_concurrent_stores_leave_a_valid_entry() {
    let temp = TempDir::new().unwrap();
    let cache = Arc::new(FileStageCache::new(temp.path()));
    let stages = [
        Stage::WarehouseCheckin,
        Stage::WarehouseCheckout,
        Stage::TruckCheckin,
        Stage::TruckCheckout,
    ];

    let handles: Vec<_> = stages
        .into_iter()
        .map(|stage| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..20 {
                    cache.store("304", stage).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = cache.load("304").unwrap().unwrap();
    assert!(stages.contains(&stored));
}
