use chrono::{NaiveDate, NaiveTime};
use rtimecard::core::calculator::overtime::DEFAULT_DAILY_THRESHOLD;
use rtimecard::models::TimeEntry;
use rtimecard::store::{BlobStore, ENTRIES_KEY, EntryStore, FileStore};
use std::env;
use std::fs;
use std::path::PathBuf;

fn entry(date: &str, clock_in: &str, clock_out: &str) -> TimeEntry {
    TimeEntry::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        NaiveTime::parse_from_str(clock_in, "%H:%M").unwrap(),
        NaiveTime::parse_from_str(clock_out, "%H:%M").unwrap(),
        DEFAULT_DAILY_THRESHOLD,
    )
}

/// Fresh FileStore rooted in a unique temp dir
fn temp_store(name: &str) -> FileStore {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard_store", name));
    fs::remove_dir_all(&path).ok();
    FileStore::new(&path.to_string_lossy())
}

#[test]
fn test_upsert_appends_new_days() {
    let mut store = EntryStore::new();
    store.upsert(entry("2024-01-01", "09:00", "17:00"));
    store.upsert(entry("2024-01-02", "09:00", "17:00"));

    assert_eq!(store.len(), 2);
}

#[test]
fn test_upsert_same_day_keeps_one_entry_with_latest_values() {
    let mut store = EntryStore::new();
    store.upsert(entry("2024-01-01", "09:00", "17:00"));
    store.upsert(entry("2024-01-01", "10:30", "19:00"));

    assert_eq!(store.len(), 1);

    let saved = store.find_by_day("2024-01-01").expect("entry exists");
    assert_eq!(saved.clock_in_str(), "10:30");
    assert_eq!(saved.clock_out_str(), "19:00");
    assert_eq!(saved.hours_worked, 8.5);
}

#[test]
fn test_entries_ordered_descending_regardless_of_insertion_order() {
    let mut store = EntryStore::new();
    store.upsert(entry("2024-03-10", "09:00", "17:00"));
    store.upsert(entry("2024-03-30", "09:00", "17:00"));
    store.upsert(entry("2024-03-20", "09:00", "17:00"));

    let days: Vec<String> = store.entries().iter().map(|e| e.day_key()).collect();
    assert_eq!(days, vec!["2024-03-30", "2024-03-20", "2024-03-10"]);
}

#[test]
fn test_remove_existing_and_absent() {
    let mut store = EntryStore::new();
    store.upsert(entry("2024-01-01", "09:00", "17:00"));

    assert!(store.remove("2024-01-01"));
    assert!(store.is_empty());

    // absent day key is a no-op
    assert!(!store.remove("2024-01-01"));
    assert!(!store.remove("2030-12-31"));
}

#[test]
fn test_find_by_day() {
    let mut store = EntryStore::new();
    store.upsert(entry("2024-01-01", "09:00", "17:00"));

    assert!(store.find_by_day("2024-01-01").is_some());
    assert!(store.find_by_day("2024-01-02").is_none());
}

#[test]
fn test_totals() {
    let mut store = EntryStore::new();
    store.upsert(entry("2024-01-01", "09:00", "17:00")); // 8.00, no overtime
    store.upsert(entry("2024-01-02", "09:00", "20:00")); // 11.00, 1.40 overtime

    assert_eq!(store.total_overtime(), 1.4);
    assert_eq!(store.total_regular_hours(), 17.6);
}

#[test]
fn test_persist_and_load_round_trip() {
    let blob = temp_store("round_trip");

    let mut store = EntryStore::new();
    store.upsert(entry("2024-01-01", "09:00", "17:00"));
    store.upsert(entry("2024-02-15", "22:00", "06:00"));
    store.upsert(entry("2024-02-01", "09:00", "20:00"));
    store.persist(&blob).expect("persist entries");

    let reloaded = EntryStore::load(&blob);

    assert_eq!(reloaded.entries(), store.entries());
}

#[test]
fn test_load_missing_store_is_empty() {
    let blob = temp_store("load_missing");
    let store = EntryStore::load(&blob);

    assert!(store.is_empty());
}

#[test]
fn test_load_malformed_store_falls_back_to_empty() {
    let blob = temp_store("load_malformed");
    blob.write(ENTRIES_KEY, b"{definitely not an entry list")
        .expect("write garbage blob");

    let store = EntryStore::load(&blob);

    assert!(store.is_empty());
}

#[test]
fn test_load_resorts_hand_edited_data() {
    let blob = temp_store("load_resort");

    // ascending order on disk, as a hand-edited file might be
    let raw = r#"[
        {"date":"2024-01-01","clockIn":"09:00","clockOut":"17:00","hoursWorked":8.0,"overtimeHours":0.0},
        {"date":"2024-01-03","clockIn":"09:00","clockOut":"17:00","hoursWorked":8.0,"overtimeHours":0.0},
        {"date":"2024-01-02","clockIn":"09:00","clockOut":"17:00","hoursWorked":8.0,"overtimeHours":0.0}
    ]"#;
    blob.write(ENTRIES_KEY, raw.as_bytes()).expect("seed blob");

    let store = EntryStore::load(&blob);
    let days: Vec<String> = store.entries().iter().map(|e| e.day_key()).collect();

    assert_eq!(days, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
}
