#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecard")
}

/// Create a unique test store directory path inside the system temp dir and
/// remove any leftover content from a previous run
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard_store", name));
    let store_dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&store_dir).ok();
    store_dir
}

/// Path of the entries file inside a test store directory
pub fn entries_file(store_dir: &str) -> PathBuf {
    PathBuf::from(store_dir).join("time_tracker_entries.json")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and add a small dataset useful for many tests
pub fn init_store_with_data(store_dir: &str) {
    rtc()
        .args(["--store", store_dir, "--test", "init"])
        .assert()
        .success();

    // a regular day and an overtime day
    rtc()
        .args([
            "--store", store_dir, "add", "2025-09-01", "--in", "09:00", "--out", "17:00",
        ])
        .assert()
        .success();

    rtc()
        .args([
            "--store", store_dir, "add", "2025-09-15", "--in", "09:00", "--out", "20:00",
        ])
        .assert()
        .success();

    rtc()
        .args([
            "--store", store_dir, "add", "2024-10-03", "--in", "08:00", "--out", "16:30",
        ])
        .assert()
        .success();
}
