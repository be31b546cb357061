use predicates::str::contains;
use std::fs;

mod common;
use common::{init_store_with_data, rtc, setup_test_store, temp_out};

#[test]
fn test_export_csv_all() {
    let store_dir = setup_test_store("export_csv_all");
    init_store_with_data(&store_dir);

    let out = temp_out("export_csv_all", "csv");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("date,clock_in,clock_out,hours_worked,overtime_hours"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("2024-10-03"));
}

#[test]
fn test_export_json_range() {
    let store_dir = setup_test_store("export_json_range");
    init_store_with_data(&store_dir);

    let out = temp_out("export_json_range", "json");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "json", "--file", &out, "--range",
            "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2024-10-03"));
}

#[test]
fn test_export_json_custom_range() {
    let store_dir = setup_test_store("export_json_custom_range");
    init_store_with_data(&store_dir);

    let out = temp_out("export_json_custom_range", "json");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "json", "--file", &out, "--range",
            "2024-10-01:2025-09-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2024-10-03"));
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-09-15"));
}

#[test]
fn test_export_pdf() {
    let store_dir = setup_test_store("export_pdf");
    init_store_with_data(&store_dir);

    let out = temp_out("export_pdf", "pdf");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_xlsx() {
    let store_dir = setup_test_store("export_xlsx");
    init_store_with_data(&store_dir);

    let out = temp_out("export_xlsx", "xlsx");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_rejects_relative_path() {
    let store_dir = setup_test_store("export_relative");
    init_store_with_data(&store_dir);

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let store_dir = setup_test_store("export_empty_range");
    init_store_with_data(&store_dir);

    let out = temp_out("export_empty_range", "csv");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "csv", "--file", &out, "--range", "2019",
        ])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let store_dir = setup_test_store("export_force");
    init_store_with_data(&store_dir);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("stale"));
}

#[test]
fn test_export_declined_overwrite_fails() {
    let store_dir = setup_test_store("export_declined");
    init_store_with_data(&store_dir);

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").expect("seed existing file");

    rtc()
        .args([
            "--store", &store_dir, "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    let content = fs::read_to_string(&out).expect("read untouched file");
    assert_eq!(content, "keep me");
}

#[test]
fn test_backup_copies_store_file() {
    let store_dir = setup_test_store("backup_copy");
    init_store_with_data(&store_dir);

    let out = temp_out("backup_copy", "json");

    rtc()
        .args(["--store", &store_dir, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let content = fs::read_to_string(&out).expect("read backup");
    assert!(content.contains("2025-09-01"));
}

#[test]
fn test_backup_compressed() {
    let store_dir = setup_test_store("backup_zip");
    init_store_with_data(&store_dir);

    let out = temp_out("backup_zip", "json");
    let zipped = temp_out("backup_zip", "zip");

    rtc()
        .args(["--store", &store_dir, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&zipped).exists());
    assert!(!std::path::Path::new(&out).exists());
}
