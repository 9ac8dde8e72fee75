use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, rsl, setup_test_db, temp_out};

#[test]
fn test_export_csv_canonical_columns() {
    let db_path = setup_test_db("export_csv_columns");
    let out = temp_out("export_csv_columns", "csv");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 4 entries"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Date,Start,End,Hours,Earnings,Paid"));
    assert_eq!(lines.next(), Some("2025-08-09,01:30,05:00,3.5,35.00,No"));
    assert_eq!(lines.next(), Some("2025-08-09,06:00,11:00,5,50.00,No"));
    assert_eq!(lines.next(), Some("2025-08-10,-,-,9.5,95.00,No"));
    assert_eq!(lines.next(), Some("2025-08-16,01:00,06:00,5,50.00,No"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    let out = temp_out("export_json_range", "json");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2025-08-09:2025-08-10",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[2]["date"], "2025-08-10");
    assert_eq!(arr[2]["hours"], 9.5);
    assert_eq!(arr[2]["paid"], false);
}

#[test]
fn test_export_without_data_fails() {
    let db_path = setup_test_db("export_no_data");
    let out = temp_out("export_no_data", "csv");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .failure()
        .stderr(contains("No data to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    let out = temp_out("export_bad_range", "csv");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "August"])
        .assert()
        .failure();
}
