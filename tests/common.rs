#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rshiftlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB with pinned rate/limit, so a local config file cannot
/// change the expected figures.
pub fn init_db(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args(["--db", db_path, "settings", "--rate", "10", "--limit", "20"])
        .assert()
        .success();
}

/// Initialize DB and add the four sample shifts:
///
/// | date       | in    | out   | hours |
/// |------------|-------|-------|-------|
/// | 2025-08-09 | 01:30 | 05:00 | 3.5   |
/// | 2025-08-09 | 06:00 | 11:00 | 5     |
/// | 2025-08-10 | -     | -     | 9.5   |
/// | 2025-08-16 | 01:00 | 06:00 | 5     |
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    let shifts: [&[&str]; 4] = [
        &["add", "2025-08-09", "--in", "01:30", "--out", "05:00"],
        &["add", "2025-08-09", "--in", "06:00", "--out", "11:00"],
        &["add", "2025-08-10", "--hours", "9.5"],
        &["add", "2025-08-16", "--in", "01:00", "--out", "06:00"],
    ];

    for args in shifts {
        rsl()
            .args(["--db", db_path])
            .args(args)
            .assert()
            .success();
    }
}
