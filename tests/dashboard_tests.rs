use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, rsl, setup_test_db};

#[test]
fn test_dashboard_sample_week() {
    let db_path = setup_test_db("dashboard_sample_week");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "dashboard", "--at", "2025-08-10"])
        .assert()
        .success()
        .stdout(
            contains("18.00 hrs")
                .and(contains("£180.00"))
                .and(contains("Total owed      | 23.00 hrs | £230.00"))
                .and(contains("OK (18.00/20 hrs)")),
        );
}

#[test]
fn test_dashboard_next_week_moves_figures() {
    let db_path = setup_test_db("dashboard_next_week");
    init_db_with_data(&db_path);

    // Monday 2025-08-11: last week's 18 h become "previous week"
    rsl()
        .args(["--db", &db_path, "dashboard", "--at", "2025-08-16"])
        .assert()
        .success()
        .stdout(contains("OK (5.00/20 hrs)").and(contains("18.00 hrs")));
}

#[test]
fn test_dashboard_exceeded_limit() {
    let db_path = setup_test_db("dashboard_exceeded");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "settings", "--limit", "10"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "dashboard", "--at", "2025-08-10"])
        .assert()
        .success()
        .stdout(contains("Exceeded (18.00/10 hrs)").and(contains("100%")));
}

#[test]
fn test_dashboard_term_lifts_limit() {
    let db_path = setup_test_db("dashboard_term");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "settings", "--limit", "10"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "term", "add", "2025-08-01", "2025-08-31"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "dashboard", "--at", "2025-08-10"])
        .assert()
        .success()
        .stdout(contains("no restriction").and(contains("Exceeded").not()));
}

#[test]
fn test_dashboard_pay_cut_window() {
    let db_path = setup_test_db("dashboard_pay_cut");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "paid", "--all"])
        .assert()
        .success();

    // Sunday payday: window starts on Friday 2025-08-08, paid flags are ignored inside it
    rsl()
        .args([
            "--db",
            &db_path,
            "dashboard",
            "--at",
            "2025-08-10",
            "--payday",
            "2025-08-10",
        ])
        .assert()
        .success()
        .stdout(
            contains("Pay-cut window: 2025-08-08 → 2025-08-10")
                .and(contains("Total owed      | 18.00 hrs | £180.00"))
                .and(contains("Pending pay cut | 18.00 hrs | £180.00")),
        );
}

#[test]
fn test_dashboard_empty_database() {
    let db_path = setup_test_db("dashboard_empty");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "dashboard", "--at", "2025-08-10"])
        .assert()
        .success()
        .stdout(contains("0.00 hrs").and(contains("OK (0.00/20 hrs)")));
}

#[test]
fn test_dashboard_rejects_invalid_date() {
    let db_path = setup_test_db("dashboard_invalid_date");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "dashboard", "--at", "2025-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
