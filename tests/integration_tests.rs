use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{hydro, init_log_with_data, setup_test_log};

#[test]
fn test_init_creates_log_with_schema() {
    let log_path = setup_test_log("init_creates_log");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(
        fs::read_to_string(&log_path).unwrap(),
        "Date,Time,Amount (ml)\n"
    );
}

#[test]
fn test_add_and_list_entry() {
    let log_path = setup_test_log("add_and_list");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success();

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "add",
            "250",
            "--at",
            "2024-01-01T08:30:00",
        ])
        .assert()
        .success()
        .stdout(contains("Added 250 ml at 08:30:00"));

    hydro()
        .args(["--log", &log_path, "--test", "list", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("08:30:00"))
        .stdout(contains("250"))
        .stdout(contains("Total: 250 ml"));
}

#[test]
fn test_add_rejects_zero_amount() {
    let log_path = setup_test_log("add_zero");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success();

    hydro()
        .args(["--log", &log_path, "--test", "add", "0"])
        .assert()
        .success()
        .stdout(contains("Nothing to log"));

    // nothing was appended
    assert_eq!(
        fs::read_to_string(&log_path).unwrap(),
        "Date,Time,Amount (ml)\n"
    );
}

#[test]
fn test_add_reports_goal_reached() {
    let log_path = setup_test_log("goal_reached");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success();

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "add",
            "3000",
            "--at",
            "2024-01-01T18:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("Daily goal reached"));
}

#[test]
fn test_status_shows_total_and_remaining() {
    let log_path = setup_test_log("status_totals");
    init_log_with_data(&log_path);

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "status",
            "--date",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("750 / 3000 ml"))
        .stdout(contains("2250 ml to go"));
}

#[test]
fn test_list_shows_only_requested_date() {
    let log_path = setup_test_log("list_filter_date");
    init_log_with_data(&log_path);

    hydro()
        .args(["--log", &log_path, "--test", "list", "--date", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("09:15:00"))
        .stdout(contains("08:30:00").not());
}

#[test]
fn test_list_all_shows_every_entry() {
    let log_path = setup_test_log("list_all");
    init_log_with_data(&log_path);

    hydro()
        .args(["--log", &log_path, "--test", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("09:15:00"));
}

#[test]
fn test_list_empty_day_message() {
    let log_path = setup_test_log("list_empty");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success();

    hydro()
        .args(["--log", &log_path, "--test", "list", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn test_delete_entry_by_id() {
    let log_path = setup_test_log("delete_by_id");
    init_log_with_data(&log_path);

    // Delete the first 2024-01-01 intake (id 1) -- answer 'y' to the prompt
    hydro()
        .args(["--log", &log_path, "--test", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted 1 entry"));

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "status",
            "--date",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("500 / 3000 ml"));
}

#[test]
fn test_delete_multiple_ids() {
    let log_path = setup_test_log("delete_multi");
    init_log_with_data(&log_path);

    hydro()
        .args(["--log", &log_path, "--test", "del", "1", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted 2 entries"));

    hydro()
        .args(["--log", &log_path, "--test", "list", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn test_delete_all_entries_of_a_date() {
    let log_path = setup_test_log("delete_by_date");
    init_log_with_data(&log_path);

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "del",
            "--date",
            "2024-01-01",
        ])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted 2 entries for 2024-01-01"));

    // the other day is untouched
    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "status",
            "--date",
            "2024-01-02",
        ])
        .assert()
        .success()
        .stdout(contains("300 / 3000 ml"));
}

#[test]
fn test_delete_nonexistent_date_reports_nothing_found() {
    let log_path = setup_test_log("delete_nonexistent");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success();

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "del",
            "--date",
            "2099-01-01",
        ])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("No entries found for date"));
}

#[test]
fn test_delete_invalid_id_fails() {
    let log_path = setup_test_log("delete_invalid_id");
    init_log_with_data(&log_path);

    hydro()
        .args(["--log", &log_path, "--test", "del", "99"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No entry with id 99"));
}

#[test]
fn test_delete_cancelled_keeps_entries() {
    let log_path = setup_test_log("delete_cancelled");
    init_log_with_data(&log_path);

    hydro()
        .args(["--log", &log_path, "--test", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "status",
            "--date",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("750 / 3000 ml"));
}

#[test]
fn test_history_spans_the_requested_window() {
    let log_path = setup_test_log("history_window");
    init_log_with_data(&log_path);

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "history",
            "--days",
            "3",
            "--until",
            "2024-01-02",
        ])
        .assert()
        .success()
        .stdout(contains("2023-12-31"))
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("750 ml"))
        .stdout(contains("300 ml"));
}

#[test]
fn test_history_zero_fills_silent_days() {
    let log_path = setup_test_log("history_zero_fill");

    hydro()
        .args(["--log", &log_path, "--test", "init"])
        .assert()
        .success();

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "history",
            "--days",
            "2",
            "--until",
            "2024-03-10",
        ])
        .assert()
        .success()
        .stdout(contains("2024-03-09"))
        .stdout(contains("2024-03-10"))
        .stdout(contains("0 ml"));
}

#[test]
fn test_legacy_log_migrates_on_first_use() {
    let log_path = setup_test_log("legacy_cli_migration");
    fs::write(&log_path, "Date,Water Intake (ml)\n2024-01-01,1500\n").unwrap();

    hydro()
        .args([
            "--log",
            &log_path,
            "--test",
            "status",
            "--date",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("Legacy daily-total schema detected"))
        .stdout(contains("1500 / 3000 ml"));

    assert!(
        fs::read_to_string(&log_path)
            .unwrap()
            .contains("2024-01-01,00:00:00,1500")
    );
}

#[test]
fn test_config_print_shows_defaults() {
    let log_path = setup_test_log("config_print");

    hydro()
        .args(["--log", &log_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Daily goal"))
        .stdout(contains("History window"));
}
