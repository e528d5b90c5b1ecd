//! End-to-end CLI tests.
//!
//! Each test points HOME at a fresh temporary directory so config and
//! database state never leak between tests or into the real home.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn focal(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focal").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn status_with_no_history() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active focus session"));
}

#[test]
fn status_json_reports_null_active() {
    let home = TempDir::new().unwrap();
    let output = focal(&home)
        .args(["status", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["active"].is_null());
}

#[test]
fn history_empty() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions"));
}

#[test]
fn offline_tasks_show_sample_data() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .args(["--offline", "tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ship the mobile app beta"));
}

#[test]
fn tasks_add_list_done_round_trip() {
    let home = TempDir::new().unwrap();

    focal(&home)
        .args(["tasks", "add", "Write the quarterly report", "-p", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task"));

    focal(&home)
        .args(["tasks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write the quarterly report"));

    focal(&home)
        .args(["tasks", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task"));

    // Completed tasks drop out of the default list
    focal(&home)
        .args(["tasks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write the quarterly report").not());
}

#[test]
fn tasks_done_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .args(["tasks", "done", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn offline_task_writes_are_rejected() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .args(["--offline", "tasks", "add", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("offline"));
}

#[test]
fn stats_lifetime_overview() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus statistics"));
}

#[test]
fn stats_period_json_shape() {
    let home = TempDir::new().unwrap();
    let output = focal(&home)
        .args(["stats", "--period", "today", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["metrics"]["focus_minutes"], 0);
    assert!(value["metrics"]["focus_delta"].is_null());
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();

    focal(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));

    assert!(home.path().join(".focal").join("config.yaml").exists());

    let output = focal(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["focus"]["session_minutes"], 25);
    assert_eq!(value["focus"]["break_minutes"], 5);
}

#[test]
fn start_rejects_bad_duration_before_countdown() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .args(["start", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized duration"));
}

#[test]
fn start_rejects_unknown_task_before_countdown() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .args(["start", "25", "-t", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focal"));
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    focal(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stats"));
}
