//! Basic CLI E2E tests.
//!
//! Tests invoke the questlog binary with an isolated data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against `dir` and return (stdout, stderr, code).
fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_questlog"))
        .env("QUESTLOG_DATA_DIR", dir)
        .args(args)
        .output()
        .expect("failed to execute questlog");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn goal_add_and_list() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(
        dir.path(),
        &[
            "goal",
            "add",
            "simple",
            "Run a marathon",
            "--description",
            "Finish 42km",
            "--points",
            "100",
        ],
    );
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["goal", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1. [ ] Run a marathon - Finish 42km"));
}

#[test]
fn record_completes_a_simple_goal() {
    let dir = TempDir::new().unwrap();
    run_cli(
        dir.path(),
        &["goal", "add", "simple", "Marathon", "--points", "100"],
    );

    let (stdout, _, code) = run_cli(dir.path(), &["record", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("+100 points! Total: 100"));
    assert!(stdout.contains("Goal complete: Marathon"));

    // Completion persisted to the data file.
    let (stdout, _, _) = run_cli(dir.path(), &["goal", "list"]);
    assert!(stdout.contains("[X] Marathon"));

    // Second record is a no-op.
    let (stdout, _, code) = run_cli(dir.path(), &["record", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("+0 points! Total: 100"));
}

#[test]
fn record_rejects_an_out_of_range_index() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["record", "7"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("out of bounds"));
}

#[test]
fn progressive_goal_needs_an_amount() {
    let dir = TempDir::new().unwrap();
    run_cli(
        dir.path(),
        &[
            "goal",
            "add",
            "progressive",
            "Novel",
            "--points-per-unit",
            "2",
            "--target",
            "10",
        ],
    );

    let (_, stderr, code) = run_cli(dir.path(), &["record", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("progress"));

    let (stdout, _, code) = run_cli(dir.path(), &["record", "1", "--amount", "4"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("+8 points! Total: 8"));
}

#[test]
fn status_reports_progression() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Level: 1 - Beginner"));
    assert!(stdout.contains("Total Score: 0 points"));

    run_cli(
        dir.path(),
        &["goal", "add", "eternal", "Grind", "--points", "1000"],
    );
    let (stdout, _, _) = run_cli(dir.path(), &["record", "1"]);
    assert!(stdout.contains("LEVEL UP! You reached level 2 - Apprentice"));
    assert!(stdout.contains("ACHIEVEMENT UNLOCKED: First Steps: Reach Level 2"));

    let (stdout, _, _) = run_cli(dir.path(), &["status"]);
    assert!(stdout.contains("Level: 2 - Apprentice"));
    assert!(stdout.contains("First Steps: Reach Level 2"));
}

#[test]
fn goal_list_json_is_valid_json() {
    let dir = TempDir::new().unwrap();
    run_cli(
        dir.path(),
        &["goal", "add", "negative", "Junk food", "--points", "7"],
    );

    let (stdout, _, code) = run_cli(dir.path(), &["goal", "list", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn data_path_and_load_report() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["data", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("goals.txt"));

    let (stdout, _, code) = run_cli(dir.path(), &["data", "load"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No saved data found"));
}
