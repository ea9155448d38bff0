use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn tally(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

fn seed_ledger(dir: &Path, json: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("ledger.json"), json).unwrap();
}

#[test]
fn test_command_records_todays_commit() {
    let dir = tempdir().unwrap();

    tally(dir.path()).arg("test").assert().success();
    tally(dir.path()).arg("test").assert().success();

    let raw = fs::read_to_string(dir.path().join("ledger.json")).unwrap();
    let ledger: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let counts: Vec<u64> = ledger
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![2]);

    let log = fs::read_to_string(dir.path().join("activity.log")).unwrap();
    assert_eq!(log.lines().count(), 2);
    assert!(log.lines().all(|l| l.contains("commit recorded for")));
}

#[test]
fn stats_json_reports_totals_and_top_days() {
    let dir = tempdir().unwrap();
    seed_ledger(dir.path(), r#"{"2024-01-01": 3, "2024-01-02": 5}"#);

    let out = tally(dir.path())
        .args(["stats", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["total_commits"], 8);
    assert_eq!(v["active_days"], 2);
    assert_eq!(v["top_days"][0]["date"], "2024-01-02");
    assert_eq!(v["top_days"][0]["count"], 5);
    assert_eq!(v["top_days"][1]["date"], "2024-01-01");
    assert_eq!(v["top_days"][1]["count"], 3);
    assert_eq!(v["last_week"].as_array().unwrap().len(), 7);
}

#[test]
fn weekly_totals_sum_to_stats_total() {
    let dir = tempdir().unwrap();
    seed_ledger(
        dir.path(),
        r#"{"2024-01-01": 3, "2024-01-02": 5, "2024-03-09": 1, "2024-03-10": 4}"#,
    );

    let out = tally(dir.path())
        .args(["weekly", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let buckets = v["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets[0]["weekday"], "Sunday");
    assert_eq!(buckets[6]["weekday"], "Saturday");
    let bucket_sum: u64 = buckets.iter().map(|b| b["total"].as_u64().unwrap()).sum();
    assert_eq!(bucket_sum, v["total_commits"].as_u64().unwrap());
    assert_eq!(bucket_sum, 13);
}

#[test]
fn stats_without_data_reports_no_data() {
    let dir = tempdir().unwrap();

    let out = tally(dir.path())
        .arg("stats")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("No commit data found"));
}

#[test]
fn reset_then_stats_reports_no_data() {
    let dir = tempdir().unwrap();
    seed_ledger(dir.path(), r#"{"2024-01-01": 3}"#);
    fs::write(dir.path().join("activity.log"), "x: commit recorded for 2024-01-01\n").unwrap();

    tally(dir.path()).args(["reset", "--yes"]).assert().success();

    let out = tally(dir.path())
        .arg("stats")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("No commit data found"));
    assert_eq!(
        fs::read_to_string(dir.path().join("activity.log")).unwrap(),
        ""
    );
}

#[test]
fn log_without_file_prints_message_and_creates_nothing() {
    let dir = tempdir().unwrap();

    let out = tally(dir.path())
        .arg("log")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("no log file found"));
    assert!(!dir.path().join("activity.log").exists());
}

#[test]
fn log_shows_trailing_lines_only() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path()).unwrap();
    let mut contents = String::new();
    for n in 1..=25 {
        contents.push_str(&format!("ts: commit recorded for day {n}\n"));
    }
    fs::write(dir.path().join("activity.log"), contents).unwrap();

    let out = tally(dir.path())
        .arg("log")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.lines().count(), 20);
    assert!(text.starts_with("ts: commit recorded for day 6"));
    assert!(text.contains("day 25"));
}

#[test]
fn corrupt_ledger_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    seed_ledger(dir.path(), "{definitely not json");

    let out = tally(dir.path())
        .arg("stats")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("No commit data found"));
}

#[test]
fn unrecognized_command_exits_one() {
    let dir = tempdir().unwrap();
    tally(dir.path()).arg("bogus").assert().failure().code(1);
}

#[test]
fn help_exits_zero() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--help").assert().success();
}
