mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_timeline_groups_contiguous_requests() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::sample_session_log(&dir);

    Command::cargo_bin("protoscope")
        .unwrap()
        .arg("timeline")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Network.getCookies (2)"))
        .stdout(predicate::str::contains("DOM.querySelector"))
        .stdout(predicate::str::contains("[ 1:00] Network.loadResource"))
        .stdout(predicate::str::contains("Session Summary:"));
}

#[test]
fn test_timeline_filter_keeps_matching_methods() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::sample_session_log(&dir);

    Command::cargo_bin("protoscope")
        .unwrap()
        .arg("timeline")
        .arg(&log)
        .args(["--filter", "^Network\\."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Network.getCookies (2)"))
        .stdout(predicate::str::contains("DOM.querySelector").not());
}

#[test]
fn test_timeline_rejects_invalid_filter() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::sample_session_log(&dir);

    Command::cargo_bin("protoscope")
        .unwrap()
        .arg("timeline")
        .arg(&log)
        .args(["--filter", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --filter pattern"));
}

#[test]
fn test_timeline_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::empty_session_log(&dir);

    Command::cargo_bin("protoscope")
        .unwrap()
        .arg("timeline")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("No requests to display"));
}

#[test]
fn test_timeline_missing_log_fails() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("absent.jsonl");

    Command::cargo_bin("protoscope")
        .unwrap()
        .arg("timeline")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load session log"));
}
