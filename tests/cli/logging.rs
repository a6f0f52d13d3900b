use crate::cli::support::{event_dir, hackjudge};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_events() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "results", "overall"])
        .assert()
        .success()
        .stderr(predicate::str::contains("normalize_scores"));
}

#[test]
fn test_default_level_hides_debug_events() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "overall"])
        .assert()
        .success()
        .stderr(predicate::str::contains("normalize_scores").not());
}

#[test]
fn test_verbose_shows_debug_events() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--verbose", "results", "overall"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "results", "cheat"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"normalize_scores\""));
}

#[test]
fn test_env_filter_override() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .env("HACKJUDGE_LOG", "hackjudge_core=debug")
        .args(["results", "overall"])
        .assert()
        .success()
        .stderr(predicate::str::contains("normalize_scores"));
}
