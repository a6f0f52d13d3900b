use crate::cli::support::{event_dir, hackjudge, read_output};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_file_moves_output_and_panel_size() {
    let dir = event_dir();
    fs::write(
        dir.path().join("hackjudge.toml"),
        "panel_size = 2\noutput_dir = \"reports\"\n",
    )
    .unwrap();

    hackjudge()
        .current_dir(dir.path())
        .args(["--quiet", "assign", "--no-publish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with 2 judges each"));

    assert!(dir.path().join("reports/judging/judge_assignments.csv").exists());
}

#[test]
fn test_explicit_config_path() {
    let dir = event_dir();
    fs::write(
        dir.path().join("robotics.toml"),
        "tracks = [\"Main Track\", \"Robotics\"]\n",
    )
    .unwrap();

    hackjudge()
        .current_dir(dir.path())
        .args(["--config", "robotics.toml", "results", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ROBOTICS RESULTS"))
        .stdout(predicate::str::contains("WEBAI RESULTS").not());
}

#[test]
fn test_custom_columns() {
    let dir = event_dir();
    fs::write(
        dir.path().join("hackjudge.toml"),
        "[columns]\nproject_name = [\"Team\"]\n",
    )
    .unwrap();
    fs::write(dir.path().join("data/projects.csv"), "Team\nRovers\n").unwrap();

    hackjudge()
        .current_dir(dir.path())
        .args(["--quiet", "projects"])
        .assert()
        .success();

    assert!(read_output(dir.path(), "projects/projects_list.csv").contains("1,Rovers"));
}

#[test]
fn test_invalid_config_value() {
    let dir = event_dir();
    fs::write(dir.path().join("hackjudge.toml"), "panel_size = 0\n").unwrap();

    hackjudge()
        .current_dir(dir.path())
        .arg("projects")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("panel_size"));
}

#[test]
fn test_malformed_config() {
    let dir = event_dir();
    fs::write(dir.path().join("hackjudge.toml"), "panel_size = \"three\"\n").unwrap();

    hackjudge()
        .current_dir(dir.path())
        .arg("projects")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "projects"])
        .assert()
        .code(3);
}
