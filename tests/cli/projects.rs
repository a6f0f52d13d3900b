use crate::cli::support::{event_dir, hackjudge, read_output};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_projects_listing() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("HACKATHON PROJECT SUBMISSIONS\n"))
        .stdout(predicate::str::contains("1       Alpha\n2       Beta\n3       Gamma"));

    assert_eq!(
        read_output(dir.path(), "projects/projects_list.csv"),
        "Table,Project Name\n1,Alpha\n2,Beta\n3,Gamma\n"
    );
}

#[test]
fn test_projects_uses_event_name_from_config() {
    let dir = event_dir();
    fs::write(
        dir.path().join("hackjudge.toml"),
        "event_name = \"RIVERHACKS25 PROJECT SUBMISSIONS\"\n",
    )
    .unwrap();

    hackjudge()
        .current_dir(dir.path())
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("RIVERHACKS25 PROJECT SUBMISSIONS\n"));
}

#[test]
fn test_projects_json_cleans_tracks() {
    let dir = event_dir();

    let output = hackjudge()
        .current_dir(dir.path())
        .args(["--format", "json", "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["projects"][1]["project"], "Beta");
    assert_eq!(json["projects"][1]["table"], 2);
    assert_eq!(json["projects"][1]["track_a"], "Main Track");
    assert!(json["projects"][1]["track_b"].is_null());
}

#[test]
fn test_projects_missing_name_column() {
    let dir = event_dir();
    fs::write(dir.path().join("data/projects.csv"), "Title\nAlpha\n").unwrap();

    hackjudge()
        .current_dir(dir.path())
        .arg("projects")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing required column 'Project Name'"));
}
