use crate::cli::support::{event_dir, hackjudge, read_output};
use predicates::prelude::*;

#[test]
fn test_contacts_single_project() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["contacts", "Alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ana@example.com"))
        .stdout(predicate::str::contains("ben@example.com"))
        .stdout(predicate::str::contains("cara@example.com").not());

    assert_eq!(
        read_output(dir.path(), "projects/contacts_alpha.csv"),
        "Name,Email,Project\nAna Diaz,ana@example.com,Alpha\nBen Ode,ben@example.com,Alpha\n"
    );
}

#[test]
fn test_contacts_all_projects() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "contacts", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dev Rao,dev@example.com,Gamma"));

    assert_eq!(
        read_output(dir.path(), "projects/contacts_all.csv").lines().count(),
        5
    );
}

#[test]
fn test_contacts_custom_suffix() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--quiet", "contacts", "Beta", "--suffix", "finalists"])
        .assert()
        .success();

    assert!(read_output(dir.path(), "projects/contacts_finalists.txt").starts_with("Beta\n"));
}

#[test]
fn test_contacts_unknown_project() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["contacts", "Omega"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'Omega' not found."));

    assert!(!dir.path().join("output/projects/contacts_omega.txt").exists());
}

#[test]
fn test_contacts_unknown_project_json() {
    let dir = event_dir();

    let output = hackjudge()
        .current_dir(dir.path())
        .args(["--format", "json", "contacts", "Omega"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["not_found"], "Omega");
    assert_eq!(json["files"], serde_json::json!([]));
}

#[test]
fn test_contacts_rejects_path_suffix() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["contacts", "Alpha", "--suffix", "../x"])
        .assert()
        .code(2);
}
