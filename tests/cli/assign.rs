use crate::cli::support::{event_dir, hackjudge, read_output, write_data};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Assignment output
// ============================================================================

#[test]
fn test_assign_csv_panels() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "assign", "--no-publish"])
        .assert()
        .success()
        .stdout(
            "Table,Project,Judge\n\
             1,Alpha,Ada\n1,Alpha,Grace\n1,Alpha,Linus\n\
             2,Beta,Mae\n2,Beta,Ada\n2,Beta,Grace\n\
             3,Gamma,Linus\n3,Gamma,Mae\n3,Gamma,Ada\n",
        );
}

#[test]
fn test_assign_writes_schedule_and_judge_sheets() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["assign", "--no-publish"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Assigned 3 tables with 3 judges each (4 judges available)",
        ))
        .stdout(predicate::str::contains("Judge loads: Ada 3, Grace 2, Linus 2, Mae 2"))
        .stdout(predicate::str::contains("Table numbers not published"));

    let schedule = read_output(dir.path(), "judging/judge_assignments.txt");
    assert!(schedule.starts_with("Ada\n"));
    assert!(schedule.contains("Mae\n--------------------------------\nTable      Project\n2          Beta\n3          Gamma\n"));

    assert_eq!(
        read_output(dir.path(), "judging/judges/Ada.csv"),
        "Judge,Table,Project\nAda,1,Alpha\nAda,2,Beta\nAda,3,Gamma\n"
    );
    assert!(read_output(dir.path(), "judging/judge_assignments.csv").starts_with("Table,Project,Judge\n1,Alpha,Ada\n"));
}

#[test]
fn test_assign_json_plan() {
    let dir = event_dir();

    let output = hackjudge()
        .current_dir(dir.path())
        .args(["--format", "json", "assign", "--no-publish", "--panel-size", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["panel_size"], 2);
    assert_eq!(json["assignments"].as_array().unwrap().len(), 6);
    assert_eq!(json["assignments"][0]["judge"], "Ada");
    assert_eq!(json["skipped"].as_array().unwrap().len(), 0);
    assert!(json["publish"].is_null());
    assert_eq!(json["loads"][3]["judge"], "Mae");
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_assign_reports_skipped_tables() {
    let dir = event_dir();
    write_data(dir.path(), "panel.txt", "Ada\nGrace\nLinus\n");

    hackjudge()
        .current_dir(dir.path())
        .args(["assign", "--no-publish", "--judges", "data/panel.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned 1 tables"))
        .stdout(predicate::str::contains(
            "Skipped table 2 (Beta): no unused judge combination left",
        ))
        .stdout(predicate::str::contains("Skipped table 3 (Gamma)"));

    let csv = read_output(dir.path(), "judging/judge_assignments.csv");
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_assign_insufficient_judges() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["assign", "--no-publish", "--panel-size", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not enough judges: 4 available, panel size is 5"));

    assert!(!dir.path().join("output/judging/judge_assignments.csv").exists());
}

#[test]
fn test_assign_zero_panel_size() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["assign", "--no-publish", "--panel-size", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_assign_missing_judges_file() {
    let dir = event_dir();
    fs::remove_file(dir.path().join("data/judges.txt")).unwrap();

    hackjudge()
        .current_dir(dir.path())
        .args(["assign", "--no-publish"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("judges.txt"));
}

#[test]
fn test_assign_without_credentials_skips_publish() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .arg("assign")
        .assert()
        .success()
        .stdout(predicate::str::contains("Table numbers not published"))
        .stderr(predicate::str::contains("table numbers not published"));
}
