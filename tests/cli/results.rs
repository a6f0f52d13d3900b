use crate::cli::support::{event_dir, hackjudge, read_output, write_data};
use predicates::prelude::*;

// ============================================================================
// results overall
// ============================================================================

#[test]
fn test_overall_ranking_csv() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "results", "overall"])
        .assert()
        .success()
        .stdout(
            "Rank,ProjectName,Innovation,Value & Impact,Completeness,Technical Implementation,Overall Score\n\
             1,Beta,9.00,9.00,9.00,10.00,9.25\n\
             2,Alpha,7.00,7.50,8.00,8.50,7.75\n\
             3,Gamma,5.00,5.00,5.00,5.00,5.00\n",
        );

    let csv = read_output(dir.path(), "judging/overall_scores.csv");
    assert!(csv.starts_with("Rank,ProjectName,"));
    assert!(read_output(dir.path(), "judging/overall_scores.txt").contains("Beta"));
}

#[test]
fn test_overall_count_limits_rows() {
    let dir = event_dir();

    let output = hackjudge()
        .args(["--root", dir.path().to_str().unwrap(), "--format", "json"])
        .args(["results", "overall", "--count", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranking = json["ranking"].as_array().unwrap();
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0]["project"], "Beta");
    assert_eq!(ranking[1]["rank"], 2);
    assert_eq!(ranking[1]["overall_score"], 7.75);
    assert_eq!(ranking[1]["criteria"]["Innovation"], 7.0);
    assert_eq!(ranking[1]["criteria"]["Technical Implementation"], 8.5);
    assert!(json["files"].as_array().unwrap().len() == 2);
}

#[test]
fn test_overall_count_zero_keeps_all() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "results", "overall", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3,Gamma"));
}

#[test]
fn test_negative_count_rejected() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "overall", "--count=-1"])
        .assert()
        .code(2);
}

// ============================================================================
// results track
// ============================================================================

#[test]
fn test_track_by_name() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "track", "webAI"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WEBAI RESULTS\n"))
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Beta").not());

    assert!(read_output(dir.path(), "judging/tracks.csv").contains("1,Alpha"));
}

#[test]
fn test_track_by_index() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "results", "track", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,Beta"))
        .stdout(predicate::str::contains("2,Alpha"))
        .stdout(predicate::str::contains("Gamma").not());
}

#[test]
fn test_track_without_entries() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "track", "Disaster Response"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Entries"));
}

#[test]
fn test_unknown_track_is_usage_error() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "json", "results", "track", "Robotics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""));
}

// ============================================================================
// results cheat / list / export-all
// ============================================================================

#[test]
fn test_cheat_list() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "results", "cheat"])
        .assert()
        .success()
        .stdout("ProjectName\nGamma\n");

    assert_eq!(
        read_output(dir.path(), "judging/cheat_list.csv"),
        "ProjectName\nGamma\n"
    );
}

#[test]
fn test_list_with_export() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "list", "--export", "all_results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MAIN TRACK RESULTS"))
        .stdout(predicate::str::contains("PUBLIC SAFETY INSIGHTS RESULTS"));

    let text = read_output(dir.path(), "all_results.txt");
    assert!(text.contains(
        "DISASTER RESPONSE RESULTS\n-------------------------------------------------\nNo Entries"
    ));
    assert!(text.contains("CYBERSECURITY RESULTS"));
}

#[test]
fn test_list_rejects_export_path() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "list", "--export", "../escape"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--export"));
}

#[test]
fn test_export_all_skips_empty_tracks() {
    let dir = event_dir();

    hackjudge()
        .current_dir(dir.path())
        .args(["--quiet", "results", "export-all"])
        .assert()
        .success();

    let judging = dir.path().join("output/judging");
    for stem in ["best_overall", "main_track", "webai", "cybersecurity"] {
        assert!(judging.join(format!("{stem}.csv")).exists(), "{stem}.csv");
        assert!(judging.join(format!("{stem}.txt")).exists(), "{stem}.txt");
    }
    assert!(!judging.join("disaster_response.csv").exists());
    assert!(read_output(dir.path(), "judging/main_track.txt").starts_with("MAIN TRACK RESULTS\n"));
}

// ============================================================================
// Load errors
// ============================================================================

#[test]
fn test_missing_criterion_column() {
    let dir = event_dir();
    write_data(
        dir.path(),
        "scores.csv",
        "ProjectName,Judge Name,Value & Impact,Completeness,Technical Implementation\nAlpha,Ada,7,9,8\n",
    );

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "overall"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing required column 'Innovation'"));
}

#[test]
fn test_non_numeric_score() {
    let dir = event_dir();
    write_data(
        dir.path(),
        "scores.csv",
        "ProjectName,Judge Name,Innovation,Value & Impact,Completeness,Technical Implementation\nAlpha,Ada,great,7,9,8\n",
    );

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "overall"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid score in Innovation at row 2"));
}

#[test]
fn test_missing_scores_file() {
    let dir = tempfile::tempdir().unwrap();

    hackjudge()
        .current_dir(dir.path())
        .args(["results", "overall"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_explicit_scores_file() {
    let dir = event_dir();
    std::fs::write(
        dir.path().join("round2.csv"),
        "ProjectName,Judge Name,Innovation,Value & Impact,Completeness,Technical Implementation\nZeta,Ada,1,2,3,4\n",
    )
    .unwrap();

    hackjudge()
        .current_dir(dir.path())
        .args(["--format", "csv", "results", "--file", "round2.csv", "overall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,Zeta,1.00,2.00,3.00,4.00,2.50"));
}
