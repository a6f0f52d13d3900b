use crate::cli::support::hackjudge;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_fetch_requires_api_key() {
    let dir = tempdir().unwrap();

    hackjudge()
        .current_dir(dir.path())
        .arg("fetch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("HACKJUDGE_AIRTABLE_KEY"));
}

#[test]
fn test_fetch_requires_base_id() {
    let dir = tempdir().unwrap();

    hackjudge()
        .current_dir(dir.path())
        .env("HACKJUDGE_AIRTABLE_KEY", "key-for-tests")
        .args(["--format", "json", "fetch"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("HACKJUDGE_AIRTABLE_BASE"));
}
