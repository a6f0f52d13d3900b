use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PROJECTS_CSV: &str = "\
Project Name,Track Option 1,Track Option 2,Member 1 Name,Member 1 Email,Member 2 Name,Member 2 Email
Alpha,Main Track,webAI,Ana Diaz,ana@example.com,Ben Ode,ben@example.com
Beta,['Main Track'],,Cara Li,cara@example.com,,
Gamma,Cybersecurity,,Dev Rao,dev@example.com,,
";

pub const SCORES_CSV: &str = "\
ProjectName,Judge Name,Innovation,Value & Impact,Completeness,Technical Implementation,Track1,Track2,Cheating
Alpha,Ada,8,7,9,8,Main Track,webAI,
Alpha,Grace,6,8,7,9,Main Track,webAI,
Beta,Ada,9,9,9,10,Main Track,,
Gamma,Linus,5,5,5,5,Cybersecurity,,checked
Delta,Mae,,,,,Main Track,,
";

pub const JUDGES_TXT: &str = "Ada\nGrace\n\nLinus\nMae\n";

/// Get a Command for hackjudge with no remote store credentials
pub fn hackjudge() -> Command {
    let mut cmd = cargo_bin_cmd!("hackjudge");
    cmd.env_remove("HACKJUDGE_AIRTABLE_KEY")
        .env_remove("HACKJUDGE_AIRTABLE_BASE")
        .env_remove("HACKJUDGE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Event directory with the project, score and judge snapshots in data/
pub fn event_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "projects.csv", PROJECTS_CSV);
    write_data(dir.path(), "scores.csv", SCORES_CSV);
    write_data(dir.path(), "judges.txt", JUDGES_TXT);
    dir
}

pub fn write_data(root: &Path, name: &str, content: &str) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(name), content).unwrap();
}

pub fn read_output(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join("output").join(relative))
        .unwrap_or_else(|e| panic!("missing output/{relative}: {e}"))
}
