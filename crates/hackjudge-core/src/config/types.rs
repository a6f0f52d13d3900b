//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default tracks, in presentation order
pub const DEFAULT_TRACKS: &[&str] = &[
    "Main Track",
    "Disaster Response",
    "Accessible City",
    "Cybersecurity",
    "webAI",
    "Mobility Access",
    "Public Safety Insights",
];

/// Default number of judges seated at each table
pub const DEFAULT_PANEL_SIZE: usize = 3;

/// Event configuration, normally read from `hackjudge.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Title printed above the project listing
    pub event_name: String,

    /// Judges per table
    pub panel_size: usize,

    /// Directory holding the input snapshots
    pub data_dir: PathBuf,

    /// Directory receiving exported reports
    pub output_dir: PathBuf,

    /// Judging tracks, in presentation order
    pub tracks: Vec<String>,

    pub files: FileConfig,

    pub columns: ColumnConfig,

    pub source: SourceConfig,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event_name: "HACKATHON PROJECT SUBMISSIONS".to_string(),
            panel_size: DEFAULT_PANEL_SIZE,
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            tracks: DEFAULT_TRACKS.iter().map(|t| t.to_string()).collect(),
            files: FileConfig::default(),
            columns: ColumnConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

/// Snapshot file names inside `data_dir`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub projects: String,
    pub scores: String,
    pub judges: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            projects: "projects.csv".to_string(),
            scores: "scores.csv".to_string(),
            judges: "judges.txt".to_string(),
        }
    }
}

/// Header aliases for each logical column. The first alias present wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Project reference in the judging table
    pub project: Vec<String>,
    pub judge: Vec<String>,
    pub innovation: Vec<String>,
    pub value_impact: Vec<String>,
    pub completeness: Vec<String>,
    pub technical: Vec<String>,
    pub track_a: Vec<String>,
    pub track_b: Vec<String>,
    pub cheating: Vec<String>,
    /// Project name in the project roster
    pub project_name: Vec<String>,
    /// Track columns in the project roster
    pub roster_track_a: Vec<String>,
    pub roster_track_b: Vec<String>,
}

fn aliases(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            project: aliases(&["Project Name (from Project)", "ProjectName", "Project"]),
            judge: aliases(&["Judge Name", "Judge"]),
            innovation: aliases(&["Innovation"]),
            value_impact: aliases(&["Value & Impact"]),
            completeness: aliases(&["Completeness"]),
            technical: aliases(&["Technical Implementation"]),
            track_a: aliases(&["Track Option 1 (from ProjectTable 4)", "Track1"]),
            track_b: aliases(&["Track Option 2 (from ProjectTable 4)", "Track2"]),
            cheating: aliases(&["Cheating"]),
            project_name: aliases(&["Project Name", "ProjectName"]),
            roster_track_a: aliases(&["Track Option 1", "Track1"]),
            roster_track_b: aliases(&["Track Option 2", "Track2"]),
        }
    }
}

/// Remote table store settings. The API key is never stored here; it is
/// resolved from the environment by [`SourceConfig::credentials`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_id: Option<String>,
    pub project_table: String,
    pub judging_table: String,
    /// Field on the project row that receives the table number
    pub table_field: String,
    /// Field used to look a project row up by name
    pub project_name_field: String,
    pub api_url: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub max_pages: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_id: None,
            project_table: "ProjectTable".to_string(),
            judging_table: "JudgingTable".to_string(),
            table_field: "Table".to_string(),
            project_name_field: "Project Name".to_string(),
            api_url: "https://api.airtable.com/v0".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            max_pages: 1000,
        }
    }
}
