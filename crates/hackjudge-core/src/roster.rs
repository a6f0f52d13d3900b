//! Project and judge rosters

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::config::ColumnConfig;
use crate::error::{HackError, Result};
use crate::scores::clean_list_text;
use crate::table::Table;

const PROJECTS_TABLE: &str = "project table";

/// Team members listed per project row
pub const MAX_MEMBERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub name: String,
    pub track_a: Option<String>,
    pub track_b: Option<String>,
    pub members: Vec<Contact>,
}

/// Load the project roster. Names are unique; a repeated name keeps its
/// first row.
pub fn load_projects(table: &Table, columns: &ColumnConfig) -> Result<Vec<ProjectRecord>> {
    let name_col = table.require_column(PROJECTS_TABLE, &columns.project_name)?;
    let track_a = table.find_column(&columns.roster_track_a);
    let track_b = table.find_column(&columns.roster_track_b);
    let member_cols: Vec<(Option<usize>, Option<usize>)> = (1..=MAX_MEMBERS)
        .map(|n| {
            (
                table.find_column(&[format!("Member {n} Name")]),
                table.find_column(&[format!("Member {n} Email")]),
            )
        })
        .collect();

    let cell = |row: &[String], col: Option<usize>| -> String {
        col.map(|c| clean_list_text(&row[c])).unwrap_or_default()
    };

    let mut seen = HashSet::new();
    let mut projects = Vec::new();

    for row in table.rows() {
        let row = row.as_slice();
        let name = clean_list_text(&row[name_col]);
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            warn!(project = %name, "duplicate project row ignored");
            continue;
        }

        let members = member_cols
            .iter()
            .map(|&(n, e)| Contact {
                name: cell(row, n),
                email: cell(row, e),
            })
            .filter(|c| !c.name.is_empty() || !c.email.is_empty())
            .collect();

        projects.push(ProjectRecord {
            track_a: Some(cell(row, track_a)).filter(|s| !s.is_empty()),
            track_b: Some(cell(row, track_b)).filter(|s| !s.is_empty()),
            name,
            members,
        });
    }

    Ok(projects)
}

/// Ordered, duplicate-free judge names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JudgeRoster(Vec<String>);

impl JudgeRoster {
    /// One name per line; blank lines ignored, repeats dropped
    pub fn parse(text: &str) -> Self {
        let mut seen = HashSet::new();
        let mut judges = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if seen.insert(line) {
                judges.push(line.to_string());
            } else {
                warn!(judge = line, "duplicate judge in roster ignored");
            }
        }
        Self(judges)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HackError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of a contact lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLookup<'a> {
    Found(Vec<&'a ProjectRecord>),
    NotFound(String),
}

/// Select projects for a contact sheet: `.` means every project
pub fn select_contacts<'a>(projects: &'a [ProjectRecord], selector: &str) -> ContactLookup<'a> {
    if selector == "." {
        return ContactLookup::Found(projects.iter().collect());
    }
    match projects.iter().find(|p| p.name == selector) {
        Some(project) => ContactLookup::Found(vec![project]),
        None => ContactLookup::NotFound(selector.to_string()),
    }
}
