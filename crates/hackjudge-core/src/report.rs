//! Report views over rankings, assignments and rosters
//!
//! Every view is a [`Table`] (written out as CSV) and, where the printed
//! layout differs from a plain grid, a text rendering.

use crate::assign::{Assignment, JudgeSchedule};
use crate::ranking::{AggregatedProject, TrackResult};
use crate::roster::ProjectRecord;
use crate::scores::Criterion;
use crate::table::Table;

const RULE: &str = "-------------------------------------------------";

/// Two-decimal rendering used for every score cell
pub fn score(value: f64) -> String {
    format!("{:.2}", value)
}

fn strings<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Full ranked view: rank, project, per-criterion means, overall mean
pub fn ranking_table(entries: &[AggregatedProject]) -> Table {
    let mut headers = strings(["Rank", "ProjectName"]);
    headers.extend(Criterion::ALL.iter().map(|c| c.label().to_string()));
    headers.push("Overall Score".to_string());

    let rows = entries
        .iter()
        .map(|e| {
            let mut row = vec![e.rank.to_string(), e.project.clone()];
            row.extend(e.criteria.iter().map(|(_, v)| score(v)));
            row.push(score(e.overall_score));
            row
        })
        .collect();

    Table::new(headers, rows)
}

/// Short ranked view: rank, project, overall mean
pub fn standings_table(entries: &[AggregatedProject]) -> Table {
    let rows = entries
        .iter()
        .map(|e| vec![e.rank.to_string(), e.project.clone(), score(e.overall_score)])
        .collect();
    Table::new(strings(["Rank", "ProjectName", "Overall Score"]), rows)
}

pub fn flagged_table(projects: &[String]) -> Table {
    Table::new(
        strings(["ProjectName"]),
        projects.iter().map(|p| vec![p.clone()]).collect(),
    )
}

/// Per-track sections; tracks without entries read "No Entries"
pub fn standings_listing(results: &[TrackResult]) -> String {
    let sections: Vec<String> = results
        .iter()
        .map(|r| {
            let body = if r.entries.is_empty() {
                "No Entries\n".to_string()
            } else {
                render_aligned(&standings_table(&r.entries))
            };
            format!("\n{} RESULTS\n{}\n{}", r.track.to_uppercase(), RULE, body)
        })
        .collect();
    sections.join("\n")
}

pub fn assignment_table(assignments: &[Assignment]) -> Table {
    let rows = assignments
        .iter()
        .map(|a| vec![a.table.to_string(), a.project.clone(), a.judge.clone()])
        .collect();
    Table::new(strings(["Table", "Project", "Judge"]), rows)
}

/// Judge-by-judge table listing
pub fn schedule_text(schedules: &[JudgeSchedule]) -> String {
    let mut lines = Vec::new();
    for schedule in schedules {
        lines.push(schedule.judge.clone());
        lines.push("--------------------------------".to_string());
        lines.push("Table      Project".to_string());
        for t in &schedule.tables {
            lines.push(format!("{:<10} {}", t.table, t.project));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// One judge's sheet: Judge, Table, Project
pub fn judge_sheet(schedule: &JudgeSchedule) -> Table {
    let rows = schedule
        .tables
        .iter()
        .map(|t| vec![schedule.judge.clone(), t.table.to_string(), t.project.clone()])
        .collect();
    Table::new(strings(["Judge", "Table", "Project"]), rows)
}

/// File-safe sheet name for a judge: 31 characters, no path separators
pub fn sheet_name(judge: &str) -> String {
    judge
        .chars()
        .take(31)
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// Numbered project list; a project's table is its 1-based position
pub fn projects_listing(title: &str, projects: &[ProjectRecord]) -> (String, Table) {
    let mut lines = vec![title.to_string(), RULE.to_string(), "Table   Project".to_string()];
    let mut rows = Vec::with_capacity(projects.len());
    for (i, p) in projects.iter().enumerate() {
        lines.push(format!("{:<8}{}", i + 1, p.name));
        rows.push(vec![(i + 1).to_string(), p.name.clone()]);
    }
    (lines.join("\n"), Table::new(strings(["Table", "Project Name"]), rows))
}

/// Contact sheet for the selected projects
pub fn contacts_sheet(projects: &[&ProjectRecord]) -> (String, Table) {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    for project in projects {
        lines.push(project.name.clone());
        lines.push("-".repeat(45));
        for m in &project.members {
            lines.push(format!("{:<20} {:<20} {:<25}", m.name, m.email, project.name));
            rows.push(vec![m.name.clone(), m.email.clone(), project.name.clone()]);
        }
        lines.push(String::new());
    }

    (lines.join("\n"), Table::new(strings(["Name", "Email", "Project"]), rows))
}

/// Render a table as left-aligned columns separated by two spaces
pub fn render_aligned(table: &Table) -> String {
    let mut widths: Vec<usize> = table.headers().iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(table.headers());
    out.push('\n');
    for row in table.rows() {
        out.push_str(&line(row.as_slice()));
        out.push('\n');
    }
    out
}
