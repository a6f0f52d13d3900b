//! Judge score loading
//!
//! Turns raw judging-table rows into [`JudgeScoreRecord`]s. Each record
//! carries the four criterion scores and their mean, the "Overall Score".

use std::fmt;
use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::ColumnConfig;
use crate::error::{HackError, Result};
use crate::table::Table;

/// Name used for the judging table in error messages
const SCORES_TABLE: &str = "judging table";

/// The fixed judging criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Innovation,
    ValueImpact,
    Completeness,
    TechnicalImplementation,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Innovation,
        Criterion::ValueImpact,
        Criterion::Completeness,
        Criterion::TechnicalImplementation,
    ];

    /// Column heading used in reports
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Innovation => "Innovation",
            Criterion::ValueImpact => "Value & Impact",
            Criterion::Completeness => "Completeness",
            Criterion::TechnicalImplementation => "Technical Implementation",
        }
    }

    fn aliases(self, columns: &ColumnConfig) -> &[String] {
        match self {
            Criterion::Innovation => &columns.innovation,
            Criterion::ValueImpact => &columns.value_impact,
            Criterion::Completeness => &columns.completeness,
            Criterion::TechnicalImplementation => &columns.technical,
        }
    }

    fn position(self) -> usize {
        match self {
            Criterion::Innovation => 0,
            Criterion::ValueImpact => 1,
            Criterion::Completeness => 2,
            Criterion::TechnicalImplementation => 3,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One numeric value per criterion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CriterionScores([f64; 4]);

impl CriterionScores {
    pub fn new(innovation: f64, value_impact: f64, completeness: f64, technical: f64) -> Self {
        Self([innovation, value_impact, completeness, technical])
    }

    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.iter().map(move |c| (*c, self[*c]))
    }

    pub(crate) fn add(&mut self, other: &CriterionScores) {
        for (total, value) in self.0.iter_mut().zip(other.0) {
            *total += value;
        }
    }

    pub(crate) fn divided_by(&self, n: f64) -> Self {
        Self(self.0.map(|v| v / n))
    }
}

impl Index<Criterion> for CriterionScores {
    type Output = f64;

    fn index(&self, criterion: Criterion) -> &f64 {
        &self.0[criterion.position()]
    }
}

/// Serialized as `{ "<criterion label>": value, .. }`
impl Serialize for CriterionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Criterion::ALL.len()))?;
        for (criterion, value) in self.iter() {
            map.serialize_entry(criterion.label(), &value)?;
        }
        map.end()
    }
}

/// One judge's scoring of one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeScoreRecord {
    pub project: String,
    pub judge: String,
    pub scores: CriterionScores,
    pub track_a: Option<String>,
    pub track_b: Option<String>,
    pub cheating: bool,
    /// Mean of the four criterion scores
    pub overall_score: f64,
}

impl JudgeScoreRecord {
    pub fn new(project: impl Into<String>, judge: impl Into<String>, scores: CriterionScores) -> Self {
        Self {
            project: project.into(),
            judge: judge.into(),
            overall_score: scores.mean(),
            scores,
            track_a: None,
            track_b: None,
            cheating: false,
        }
    }

    pub fn with_tracks(mut self, track_a: Option<&str>, track_b: Option<&str>) -> Self {
        self.track_a = track_a.map(str::to_string);
        self.track_b = track_b.map(str::to_string);
        self
    }

    pub fn with_cheating(mut self, cheating: bool) -> Self {
        self.cheating = cheating;
        self
    }

    /// Exact, case-sensitive track membership
    pub fn in_track(&self, track: &str) -> bool {
        self.track_a.as_deref() == Some(track) || self.track_b.as_deref() == Some(track)
    }
}

/// Resolved column positions for one judging table
struct ScoreColumns {
    project: usize,
    judge: usize,
    criteria: [usize; 4],
    track_a: Option<usize>,
    track_b: Option<usize>,
    cheating: Option<usize>,
}

impl ScoreColumns {
    fn resolve(table: &Table, columns: &ColumnConfig) -> Result<Self> {
        let mut criteria = [0usize; 4];
        for criterion in Criterion::ALL {
            criteria[criterion.position()] =
                table.require_column(SCORES_TABLE, criterion.aliases(columns))?;
        }

        Ok(Self {
            project: table.require_column(SCORES_TABLE, &columns.project)?,
            judge: table.require_column(SCORES_TABLE, &columns.judge)?,
            criteria,
            track_a: table.find_column(&columns.track_a),
            track_b: table.find_column(&columns.track_b),
            cheating: table.find_column(&columns.cheating),
        })
    }
}

/// Normalize a raw judging table into score records.
///
/// Rows with no project, or with every criterion blank (not yet scored),
/// are skipped. A partially scored or non-numeric row is an error.
pub fn normalize(table: &Table, columns: &ColumnConfig) -> Result<Vec<JudgeScoreRecord>> {
    let cols = ScoreColumns::resolve(table, columns)?;
    let mut records = Vec::with_capacity(table.len());
    let mut skipped = 0usize;

    for (i, row) in table.rows().iter().enumerate() {
        // header is line 1
        let line = i + 2;
        let project = clean_list_text(&row[cols.project]);
        let raw_scores: Vec<&str> = cols.criteria.iter().map(|&c| row[c].trim()).collect();

        if project.is_empty() || raw_scores.iter().all(|s| s.is_empty()) {
            skipped += 1;
            continue;
        }

        let mut values = [0.0f64; 4];
        for criterion in Criterion::ALL {
            let raw = raw_scores[criterion.position()];
            values[criterion.position()] = parse_score(raw).ok_or_else(|| HackError::InvalidScore {
                row: line,
                column: criterion.label().to_string(),
                value: raw.to_string(),
            })?;
        }

        let scores = CriterionScores(values);
        let track_a = optional_cell(row, cols.track_a);
        let track_b = optional_cell(row, cols.track_b);
        let cheating = cols.cheating.is_some_and(|c| parse_flag(&row[c]));

        records.push(
            JudgeScoreRecord::new(project, clean_list_text(&row[cols.judge]), scores)
                .with_tracks(track_a.as_deref(), track_b.as_deref())
                .with_cheating(cheating),
        );
    }

    if cols.cheating.is_none() {
        warn!("judging table has no cheating column; no projects will be flagged");
    }
    debug!(records = records.len(), skipped, "normalize_scores");

    Ok(records)
}

fn optional_cell(row: &[String], column: Option<usize>) -> Option<String> {
    column
        .map(|c| clean_list_text(&row[c]))
        .filter(|s| !s.is_empty())
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Checkbox-style cell: true for `true`, `1`, `yes`, `y`, `checked`, `x`
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "checked" | "x"
    )
}

/// Strip stringified-list artifacts from a cell.
///
/// `['Main Track']` becomes `Main Track` and `["A", "B"]` becomes `A, B`.
/// Plain values are only trimmed; a literal `nan` is treated as blank.
pub fn clean_list_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }

    let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
    else {
        return trimmed.to_string();
    };

    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
