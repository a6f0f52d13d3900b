//! Score aggregation and ranking
//!
//! Ordering contract: projects are sorted by mean Overall Score, highest
//! first. The sort is stable, so projects with equal means keep the order
//! in which they first appear in the input records. Ranks are positional
//! (1, 2, 3, ...) and never shared.

mod tracks;

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Serialize;

use crate::scores::{CriterionScores, JudgeScoreRecord};

pub use tracks::{slug as track_slug, TrackList};

/// Per-project means across every judge who scored it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedProject {
    pub rank: usize,
    pub project: String,
    pub criteria: CriterionScores,
    pub overall_score: f64,
    /// Number of judge records that went into the means
    pub judges: usize,
}

/// Ranking of one configured track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackResult {
    pub track: String,
    pub entries: Vec<AggregatedProject>,
}

struct Accumulator<'a> {
    project: &'a str,
    criteria: CriterionScores,
    overall: f64,
    count: usize,
}

/// Group records by project, average them and rank the result.
///
/// With `track` set, only records whose first or second track equals it
/// exactly are considered; an unmatched track yields an empty ranking.
pub fn aggregate(records: &[JudgeScoreRecord], track: Option<&str>) -> Vec<AggregatedProject> {
    let mut groups: Vec<Accumulator<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let selected = records
        .iter()
        .filter(|r| track.map_or(true, |t| r.in_track(t)));

    for record in selected {
        let slot = *index.entry(record.project.as_str()).or_insert_with(|| {
            groups.push(Accumulator {
                project: &record.project,
                criteria: CriterionScores::default(),
                overall: 0.0,
                count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.criteria.add(&record.scores);
        group.overall += record.overall_score;
        group.count += 1;
    }

    let mut projects: Vec<AggregatedProject> = groups
        .into_iter()
        .map(|g| {
            let n = g.count as f64;
            AggregatedProject {
                rank: 0,
                project: g.project.to_string(),
                criteria: g.criteria.divided_by(n),
                overall_score: g.overall / n,
                judges: g.count,
            }
        })
        .collect();

    // sort_by is stable: ties keep first-appearance order
    projects.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
    for (i, project) in projects.iter_mut().enumerate() {
        project.rank = i + 1;
    }

    tracing::debug!(
        track = track.unwrap_or("overall"),
        projects = projects.len(),
        "aggregate"
    );

    projects
}

/// Keep the first `n` ranked entries; `None` or `Some(0)` keeps all
pub fn top_n(mut ranked: Vec<AggregatedProject>, n: Option<usize>) -> Vec<AggregatedProject> {
    if let Some(n) = n.filter(|&n| n > 0) {
        ranked.truncate(n);
    }
    ranked
}

/// Rank every configured track, in configured order
pub fn track_results(
    records: &[JudgeScoreRecord],
    tracks: &TrackList,
    n: Option<usize>,
) -> Vec<TrackResult> {
    tracks
        .iter()
        .map(|track| TrackResult {
            track: track.to_string(),
            entries: top_n(aggregate(records, Some(track)), n),
        })
        .collect()
}

/// Distinct projects carrying at least one cheating flag, first-seen order
pub fn flagged(records: &[JudgeScoreRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| r.cheating)
        .filter(|r| seen.insert(r.project.as_str()))
        .map(|r| r.project.clone())
        .collect()
}
