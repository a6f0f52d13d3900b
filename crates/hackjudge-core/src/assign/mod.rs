//! Balanced judge assignment
//!
//! Every project gets a table (its 1-based position in the roster) and a
//! panel of `k` judges. Panels are picked greedily, table by table:
//!
//! 1. order the judges by how many tables they already have, keeping
//!    roster order among equals;
//! 2. walk the k-combinations of that ordering lexicographically;
//! 3. take the first combination whose judge set no earlier table used.
//!
//! When every combination is spent the table is left without judges and
//! reported in [`AssignmentPlan::skipped`]; later tables are still tried.

mod publish;
mod schedule;


use std::collections::HashSet;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{HackError, Result};

pub use publish::{publish_tables, ProjectStore, PublishFailure, PublishReport};
pub use schedule::{judge_schedule, JudgeSchedule, ScheduledTable};

/// One judge seated at one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub table: u32,
    pub project: String,
    pub judge: String,
}

/// A table for which no unused judge combination was left
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedTable {
    pub table: u32,
    pub project: String,
}

/// Outcome of one assignment run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentPlan {
    /// Rows grouped by table, in table order
    pub assignments: Vec<Assignment>,
    pub skipped: Vec<SkippedTable>,
    /// Final number of tables per judge, in roster order
    pub loads: Vec<(String, usize)>,
}

impl AssignmentPlan {
    /// Distinct tables that received a panel, in table order
    pub fn assigned_tables(&self) -> Vec<(u32, &str)> {
        let mut tables: Vec<(u32, &str)> = Vec::new();
        for a in &self.assignments {
            if tables.last().map(|(t, _)| *t) != Some(a.table) {
                tables.push((a.table, a.project.as_str()));
            }
        }
        tables
    }

    /// Judges seated at `table`, in selection order
    pub fn panel(&self, table: u32) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.table == table)
            .map(|a| a.judge.as_str())
            .collect()
    }
}

/// Per-run bookkeeping: load per judge and judge sets already seated.
/// Judges are addressed by roster position.
#[derive(Debug)]
struct AssignmentState {
    judge_load: Vec<usize>,
    used_combinations: HashSet<Vec<usize>>,
}

impl AssignmentState {
    fn new(judges: usize) -> Self {
        Self {
            judge_load: vec![0; judges],
            used_combinations: HashSet::new(),
        }
    }

    /// Roster positions ordered by load; `sort_by_key` is stable
    fn by_load(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.judge_load.len()).collect();
        order.sort_by_key(|&j| self.judge_load[j]);
        order
    }

    fn next_panel(&self, k: usize) -> Option<Vec<usize>> {
        self.by_load()
            .into_iter()
            .combinations(k)
            .find(|combo| !self.used_combinations.contains(&set_key(combo)))
    }

    fn seat(&mut self, panel: &[usize]) {
        for &judge in panel {
            self.judge_load[judge] += 1;
        }
        self.used_combinations.insert(set_key(panel));
    }
}

/// Order-independent identity of a judge combination
fn set_key(panel: &[usize]) -> Vec<usize> {
    let mut key = panel.to_vec();
    key.sort_unstable();
    key
}

/// Assign `panel_size` judges to every project.
///
/// A judge listed twice is seated once; the first occurrence keeps its
/// roster position.
pub fn assign<P, J>(projects: &[P], judges: &[J], panel_size: usize) -> Result<AssignmentPlan>
where
    P: AsRef<str>,
    J: AsRef<str>,
{
    let judges = distinct_judges(judges);

    if panel_size == 0 {
        return Err(HackError::invalid_value("panel size", 0));
    }
    if judges.len() < panel_size {
        return Err(HackError::InsufficientJudges {
            available: judges.len(),
            required: panel_size,
        });
    }

    let mut state = AssignmentState::new(judges.len());
    let mut plan = AssignmentPlan::default();

    for (i, project) in projects.iter().enumerate() {
        let table = (i + 1) as u32;
        let project = project.as_ref();

        let Some(panel) = state.next_panel(panel_size) else {
            warn!(table, project, "no unused judge combination left; table skipped");
            plan.skipped.push(SkippedTable {
                table,
                project: project.to_string(),
            });
            continue;
        };

        for &judge in &panel {
            plan.assignments.push(Assignment {
                table,
                project: project.to_string(),
                judge: judges[judge].to_string(),
            });
        }
        state.seat(&panel);
        debug!(table, project, "table_assigned");
    }

    plan.loads = judges
        .iter()
        .zip(&state.judge_load)
        .map(|(j, load)| (j.to_string(), *load))
        .collect();

    Ok(plan)
}

fn distinct_judges<J: AsRef<str>>(judges: &[J]) -> Vec<&str> {
    let mut seen = HashSet::new();
    judges
        .iter()
        .map(AsRef::as_ref)
        .filter(|judge| {
            let first = seen.insert(*judge);
            if !first {
                warn!(judge = *judge, "duplicate judge ignored");
            }
            first
        })
        .collect()
}
