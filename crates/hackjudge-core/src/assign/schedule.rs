use std::collections::BTreeMap;

use serde::Serialize;

use super::Assignment;

/// A table as seen from one judge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTable {
    pub table: u32,
    pub project: String,
}

/// Every table one judge sits at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeSchedule {
    pub judge: String,
    pub tables: Vec<ScheduledTable>,
}

/// Regroup assignment rows by judge: judges by name, tables by number
pub fn judge_schedule(assignments: &[Assignment]) -> Vec<JudgeSchedule> {
    let mut by_judge: BTreeMap<&str, Vec<ScheduledTable>> = BTreeMap::new();
    for a in assignments {
        by_judge.entry(&a.judge).or_default().push(ScheduledTable {
            table: a.table,
            project: a.project.clone(),
        });
    }

    by_judge
        .into_iter()
        .map(|(judge, mut tables)| {
            tables.sort_by_key(|t| t.table);
            JudgeSchedule {
                judge: judge.to_string(),
                tables,
            }
        })
        .collect()
}
