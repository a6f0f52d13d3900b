//! Writing table numbers back to the project system of record

use serde::Serialize;
use tracing::{info, warn};

use super::AssignmentPlan;
use crate::error::Result;

/// A store holding one record per project that can take field updates
pub trait ProjectStore {
    /// Record id of the project named `project`, if any
    fn find_record_id(&self, project: &str) -> Result<Option<String>>;

    /// Set `field` of record `record_id` to `value`
    fn update_field(&self, record_id: &str, field: &str, value: serde_json::Value) -> Result<()>;
}

/// A project whose table number could not be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishFailure {
    pub table: u32,
    pub project: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub updated: usize,
    /// Projects with no matching record
    pub not_found: Vec<String>,
    pub failures: Vec<PublishFailure>,
}

impl PublishReport {
    pub fn is_clean(&self) -> bool {
        self.not_found.is_empty() && self.failures.is_empty()
    }
}

/// Push every assigned table number to `store`, one project at a time.
///
/// Lookup misses and errors are collected per project; they never stop the
/// remaining projects from being published.
pub fn publish_tables<S: ProjectStore + ?Sized>(
    plan: &AssignmentPlan,
    store: &S,
    field: &str,
) -> PublishReport {
    let mut report = PublishReport::default();

    for (table, project) in plan.assigned_tables() {
        let outcome = store.find_record_id(project).and_then(|id| match id {
            Some(id) => store
                .update_field(&id, field, serde_json::json!(table))
                .map(|_| true),
            None => Ok(false),
        });

        match outcome {
            Ok(true) => {
                info!(table, project, "table_published");
                report.updated += 1;
            }
            Ok(false) => {
                warn!(table, project, "project not found in system of record");
                report.not_found.push(project.to_string());
            }
            Err(e) => {
                warn!(table, project, error = %e, "failed to publish table number");
                report.failures.push(PublishFailure {
                    table,
                    project: project.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
