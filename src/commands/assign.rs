//! `hackjudge assign` - judge panels per project table
//!
//! Runs the assignment engine over the project and judge rosters, writes
//! the assignment table, the judge-grouped schedule and one sheet per
//! judge, then publishes table numbers to the project table unless
//! `--no-publish` is given or no remote store is configured.

use hackjudge_core::assign::{assign, judge_schedule, publish_tables, AssignmentPlan, PublishReport};
use hackjudge_core::error::Result;
use hackjudge_core::export::{write_csv, write_report};
use hackjudge_core::report::{assignment_table, judge_sheet, render_aligned, schedule_text, sheet_name};
use hackjudge_core::source::AirtableClient;
use hackjudge_core::trace_time;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::AssignArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::emit::{emit, Report};

pub fn execute(ctx: &CommandContext, args: &AssignArgs) -> Result<()> {
    let panel_size = args.panel_size.unwrap_or(ctx.config.panel_size);
    let projects = ctx.project_roster(args.file.as_deref())?;
    let judges = ctx.judge_roster(args.judges.as_deref())?;

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    let plan = assign(&names, judges.names(), panel_size)?;
    trace_time!(ctx.start, "assign", rows = plan.assignments.len());

    let dir = ctx.output_dir("judging");
    let table = assignment_table(&plan.assignments);
    let schedules = judge_schedule(&plan.assignments);
    let mut written = write_report(&dir, "judge_assignments", &schedule_text(&schedules), Some(&table))?;

    let sheets_dir = dir.join("judges");
    for schedule in &schedules {
        written.push(write_csv(&sheets_dir, &sheet_name(&schedule.judge), &judge_sheet(schedule))?);
    }

    let publish = if args.no_publish {
        None
    } else {
        publish(ctx, &plan)
    };

    let text = format!(
        "{}\n{}",
        render_aligned(&table),
        summary(&plan, panel_size, publish.as_ref())
    );
    let json = json!({
        "panel_size": panel_size,
        "assignments": plan.assignments,
        "skipped": plan.skipped,
        "loads": plan.loads.iter().map(|(judge, load)| json!({ "judge": judge, "tables": load })).collect::<Vec<_>>(),
        "publish": publish,
    });

    emit(
        ctx,
        Report {
            text,
            table: &table,
            json,
            written,
        },
    )
}

/// Best-effort write-back of table numbers; `None` when not configured
fn publish(ctx: &CommandContext, plan: &AssignmentPlan) -> Option<PublishReport> {
    let settings = match ctx.config.source.credentials() {
        Ok(settings) => settings,
        Err(e) => {
            warn!(reason = %e, "table numbers not published");
            return None;
        }
    };

    let client = AirtableClient::new(settings);
    let report = publish_tables(plan, &client, &ctx.config.source.table_field);
    info!(updated = report.updated, failed = report.failures.len(), "publish finished");
    Some(report)
}

fn summary(plan: &AssignmentPlan, panel_size: usize, publish: Option<&PublishReport>) -> String {
    let mut lines = vec![format!(
        "Assigned {} tables with {} judges each ({} judges available)",
        plan.assigned_tables().len(),
        panel_size,
        plan.loads.len()
    )];

    for skipped in &plan.skipped {
        lines.push(format!(
            "Skipped table {} ({}): no unused judge combination left",
            skipped.table, skipped.project
        ));
    }

    let loads: Vec<String> = plan
        .loads
        .iter()
        .map(|(judge, load)| format!("{judge} {load}"))
        .collect();
    lines.push(format!("Judge loads: {}", loads.join(", ")));

    match publish {
        None => lines.push("Table numbers not published".to_string()),
        Some(report) => {
            lines.push(format!("Published {} table numbers", report.updated));
            for project in &report.not_found {
                lines.push(format!("Project not found in project table: {project}"));
            }
            for failure in &report.failures {
                lines.push(format!(
                    "Failed to publish table {} ({}): {}",
                    failure.table, failure.project, failure.reason
                ));
            }
        }
    }

    lines.join("\n")
}
