//! `hackjudge projects` - numbered project list
//!
//! A project's table number is its 1-based position in the roster, the
//! same numbering `assign` uses.

use hackjudge_core::error::Result;
use hackjudge_core::export::write_report;
use hackjudge_core::report::projects_listing;
use serde_json::json;

use crate::cli::ProjectsArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::emit::{emit, Report};

pub fn execute(ctx: &CommandContext, args: &ProjectsArgs) -> Result<()> {
    let projects = ctx.project_roster(args.file.as_deref())?;
    let (text, table) = projects_listing(&ctx.config.event_name, &projects);

    let written = write_report(&ctx.output_dir("projects"), "projects_list", &text, Some(&table))?;

    let entries: Vec<_> = projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "table": i + 1,
                "project": p.name,
                "track_a": p.track_a,
                "track_b": p.track_b,
            })
        })
        .collect();

    emit(
        ctx,
        Report {
            text,
            table: &table,
            json: json!({ "event": ctx.config.event_name, "projects": entries }),
            written,
        },
    )
}
