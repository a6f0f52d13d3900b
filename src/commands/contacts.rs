//! `hackjudge contacts` - team member contact sheets

use hackjudge_core::bail_usage;
use hackjudge_core::error::Result;
use hackjudge_core::export::write_report;
use hackjudge_core::ranking::track_slug;
use hackjudge_core::report::contacts_sheet;
use hackjudge_core::roster::{select_contacts, ContactLookup};
use serde_json::json;
use tracing::{info, warn};

use crate::cli::ContactsArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::emit::{emit, Report};

/// Selector standing for every project
const ALL_PROJECTS: &str = ".";

pub fn execute(ctx: &CommandContext, args: &ContactsArgs) -> Result<()> {
    let suffix = match &args.suffix {
        Some(suffix) => validate_suffix(suffix)?,
        None if args.project == ALL_PROJECTS => "all".to_string(),
        None => track_slug(&args.project).replace(['/', '\\'], "_"),
    };

    let projects = ctx.project_roster(args.file.as_deref())?;
    let selected = match select_contacts(&projects, &args.project) {
        ContactLookup::Found(selected) => selected,
        ContactLookup::NotFound(name) => return not_found(ctx, &name),
    };
    info!(projects = selected.len(), "contacts selected");

    let (text, table) = contacts_sheet(&selected);
    let stem = format!("contacts_{suffix}");
    let written = write_report(&ctx.output_dir("projects"), &stem, &text, Some(&table))?;

    emit(
        ctx,
        Report {
            text,
            table: &table,
            json: json!({ "projects": selected }),
            written,
        },
    )
}

/// An unknown project is reported, not failed; nothing is written
fn not_found(ctx: &CommandContext, name: &str) -> Result<()> {
    warn!(project = name, "project not found");
    let (_, table) = contacts_sheet(&[]);

    emit(
        ctx,
        Report {
            text: format!("Project '{name}' not found.\n"),
            table: &table,
            json: json!({ "not_found": name }),
            written: Vec::new(),
        },
    )
}

fn validate_suffix(suffix: &str) -> Result<String> {
    let suffix = suffix.trim();
    if suffix.is_empty() || suffix.contains(['/', '\\']) || suffix.starts_with('.') {
        bail_usage!(format!("invalid --suffix '{suffix}': must be a plain file name part"));
    }
    Ok(suffix.to_string())
}
