//! `hackjudge fetch` - snapshot the remote tables
//!
//! Downloads the project table and the judging table and stores them as
//! CSV under `data_dir`, where every other command reads them.

use std::fs;

use hackjudge_core::error::{HackError, Result};
use hackjudge_core::source::AirtableClient;
use hackjudge_core::table::Table;
use hackjudge_core::trace_time;
use serde_json::json;
use tracing::info;

use crate::commands::dispatch::CommandContext;
use crate::commands::emit::{emit, Report};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let settings = ctx.config.source.credentials()?;
    let client = AirtableClient::new(settings);
    let settings = client.settings();

    let targets = [
        (settings.project_table.as_str(), ctx.config.files.projects.as_str()),
        (settings.judging_table.as_str(), ctx.config.files.scores.as_str()),
    ];

    let data_dir = ctx.root.join(&ctx.config.data_dir);
    fs::create_dir_all(&data_dir)
        .map_err(|e| HackError::io_operation("create directory", data_dir.display(), e))?;

    let mut rows = Vec::new();
    let mut fetched = Vec::new();
    let mut written = Vec::new();
    let mut lines = Vec::new();

    for (remote, file) in targets {
        let table = client.fetch_table(remote)?;
        let path = data_dir.join(file);
        table.write_csv_path(&path)?;
        info!(table = remote, rows = table.len(), path = %path.display(), "snapshot saved");
        trace_time!(ctx.start, "fetch_table", rows = table.len());

        lines.push(format!("Fetched {} rows from {}", table.len(), remote));
        fetched.push(json!({ "table": remote, "rows": table.len() }));
        rows.push(vec![
            remote.to_string(),
            table.len().to_string(),
            path.display().to_string(),
        ]);
        written.push(path);
    }

    let summary = Table::new(vec!["Table".into(), "Rows".into(), "Path".into()], rows);
    let json = json!({ "tables": fetched });

    emit(
        ctx,
        Report {
            text: lines.join("\n"),
            table: &summary,
            json,
            written,
        },
    )
}
