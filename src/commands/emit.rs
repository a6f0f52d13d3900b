//! Writing command results to stdout in the selected format

use std::io::{self, Write};
use std::path::PathBuf;

use hackjudge_core::error::Result;
use hackjudge_core::table::Table;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// One command result, renderable in every output format
pub struct Report<'a> {
    /// Human rendering
    pub text: String,
    /// Grid printed for `--format csv`
    pub table: &'a Table,
    pub json: Value,
    /// Files written while producing the result
    pub written: Vec<PathBuf>,
}

pub fn emit(ctx: &CommandContext, report: Report<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match ctx.cli.format {
        OutputFormat::Human => {
            write!(out, "{}", report.text)?;
            if !report.text.ends_with('\n') {
                writeln!(out)?;
            }
            if !ctx.cli.quiet {
                for path in &report.written {
                    writeln!(out, "Wrote {}", path.display())?;
                }
            }
        }
        OutputFormat::Json => {
            let mut json = report.json;
            if let Some(obj) = json.as_object_mut() {
                obj.insert("files".to_string(), paths_json(&report.written));
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        OutputFormat::Csv => report.table.write_csv(&mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn paths_json(paths: &[PathBuf]) -> Value {
    Value::Array(
        paths
            .iter()
            .map(|p| Value::String(p.display().to_string()))
            .collect(),
    )
}
