//! `hackjudge results` - rankings from the judging scores
//!
//! Subcommands:
//! - `overall`    full ranking across every project
//! - `track`      ranking within one track
//! - `cheat`      projects flagged by any judge
//! - `list`       standings of every configured track in one listing
//! - `export-all` overall plus each non-empty track, one file pair each

use hackjudge_core::bail_usage;
use hackjudge_core::error::Result;
use hackjudge_core::export::write_report;
use hackjudge_core::ranking::{aggregate, flagged, top_n, track_results, track_slug, TrackResult};
use hackjudge_core::report::{
    flagged_table, ranking_table, render_aligned, score, standings_listing,
};
use hackjudge_core::scores::JudgeScoreRecord;
use hackjudge_core::table::Table;
use serde_json::json;
use tracing::debug;

use crate::cli::{ResultsArgs, ResultsCommands};
use crate::commands::dispatch::CommandContext;
use crate::commands::emit::{emit, Report};

const JUDGING: &str = "judging";

pub fn execute(ctx: &CommandContext, args: &ResultsArgs) -> Result<()> {
    let records = ctx.score_records(args.file.as_deref())?;

    match &args.command {
        ResultsCommands::Overall { count } => overall(ctx, &records, *count),
        ResultsCommands::Track { track } => track_ranking(ctx, &records, track),
        ResultsCommands::Cheat => cheat(ctx, &records),
        ResultsCommands::List { count, export } => list(ctx, &records, *count, export.as_deref()),
        ResultsCommands::ExportAll { count } => export_all(ctx, &records, *count),
    }
}

fn overall(ctx: &CommandContext, records: &[JudgeScoreRecord], count: Option<usize>) -> Result<()> {
    let ranked = top_n(aggregate(records, None), count);
    let table = ranking_table(&ranked);
    let text = render_aligned(&table);
    let written = write_report(&ctx.output_dir(JUDGING), "overall_scores", &text, Some(&table))?;

    emit(
        ctx,
        Report {
            text,
            table: &table,
            json: json!({ "ranking": ranked }),
            written,
        },
    )
}

fn track_ranking(ctx: &CommandContext, records: &[JudgeScoreRecord], selector: &str) -> Result<()> {
    let tracks = ctx.config.track_list();
    let track = tracks.resolve(selector)?;
    let ranked = aggregate(records, Some(track));
    debug!(track, entries = ranked.len(), "track_ranking");

    let table = ranking_table(&ranked);
    let body = if ranked.is_empty() {
        "No Entries\n".to_string()
    } else {
        render_aligned(&table)
    };
    let text = format!("{} RESULTS\n{}", track.to_uppercase(), body);
    let written = write_report(&ctx.output_dir(JUDGING), "tracks", &text, Some(&table))?;

    emit(
        ctx,
        Report {
            text,
            table: &table,
            json: json!({ "track": track, "ranking": ranked }),
            written,
        },
    )
}

fn cheat(ctx: &CommandContext, records: &[JudgeScoreRecord]) -> Result<()> {
    let projects = flagged(records);
    let table = flagged_table(&projects);
    let text = if projects.is_empty() {
        "No flagged projects\n".to_string()
    } else {
        render_aligned(&table)
    };
    let written = write_report(&ctx.output_dir(JUDGING), "cheat_list", &text, Some(&table))?;

    emit(
        ctx,
        Report {
            text,
            table: &table,
            json: json!({ "flagged": projects }),
            written,
        },
    )
}

fn list(
    ctx: &CommandContext,
    records: &[JudgeScoreRecord],
    count: Option<usize>,
    export: Option<&str>,
) -> Result<()> {
    let results = track_results(records, &ctx.config.track_list(), count);
    let text = standings_listing(&results);

    let written = match export {
        Some(name) => {
            validate_export_name(name)?;
            let dir = ctx.resolve(&ctx.config.output_dir);
            write_report(&dir, name, &text, None)?
        }
        None => Vec::new(),
    };

    let table = standings_grid(&results);
    emit(
        ctx,
        Report {
            text,
            table: &table,
            json: json!({ "tracks": results }),
            written,
        },
    )
}

fn export_all(ctx: &CommandContext, records: &[JudgeScoreRecord], count: Option<usize>) -> Result<()> {
    let dir = ctx.output_dir(JUDGING);
    let mut written = Vec::new();
    let mut rows = Vec::new();

    let overall = top_n(aggregate(records, None), count);
    let table = ranking_table(&overall);
    written.extend(write_report(&dir, "best_overall", &render_aligned(&table), Some(&table))?);
    rows.push(vec!["Overall".to_string(), overall.len().to_string()]);

    for result in track_results(records, &ctx.config.track_list(), count) {
        if result.entries.is_empty() {
            debug!(track = %result.track, "no entries, not exported");
            continue;
        }
        let table = ranking_table(&result.entries);
        let text = format!("{} RESULTS\n{}", result.track.to_uppercase(), render_aligned(&table));
        written.extend(write_report(&dir, &track_slug(&result.track), &text, Some(&table))?);
        rows.push(vec![result.track.clone(), result.entries.len().to_string()]);
    }

    let summary = Table::new(vec!["Ranking".into(), "Entries".into()], rows);
    let json = json!({
        "exported": summary.rows().iter().map(|r| r[0].clone()).collect::<Vec<_>>(),
    });

    emit(
        ctx,
        Report {
            text: render_aligned(&summary),
            table: &summary,
            json,
            written,
        },
    )
}

/// Every track's standings in one grid: Track, Rank, ProjectName, Overall Score
fn standings_grid(results: &[TrackResult]) -> Table {
    let rows = results
        .iter()
        .flat_map(|r| {
            r.entries.iter().map(move |e| {
                vec![
                    r.track.clone(),
                    e.rank.to_string(),
                    e.project.clone(),
                    score(e.overall_score),
                ]
            })
        })
        .collect();
    Table::new(
        vec![
            "Track".into(),
            "Rank".into(),
            "ProjectName".into(),
            "Overall Score".into(),
        ],
        rows,
    )
}

fn validate_export_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        bail_usage!(format!("invalid --export name '{name}': must be a plain file name"));
    }
    Ok(())
}
