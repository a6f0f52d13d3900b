//! Command argument structures

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Project roster CSV (defaults to the configured snapshot)
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ContactsArgs {
    /// Project name, or "." for every project
    pub project: String,

    /// Project roster CSV (defaults to the configured snapshot)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Output file suffix (contacts_<suffix>); derived from the project by default
    #[arg(long)]
    pub suffix: Option<String>,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Project roster CSV (defaults to the configured snapshot)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Judge roster, one name per line
    #[arg(long, short)]
    pub judges: Option<PathBuf>,

    /// Judges per table (overrides panel_size from the config)
    #[arg(long, short = 'k')]
    pub panel_size: Option<usize>,

    /// Do not write table numbers back to the project table
    #[arg(long)]
    pub no_publish: bool,
}

#[derive(Args, Debug)]
pub struct ResultsArgs {
    /// Judging scores CSV (defaults to the configured snapshot)
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ResultsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ResultsCommands {
    /// Overall ranking across all projects
    Overall {
        /// Keep only the top N projects (0 keeps all)
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },

    /// Ranking within one track
    Track {
        /// Track name or 0-based index into the configured tracks
        track: String,
    },

    /// Projects flagged for cheating
    Cheat,

    /// Standings for every configured track
    List {
        /// Keep only the top N projects per track (0 keeps all)
        #[arg(long, short = 'n')]
        count: Option<usize>,

        /// Also write the listing to <output_dir>/<NAME>.txt
        #[arg(long)]
        export: Option<String>,
    },

    /// Write the overall ranking and every non-empty track ranking
    ExportAll {
        /// Keep only the top N projects per ranking (0 keeps all)
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },
}
