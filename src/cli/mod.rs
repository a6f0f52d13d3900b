//! CLI argument parsing for hackjudge
//!
//! Global flags: --root, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AssignArgs, ContactsArgs, ProjectsArgs, ResultsArgs, ResultsCommands};
pub use output::OutputFormat;

/// Hackjudge - judge assignment and score ranking for hackathons
#[derive(Parser, Debug)]
#[command(name = "hackjudge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Event directory holding hackjudge.toml, data/ and output/
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "info", "hackjudge_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the project and judging tables into CSV snapshots
    Fetch,

    /// List projects with their table numbers
    Projects(ProjectsArgs),

    /// Export team member contacts for one project or all of them
    Contacts(ContactsArgs),

    /// Assign judge panels to project tables
    Assign(AssignArgs),

    /// Rank projects from the judging scores
    Results(ResultsArgs),
}
