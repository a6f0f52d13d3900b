//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use hackjudge_core::config::EventConfig;
use hackjudge_core::error::Result;
use hackjudge_core::roster::{load_projects, JudgeRoster, ProjectRecord};
use hackjudge_core::scores::{normalize, JudgeScoreRecord};
use hackjudge_core::table::Table;
use hackjudge_core::trace_time;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub config: EventConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, config: EventConfig, start: Instant) -> Self {
        Self {
            cli,
            root,
            config,
            start,
        }
    }

    /// Relative paths are taken from the event root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// An explicit `--file`, else the configured snapshot under `data_dir`
    pub fn data_file(&self, explicit: Option<&Path>, configured: &str) -> PathBuf {
        match explicit {
            Some(path) => self.resolve(path),
            None => self.config.data_path(self.root, configured),
        }
    }

    pub fn output_dir(&self, section: &str) -> PathBuf {
        self.config.output_path(self.root, section)
    }

    pub fn project_roster(&self, file: Option<&Path>) -> Result<Vec<ProjectRecord>> {
        let path = self.data_file(file, &self.config.files.projects);
        let table = Table::from_csv_path(&path)?;
        let projects = load_projects(&table, &self.config.columns)?;
        trace_time!(self.start, "load_projects", count = projects.len());
        Ok(projects)
    }

    pub fn judge_roster(&self, file: Option<&Path>) -> Result<JudgeRoster> {
        let path = self.data_file(file, &self.config.files.judges);
        let roster = JudgeRoster::load(&path)?;
        trace_time!(self.start, "load_judges", count = roster.len());
        Ok(roster)
    }

    pub fn score_records(&self, file: Option<&Path>) -> Result<Vec<JudgeScoreRecord>> {
        let path = self.data_file(file, &self.config.files.scores);
        let table = Table::from_csv_path(&path)?;
        let records = normalize(&table, &self.config.columns)?;
        trace_time!(self.start, "load_scores", count = records.len());
        Ok(records)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand given
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("hackjudge {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Judge assignment and score ranking for hackathons.");
        println!();
        println!("Run `hackjudge --help` for usage information.");
        Ok(())
    }
}
