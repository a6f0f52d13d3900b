//! Command dispatch logic for hackjudge

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use hackjudge_core::config::EventConfig;
use hackjudge_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());
    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let config = EventConfig::discover(&root, cli.config.as_deref())?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &root, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// `--root` when given, else the working directory
fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
