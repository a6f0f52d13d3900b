//! Command implementations for all hackjudge commands

use hackjudge_core::error::Result;
use tracing::debug;

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Fetch => commands::fetch::execute(ctx),
            Commands::Projects(args) => commands::projects::execute(ctx, args),
            Commands::Contacts(args) => commands::contacts::execute(ctx, args),
            Commands::Assign(args) => commands::assign::execute(ctx, args),
            Commands::Results(args) => commands::results::execute(ctx, args),
        };
        if ctx.cli.verbose {
            debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        result
    }
}
