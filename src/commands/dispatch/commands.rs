//! Command implementations for all roadpath commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use roadpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => commands::search::execute(ctx, args),
            Commands::Compare(args) => commands::compare::execute(ctx, args),
            Commands::Cities => commands::cities::execute(ctx),
            Commands::Roads => commands::roads::execute(ctx),
            Commands::Render(args) => commands::render::execute(ctx, args),
        }
    }
}
