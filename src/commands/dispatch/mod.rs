//! Command dispatch logic for roadpath

use std::time::Instant;

use crate::cli::Cli;
use roadpath_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod endpoints;

pub use command::CommandContext;
use command::{Command, NoCommand};
pub use endpoints::resolve_endpoints;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::load(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_network");

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    roadpath_core::trace_time!(ctx.start, "execute_command");
    result
}
