//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use roadpath_core::config::RoadpathConfig;
use roadpath_core::error::Result;
use roadpath_core::graph::Graph;
use roadpath_core::network::RoadNetwork;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    pub config: RoadpathConfig,
    pub network: RoadNetwork,
    pub graph: Graph,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration and load the network the command runs against.
    ///
    /// `--network` wins over the configured network, which wins over the
    /// bundled one.
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = RoadpathConfig::resolve(cli.config.as_deref())?;

        let network = match cli.network.as_ref().or(config.network.as_ref()) {
            Some(path) => RoadNetwork::load(path)?,
            None => RoadNetwork::builtin(),
        };
        let graph = network.graph();

        Ok(Self {
            cli,
            start,
            config,
            network,
            graph,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        println!("roadpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!(
            "Path finding over a road network of {} cities and {} roads.",
            ctx.graph.node_count(),
            ctx.graph.edge_count()
        );
        println!();
        println!("Run `roadpath --help` for usage information.");
        Ok(())
    }
}
