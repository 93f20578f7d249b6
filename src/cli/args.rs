//! Argument structs for roadpath subcommands

use clap::Args;
use std::path::PathBuf;

use crate::cli::parse::{parse_algorithm, parse_replay_mode};
use roadpath_core::graph::Algorithm;
use roadpath_core::replay::ReplayMode;

/// Start and goal selection shared by the query commands
#[derive(Args, Debug, Clone, Default)]
pub struct EndpointArgs {
    /// Start city (defaults to the configured start)
    #[arg(long, short = 'f')]
    pub from: Option<String>,

    /// Goal city (defaults to the configured goal)
    #[arg(long, short = 't')]
    pub to: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub endpoints: EndpointArgs,

    /// Search algorithm: bfs, dfs or ucs (defaults to the configured algorithm)
    #[arg(long, short = 'a', value_parser = parse_algorithm)]
    pub algo: Option<Algorithm>,

    /// Replay the search step by step after printing the result
    #[arg(long)]
    pub animate: bool,

    /// Pause between replay frames in milliseconds
    #[arg(long, requires = "animate")]
    pub delay_ms: Option<u64>,

    /// What the replay shows: visited or path-only
    #[arg(long, requires = "animate", value_parser = parse_replay_mode)]
    pub mode: Option<ReplayMode>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub endpoints: EndpointArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub endpoints: EndpointArgs,

    /// Algorithm whose result is drawn: bfs, dfs or ucs
    #[arg(long, short = 'a', value_parser = parse_algorithm)]
    pub algo: Option<Algorithm>,

    /// Draw the bare network without running a search
    #[arg(long, conflicts_with_all = ["algo", "from", "to"])]
    pub plain: bool,

    /// Highlight expanded nodes (visited) or only the path (path-only)
    #[arg(long, value_parser = parse_replay_mode)]
    pub mode: Option<ReplayMode>,

    /// Write the SVG here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
