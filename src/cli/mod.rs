//! CLI argument parsing for roadpath
//!
//! Global flags: --format, --network, --config, --quiet, --verbose

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, RenderArgs, SearchArgs};
pub use roadpath_core::format::OutputFormat;
use parse::parse_output_format;

/// Roadpath - BFS, DFS and uniform-cost search over a road network
#[derive(Parser, Debug)]
#[command(name = "roadpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [human, json]
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Road network TOML file (defaults to the bundled network)
    #[arg(long, global = true, env = "ROADPATH_NETWORK")]
    pub network: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/roadpath/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `debug`, `roadpath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two cities with one algorithm
    Search(SearchArgs),

    /// Run all three algorithms on the same query
    Compare(CompareArgs),

    /// List the cities of the network
    Cities,

    /// List the roads of the network with their costs
    Roads,

    /// Render the network (and optionally a search) as SVG
    Render(RenderArgs),
}
