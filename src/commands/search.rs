use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::{resolve_endpoints, CommandContext};
use crate::commands::replay;
use roadpath_core::error::Result;
use roadpath_core::format::{format_cost_km, format_path};
use roadpath_core::graph::SearchResult;
use roadpath_core::replay::replay_frames;

/// JSON envelope for a single search
#[derive(Serialize)]
pub struct SearchOutput<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub found: bool,
    pub hops: usize,
    #[serde(flatten)]
    pub result: &'a SearchResult,
}

/// Print a result in human format
pub fn print_human(result: &SearchResult, quiet: bool) {
    println!("Algorithm: {}", result.algorithm);
    println!("Steps:     {}", result.steps);
    println!("Cost:      {}", format_cost_km(result.cost));
    println!("Path:      {}", format_path(&result.path));
    if !quiet {
        println!();
        println!("{}", result.algorithm.description());
    }
}

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let (start, goal) = resolve_endpoints(ctx, &args.endpoints)?;
    let algorithm = args.algo.unwrap_or(ctx.config.default_algorithm);

    let started = Instant::now();
    let result = algorithm.run(&ctx.graph, &start, &goal);
    roadpath_core::trace_time!(started, "search", algorithm = algorithm.tag());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = SearchOutput {
                from: &start,
                to: &goal,
                found: result.found(),
                hops: result.hops(),
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            if args.animate {
                tracing::warn!("--animate is ignored with --format json");
            }
        }
        OutputFormat::Human => {
            print_human(&result, ctx.cli.quiet);
            if args.animate {
                let mode = args.mode.unwrap_or(ctx.config.replay.mode);
                let delay = Duration::from_millis(
                    args.delay_ms.unwrap_or(ctx.config.replay.delay_ms),
                );
                println!();
                replay::play(&replay_frames(&result, mode), delay)?;
            }
        }
    }

    Ok(())
}
