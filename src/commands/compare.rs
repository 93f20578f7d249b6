use serde::Serialize;

use crate::cli::{CompareArgs, OutputFormat};
use crate::commands::dispatch::{resolve_endpoints, CommandContext};
use roadpath_core::error::Result;
use roadpath_core::format::{format_path, PATH_SEPARATOR};
use roadpath_core::graph::{run_all, SearchResult};

#[derive(Serialize)]
struct CompareOutput<'a> {
    from: &'a str,
    to: &'a str,
    results: &'a [SearchResult],
}

/// Execute the compare command: all three algorithms on one query
pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let (start, goal) = resolve_endpoints(ctx, &args.endpoints)?;
    let results = run_all(&ctx.graph, &start, &goal);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = CompareOutput {
                from: &start,
                to: &goal,
                results: &results,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}{}{}", start, PATH_SEPARATOR, goal);
                println!();
            }
            println!("{:<4} {:>5} {:>4} {:>6}  PATH", "ALGO", "STEPS", "HOPS", "COST");
            for result in &results {
                println!(
                    "{:<4} {:>5} {:>4} {:>6}  {}",
                    result.algorithm.tag(),
                    result.steps,
                    result.hops(),
                    result.cost.to_string(),
                    format_path(&result.path)
                );
            }
        }
    }

    Ok(())
}
