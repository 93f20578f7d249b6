use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use roadpath_core::error::Result;

/// Execute the roads command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let roads = ctx.network.weighted_roads();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&roads)?);
        }
        OutputFormat::Human => {
            for road in &roads {
                println!("{:<14} - {:<14} {:>5} km", road.from, road.to, road.cost);
            }
            if !ctx.cli.quiet {
                println!();
                println!("{} roads", roads.len());
            }
        }
    }

    Ok(())
}
