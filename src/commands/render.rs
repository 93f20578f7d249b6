use std::fs;

use crate::cli::{OutputFormat, RenderArgs};
use crate::commands::dispatch::{resolve_endpoints, CommandContext};
use roadpath_core::error::{Result, RoadpathError};
use roadpath_core::render::{render_svg, SvgStyle};

/// Execute the render command
pub fn execute(ctx: &CommandContext, args: &RenderArgs) -> Result<()> {
    let result = if args.plain {
        None
    } else {
        let (start, goal) = resolve_endpoints(ctx, &args.endpoints)?;
        let algorithm = args.algo.unwrap_or(ctx.config.default_algorithm);
        Some(algorithm.run(&ctx.graph, &start, &goal))
    };

    let style = SvgStyle {
        viewport: ctx.config.render,
        mode: args.mode.unwrap_or(ctx.config.replay.mode),
    };
    let svg = render_svg(&ctx.network, &ctx.graph, result.as_ref(), &style);

    let Some(path) = &args.output else {
        print!("{}", svg);
        return Ok(());
    };

    fs::write(path, &svg)
        .map_err(|e| RoadpathError::io_operation("write", path.display(), e))?;
    tracing::debug!(path = %path.display(), bytes = svg.len(), "svg written");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "output": path.display().to_string(),
                "bytes": svg.len(),
                "algorithm": result.as_ref().map(|r| r.algorithm),
                "found": result.as_ref().map(|r| r.found()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
