use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use roadpath_core::error::Result;
use roadpath_core::network::projection::project;

#[derive(Serialize)]
struct CityEntry<'a> {
    id: &'a str,
    lat: f64,
    lon: f64,
    x: f64,
    y: f64,
    roads: usize,
}

/// Execute the cities command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let points = project(&ctx.network.cities, &ctx.config.render);

    let entries: Vec<CityEntry> = ctx
        .network
        .cities
        .iter()
        .filter_map(|city| {
            let p = points.get(&city.id)?;
            Some(CityEntry {
                id: &city.id,
                lat: city.lat,
                lon: city.lon,
                x: p.x,
                y: p.y,
                roads: ctx.graph.edges(&city.id).len(),
            })
        })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for entry in &entries {
                println!(
                    "{:<14} {:>8.4} {:>8.4}  ({:>6.1}, {:>5.1})  roads={}",
                    entry.id, entry.lat, entry.lon, entry.x, entry.y, entry.roads
                );
            }
            if !ctx.cli.quiet {
                println!();
                println!("{} cities", entries.len());
            }
        }
    }

    Ok(())
}
