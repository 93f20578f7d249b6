//! Start/goal validation
//!
//! The search engine assumes both endpoints exist and differ; this is
//! where that is enforced.

use crate::cli::args::EndpointArgs;
use crate::commands::dispatch::CommandContext;
use roadpath_core::error::{Result, RoadpathError};
use roadpath_core::graph::{Graph, NodeId};

/// Resolve a user-supplied city name against the graph.
///
/// Exact matches win; otherwise a unique case-insensitive match is used.
fn resolve_city(graph: &Graph, name: &str) -> Result<NodeId> {
    if graph.contains(name) {
        return Ok(name.to_string());
    }

    let mut matches = graph
        .node_ids()
        .filter(|id| id.eq_ignore_ascii_case(name.trim()));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id.to_string()),
        _ => Err(RoadpathError::CityNotFound {
            id: name.to_string(),
        }),
    }
}

/// Pick start and goal from the arguments or the configured defaults
pub fn resolve_endpoints(ctx: &CommandContext, args: &EndpointArgs) -> Result<(NodeId, NodeId)> {
    let from = args.from.as_deref().unwrap_or(&ctx.config.default_start);
    let to = args.to.as_deref().unwrap_or(&ctx.config.default_goal);

    let start = resolve_city(&ctx.graph, from)?;
    let goal = resolve_city(&ctx.graph, to)?;

    if start == goal {
        return Err(RoadpathError::SameEndpoints(start));
    }

    Ok((start, goal))
}
