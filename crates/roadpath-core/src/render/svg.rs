use std::collections::{BTreeSet, HashSet};
use std::fmt::Write;

use crate::graph::{path_edges, Graph, SearchResult};
use crate::network::projection::{project, Viewport};
use crate::network::RoadNetwork;
use crate::replay::ReplayMode;

pub const VISITED_FILL: &str = "#FFA500";
pub const PATH_FILL: &str = "#00f5ff";
pub const START_FILL: &str = "#00cc44";
pub const GOAL_FILL: &str = "#cc0000";

/// Rendering options
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgStyle {
    pub viewport: Viewport,
    /// `Visited` also highlights every expanded node
    pub mode: ReplayMode,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `network` as an SVG document, highlighting `result` if given.
///
/// Each undirected connection of `graph` is drawn once. Path edges get the
/// `active-path` class; node fills follow the final frame of a replay.
pub fn render_svg(
    network: &RoadNetwork,
    graph: &Graph,
    result: Option<&SearchResult>,
    style: &SvgStyle,
) -> String {
    let coords = project(&network.cities, &style.viewport);
    let highlighted = result.map(|r| path_edges(&r.path)).unwrap_or_default();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = style.viewport.width,
        h = style.viewport.height
    );
    svg.push_str(
        "<style>line{stroke:#888;stroke-width:2}line.active-path{stroke:#00f5ff;stroke-width:5}\
         circle{fill:#334;stroke:#fff}text{font:12px sans-serif;fill:#222}</style>\n",
    );

    let mut drawn: BTreeSet<(&str, &str)> = BTreeSet::new();
    for a in graph.node_ids() {
        for edge in graph.edges(a) {
            let b = edge.to.as_str();
            let key = if a < b { (a, b) } else { (b, a) };
            if !drawn.insert(key) {
                continue;
            }
            let (Some(p1), Some(p2)) = (coords.get(a), coords.get(b)) else {
                continue;
            };
            let class = if highlighted.contains(&(a.to_string(), b.to_string())) {
                r#" class="active-path""#
            } else {
                ""
            };
            let _ = writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"{class}><title>{} - {}: {}</title></line>"#,
                p1.x,
                p1.y,
                p2.x,
                p2.y,
                escape(a),
                escape(b),
                edge.cost
            );
        }
    }

    let visited: HashSet<&str> = match result {
        Some(r) if style.mode == ReplayMode::Visited => {
            r.visited_order.iter().map(String::as_str).collect()
        }
        _ => HashSet::new(),
    };
    let on_path: HashSet<&str> = result
        .map(|r| r.path.iter().map(String::as_str).collect())
        .unwrap_or_default();
    let start = result.and_then(|r| r.path.first()).map(String::as_str);
    let goal = result.and_then(|r| r.path.last()).map(String::as_str);

    for city in &network.cities {
        let Some(p) = coords.get(&city.id) else {
            continue;
        };
        let id = city.id.as_str();
        let (fill, radius) = if Some(id) == start {
            (Some(START_FILL), 14)
        } else if Some(id) == goal {
            (Some(GOAL_FILL), 14)
        } else if on_path.contains(id) {
            (Some(PATH_FILL), 14)
        } else if visited.contains(id) {
            (Some(VISITED_FILL), 13)
        } else {
            (None, 10)
        };
        let fill_attr = fill
            .map(|f| format!(r#" style="fill:{f}""#))
            .unwrap_or_default();
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="{radius}"{fill_attr}/>"#,
            p.x, p.y
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
            p.x + 14.0,
            p.y + 4.0,
            escape(id)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Algorithm;

    #[test]
    fn test_plain_map_draws_every_road_once() {
        let network = RoadNetwork::builtin();
        let graph = network.graph();
        let svg = render_svg(&network, &graph, None, &SvgStyle::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<line ").count(), 24);
        assert_eq!(svg.matches("<circle ").count(), 20);
        assert!(!svg.contains(r#"class="active-path""#));
        assert!(svg.contains(">Karachi</text>"));
    }

    #[test]
    fn test_path_highlighting() {
        let network = RoadNetwork::builtin();
        let graph = network.graph();
        let result = Algorithm::Ucs.run(&graph, "Karachi", "Sukkur");
        let svg = render_svg(&network, &graph, Some(&result), &SvgStyle::default());

        assert_eq!(
            svg.matches(r#"class="active-path""#).count(),
            result.path.len() - 1
        );
        assert_eq!(svg.matches(START_FILL).count(), 1);
        assert_eq!(svg.matches(GOAL_FILL).count(), 1);
    }

    #[test]
    fn test_visited_only_in_visited_mode() {
        let network = RoadNetwork::builtin();
        let graph = network.graph();
        let result = Algorithm::Bfs.run(&graph, "Karachi", "Gilgit");

        let visited = render_svg(&network, &graph, Some(&result), &SvgStyle::default());
        assert!(visited.contains(VISITED_FILL));

        let path_only = SvgStyle {
            mode: ReplayMode::PathOnly,
            ..SvgStyle::default()
        };
        let plain = render_svg(&network, &graph, Some(&result), &path_only);
        assert!(!plain.contains(VISITED_FILL));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A & <B>"), "A &amp; &lt;B&gt;");
    }
}
