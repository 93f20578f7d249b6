//! Road network data: cities, roads and their conversion into a [`Graph`]
//!
//! A network is either the bundled dataset ([`RoadNetwork::builtin`]) or a
//! TOML file:
//!
//! ```toml
//! [[cities]]
//! id = "Karachi"
//! lat = 24.8607
//! lon = 67.0011
//!
//! [[roads]]
//! from = "Karachi"
//! to = "Hyderabad"
//! ```
//!
//! Road costs are great-circle distances in kilometres, rounded, minimum 1.

mod builtin;
pub mod geo;
pub mod projection;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RoadpathError, Result};
use crate::graph::{build_graph, Graph, UndirectedEdge};
use geo::{haversine_km, road_cost};

/// A city with geographic coordinates (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// An undirected road between two cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
}

impl Road {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Road {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Road with its computed cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedRoad {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub cost: u32,
}

/// A static set of cities and the roads between them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl RoadNetwork {
    /// The bundled network of 20 cities and 24 roads
    pub fn builtin() -> Self {
        builtin::network()
    }

    /// Load and validate a network from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoadpathError::io_operation("read network", path.display(), e))?;
        let network: RoadNetwork = toml::from_str(&content)
            .map_err(|e| RoadpathError::invalid_network(path, e))?;
        network
            .validate()
            .map_err(|reason| RoadpathError::invalid_network(path, reason))?;
        tracing::debug!(
            path = %path.display(),
            cities = network.cities.len(),
            roads = network.roads.len(),
            "network loaded"
        );
        Ok(network)
    }

    /// Check structural invariants, returning the first violation
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.cities.is_empty() {
            return Err("network has no cities".to_string());
        }

        let mut ids = HashSet::new();
        for city in &self.cities {
            if city.id.trim().is_empty() {
                return Err("city id must not be empty".to_string());
            }
            if !ids.insert(city.id.as_str()) {
                return Err(format!("duplicate city: {}", city.id));
            }
            if !(-90.0..=90.0).contains(&city.lat) || !(-180.0..=180.0).contains(&city.lon) {
                return Err(format!(
                    "coordinates out of range for {}: ({}, {})",
                    city.id, city.lat, city.lon
                ));
            }
        }

        for road in &self.roads {
            for end in [&road.from, &road.to] {
                if !ids.contains(end.as_str()) {
                    return Err(format!(
                        "road {} - {} references unknown city {}",
                        road.from, road.to, end
                    ));
                }
            }
            if road.from == road.to {
                return Err(format!("road from {} to itself", road.from));
            }
        }

        Ok(())
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Roads with their distances and costs, in declaration order
    pub fn weighted_roads(&self) -> Vec<WeightedRoad> {
        self.roads
            .iter()
            .filter_map(|road| {
                let a = self.city(&road.from)?;
                let b = self.city(&road.to)?;
                let distance_km = haversine_km(a, b);
                Some(WeightedRoad {
                    from: road.from.clone(),
                    to: road.to.clone(),
                    distance_km,
                    cost: road_cost(distance_km),
                })
            })
            .collect()
    }

    /// Build the search graph for this network
    pub fn graph(&self) -> Graph {
        let edges: Vec<UndirectedEdge> = self
            .weighted_roads()
            .into_iter()
            .map(|road| UndirectedEdge::new(road.from, road.to, road.cost))
            .collect();
        build_graph(self.cities.iter().map(|c| c.id.clone()), &edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_network(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_network_shape() {
        let network = RoadNetwork::builtin();
        assert_eq!(network.cities.len(), 20);
        assert_eq!(network.roads.len(), 24);
        assert!(network.validate().is_ok());

        let graph = network.graph();
        assert_eq!(graph.node_count(), 20);
        assert_eq!(graph.edge_count(), 24);
    }

    #[test]
    fn test_builtin_costs_are_distances() {
        let graph = RoadNetwork::builtin().graph();
        let cost = graph.edge("Islamabad", "Rawalpindi").map(|e| e.cost);
        // Twin cities, roughly 14 km apart
        assert!(matches!(cost, Some(c) if (10..=20).contains(&c)));
        assert_eq!(cost, graph.edge("Rawalpindi", "Islamabad").map(|e| e.cost));
    }

    #[test]
    fn test_load_valid_network() {
        let file = write_network(
            r#"
[[cities]]
id = "North"
lat = 10.0
lon = 0.0

[[cities]]
id = "South"
lat = 9.0
lon = 0.0

[[roads]]
from = "North"
to = "South"
"#,
        );
        let network = RoadNetwork::load(file.path()).unwrap();
        assert_eq!(network.cities.len(), 2);
        let graph = network.graph();
        assert_eq!(graph.edge("North", "South").map(|e| e.cost), Some(111));
    }

    #[test]
    fn test_load_rejects_unknown_endpoint() {
        let file = write_network(
            r#"
[[cities]]
id = "A"
lat = 1.0
lon = 1.0

[[roads]]
from = "A"
to = "B"
"#,
        );
        let err = RoadNetwork::load(file.path()).unwrap_err();
        assert!(matches!(err, RoadpathError::InvalidNetwork { .. }));
        assert!(err.to_string().contains("unknown city B"));
    }

    #[test]
    fn test_load_rejects_duplicate_city() {
        let file = write_network(
            r#"
[[cities]]
id = "A"
lat = 1.0
lon = 1.0

[[cities]]
id = "A"
lat = 2.0
lon = 2.0
"#,
        );
        let err = RoadNetwork::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate city: A"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let file = write_network("[[cities]\nid = ");
        let err = RoadNetwork::load(file.path()).unwrap_err();
        assert!(matches!(err, RoadpathError::InvalidNetwork { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RoadNetwork::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, RoadpathError::FailedOperationWithTarget { .. }));
    }

    #[test]
    fn test_validate_rejects_self_loop_and_bad_coordinates() {
        let mut network = RoadNetwork {
            cities: vec![City {
                id: "A".into(),
                lat: 1.0,
                lon: 1.0,
            }],
            roads: vec![Road::new("A", "A")],
        };
        assert!(network.validate().unwrap_err().contains("to itself"));

        network.roads.clear();
        network.cities[0].lat = 91.0;
        assert!(network.validate().unwrap_err().contains("out of range"));
    }
}
