//! Output format handling for roadpath
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoadpathError;
use crate::graph::{NodeId, PathCost};

/// Separator between cities in a printed path
pub const PATH_SEPARATOR: &str = " → ";

/// Shown instead of a path when the goal is unreachable
pub const NO_PATH: &str = "No path found";

/// Output format for roadpath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RoadpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RoadpathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Join a path for display, or the "no path" marker when empty
pub fn format_path(path: &[NodeId]) -> String {
    if path.is_empty() {
        NO_PATH.to_string()
    } else {
        path.join(PATH_SEPARATOR)
    }
}

/// Cost for display, with kilometres when finite
pub fn format_cost_km(cost: PathCost) -> String {
    match cost {
        PathCost::Finite(km) => format!("{} km", km),
        PathCost::Unreachable => cost.to_string(),
    }
}
