//! Replay schedule for presenting a finished search step by step
//!
//! The schedule is pure data; the caller decides how long to wait between
//! frames.

use crate::error::RoadpathError;
use crate::graph::{NodeId, SearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the replay shows before the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayMode {
    /// Every expanded node in visit order, then the path
    #[default]
    Visited,
    /// Only the path edges
    PathOnly,
}

impl FromStr for ReplayMode {
    type Err = RoadpathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visited" => Ok(ReplayMode::Visited),
            "path-only" | "path" => Ok(ReplayMode::PathOnly),
            other => Err(RoadpathError::invalid_value("replay mode", other)),
        }
    }
}

impl fmt::Display for ReplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayMode::Visited => write!(f, "visited"),
            ReplayMode::PathOnly => write!(f, "path-only"),
        }
    }
}

/// One replay step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Visit(NodeId),
    PathEdge(NodeId, NodeId),
    /// Final frame: the full path is highlighted
    Finish,
}

impl Frame {
    /// Whether the player should pause after this frame
    pub fn is_timed(&self) -> bool {
        !matches!(self, Frame::Finish)
    }
}

/// Build the replay schedule for `result`
pub fn replay_frames(result: &SearchResult, mode: ReplayMode) -> Vec<Frame> {
    let mut frames = Vec::new();

    if mode == ReplayMode::Visited {
        frames.extend(result.visited_order.iter().cloned().map(Frame::Visit));
    }

    frames.extend(
        result
            .path
            .windows(2)
            .map(|pair| Frame::PathEdge(pair[0].clone(), pair[1].clone())),
    );

    frames.push(Frame::Finish);
    frames
}
