//! Roadpath Core Library
//!
//! Search engine and supporting data for the roadpath visualizer: a static
//! road network, breadth-first, depth-first and uniform-cost search, and
//! the pieces needed to present a result (projection, SVG, replay).

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod render;
pub mod replay;
