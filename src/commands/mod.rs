//! CLI commands for roadpath

pub mod cities;
pub mod compare;
pub mod dispatch;
pub mod render;
pub mod replay;
pub mod roads;
pub mod search;
