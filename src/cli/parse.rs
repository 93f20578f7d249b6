use roadpath_core::format::OutputFormat;
use roadpath_core::graph::Algorithm;
use roadpath_core::replay::ReplayMode;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse replay mode from string
pub fn parse_replay_mode(s: &str) -> std::result::Result<ReplayMode, String> {
    s.parse::<ReplayMode>().map_err(|e| e.to_string())
}
