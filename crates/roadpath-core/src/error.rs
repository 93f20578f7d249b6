//! Error types and exit codes for roadpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, start equals goal)
//! - 3: Data error (unknown city, invalid network file)
//!
//! An unreachable goal is not an error: searches report it through an
//! empty path and [`crate::graph::PathCost::Unreachable`].

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown city, malformed network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roadpath operations
#[derive(Error, Debug)]
pub enum RoadpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs or ucs)")]
    UnknownAlgorithm(String),

    #[error("start and goal are the same city: {0}")]
    SameEndpoints(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("city not found: {id}")]
    CityNotFound { id: String },

    #[error("invalid network in {path:?}: {reason}")]
    InvalidNetwork { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RoadpathError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RoadpathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoadpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed network definition
    pub fn invalid_network(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RoadpathError::InvalidNetwork {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadpathError::UnknownFormat(_)
            | RoadpathError::UnknownAlgorithm(_)
            | RoadpathError::SameEndpoints(_)
            | RoadpathError::UsageError(_)
            | RoadpathError::InvalidValue { .. } => ExitCode::Usage,

            RoadpathError::CityNotFound { .. }
            | RoadpathError::InvalidNetwork { .. } => ExitCode::Data,

            RoadpathError::Io(_)
            | RoadpathError::Json(_)
            | RoadpathError::Toml(_)
            | RoadpathError::FailedOperationWithTarget { .. }
            | RoadpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoadpathError::UnknownFormat(_) => "unknown_format",
            RoadpathError::UnknownAlgorithm(_) => "unknown_algorithm",
            RoadpathError::SameEndpoints(_) => "same_endpoints",
            RoadpathError::UsageError(_) => "usage_error",
            RoadpathError::InvalidValue { .. } => "invalid_value",
            RoadpathError::CityNotFound { .. } => "city_not_found",
            RoadpathError::InvalidNetwork { .. } => "invalid_network",
            RoadpathError::Io(_) => "io_error",
            RoadpathError::Json(_) => "json_error",
            RoadpathError::Toml(_) => "toml_error",
            RoadpathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RoadpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadpath operations
pub type Result<T> = std::result::Result<T, RoadpathError>;
