//! Configuration for roadpath
//!
//! Read from `--config <file>` when given, otherwise from
//! `$ROADPATH_CONFIG_DIR/config.toml` or `~/.config/roadpath/config.toml`.
//! A missing discovered file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RoadpathError, Result};
use crate::graph::Algorithm;
use crate::network::projection::Viewport;
use crate::replay::ReplayMode;

const CONFIG_DIR: &str = "roadpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROADPATH_CONFIG_DIR";

/// Longest accepted pause between replay frames
pub const MAX_DELAY_MS: u64 = 60_000;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadpathConfig {
    /// Algorithm used when `--algo` is not given
    #[serde(default)]
    pub default_algorithm: Algorithm,

    #[serde(default = "default_start")]
    pub default_start: String,

    #[serde(default = "default_goal")]
    pub default_goal: String,

    /// Network file to use instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<PathBuf>,

    #[serde(default)]
    pub replay: ReplayConfig,

    #[serde(default)]
    pub render: Viewport,
}

/// Terminal replay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default)]
    pub mode: ReplayMode,
}

fn default_start() -> String {
    "Karachi".to_string()
}

fn default_goal() -> String {
    "Islamabad".to_string()
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            mode: ReplayMode::default(),
        }
    }
}

impl Default for RoadpathConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::default(),
            default_start: default_start(),
            default_goal: default_goal(),
            network: None,
            replay: ReplayConfig::default(),
            render: Viewport::default(),
        }
    }
}

impl RoadpathConfig {
    fn discovered_path() -> Result<PathBuf> {
        // Environment override, mainly for tests
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RoadpathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoadpathError::io_operation("read config", path.display(), e))?;
        let mut config: RoadpathConfig = toml::from_str(&content)?;

        // Relative network paths are relative to the config file
        if let (Some(network), Some(dir)) = (config.network.as_mut(), path.parent()) {
            if network.is_relative() {
                *network = dir.join(&*network);
            }
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load from the discovered location, falling back to defaults
    pub fn discover() -> Result<Self> {
        let path = match Self::discovered_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load `explicit` if given, otherwise discover
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.replay.delay_ms > MAX_DELAY_MS {
            crate::bail_invalid!("replay.delay_ms", self.replay.delay_ms);
        }
        let v = &self.render;
        if v.width <= 2.0 * v.pad_x || v.height <= 2.0 * v.pad_y {
            crate::bail_invalid!(
                "render viewport",
                format!("{}x{} with padding {}/{}", v.width, v.height, v.pad_x, v.pad_y)
            );
        }
        Ok(())
    }
}
