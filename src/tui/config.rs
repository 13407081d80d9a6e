//! Optional TOML configuration for the TUI front-end.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the terminal front-end. Everything has a default, so the
/// config file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Active path to start at instead of the root.
    pub start_path: Option<String>,
    /// Draw-loop tick in milliseconds.
    pub tick_ms: u64,
    /// Capture mouse events (scroll wheel navigation).
    pub mouse_capture: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            start_path: None,
            tick_ms: 100,
            mouse_capture: true,
        }
    }
}

/// Resolve the config file location: explicit flag, then `KOMICHI_CONFIG`,
/// then `./komichi.toml` when present.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("KOMICHI_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from("komichi.toml");
    local.exists().then_some(local)
}

/// Load the config, falling back to defaults when no file is configured.
/// An explicitly named file that cannot be read or parsed is an error.
pub fn load(explicit: Option<&Path>) -> Result<TuiConfig> {
    let Some(path) = config_path(explicit) else {
        return Ok(TuiConfig::default());
    };
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}
