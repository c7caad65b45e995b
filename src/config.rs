//! Configuration management
//!
//! Output preferences for the `plib` binary, stored as TOML:
//!
//! ```toml
//! [output]
//! style = "spaced"   # compact | spaced | pretty
//! precision = 3      # decimal places for distances (optional)
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::adapters::json::JsonStyle;
use crate::paths;

/// Global plib configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlibConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// How results are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON layout for `--json` output and the `show` command
    #[serde(default)]
    pub style: JsonStyle,
    /// Decimal places for distances in human output (None = shortest exact form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl PlibConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Otherwise `PLIB_CONFIG` or the global
    /// config file is read when present, and defaults are used when it is not.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = paths::resolve_config(None);
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl OutputConfig {
    /// Format a distance according to the configured precision
    #[must_use]
    pub fn format_distance(&self, distance: f64) -> String {
        self.precision
            .map_or_else(|| distance.to_string(), |digits| format!("{distance:.digits$}"))
    }
}
