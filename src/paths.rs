//! Centralized path definitions for plib
//!
//! A single source of truth for the filesystem locations plib reads.
//!
//! ```text
//! ~/.config/plib/           # platform config dir (dirs::config_dir)
//! └── config.toml           # Output preferences
//! ```
//!
//! `PLIB_CONFIG` overrides the file location; `--config` overrides both.

use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const PLIB_DIR: &str = "plib";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "PLIB_CONFIG";

/// Get the global config directory.
///
/// Falls back to `~/.config/plib` when the platform reports no config dir.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(PLIB_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Path from `PLIB_CONFIG`, if set and non-empty
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Resolve which config file to read
///
/// Precedence: `explicit` > `PLIB_CONFIG` > [`global_config`].
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(env_config)
        .unwrap_or_else(global_config)
}
