//! Init command - write a plib config file

use std::path::Path;

use plib::adapters::json::JsonStyle;
use plib::config::{OutputConfig, PlibConfig};
use plib::output::OutputMode;

/// Write a config file at `path` with the given output preferences
pub fn init(
    path: &Path,
    style: Option<JsonStyle>,
    precision: Option<usize>,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({"created": false, "path": path.display().to_string()})
            );
        } else {
            println!("Config already exists at {}.", path.display());
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    let config = PlibConfig {
        output: OutputConfig {
            style: style.unwrap_or_default(),
            precision,
        },
    };
    config.save_to(path)?;
    log::debug!("wrote config to {}", path.display());

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({"created": true, "path": path.display().to_string()})
        );
    } else {
        println!("Created {}", path.display());
    }
    Ok(())
}
