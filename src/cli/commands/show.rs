//! Show command - print a point in both notations

use plib::Point;
use plib::config::OutputConfig;
use plib::output::{OutputMode, PointResult};

/// Print the display form and the JSON form of a point
pub fn show(point: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => {
            println!("{point}");
            println!("{}", point.to_json_with(output.style));
        },
        OutputMode::Json => PointResult {
            operation: "show".to_string(),
            point,
        }
        .render(mode, output)?,
    }
    Ok(())
}
