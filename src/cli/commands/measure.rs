//! Measurement commands - distance, center, eq

use plib::Point;
use plib::config::OutputConfig;
use plib::output::{CheckResult, DistanceResult, OutputMode};

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    let result = DistanceResult {
        from: a,
        to: b,
        distance: a.to(b),
    };
    log::debug!("distance {a} -> {b} = {}", result.distance);
    result.render(mode, output)?;
    Ok(())
}

/// Whether a point is the center
pub fn center(point: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    CheckResult {
        operation: "center".to_string(),
        result: point.is_center(),
    }
    .render(mode, output)?;
    Ok(())
}

/// Whether two points are equal
pub fn eq(a: Point, b: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    CheckResult {
        operation: "eq".to_string(),
        result: a == b,
    }
    .render(mode, output)?;
    Ok(())
}
