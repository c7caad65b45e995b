//! Arithmetic commands - add, sub, neg, sum
//!
//! Overflow is reported as an error rather than wrapping or panicking.

use plib::config::OutputConfig;
use plib::output::{OutputMode, PointResult};
use plib::{Point, PointError};

/// Add two points
pub fn add(a: Point, b: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    log::debug!("add {a} + {b}");
    let point = a.checked_add(b).ok_or(PointError::Overflow { op: "add" })?;
    render("add", point, mode, output)
}

/// Subtract `b` from `a`
pub fn sub(a: Point, b: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    log::debug!("sub {a} - {b}");
    let point = a.checked_sub(b).ok_or(PointError::Overflow { op: "sub" })?;
    render("sub", point, mode, output)
}

/// Negate a point
pub fn neg(point: Point, mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    log::debug!("neg -{point}");
    let point = point.checked_neg().ok_or(PointError::Overflow { op: "neg" })?;
    render("neg", point, mode, output)
}

/// Accumulate points left to right, starting from the first
pub fn sum(points: &[Point], mode: OutputMode, output: &OutputConfig) -> anyhow::Result<()> {
    let Some((&first, rest)) = points.split_first() else {
        anyhow::bail!("sum needs at least one point");
    };

    let total = rest
        .iter()
        .try_fold(first, |total, &point| total.checked_add(point))
        .ok_or(PointError::Overflow { op: "sum" })?;
    log::debug!("sum of {} point(s) = {total}", points.len());

    render("sum", total, mode, output)
}

fn render(
    operation: &str,
    point: Point,
    mode: OutputMode,
    output: &OutputConfig,
) -> anyhow::Result<()> {
    PointResult {
        operation: operation.to_string(),
        point,
    }
    .render(mode, output)?;
    Ok(())
}
