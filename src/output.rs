//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::adapters::json;
use crate::config::OutputConfig;
use crate::core::models::Point;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an operation that produces a point
#[derive(Debug, Serialize)]
pub struct PointResult {
    /// Operation name (add, sub, neg, sum, show)
    pub operation: String,
    /// The resulting point
    pub point: Point,
}

/// Result of a distance measurement
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DistanceResult {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
    /// Euclidean distance
    pub distance: f64,
}

/// Result of a yes/no question about points
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Operation name (center, eq)
    pub operation: String,
    /// The answer
    pub result: bool,
}

impl PointResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, config: &OutputConfig) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => render_json(self, config)?,
        }
        Ok(())
    }

    /// Human-readable form
    #[must_use]
    pub fn human(&self) -> String {
        self.point.to_string()
    }
}

impl DistanceResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, config: &OutputConfig) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => println!("{}", self.human(config)),
            OutputMode::Json => render_json(self, config)?,
        }
        Ok(())
    }

    /// Human-readable form, rounded per `config.precision`
    #[must_use]
    pub fn human(&self, config: &OutputConfig) -> String {
        config.format_distance(self.distance)
    }
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, config: &OutputConfig) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => render_json(self, config)?,
        }
        Ok(())
    }

    /// Human-readable form
    #[must_use]
    pub fn human(&self) -> String {
        self.result.to_string()
    }
}

/// Serialize a result in the configured JSON style
pub fn to_json<T: Serialize>(result: &T, config: &OutputConfig) -> serde_json::Result<String> {
    json::to_string(result, config.style)
}

fn render_json<T: Serialize>(result: &T, config: &OutputConfig) -> serde_json::Result<()> {
    println!("{}", to_json(result, config)?);
    Ok(())
}
