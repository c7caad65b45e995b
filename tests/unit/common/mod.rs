//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing plib components.

use std::fs;
use std::path::{Path, PathBuf};

use plib::Point;
use tempfile::TempDir;

/// The origin and `(2, 2)`, the pair most operator tests start from
pub fn points() -> (Point, Point) {
    (Point::new(0, 0), Point::new(2, 2))
}

/// Assert `actual` is within relative tolerance `rel` of `expected`
pub fn assert_approx(actual: f64, expected: f64, rel: f64) {
    let tolerance = rel * expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// A temporary directory holding an optional plib config file
pub struct TestConfig {
    dir: TempDir,
}

impl TestConfig {
    /// Create an empty config directory (no config file yet)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a config directory with `content` written to `config.toml`
    pub fn with_content(content: &str) -> Self {
        let config = Self::new();
        fs::write(config.path(), content).unwrap();
        config
    }

    /// Path of the config file (may not exist)
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// The temporary directory itself
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
