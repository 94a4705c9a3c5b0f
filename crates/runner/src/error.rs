//! Error types for the runner crate

use thiserror::Error;
use zenith_core::ScreenCoordinate;

/// Configuration loading errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Rejected pointing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointingError {
    #[error("Cannot set a target while a slew is in progress")]
    SlewInProgress,

    #[error("Slew target ({}, {}) is not a finite screen position", .0.x, .0.y)]
    InvalidScreenTarget(ScreenCoordinate),
}
