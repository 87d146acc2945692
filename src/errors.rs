/*!
 * Error types for the timesrt application.
 *
 * This module contains custom error types for the different stages of the
 * conversion, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a timestamp token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimestampError {
    /// The token does not decompose into 2 to 4 integer groups
    #[error("Invalid time format: {0}")]
    InvalidTimestampFormat(String),
}

/// Errors that can occur when validating the configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Frame rate must be a finite, strictly positive number
    #[error("Invalid frame rate: {0} (must be a positive number)")]
    InvalidFps(f64),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The transcript could not be opened for reading
    #[error("Input file not found at '{}'", .0.display())]
    InputFileNotFound(PathBuf),

    /// Error from any other file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timestamp parsing
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
