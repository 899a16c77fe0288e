// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scan overlay tooling
//!
//! The controller core has no error taxonomy of its own: detector input is
//! trusted by contract. Errors only arise at the edges, in configuration and
//! replay-file handling.

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Configuration errors
    Config(String),
    /// Malformed replay input
    Input(String),
    /// Filesystem errors
    Io(String),
    /// Generic error with message
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Input(msg) => write!(f, "Input error: {}", msg),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}
