//! Error types for the lift_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lift_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report text was empty or whitespace only
    #[error("No content to parse")]
    EmptyReport,

    /// Report parsed, but no exercise blocks were found
    #[error("Could not find any exercises in the report")]
    NoExercises,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the user can fix this by correcting the report text
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::EmptyReport | Error::NoExercises)
    }
}
