//! Domain error types

use thiserror::Error;

/// Error when model output cannot be turned into an analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisParseError {
    #[error("Output is not valid JSON5: {0}")]
    Malformed(String),

    #[error("Output is not a JSON object")]
    NotAnObject,

    #[error("Output is missing required field \"{0}\"")]
    MissingField(&'static str),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
